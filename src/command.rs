//! Vocabulary shared between the command line and the backends.

use std::fmt;
use std::str::FromStr;

/// The compositor to talk to, selected with `--wm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WmKind {
    Hyprland,
    Sway,
}

impl fmt::Display for WmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WmKind::Hyprland => write!(f, "hyprland"),
            WmKind::Sway => write!(f, "sway"),
        }
    }
}

/// `--wm` named a compositor we have no backend for.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported window manager: {0}")]
pub struct UnsupportedWm(pub String);

/// Case-insensitive: `Hyprland`, `SWAY`, … are accepted.
impl FromStr for WmKind {
    type Err = UnsupportedWm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hyprland" => Ok(WmKind::Hyprland),
            "sway" => Ok(WmKind::Sway),
            _ => Err(UnsupportedWm(s.to_string())),
        }
    }
}
