//! Hyprland backends.
//!
//! Two [`Compositor`](crate::traits::Compositor) implementations share the
//! same directive pair:
//!
//! * [`socket::HyprlandSocket`] writes the directives straight to
//!   Hyprland's control socket, one workspace at a time.
//! * [`batch::HyprctlBatch`] collects them and hands the whole lot to a
//!   single `hyprctl --batch` invocation.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod batch;
pub mod socket;

/// The two directives that pin `workspace` to `monitor`: make it the
/// workspace's default output, then move the workspace there if it already
/// exists.
///
/// Both values are substituted verbatim.
pub fn directives(workspace: i64, monitor: &str) -> [String; 2] {
    [
        format!("keyword workspace {},monitor:{}", workspace, monitor),
        format!("dispatch moveworkspacetomonitor {} {}", workspace, monitor),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_pair_binds_then_moves() {
        let [bind, mv] = directives(3, "DP-1");
        assert_eq!(bind, "keyword workspace 3,monitor:DP-1");
        assert_eq!(mv, "dispatch moveworkspacetomonitor 3 DP-1");
    }

    #[test]
    fn monitor_name_is_not_escaped() {
        let [bind, mv] = directives(10, "desc:Dell Inc. U2720Q;x");
        assert_eq!(bind, "keyword workspace 10,monitor:desc:Dell Inc. U2720Q;x");
        assert_eq!(mv, "dispatch moveworkspacetomonitor 10 desc:Dell Inc. U2720Q;x");
    }
}
