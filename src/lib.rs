//! **wsassign** pins a range of workspaces to one monitor.
//!
//! Given an output name and a range such as `1-5`, every workspace in the
//! range is made to default to that output and moved there if it already
//! lives somewhere else.
//!
//! # Architecture
//!
//! The crate is organised around one trait:
//!
//! * [`traits::Compositor`] abstracts the control channel so the
//!   [`assigner::Assigner`] is not coupled to any specific compositor.
//!
//! Concrete implementations live in [`hyprland`] (direct socket and
//! `hyprctl --batch`) and [`sway`] (Sway IPC).

pub mod assigner;
pub mod command;
pub mod config;
pub mod hyprland;
pub mod range;
pub mod sway;
pub mod traits;
