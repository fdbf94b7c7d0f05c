//! # Teleoperation library.
//!
//! This library allows other crates in the workspace, and the integration tests, to access items
//! defined inside the teleoperation crate.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Teleoperation control module - maps the gamepads and vision onto actuator demands
pub mod teleop_ctrl;

/// Robot input/output - gamepad, vision and actuator interfaces plus their simulations
pub mod io;

/// Executable parameters
pub mod params;

/// Global data store for the executable
pub mod data_store;
