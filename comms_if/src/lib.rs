//! # Communications interface crate.
//!
//! Provides the interface types shared between the teleoperation executable and its equipment.

// ------------------------------------------------------------------------------------------------
// MODULES
// ------------------------------------------------------------------------------------------------

/// Gamepad samples and scripted input events
pub mod hid;

/// Command and telemetry definitions for equipment (motors, solenoids, vision)
pub mod eqpt;
