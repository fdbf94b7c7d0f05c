//! # Equipment Interface
//!
//! This module defines the interface structures exchanged with the robot's equipment.

// -----------------------------------------------------------------------------------------------
// MODULES
// -----------------------------------------------------------------------------------------------

/// Motor and solenoid demands
pub mod act;

/// Vision camera telemetry
pub mod vision;
