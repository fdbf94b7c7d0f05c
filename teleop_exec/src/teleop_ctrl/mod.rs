//! Teleoperation control module
//!
//! Maps the driver and operator gamepads onto the drivetrain, arm and gripper once per cycle.
//! The only state carried between cycles is the drive mode, the gripper state and the debounce
//! latches of their toggle buttons.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

mod arm_map;
mod calc_arcade;
mod calc_mecanum;
mod edge;
mod mode;
mod params;
mod state;
mod vision_steer;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// Internal
pub use arm_map::*;
pub use calc_arcade::*;
pub use edge::*;
pub use mode::*;
pub use params::*;
pub use state::*;
pub use vision_steer::*;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Possible errors that can occur while setting up TeleopCtrl.
///
/// Cyclic processing itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum TeleopCtrlError {
    #[error("Could not load the TeleopCtrl parameters: {0}")]
    ParamLoad(#[from] util::params::LoadError),

    #[error("Invalid TeleopCtrl parameter: {0}")]
    InvalidParam(String),

    #[error("Could not open the TeleopCtrl archives: {0}")]
    ArchiveInit(String),
}
