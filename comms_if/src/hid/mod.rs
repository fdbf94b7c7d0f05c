//! # Human interface device module
//!
//! Gamepad snapshots read by the teleoperation loop, and the input events used to drive them from
//! a script.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// CONSTANTS
// ---------------------------------------------------------------------------

/// Number of analogue axes on a gamepad.
pub const NUM_AXES: usize = 6;

/// Number of buttons on a gamepad.
pub const NUM_BUTTONS: usize = 10;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A snapshot of one gamepad's axes and buttons.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ControllerSample {
    /// Axis values, nominally between -1 and +1.
    pub axes: [f64; NUM_AXES],

    /// Button states, indexed by `Button`.
    pub buttons: [bool; NUM_BUTTONS],
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// The two gamepads on the drive station.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ControllerId {
    /// Drives the robot.
    Driver,

    /// Operates the arm and gripper.
    Operator,
}

/// Named gamepad buttons.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Button {
    A,
    B,
    X,
    Y,
    LeftBumper,
    RightBumper,
    Back,
    Start,
    LeftStick,
    RightStick,
}

/// A change to the inputs seen by the robot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Move an axis of a gamepad.
    Axis {
        ctrl: ControllerId,
        idx: usize,
        value: f64,
    },

    /// Press or release a gamepad button.
    Button {
        ctrl: ControllerId,
        button: Button,
        pressed: bool,
    },

    /// Publish a number into the vision table.
    Vision { key: String, value: f64 },

    /// Remove a number from the vision table.
    VisionLost { key: String },
}

/// Possible parsing errors.
#[derive(Debug, Error)]
pub enum InputEventParseError {
    #[error("Input event contains invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("Axis index {0} is out of range (gamepads have {max} axes)", max = NUM_AXES)]
    AxisOutOfRange(usize),
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ControllerSample {
    /// Read an axis, an axis that does not exist reads as 0.0.
    pub fn axis(&self, idx: usize) -> f64 {
        self.axes.get(idx).copied().unwrap_or(0.0)
    }

    /// Read a button.
    pub fn button(&self, button: Button) -> bool {
        self.buttons[button.index()]
    }

    /// Set an axis, ignoring indices that do not exist.
    pub fn set_axis(&mut self, idx: usize, value: f64) {
        if let Some(a) = self.axes.get_mut(idx) {
            *a = value;
        }
    }

    /// Set a button.
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.buttons[button.index()] = pressed;
    }
}

impl Button {
    /// Index of this button in `ControllerSample::buttons`.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl InputEvent {
    /// Parse a new event from a JSON packet
    pub fn from_json(json_str: &str) -> Result<Self, InputEventParseError> {
        let event: InputEvent =
            serde_json::from_str(json_str).map_err(InputEventParseError::InvalidJson)?;

        if let InputEvent::Axis { idx, .. } = event {
            if idx >= NUM_AXES {
                return Err(InputEventParseError::AxisOutOfRange(idx));
            }
        }

        Ok(event)
    }
}
