//! Parameters structure for TeleopCtrl

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::hid::{Button, NUM_AXES};
use serde::{Deserialize, Serialize};

use super::TeleopCtrlError;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Parameters for Teleoperation control.
///
/// Any field missing from the parameter file takes its default value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // ---- SCALING ----
    /// Scale applied to the driver's sticks before any drivetrain calculation.
    pub throttle_cap: f64,

    /// Scale applied to the operator's wrist axes.
    pub gripper_cap: f64,

    // ---- DRIVER GAMEPAD ----
    /// Axis giving the left stick's sideways position.
    pub drv_left_x_axis: usize,

    /// Axis giving the left stick's fore/aft position.
    pub drv_left_y_axis: usize,

    /// Axis giving the right stick's sideways position.
    pub drv_right_x_axis: usize,

    /// Button which toggles between arcade and mecanum drive.
    pub drive_mode_button: Button,

    /// Button which, while held, steers the robot onto the vision target.
    pub target_button: Button,

    // ---- OPERATOR GAMEPAD ----
    /// Axis driving the arm extension.
    pub extend_axis: usize,

    /// Axis driving the arm lift.
    pub lift_axis: usize,

    /// Axis driving the wrist rotation.
    pub wrist_rotate_axis: usize,

    /// Axis driving the wrist pivot.
    pub wrist_pivot_axis: usize,

    /// Button which toggles the gripper open and closed.
    pub gripper_button: Button,

    // ---- VISION TARGETING ----
    /// Proportional gain from horizontal target offset to steering demand.
    ///
    /// Units: 1/degrees
    pub vision_k_p: f64,

    /// Smallest steering demand magnitude that will be sent.
    pub vision_min_cmd: f64,

    /// Largest steering demand magnitude that will be sent.
    pub vision_max_cmd: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for Params {
    fn default() -> Self {
        Self {
            throttle_cap: 0.6,
            gripper_cap: 0.25,
            drv_left_x_axis: 0,
            drv_left_y_axis: 1,
            drv_right_x_axis: 4,
            drive_mode_button: Button::LeftStick,
            target_button: Button::RightStick,
            extend_axis: 0,
            lift_axis: 1,
            wrist_rotate_axis: 4,
            wrist_pivot_axis: 5,
            gripper_button: Button::B,
            vision_k_p: 0.1,
            vision_min_cmd: 0.001,
            vision_max_cmd: 0.045,
        }
    }
}

impl Params {
    /// Check the parameters describe a usable controller.
    pub fn validate(&self) -> Result<(), TeleopCtrlError> {
        for (name, cap) in [
            ("throttle_cap", self.throttle_cap),
            ("gripper_cap", self.gripper_cap),
        ]
        .iter()
        {
            if !(*cap > 0.0 && *cap <= 1.0) {
                return Err(TeleopCtrlError::InvalidParam(format!(
                    "{} must be in (0, 1], found {}",
                    name, cap
                )));
            }
        }

        for (name, axis) in [
            ("drv_left_x_axis", self.drv_left_x_axis),
            ("drv_left_y_axis", self.drv_left_y_axis),
            ("drv_right_x_axis", self.drv_right_x_axis),
            ("extend_axis", self.extend_axis),
            ("lift_axis", self.lift_axis),
            ("wrist_rotate_axis", self.wrist_rotate_axis),
            ("wrist_pivot_axis", self.wrist_pivot_axis),
        ]
        .iter()
        {
            if *axis >= NUM_AXES {
                return Err(TeleopCtrlError::InvalidParam(format!(
                    "{} must be less than {}, found {}",
                    name, NUM_AXES, axis
                )));
            }
        }

        if !self.vision_k_p.is_finite() {
            return Err(TeleopCtrlError::InvalidParam(format!(
                "vision_k_p must be finite, found {}",
                self.vision_k_p
            )));
        }

        if !(self.vision_min_cmd >= 0.0 && self.vision_min_cmd <= self.vision_max_cmd) {
            return Err(TeleopCtrlError::InvalidParam(format!(
                "vision command limits must satisfy 0 <= min <= max, found min {} max {}",
                self.vision_min_cmd, self.vision_max_cmd
            )));
        }

        Ok(())
    }
}
