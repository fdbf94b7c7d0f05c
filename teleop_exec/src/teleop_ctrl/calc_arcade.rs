//! Arcade drive calculations

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::{
    eqpt::act::{ActDems, ActId},
    hid::ControllerSample,
};
use serde::Serialize;

use super::Params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// The driver's stick positions after the throttle cap has been applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveSticks {
    pub left_x: f64,
    pub left_y: f64,
    pub right_x: f64,
}

/// Speed demands for the four drivetrain wheels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct WheelSpeeds {
    pub lf: f64,
    pub lr: f64,
    pub rf: f64,
    pub rr: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl DriveSticks {
    /// Read the sticks from the driver's gamepad.
    pub fn from_sample(sample: &ControllerSample, params: &Params) -> Self {
        Self {
            left_x: sample.axis(params.drv_left_x_axis) * params.throttle_cap,
            left_y: sample.axis(params.drv_left_y_axis) * params.throttle_cap,
            right_x: sample.axis(params.drv_right_x_axis) * params.throttle_cap,
        }
    }

    /// Perform the arcade drive calculations.
    ///
    /// Both wheels on a side get the same demand, `left_y - left_x` on the left and
    /// `left_y + left_x` on the right. The right stick is not used.
    pub fn calc_arcade(&self) -> WheelSpeeds {
        let left = self.left_y - self.left_x;
        let right = self.left_y + self.left_x;

        WheelSpeeds {
            lf: left,
            lr: left,
            rf: right,
            rr: right,
        }
    }
}

impl WheelSpeeds {
    /// Write these speeds into the drivetrain demands.
    pub fn apply(&self, dems: &mut ActDems) {
        dems.speed.insert(ActId::DrvLF, self.lf);
        dems.speed.insert(ActId::DrvLR, self.lr);
        dems.speed.insert(ActId::DrvRF, self.rf);
        dems.speed.insert(ActId::DrvRR, self.rr);
    }
}
