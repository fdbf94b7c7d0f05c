//! Vision targeting steering override

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::Serialize;
use util::maths::clamp_abs;

use super::Params;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A steering demand towards the vision target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct SteerCmd {
    /// Turn demand. Left wheels are driven at `-cmd` and right wheels at `+cmd`.
    pub cmd: f64,

    /// Which limit, if any, was applied to the raw proportional demand.
    pub limited: SteerLimit,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Limit applied to a steering demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SteerLimit {
    None,

    /// Raised to the minimum command so the motors don't stall.
    Min,

    /// Capped at the maximum command.
    Max,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl Default for SteerLimit {
    fn default() -> Self {
        SteerLimit::None
    }
}

impl SteerCmd {
    /// Calculate the steering demand for a horizontal target offset.
    ///
    /// An offset of exactly zero, which is also what is seen when there is no target, gives no
    /// steering at all.
    pub fn from_offset(offset_h_deg: f64, params: &Params) -> Self {
        if offset_h_deg == 0.0 {
            return Self::default();
        }

        let raw = params.vision_k_p * offset_h_deg;
        let cmd = clamp_abs(raw, params.vision_min_cmd, params.vision_max_cmd);

        let limited = if raw.abs() < params.vision_min_cmd {
            SteerLimit::Min
        } else if raw.abs() > params.vision_max_cmd {
            SteerLimit::Max
        } else {
            SteerLimit::None
        };

        Self { cmd, limited }
    }

    /// Demands for the left and right sides of the drivetrain.
    pub fn side_dems(&self) -> (f64, f64) {
        (-self.cmd, self.cmd)
    }
}
