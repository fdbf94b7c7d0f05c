//! Arm, wrist and gripper axis mapping

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

/// Speed demands for the arm and wrist motors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ArmDems {
    pub lift: f64,
    pub extend: f64,
    pub wrist_rotate: f64,
    pub wrist_pivot: f64,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ArmDems {
    /// Map the operator's gamepad onto the arm.
    ///
    /// The lift axis is inverted to match the motor's mounting, the extension passes through
    /// unscaled and both wrist axes are scaled by the gripper cap.
    pub fn from_sample(sample: &ControllerSample, params: &Params) -> Self {
        Self {
            lift: -sample.axis(params.lift_axis),
            extend: sample.axis(params.extend_axis),
            wrist_rotate: sample.axis(params.wrist_rotate_axis) * params.gripper_cap,
            wrist_pivot: sample.axis(params.wrist_pivot_axis) * params.gripper_cap,
        }
    }

    /// Write these demands into the actuator demands.
    pub fn apply(&self, dems: &mut ActDems) {
        dems.speed.insert(ActId::ArmLift, self.lift);
        dems.speed.insert(ActId::ArmExtend, self.extend);
        dems.speed.insert(ActId::WristRotate, self.wrist_rotate);
        dems.speed.insert(ActId::WristPivot, self.wrist_pivot);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_arm_mapping() {
        let mut sample = ControllerSample::default();
        sample.axes = [0.3, 0.8, 0.0, 0.0, -1.0, 0.4];

        let arm = ArmDems::from_sample(&sample, &Params::default());

        assert_eq!(arm.lift, -0.8);
        assert_eq!(arm.extend, 0.3);
        assert_eq!(arm.wrist_rotate, -0.25);
        assert_eq!(arm.wrist_pivot, 0.4 * 0.25);
    }

    #[test]
    fn test_arm_at_rest() {
        let arm = ArmDems::from_sample(&ControllerSample::default(), &Params::default());

        let mut dems = ActDems::default();
        arm.apply(&mut dems);

        for id in ActId::arm_ids().iter() {
            assert_eq!(dems.speed_of(*id), 0.0);
        }
    }
}
