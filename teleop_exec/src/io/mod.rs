//! Robot input/output interfaces
//!
//! The teleoperation loop only talks to the outside world through these traits: gamepads are
//! polled through a `ControllerSource`, the vision camera through a `VisionSource`, and demands
//! are written to an `ActuatorSink`.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// Simulated implementations driven by input scripts
pub mod sim;

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::{
    eqpt::{
        act::{ActDems, ActId, SolId},
        vision::{self, VisionSample, VisionTable},
    },
    hid::{ControllerId, ControllerSample},
};
use util::maths::finite_or;

use crate::teleop_ctrl::InputData;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// Source of gamepad samples.
pub trait ControllerSource {
    /// Poll the current state of a gamepad.
    fn sample(&self, ctrl: ControllerId) -> ControllerSample;
}

/// Source of vision telemetry.
pub trait VisionSource {
    /// Get a number from the vision table, or `default` if it isn't published.
    fn get_number(&self, key: &str, default: f64) -> f64;
}

/// Sink for actuator demands. Writes are fire-and-forget.
pub trait ActuatorSink {
    /// Set the speed demand of a motor.
    fn set_speed(&mut self, id: ActId, demand: f64);

    /// Set the state of a solenoid.
    fn set_solenoid(&mut self, id: SolId, on: bool);

    /// Send a full set of demands, motors in ID order followed by solenoids.
    fn apply(&mut self, dems: &ActDems) {
        let mut speeds: Vec<(&ActId, &f64)> = dems.speed.iter().collect();
        speeds.sort_by_key(|(id, _)| **id);
        for (id, demand) in speeds {
            self.set_speed(*id, *demand);
        }

        let mut sols: Vec<(&SolId, &bool)> = dems.solenoid.iter().collect();
        sols.sort_by_key(|(id, _)| **id);
        for (id, on) in sols {
            self.set_solenoid(*id, *on);
        }
    }
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl VisionSource for VisionTable {
    fn get_number(&self, key: &str, default: f64) -> f64 {
        VisionTable::get_number(self, key, default)
    }
}

impl InputData {
    /// Take a fresh snapshot of all inputs.
    pub fn read<C, V>(controllers: &C, vision: &V) -> Self
    where
        C: ControllerSource,
        V: VisionSource,
    {
        Self {
            driver: controllers.sample(ControllerId::Driver),
            operator: controllers.sample(ControllerId::Operator),
            vision: read_vision_sample(vision),
        }
    }
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Read a vision sample, substituting 0.0 for anything absent or non-finite.
pub fn read_vision_sample<V: VisionSource>(source: &V) -> VisionSample {
    let num = |key: &str| finite_or(source.get_number(key, 0.0), 0.0);

    VisionSample {
        offset_h_deg: num(vision::KEY_TX),
        offset_v_deg: num(vision::KEY_TY),
        area: num(vision::KEY_TA),
        skew_deg: num(vision::KEY_TS),
        has_target: num(vision::KEY_TV) >= 1.0,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_vision_sample() {
        let mut table = VisionTable::default();
        assert_eq!(read_vision_sample(&table), VisionSample::default());

        table.set_number(vision::KEY_TX, 4.5);
        table.set_number(vision::KEY_TA, 1.2);
        table.set_number(vision::KEY_TV, 1.0);
        let s = read_vision_sample(&table);
        assert_eq!(s.offset_h_deg, 4.5);
        assert_eq!(s.area, 1.2);
        assert!(s.has_target);

        table.set_number(vision::KEY_TX, std::f64::NAN);
        assert_eq!(read_vision_sample(&table).offset_h_deg, 0.0);
    }

    #[derive(Default)]
    struct Recorder {
        writes: Vec<String>,
    }

    impl ActuatorSink for Recorder {
        fn set_speed(&mut self, id: ActId, demand: f64) {
            self.writes.push(format!("{:?}={}", id, demand));
        }

        fn set_solenoid(&mut self, id: SolId, on: bool) {
            self.writes.push(format!("{:?}={}", id, on));
        }
    }

    #[test]
    fn test_apply_order() {
        let mut dems = ActDems::default();
        dems.set_drv_sides(0.5, -0.5);
        dems.solenoid.insert(SolId::Gripper, true);
        dems.solenoid.insert(SolId::DriveModeA, false);

        let mut rec = Recorder::default();
        rec.apply(&dems);

        assert_eq!(rec.writes.len(), 10);
        assert_eq!(rec.writes[0], "DrvLF=0.5");
        assert_eq!(rec.writes[2], "DrvRF=-0.5");
        assert_eq!(rec.writes[8], "DriveModeA=false");
        assert_eq!(rec.writes[9], "Gripper=true");
    }
}
