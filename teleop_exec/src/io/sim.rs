//! # Simulated robot I/O
//!
//! Stands in for the drive station, vision camera and actuator bus when running from an input
//! script.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::{
    eqpt::{
        act::{ActId, SolId},
        vision::VisionTable,
    },
    hid::{ControllerId, ControllerSample, InputEvent},
};
use log::trace;
use std::collections::HashMap;
use util::maths::finite_or;

use super::{ActuatorSink, ControllerSource, VisionSource};
use crate::params::DeviceMap;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Gamepads and vision table whose state is set by input events.
#[derive(Debug, Clone, Default)]
pub struct SimInputs {
    driver: ControllerSample,
    operator: ControllerSample,
    vision: VisionTable,
}

/// An actuator bus which records the last demand sent to each device.
///
/// Demands are clipped to [-1, 1] and inverted motors have their sign flipped, as the motor
/// controllers on the robot would. A non-finite demand stops the motor.
#[derive(Debug, Clone)]
pub struct SimActuatorBus {
    devices: DeviceMap,

    /// Last applied output keyed by CAN ID
    speeds: HashMap<u8, f64>,

    /// Last applied state keyed by PCM channel
    solenoids: HashMap<u8, bool>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl SimInputs {
    /// Apply an input event.
    pub fn apply(&mut self, event: &InputEvent) {
        match event {
            InputEvent::Axis { ctrl, idx, value } => self.ctrl_mut(*ctrl).set_axis(*idx, *value),
            InputEvent::Button {
                ctrl,
                button,
                pressed,
            } => self.ctrl_mut(*ctrl).set_button(*button, *pressed),
            InputEvent::Vision { key, value } => self.vision.set_number(key, *value),
            InputEvent::VisionLost { key } => self.vision.clear(key),
        }
    }

    fn ctrl_mut(&mut self, ctrl: ControllerId) -> &mut ControllerSample {
        match ctrl {
            ControllerId::Driver => &mut self.driver,
            ControllerId::Operator => &mut self.operator,
        }
    }
}

impl ControllerSource for SimInputs {
    fn sample(&self, ctrl: ControllerId) -> ControllerSample {
        match ctrl {
            ControllerId::Driver => self.driver,
            ControllerId::Operator => self.operator,
        }
    }
}

impl VisionSource for SimInputs {
    fn get_number(&self, key: &str, default: f64) -> f64 {
        self.vision.get_number(key, default)
    }
}

impl SimActuatorBus {
    /// Create a new bus with every device at rest.
    pub fn new(devices: DeviceMap) -> Self {
        Self {
            devices,
            speeds: HashMap::new(),
            solenoids: HashMap::new(),
        }
    }

    /// The output last applied to a motor, zero if it has never been set.
    pub fn output_of(&self, id: ActId) -> f64 {
        self.speeds
            .get(&self.devices.can_id(id))
            .copied()
            .unwrap_or(0.0)
    }

    /// The state last applied to a solenoid, `None` if it has never been set.
    pub fn solenoid_of(&self, id: SolId) -> Option<bool> {
        self.solenoids.get(&self.devices.channel(id)).copied()
    }
}

impl ActuatorSink for SimActuatorBus {
    fn set_speed(&mut self, id: ActId, demand: f64) {
        let mut output = finite_or(demand, 0.0).max(-1.0).min(1.0);
        if self.devices.is_inverted(id) {
            output = -output;
        }

        let can_id = self.devices.can_id(id);
        trace!("CAN {} ({:?}) <- {:.4}", can_id, id, output);
        self.speeds.insert(can_id, output);
    }

    fn set_solenoid(&mut self, id: SolId, on: bool) {
        let channel = self.devices.channel(id);
        trace!(
            "PCM {} channel {} ({:?}) <- {}",
            self.devices.pcm_id,
            channel,
            id,
            on
        );
        self.solenoids.insert(channel, on);
    }
}
