//! # Teleoperation sequence tests
//!
//! Drives TeleopCtrl through multi-cycle input sequences, either built by hand or replayed from
//! an input script through the simulated robot I/O.

use comms_if::{
    eqpt::act::{ActId, SolId},
    hid::Button,
};
use teleop_lib::{
    io::{
        sim::{SimActuatorBus, SimInputs},
        ActuatorSink,
    },
    params::DeviceMap,
    teleop_ctrl::{DriveMode, GripperState, InputData, Params, StatusReport, TeleopCtrl},
};
use util::{
    module::State,
    script_interpreter::{PendingEvents, ScriptInterpreter},
};

fn cycle(ctrl: &mut TeleopCtrl, input: &InputData) -> (comms_if::eqpt::act::ActDems, StatusReport) {
    match ctrl.proc(input) {
        Ok(r) => r,
        Err(e) => match e {},
    }
}

#[test]
fn test_held_toggle_fires_once() {
    let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();
    let mut input = InputData::default();
    input.driver.set_button(Button::LeftStick, true);

    let changes = (0..50)
        .map(|_| cycle(&mut ctrl, &input).1)
        .filter(|r| r.drive_mode_changed)
        .count();

    assert_eq!(changes, 1);
    assert_eq!(ctrl.drive_mode(), DriveMode::Mecanum);

    // Release then press again flips back
    input.driver.set_button(Button::LeftStick, false);
    cycle(&mut ctrl, &input);
    input.driver.set_button(Button::LeftStick, true);
    let (dems, _) = cycle(&mut ctrl, &input);

    assert_eq!(ctrl.drive_mode(), DriveMode::Arcade);
    assert_eq!(dems.solenoid.get(&SolId::DriveModeA), Some(&true));
    assert_eq!(dems.solenoid.get(&SolId::DriveModeB), Some(&false));
}

#[test]
fn test_gripper_independent_of_drive_mode() {
    let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();
    let mut input = InputData::default();

    // Press both toggles in the same cycle
    input.driver.set_button(Button::LeftStick, true);
    input.operator.set_button(Button::B, true);
    let (dems, rpt) = cycle(&mut ctrl, &input);

    assert!(rpt.drive_mode_changed);
    assert!(rpt.gripper_changed);
    assert_eq!(dems.solenoid.len(), 3);

    // Keep toggling the gripper while the drive mode button stays held
    for i in 0..6 {
        input.operator.set_button(Button::B, i % 2 == 1);
        cycle(&mut ctrl, &input);
    }

    assert_eq!(ctrl.drive_mode(), DriveMode::Mecanum);
    assert_eq!(ctrl.gripper_state(), GripperState::Closed);
}

#[test]
fn test_override_ignores_sticks() {
    let mut input = InputData::default();
    input.driver.set_button(Button::RightStick, true);
    input.vision.offset_h_deg = 0.2;

    let mut expected = None;
    for stick in [-1.0, -0.3, 0.0, 0.7, 1.0].iter() {
        let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();
        input.driver.set_axis(0, *stick);
        input.driver.set_axis(1, -*stick);
        input.driver.set_axis(4, *stick);

        let (dems, _) = cycle(&mut ctrl, &input);
        let drv: Vec<f64> = ActId::drv_ids().iter().map(|id| dems.speed_of(*id)).collect();

        match expected {
            None => expected = Some(drv),
            Some(ref e) => assert_eq!(e, &drv),
        }
    }
}

#[test]
fn test_arm_is_linear() {
    let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();
    let mut input = InputData::default();

    let mut wrist = |v: f64| {
        input.operator.set_axis(4, v);
        cycle(&mut ctrl, &input).0.speed_of(ActId::WristRotate)
    };

    let half = wrist(0.5);
    let full = wrist(1.0);
    let neg = wrist(-1.0);

    assert!((full - 2.0 * half).abs() < 1e-12);
    assert!((neg + full).abs() < 1e-12);
    assert_eq!(full, 0.25);
}

#[test]
fn test_scripted_session() {
    const SCRIPT: &str = r#"
        0.00: {"type": "axis", "ctrl": "Driver", "idx": 1, "value": 1.0};
        0.10: {"type": "button", "ctrl": "Driver", "button": "LeftStick", "pressed": true};
        0.20: {"type": "button", "ctrl": "Driver", "button": "LeftStick", "pressed": false};
        0.30: {"type": "vision", "key": "tx", "value": -10.0};
        0.30: {"type": "vision", "key": "tv", "value": 1.0};
        0.30: {"type": "button", "ctrl": "Driver", "button": "RightStick", "pressed": true};
        0.40: {"type": "button", "ctrl": "Operator", "button": "B", "pressed": true};
    "#;

    let mut si = ScriptInterpreter::from_script(SCRIPT).unwrap();
    let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();
    let mut inputs = SimInputs::default();
    let mut bus = SimActuatorBus::new(DeviceMap::default());

    let mut reports = vec![];
    let mut t = 0.0;
    loop {
        match si.get_pending_events_at(t) {
            PendingEvents::None => (),
            PendingEvents::Some(events) => events.iter().for_each(|e| inputs.apply(e)),
            PendingEvents::EndOfScript => break,
        }

        let (dems, rpt) = cycle(&mut ctrl, &InputData::read(&inputs, &inputs));
        bus.apply(&dems);
        reports.push(rpt);

        t += 0.05;
    }

    assert_eq!(reports.iter().filter(|r| r.drive_mode_changed).count(), 1);
    assert_eq!(reports.iter().filter(|r| r.gripper_changed).count(), 1);
    assert!(reports.last().map(|r| r.vision_override).unwrap_or(false));

    assert_eq!(ctrl.drive_mode(), DriveMode::Mecanum);
    assert_eq!(ctrl.gripper_state(), GripperState::Open);

    // Vision steers left, right side motors are inverted on the bus
    assert_eq!(bus.output_of(ActId::DrvLF), 0.045);
    assert_eq!(bus.output_of(ActId::DrvRF), 0.045);
    assert_eq!(bus.solenoid_of(SolId::DriveModeA), Some(false));
    assert_eq!(bus.solenoid_of(SolId::DriveModeB), Some(true));
    assert_eq!(bus.solenoid_of(SolId::Gripper), Some(false));
}
