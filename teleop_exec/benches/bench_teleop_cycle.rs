//! # Teleoperation Cycle Benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use comms_if::hid::Button;
use teleop_lib::teleop_ctrl::{InputData, Params, TeleopCtrl};
use util::module::State;

fn teleop_cycle_benchmark(c: &mut Criterion) {
    // ---- Build a controller in mecanum with everything moving ----

    let mut ctrl = TeleopCtrl::new(Params::default()).unwrap();

    let mut toggle = InputData::default();
    toggle.driver.set_button(Button::LeftStick, true);
    ctrl.proc(&toggle).unwrap();

    let mut input = InputData::default();
    input.driver.axes = [0.3, -0.8, 0.0, 0.0, 0.4, 0.0];
    input.operator.axes = [0.5, -0.2, 0.0, 0.0, 0.9, -0.1];
    input.vision.offset_h_deg = 3.2;

    let mut targeting = input;
    targeting.driver.set_button(Button::RightStick, true);

    // ---- Run benchmarks ----

    c.bench_function("teleop_cycle_mecanum", |b| {
        b.iter(|| ctrl.proc(black_box(&input)).unwrap())
    });

    c.bench_function("teleop_cycle_vision_override", |b| {
        b.iter(|| ctrl.proc(black_box(&targeting)).unwrap())
    });
}

criterion_group!(benches, teleop_cycle_benchmark);
criterion_main!(benches);
