//! Implementations for the TeleopCtrl state structure

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use log::{debug, info, trace};
use serde::Serialize;
use std::convert::Infallible;

// Internal
use super::{
    ArmDems, DriveMode, DriveSticks, GripperState, ModeToggle, Params, SteerCmd, SteerLimit,
    TeleopCtrlError, TwoState,
};
use comms_if::{
    eqpt::{
        act::{ActDems, ActId, SolId},
        vision::VisionSample,
    },
    hid::ControllerSample,
};
use util::{
    archive::{Archived, Archiver},
    module::State,
    params,
    session::Session,
};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Teleoperation control module state
#[derive(Default)]
pub struct TeleopCtrl {
    pub(crate) params: Params,

    pub(crate) drive_mode: ModeToggle<DriveMode>,

    pub(crate) gripper: ModeToggle<GripperState>,

    /// True if the target button was held on the previous cycle.
    targeting: bool,

    pub(crate) report: StatusReport,
    arch_report: Archiver,

    pub(crate) output: Option<ActDems>,
    arch_output: Archiver,
}

/// Input data to Teleoperation Control, a fresh snapshot every cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputData {
    /// The driver's gamepad
    pub driver: ControllerSample,

    /// The operator's gamepad
    pub operator: ControllerSample,

    /// The vision targeting solution
    pub vision: VisionSample,
}

/// Status report for TeleopCtrl processing.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq)]
pub struct StatusReport {
    /// Drive mode at the end of the cycle.
    pub drive_mode: DriveMode,

    /// Gripper state at the end of the cycle.
    pub gripper_state: GripperState,

    /// True if the drive mode changed this cycle.
    pub drive_mode_changed: bool,

    /// True if the gripper state changed this cycle.
    pub gripper_changed: bool,

    /// True if the vision override replaced the drivetrain demands this cycle.
    pub vision_override: bool,

    /// Steering demand sent by the vision override, zero when inactive.
    pub steer_cmd: f64,

    /// Limit applied to the steering demand.
    pub steer_limited: SteerLimit,

    /// True if the vision camera reported a valid target this cycle.
    pub vision_has_target: bool,
}

/// Flat view of the actuator demands used for archiving.
#[derive(Clone, Copy, Default, Serialize, Debug, PartialEq)]
pub struct OutputRecord {
    pub drv_lf: f64,
    pub drv_lr: f64,
    pub drv_rf: f64,
    pub drv_rr: f64,
    pub arm_lift: f64,
    pub arm_extend: f64,
    pub wrist_rotate: f64,
    pub wrist_pivot: f64,
    pub sol_drive_mode_a: Option<bool>,
    pub sol_drive_mode_b: Option<bool>,
    pub sol_gripper: Option<bool>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl State for TeleopCtrl {
    type InitData = &'static str;
    type InitError = TeleopCtrlError;

    type InputData = InputData;
    type OutputData = ActDems;
    type StatusReport = StatusReport;
    type ProcError = Infallible;

    /// Initialise the TeleopCtrl module.
    ///
    /// Expected init data is the path to the parameter file
    fn init(
        &mut self,
        init_data: Self::InitData,
        session: &Session,
    ) -> Result<(), Self::InitError> {
        let params: Params = params::load(init_data)?;
        *self = Self::new(params)?;

        self.arch_report = Archiver::from_path(session, "teleop_ctrl/status_report.csv")
            .map_err(|e| TeleopCtrlError::ArchiveInit(e.to_string()))?;
        self.arch_output = Archiver::from_path(session, "teleop_ctrl/output.csv")
            .map_err(|e| TeleopCtrlError::ArchiveInit(e.to_string()))?;

        Ok(())
    }

    /// Perform cyclic processing of Teleoperation Control.
    fn proc(
        &mut self,
        input_data: &Self::InputData,
    ) -> Result<(Self::OutputData, Self::StatusReport), Self::ProcError> {
        // Clear the status report
        self.report = StatusReport::default();

        let mut dems = ActDems::default();

        // ---- DRIVE MODE ----

        let drive_mode_pressed = input_data.driver.button(self.params.drive_mode_button);
        if let Some(mode) = self.drive_mode.update(drive_mode_pressed) {
            info!("Drive mode changed to {:?}", mode);
            dems.solenoid.extend(mode.solenoid_dems());
            self.report.drive_mode_changed = true;
        }

        // ---- DRIVETRAIN ----

        let sticks = DriveSticks::from_sample(&input_data.driver, &self.params);
        let wheels = match self.drive_mode.state() {
            DriveMode::Arcade => sticks.calc_arcade(),
            DriveMode::Mecanum => sticks.calc_mecanum(),
        };
        wheels.apply(&mut dems);

        // ---- VISION OVERRIDE ----

        let targeting = input_data.driver.button(self.params.target_button);
        if targeting != self.targeting {
            debug!(
                "Vision targeting {}",
                if targeting { "engaged" } else { "released" }
            );
            self.targeting = targeting;
        }

        if targeting {
            let steer = SteerCmd::from_offset(input_data.vision.offset_h_deg, &self.params);
            let (left, right) = steer.side_dems();
            dems.set_drv_sides(left, right);

            self.report.vision_override = true;
            self.report.steer_cmd = steer.cmd;
            self.report.steer_limited = steer.limited;
        }

        // ---- ARM AND WRIST ----

        ArmDems::from_sample(&input_data.operator, &self.params).apply(&mut dems);

        // ---- GRIPPER ----

        let gripper_pressed = input_data.operator.button(self.params.gripper_button);
        if let Some(state) = self.gripper.update(gripper_pressed) {
            info!("Gripper changed to {:?}", state);
            dems.solenoid.extend(state.solenoid_dems());
            self.report.gripper_changed = true;
        }

        self.report.drive_mode = self.drive_mode.state();
        self.report.gripper_state = self.gripper.state();
        self.report.vision_has_target = input_data.vision.has_target;

        trace!(
            "TeleopCtrl output:\n    speed: {:?}\n    solenoid: {:?}",
            dems.speed,
            dems.solenoid
        );

        // Update the output in self
        self.output = Some(dems.clone());

        Ok((dems, self.report))
    }
}

impl Archived for TeleopCtrl {
    fn write(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.arch_report.serialise(self.report)?;
        if let Some(ref o) = self.output {
            self.arch_output.serialise(OutputRecord::from(o))?;
        }

        Ok(())
    }
}

impl TeleopCtrl {
    /// Create a new controller from the given parameters.
    ///
    /// The drive mode starts in arcade and the gripper closed.
    pub fn new(params: Params) -> Result<Self, TeleopCtrlError> {
        params.validate()?;

        Ok(Self {
            params,
            ..Default::default()
        })
    }

    /// The current drive mode.
    pub fn drive_mode(&self) -> DriveMode {
        self.drive_mode.state()
    }

    /// The current gripper state.
    pub fn gripper_state(&self) -> GripperState {
        self.gripper.state()
    }
}

impl From<&ActDems> for OutputRecord {
    fn from(dems: &ActDems) -> Self {
        Self {
            drv_lf: dems.speed_of(ActId::DrvLF),
            drv_lr: dems.speed_of(ActId::DrvLR),
            drv_rf: dems.speed_of(ActId::DrvRF),
            drv_rr: dems.speed_of(ActId::DrvRR),
            arm_lift: dems.speed_of(ActId::ArmLift),
            arm_extend: dems.speed_of(ActId::ArmExtend),
            wrist_rotate: dems.speed_of(ActId::WristRotate),
            wrist_pivot: dems.speed_of(ActId::WristPivot),
            sol_drive_mode_a: dems.solenoid.get(&SolId::DriveModeA).copied(),
            sol_drive_mode_b: dems.solenoid.get(&SolId::DriveModeB).copied(),
            sol_gripper: dems.solenoid.get(&SolId::Gripper).copied(),
        }
    }
}
