//! # Teleoperation Executable Parameters

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use comms_if::{
    eqpt::act::{ActId, SolId},
    hid::ControllerId,
};
use serde::{Deserialize, Serialize};

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Parameters for the executable itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeleopExecParams {
    /// Target period of one cycle.
    ///
    /// Units: seconds
    pub cycle_period_s: f64,

    /// Name of the network table the vision camera publishes into.
    pub vision_table: String,

    /// Drive station port of the driver's gamepad.
    pub driver_port: u8,

    /// Drive station port of the operator's gamepad.
    pub operator_port: u8,

    /// Hardware addresses of every actuator.
    pub devices: DeviceMap,
}

/// Hardware addresses of the robot's actuators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceMap {
    // ---- MOTOR CAN IDS ----
    pub drv_lf_can_id: u8,
    pub drv_rf_can_id: u8,
    pub drv_lr_can_id: u8,
    pub drv_rr_can_id: u8,
    pub arm_lift_can_id: u8,
    pub arm_extend_can_id: u8,
    pub wrist_rotate_can_id: u8,
    pub wrist_pivot_can_id: u8,

    /// Motors whose direction is reversed by their mounting.
    pub inverted: Vec<ActId>,

    // ---- PNEUMATICS ----
    /// CAN ID of the pneumatics control module.
    pub pcm_id: u8,

    pub sol_drive_mode_a_channel: u8,
    pub sol_drive_mode_b_channel: u8,
    pub sol_gripper_channel: u8,
}

// ------------------------------------------------------------------------------------------------
// IMPLS
// ------------------------------------------------------------------------------------------------

impl Default for TeleopExecParams {
    fn default() -> Self {
        Self {
            cycle_period_s: 0.02,
            vision_table: String::from("limelight"),
            driver_port: 0,
            operator_port: 1,
            devices: DeviceMap::default(),
        }
    }
}

impl TeleopExecParams {
    /// Get the drive station port of a gamepad.
    pub fn port_of(&self, ctrl: ControllerId) -> u8 {
        match ctrl {
            ControllerId::Driver => self.driver_port,
            ControllerId::Operator => self.operator_port,
        }
    }
}

impl Default for DeviceMap {
    fn default() -> Self {
        Self {
            drv_lf_can_id: 1,
            drv_rf_can_id: 2,
            drv_lr_can_id: 3,
            drv_rr_can_id: 4,
            arm_lift_can_id: 5,
            arm_extend_can_id: 6,
            wrist_rotate_can_id: 7,
            wrist_pivot_can_id: 8,
            inverted: vec![ActId::DrvRF, ActId::DrvRR],
            pcm_id: 0,
            sol_drive_mode_a_channel: 0,
            sol_drive_mode_b_channel: 1,
            sol_gripper_channel: 2,
        }
    }
}

impl DeviceMap {
    /// CAN ID of a motor controller.
    pub fn can_id(&self, id: ActId) -> u8 {
        match id {
            ActId::DrvLF => self.drv_lf_can_id,
            ActId::DrvRF => self.drv_rf_can_id,
            ActId::DrvLR => self.drv_lr_can_id,
            ActId::DrvRR => self.drv_rr_can_id,
            ActId::ArmLift => self.arm_lift_can_id,
            ActId::ArmExtend => self.arm_extend_can_id,
            ActId::WristRotate => self.wrist_rotate_can_id,
            ActId::WristPivot => self.wrist_pivot_can_id,
        }
    }

    /// PCM channel of a solenoid.
    pub fn channel(&self, id: SolId) -> u8 {
        match id {
            SolId::DriveModeA => self.sol_drive_mode_a_channel,
            SolId::DriveModeB => self.sol_drive_mode_b_channel,
            SolId::Gripper => self.sol_gripper_channel,
        }
    }

    /// True if the motor's direction is reversed.
    pub fn is_inverted(&self, id: ActId) -> bool {
        self.inverted.contains(&id)
    }
}
