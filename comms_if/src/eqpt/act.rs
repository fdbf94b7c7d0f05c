//! # Actuator Equipment Commands

// ------------------------------------------------------------------------------------------------
// IMPORTS
// ------------------------------------------------------------------------------------------------

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ------------------------------------------------------------------------------------------------
// CONSTANTS
// ------------------------------------------------------------------------------------------------

/// Drivetrain motors on the left side of the robot.
pub const LEFT_DRV_IDS: [ActId; 2] = [ActId::DrvLF, ActId::DrvLR];

/// Drivetrain motors on the right side of the robot.
pub const RIGHT_DRV_IDS: [ActId; 2] = [ActId::DrvRF, ActId::DrvRR];

const ARM_IDS: [ActId; 4] = [
    ActId::ArmLift,
    ActId::ArmExtend,
    ActId::WristRotate,
    ActId::WristPivot,
];

// ------------------------------------------------------------------------------------------------
// STRUCTS
// ------------------------------------------------------------------------------------------------

/// Demands produced by one control cycle for the actuator bus.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActDems {
    /// Normalised speed demand of each motor, nominally between -1 and +1.
    ///
    /// Demands are logical, any mounting inversion is applied by the bus.
    pub speed: HashMap<ActId, f64>,

    /// Solenoid demands. Only contains the solenoids which must change on this cycle.
    pub solenoid: HashMap<SolId, bool>,
}

// ------------------------------------------------------------------------------------------------
// ENUMS
// ------------------------------------------------------------------------------------------------

/// IDs of all motors available to the robot
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub enum ActId {
    DrvLF,
    DrvLR,
    DrvRF,
    DrvRR,
    ArmLift,
    ArmExtend,
    WristRotate,
    WristPivot,
}

/// IDs of the pneumatic solenoids.
///
/// `DriveModeA` and `DriveModeB` gate the drivetrain mode, `Gripper` gates the gripper.
#[derive(Serialize, Deserialize, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Copy, Clone)]
pub enum SolId {
    DriveModeA,
    DriveModeB,
    Gripper,
}

// -----------------------------------------------------------------------------------------------
// IMPLS
// -----------------------------------------------------------------------------------------------

impl ActId {
    /// All drivetrain motor IDs, left side first.
    pub fn drv_ids() -> [ActId; 4] {
        [
            LEFT_DRV_IDS[0],
            LEFT_DRV_IDS[1],
            RIGHT_DRV_IDS[0],
            RIGHT_DRV_IDS[1],
        ]
    }

    /// All arm and wrist motor IDs.
    pub fn arm_ids() -> [ActId; 4] {
        ARM_IDS
    }
}

impl ActDems {
    /// Set the speed demand of every left-side and right-side drivetrain motor.
    pub fn set_drv_sides(&mut self, left: f64, right: f64) {
        for id in LEFT_DRV_IDS.iter() {
            self.speed.insert(*id, left);
        }
        for id in RIGHT_DRV_IDS.iter() {
            self.speed.insert(*id, right);
        }
    }

    /// Get the speed demand for a motor, zero if it has no demand.
    pub fn speed_of(&self, id: ActId) -> f64 {
        self.speed.get(&id).copied().unwrap_or(0.0)
    }
}

impl Default for ActDems {
    fn default() -> Self {
        let mut speed = HashMap::new();

        for id in ActId::drv_ids().iter().chain(ARM_IDS.iter()) {
            speed.insert(*id, 0.0);
        }

        Self {
            speed,
            solenoid: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_dems_cover_all_motors() {
        let dems = ActDems::default();

        assert_eq!(dems.speed.len(), 8);
        assert!(dems.solenoid.is_empty());
        assert!(dems.speed.values().all(|s| *s == 0.0));
    }

    #[test]
    fn test_drv_and_arm_ids_partition_motors() {
        let drv = ActId::drv_ids();
        let arm = ActId::arm_ids();

        assert_eq!(&drv[..2], &LEFT_DRV_IDS[..]);
        assert_eq!(&drv[2..], &RIGHT_DRV_IDS[..]);
        assert!(drv.iter().all(|id| !arm.contains(id)));
        assert_eq!(ActDems::default().speed.len(), drv.len() + arm.len());
    }

    #[test]
    fn test_set_drv_sides() {
        let mut dems = ActDems::default();
        dems.set_drv_sides(-0.2, 0.4);

        assert_eq!(dems.speed_of(ActId::DrvLF), -0.2);
        assert_eq!(dems.speed_of(ActId::DrvLR), -0.2);
        assert_eq!(dems.speed_of(ActId::DrvRF), 0.4);
        assert_eq!(dems.speed_of(ActId::DrvRR), 0.4);
        assert_eq!(dems.speed_of(ActId::ArmLift), 0.0);
    }
}
