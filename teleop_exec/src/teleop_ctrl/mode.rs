//! Drive mode and gripper state machines

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use comms_if::eqpt::act::SolId;
use serde::{Deserialize, Serialize};

use super::RisingEdge;

// ---------------------------------------------------------------------------
// TRAITS
// ---------------------------------------------------------------------------

/// A state machine with exactly two states.
pub trait TwoState: Copy {
    /// The state reached by toggling from this one.
    fn toggled(self) -> Self;

    /// Solenoid demands which put the hardware into this state.
    fn solenoid_dems(self) -> Vec<(SolId, bool)>;
}

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A two-state machine toggled by presses of a single button.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ModeToggle<S> {
    state: S,
    edge: RisingEdge,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Drivetrain driving mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveMode {
    /// Differential drive, forward/back from one axis and turn from another.
    Arcade,

    /// Omnidirectional drive blending forward, strafe and rotation.
    Mecanum,
}

/// Gripper jaw state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GripperState {
    Closed,
    Open,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl<S: TwoState> ModeToggle<S> {
    /// Create a new machine in the given state.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            edge: RisingEdge::default(),
        }
    }

    /// The current state.
    pub fn state(&self) -> S {
        self.state
    }

    /// Feed the toggle button's level for this cycle.
    ///
    /// Returns the new state if the machine transitioned on this cycle.
    pub fn update(&mut self, pressed: bool) -> Option<S> {
        if self.edge.update(pressed) {
            self.state = self.state.toggled();
            Some(self.state)
        } else {
            None
        }
    }
}

impl Default for DriveMode {
    fn default() -> Self {
        DriveMode::Arcade
    }
}

impl TwoState for DriveMode {
    fn toggled(self) -> Self {
        match self {
            DriveMode::Arcade => DriveMode::Mecanum,
            DriveMode::Mecanum => DriveMode::Arcade,
        }
    }

    fn solenoid_dems(self) -> Vec<(SolId, bool)> {
        match self {
            DriveMode::Arcade => vec![(SolId::DriveModeA, true), (SolId::DriveModeB, false)],
            DriveMode::Mecanum => vec![(SolId::DriveModeA, false), (SolId::DriveModeB, true)],
        }
    }
}

impl Default for GripperState {
    fn default() -> Self {
        GripperState::Closed
    }
}

impl TwoState for GripperState {
    fn toggled(self) -> Self {
        match self {
            GripperState::Closed => GripperState::Open,
            GripperState::Open => GripperState::Closed,
        }
    }

    fn solenoid_dems(self) -> Vec<(SolId, bool)> {
        vec![(SolId::Gripper, self == GripperState::Closed)]
    }
}
