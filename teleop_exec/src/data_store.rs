//! # Data Store

use comms_if::eqpt::act::ActDems;

use crate::teleop_ctrl;

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// Global data store for the executable.
#[derive(Default)]
pub struct DataStore {
    // Cycle management
    /// Number of cycles already executed
    pub num_cycles: u64,

    /// Time since the start of the main loop
    pub loop_time_s: f64,

    // TeleopCtrl
    pub teleop_ctrl: teleop_ctrl::TeleopCtrl,
    pub teleop_input: teleop_ctrl::InputData,
    pub teleop_output: ActDems,
    pub teleop_status_rpt: teleop_ctrl::StatusReport,

    // Monitoring Counters
    /// Number of consecutive cycle overruns
    pub num_consec_cycle_overruns: u64,
}

// ---------------------------------------------------------------------------
// IMPLS
// ---------------------------------------------------------------------------

impl DataStore {
    /// Perform actions required at the start of a cycle.
    ///
    /// Clears the per-cycle TeleopCtrl data and records the loop time.
    pub fn cycle_start(&mut self, loop_time_s: f64) {
        self.loop_time_s = loop_time_s;

        self.teleop_input = teleop_ctrl::InputData::default();
        self.teleop_output = ActDems::default();
        self.teleop_status_rpt = teleop_ctrl::StatusReport::default();
    }

    /// Perform actions required at the end of a cycle.
    pub fn cycle_end(&mut self) {
        self.num_cycles += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cycle_start_clears_outputs() {
        let mut ds = DataStore::default();
        ds.teleop_output.set_drv_sides(0.5, 0.5);
        ds.teleop_status_rpt.vision_override = true;

        ds.cycle_start(1.5);
        ds.cycle_end();

        assert_eq!(ds.teleop_output, ActDems::default());
        assert!(!ds.teleop_status_rpt.vision_override);
        assert_eq!(ds.loop_time_s, 1.5);
        assert_eq!(ds.num_cycles, 1);
    }
}
