//! Main teleoperation executable entry point.
//!
//! # Architecture
//!
//! The general execution methodology consists of:
//!
//!     - Initialise all modules
//!     - Main loop:
//!         - Input acquisition:
//!             - Scripted input events
//!             - Gamepad and vision sampling
//!         - Teleoperation control processing
//!         - Actuator demand output
//!         - Archiving
//!
//! # Modules
//!
//! All modules (e.g. `teleop_ctrl`) shall meet the following requirements:
//!     1. Provide a public struct implementing the `util::module::State` trait.

// ---------------------------------------------------------------------------
// USE MODULES FROM LIBRARY
// ---------------------------------------------------------------------------

use teleop_lib::{
    data_store::DataStore,
    io::{
        sim::{SimActuatorBus, SimInputs},
        ActuatorSink,
    },
    params::TeleopExecParams,
    teleop_ctrl::InputData,
};

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};
use structopt::StructOpt;

// Internal
use comms_if::hid::ControllerId;
use util::{
    archive::Archived,
    host,
    logger::{logger_init, LevelFilter},
    module::State,
    script_interpreter::{PendingEvents, ScriptInterpreter},
    session::Session,
};

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Teleoperation executable, replays a script of gamepad and vision events.
#[derive(Debug, StructOpt)]
#[structopt(name = "teleop_exec")]
struct Opts {
    /// Path to the input script
    #[structopt(parse(from_os_str))]
    script: PathBuf,

    /// Stop after this many cycles even if the script has not ended
    #[structopt(long)]
    max_cycles: Option<u64>,

    /// Minimum level of log messages (info, debug or trace)
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

// ---------------------------------------------------------------------------
// FUNCTIONS
// ---------------------------------------------------------------------------

/// Executable main function, entry point.
fn main() -> Result<(), Report> {
    color_eyre::install()?;

    let opts = Opts::from_args();

    // ---- EARLY INITIALISATION ----

    // Initialise session
    let session =
        Session::new("teleop_exec", "sessions").wrap_err("Failed to create the session")?;

    // Initialise logger
    logger_init(opts.log_level, &session).wrap_err("Failed to initialise logging")?;

    // Log information on this execution.
    info!("Teleoperation Executable\n");
    info!(
        "Running on: {:#?}",
        host::get_uname().wrap_err("Failed to get host information")?
    );
    info!("Session directory: {:?}\n", session.session_root);
    debug!("CLI options: {:?}", opts);

    // ---- LOAD PARAMETERS ----

    let exec_params: TeleopExecParams =
        util::params::load("teleop_exec.toml").wrap_err("Could not load exec params")?;

    if !(exec_params.cycle_period_s.is_finite() && exec_params.cycle_period_s > 0.0) {
        return Err(eyre!(
            "Cycle period must be positive, found {}",
            exec_params.cycle_period_s
        ));
    }

    info!(
        "Exec parameters loaded, driver on port {}, operator on port {}, vision from \"{}\"",
        exec_params.port_of(ControllerId::Driver),
        exec_params.port_of(ControllerId::Operator),
        exec_params.vision_table
    );

    // ---- LOAD SCRIPT ----

    info!("Loading script from {:?}", opts.script);

    let mut si = ScriptInterpreter::new(&opts.script).wrap_err("Failed to load script")?;

    info!(
        "Loaded script lasts {:.02} s and contains {} events\n",
        si.get_duration(),
        si.get_num_events()
    );

    // ---- INITIALISE DATASTORE ----

    info!("Initialising modules...");

    let mut ds = DataStore::default();

    // ---- INITIALISE MODULES ----

    ds.teleop_ctrl
        .init("teleop_ctrl.toml", &session)
        .wrap_err("Failed to initialise TeleopCtrl")?;
    info!("TeleopCtrl init complete");

    let mut inputs = SimInputs::default();
    let mut act_bus = SimActuatorBus::new(exec_params.devices.clone());

    info!("Module initialisation complete\n");

    // ---- MAIN LOOP ----

    info!("Begining main loop\n");

    let cycle_period = Duration::from_secs_f64(exec_params.cycle_period_s);
    let loop_start_instant = Instant::now();

    loop {
        // Get cycle start time
        let cycle_start_instant = Instant::now();

        // Clear items that need wiping at the start of the cycle
        ds.cycle_start((cycle_start_instant - loop_start_instant).as_secs_f64());

        // ---- INPUT EVENTS ----

        match si.get_pending_events_at(ds.loop_time_s) {
            PendingEvents::None => (),
            PendingEvents::Some(events) => {
                for event in events.iter() {
                    debug!("Input event: {:?}", event);
                    inputs.apply(event);
                }
            }
            // Exit if end of script reached
            PendingEvents::EndOfScript => {
                info!("End of input script reached, stopping");
                break;
            }
        }

        ds.teleop_input = InputData::read(&inputs, &inputs);

        // ---- CONTROL ALGORITHM PROCESSING ----

        match ds.teleop_ctrl.proc(&ds.teleop_input) {
            Ok((o, r)) => {
                ds.teleop_output = o;
                ds.teleop_status_rpt = r;
            }
            Err(e) => match e {},
        };

        // Send demands to the actuators
        act_bus.apply(&ds.teleop_output);

        // ---- WRITE ARCHIVES ----

        if let Err(e) = ds.teleop_ctrl.write() {
            warn!("Could not write TeleopCtrl archives: {}", e);
        }

        // ---- CYCLE MANAGEMENT ----

        let cycle_dur = Instant::now() - cycle_start_instant;

        // Get sleep duration
        match cycle_period.checked_sub(cycle_dur) {
            Some(d) => {
                ds.num_consec_cycle_overruns = 0;
                thread::sleep(d);
            }
            None => {
                warn!(
                    "Cycle overran by {:.06} s",
                    cycle_dur.as_secs_f64() - cycle_period.as_secs_f64()
                );
                ds.num_consec_cycle_overruns += 1;
            }
        }

        ds.cycle_end();

        if let Some(max) = opts.max_cycles {
            if ds.num_cycles >= max {
                info!("Cycle limit of {} reached, stopping", max);
                break;
            }
        }
    }

    // ---- SHUTDOWN ----

    info!(
        "End of execution after {} cycles, final drive mode {:?}, gripper {:?}",
        ds.num_cycles,
        ds.teleop_ctrl.drive_mode(),
        ds.teleop_ctrl.gripper_state()
    );

    Ok(())
}
