//! # Input script interpreter module
//!
//! This module provides an interpreter for input scripts, which replay gamepad and vision events
//! against the teleoperation loop when no drive station is attached.
//!
//! A script is a sequence of `time: event;` entries, where `time` is the number of seconds since
//! the start of the replay loop and `event` is a JSON `InputEvent`, for example:
//!
//! ```text
//! 0.5: {"type": "axis", "ctrl": "Driver", "idx": 1, "value": 0.8};
//! 1.0: {"type": "button", "ctrl": "Driver", "button": "LeftStick", "pressed": true};
//! ```

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External
use regex::RegexBuilder;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// Internal
use comms_if::hid::{InputEvent, InputEventParseError};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// An event which is scripted to occur at a specific time.
struct ScriptedEvent {
    /// The time the event is supposed to occur at
    exec_time_s: f64,

    /// The event to apply
    event: InputEvent,
}

/// A script interpreter.
///
/// After initialising with the path to the script to run, call `.get_pending_events_at` each
/// cycle with the time since the replay loop started to acquire the events that have become due.
pub struct ScriptInterpreter {
    _script_path: Option<PathBuf>,
    events: VecDeque<ScriptedEvent>,
}

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Could not find the script at {0:?}")]
    ScriptNotFound(PathBuf),

    #[error("Could not load the script: {0}")]
    ScriptLoadError(std::io::Error),

    #[error("The script is empty (or is so bad it can't be read)")]
    ScriptEmpty,

    #[error(
        "Script contains an invalid timestamp: {0}. \
        Should be a float (like 1.0)"
    )]
    InvalidTimestamp(String),

    #[error("Script contains an invalid event at {0} s: {1}")]
    InvalidEvent(f64, InputEventParseError),
}

/// Events which have become due.
#[derive(Debug, PartialEq)]
pub enum PendingEvents {
    None,
    Some(Vec<InputEvent>),
    EndOfScript,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl ScriptInterpreter {
    /// Create a new interpreter from the given script path.
    pub fn new<P: AsRef<Path>>(script_path: P) -> Result<Self, ScriptError> {
        let path = PathBuf::from(script_path.as_ref());

        if !path.exists() {
            return Err(ScriptError::ScriptNotFound(path));
        }

        let script = fs::read_to_string(&path).map_err(ScriptError::ScriptLoadError)?;

        let mut si = Self::from_script(&script)?;
        si._script_path = Some(path);

        Ok(si)
    }

    /// Create a new interpreter from the contents of a script.
    pub fn from_script(script: &str) -> Result<Self, ScriptError> {
        let mut events: Vec<ScriptedEvent> = Vec::new();

        // Go through the script executing __the magic regex__.
        let re = RegexBuilder::new(r"^\s*(\d+(\.\d+)?)\s*:\s*([^;]*);")
            .multi_line(true)
            .build()
            .map_err(|e| ScriptError::InvalidTimestamp(e.to_string()))?;

        for cap in re.captures_iter(script) {
            let time_str = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
            let payload = cap.get(3).map(|m| m.as_str()).unwrap_or_default();

            let exec_time_s: f64 = time_str
                .parse()
                .map_err(|e| ScriptError::InvalidTimestamp(format!("{}", e)))?;

            // The scripts contain JSON only.
            let event = InputEvent::from_json(payload)
                .map_err(|e| ScriptError::InvalidEvent(exec_time_s, e))?;

            events.push(ScriptedEvent { exec_time_s, event });
        }

        if events.is_empty() {
            return Err(ScriptError::ScriptEmpty);
        }

        // Events must be replayed in time order, entries at the same time keep their script order
        events.sort_by(|a, b| {
            a.exec_time_s
                .partial_cmp(&b.exec_time_s)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(ScriptInterpreter {
            _script_path: None,
            events: events.into_iter().collect(),
        })
    }

    /// Return the events which are due at the given time since the start of the replay loop.
    pub fn get_pending_events_at(&mut self, current_time_s: f64) -> PendingEvents {
        // If the queue is empty the script is over and we return the end of
        // script variant
        if self.events.is_empty() {
            return PendingEvents::EndOfScript;
        }

        let mut event_vec: Vec<InputEvent> = vec![];

        while let Some(front) = self.events.front() {
            if front.exec_time_s > current_time_s {
                break;
            }
            if let Some(e) = self.events.pop_front() {
                event_vec.push(e.event);
            }
        }

        if event_vec.is_empty() {
            PendingEvents::None
        } else {
            PendingEvents::Some(event_vec)
        }
    }

    /// Get the number of events remaining in the script
    pub fn get_num_events(&self) -> usize {
        self.events.len()
    }

    /// Get the length of the script in seconds
    pub fn get_duration(&self) -> f64 {
        match self.events.back() {
            Some(c) => c.exec_time_s,
            None => 0f64,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use comms_if::hid::{Button, ControllerId};

    const SCRIPT: &str = r#"
        1.0: {"type": "button", "ctrl": "Operator", "button": "B", "pressed": true};
        0.0: {"type": "axis", "ctrl": "Driver", "idx": 1, "value": 0.5};
        1.0: {"type": "vision", "key": "tx", "value": 2.0};
    "#;

    #[test]
    fn test_replay_in_time_order() {
        let mut si = ScriptInterpreter::from_script(SCRIPT).unwrap();
        assert_eq!(si.get_num_events(), 3);
        assert_eq!(si.get_duration(), 1.0);

        assert_eq!(
            si.get_pending_events_at(0.0),
            PendingEvents::Some(vec![InputEvent::Axis {
                ctrl: ControllerId::Driver,
                idx: 1,
                value: 0.5
            }])
        );
        assert_eq!(si.get_pending_events_at(0.5), PendingEvents::None);

        match si.get_pending_events_at(1.2) {
            PendingEvents::Some(v) => {
                assert_eq!(v.len(), 2);
                assert_eq!(
                    v[0],
                    InputEvent::Button {
                        ctrl: ControllerId::Operator,
                        button: Button::B,
                        pressed: true
                    }
                );
            }
            p => panic!("Expected two events, got {:?}", p),
        }

        assert_eq!(si.get_pending_events_at(5.0), PendingEvents::EndOfScript);
    }

    #[test]
    fn test_events_due_at_loop_time() {
        let mut si = ScriptInterpreter::from_script(
            r#"2.0: {"type": "vision", "key": "tx", "value": 1.0};"#,
        )
        .unwrap();

        // Times are measured from the start of the replay, nothing else
        assert_eq!(si.get_pending_events_at(0.0), PendingEvents::None);
        assert_eq!(si.get_pending_events_at(1.99), PendingEvents::None);
        assert_eq!(
            si.get_pending_events_at(2.0),
            PendingEvents::Some(vec![InputEvent::Vision {
                key: "tx".into(),
                value: 1.0
            }])
        );
        assert_eq!(si.get_pending_events_at(2.0), PendingEvents::EndOfScript);
    }

    #[test]
    fn test_bad_scripts() {
        assert!(matches!(
            ScriptInterpreter::from_script("nothing here"),
            Err(ScriptError::ScriptEmpty)
        ));
        assert!(matches!(
            ScriptInterpreter::from_script(r#"2.0: {"type": "axis", "ctrl": "Driver", "idx": 9, "value": 0.0};"#),
            Err(ScriptError::InvalidEvent(t, _)) if t == 2.0
        ));
        assert!(matches!(
            ScriptInterpreter::new("/nonexistent/script.tscr"),
            Err(ScriptError::ScriptNotFound(_))
        ));
    }
}
