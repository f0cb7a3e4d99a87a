use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::puzzle::{Cube, Face};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReplayError {
    #[error("a replay is already in progress")]
    Busy,
}

/// One undo step: the inverted turn that was performed and the canonical
/// serialization of the state it produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    /// 1-based step index.
    pub step: usize,
    pub face: Face,
    /// Direction of the undo turn itself, i.e. already inverted from the
    /// recorded turn.
    pub clockwise: bool,
    pub state: String,
}

impl fmt::Display for StepRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Step {}: undo {} ({}) -> {}",
            self.step,
            self.face,
            if self.clockwise {
                "clockwise"
            } else {
                "counter-clockwise"
            },
            self.state
        )
    }
}

#[derive(Debug)]
struct Playing {
    total: usize,
    step: usize,
}

/// Replays a cube's move history backwards, one inverted turn per tick.
///
/// The controller owns no timer: the caller paces `tick` however it
/// likes (the binary sleeps a fixed interval between calls). Undo turns
/// go through [`Cube::undo_last`], so they are never re-recorded and the
/// history shrinks as the replay progresses; cancelling partway leaves
/// the cube with a history that still matches its state.
#[derive(Debug, Default)]
pub struct Replay {
    playing: Option<Playing>,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.playing.is_some()
    }

    /// Begins replaying `cube`'s history. Rejected with
    /// [`ReplayError::Busy`] while a replay is in progress. An empty
    /// history completes immediately: the controller stays idle and the
    /// cube is untouched.
    pub fn start(&mut self, cube: &Cube) -> Result<(), ReplayError> {
        if self.is_playing() {
            return Err(ReplayError::Busy);
        }
        let total = cube.history().len();
        if total > 0 {
            self.playing = Some(Playing { total, step: 0 });
        }
        Ok(())
    }

    /// Performs one undo step, most recent turn first. Returns `None`
    /// when idle; the replay finishes (and the controller returns to
    /// idle) on the tick that drains the history.
    pub fn tick(&mut self, cube: &mut Cube) -> Option<StepRecord> {
        let playing = self.playing.as_mut()?;
        let Some(undone) = cube.undo_last() else {
            // history was emptied out from under us
            self.playing = None;
            return None;
        };
        playing.step += 1;
        let step = playing.step;
        if step == playing.total {
            self.playing = None;
        }
        Some(StepRecord {
            step,
            face: undone.face,
            clockwise: undone.clockwise,
            state: cube.stringify(),
        })
    }

    /// Stops a replay partway through. The steps already taken stay
    /// undone.
    pub fn cancel(&mut self) {
        self.playing = None;
    }
}

/// Serializable record of a completed (or cancelled) replay, in the
/// style of a session log.
#[derive(Debug, Serialize, Deserialize)]
pub struct SolveLog {
    pub version: String,
    pub steps: Vec<StepRecord>,
}

impl SolveLog {
    pub fn new() -> Self {
        SolveLog {
            version: env!("CARGO_PKG_VERSION").to_string(),
            steps: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
