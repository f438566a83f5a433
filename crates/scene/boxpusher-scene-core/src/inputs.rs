//! Input contracts for the scene driver.
//!
//! Hosts (a render loop, a control UI) build these per tick and pass them
//! into `Scene::update()`. Commands address the one global clock.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Inputs {
    /// Clock commands applied before stepping.
    #[serde(default)]
    pub commands: Vec<ClockCommand>,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ClockCommand {
    Play,
    Pause,
    Rewind,
    Seek { time: f32 },
    SetSpeed { speed: f32 },
}

impl Inputs {
    pub fn one(cmd: ClockCommand) -> Self {
        Self {
            commands: vec![cmd],
        }
    }
}
