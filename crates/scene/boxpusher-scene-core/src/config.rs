//! Scene driver configuration.

use serde::{Deserialize, Serialize};

use crate::camera::CameraConfig;

/// Configuration for scene sizing and playback policy.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Initial capacity hint for the node store.
    pub node_capacity: usize,

    /// Drop transitions once they have fully completed, folding their targets
    /// into the node's base state. Saves memory on long forward-only
    /// playback, but seeking backward and clone replay are unsupported once
    /// any history has been folded away.
    pub prune_completed: bool,

    pub camera: CameraConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_capacity: 256,
            prune_completed: false,
            camera: CameraConfig::default(),
        }
    }
}
