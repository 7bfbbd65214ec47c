//! High-level runtime engine settings
//!
//! Selects the collision resolution mode and the tick/log cadence used
//! when building and running a `Scenario`

use crate::configuration::config::CollisionConfig;

#[derive(Debug, Clone)]
pub struct Engine {
    pub collisions: CollisionConfig, // elastic bounce or inelastic merge
    pub tick_hz: u32,  // fixed tick rate; dt = 1 / tick_hz
    pub log_every: u32, // ticks between snapshot exports; 0 disables them
}
