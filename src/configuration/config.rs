//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – engine options (collision mode, tick/log cadence)
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   collisions: "elastic"   # or "merge"
//!   tick_hz: 30             # fixed simulation rate
//!   log_every: 30           # snapshot interval in ticks
//!
//! parameters:
//!   width: 1280.0           # domain width
//!   height: 720.0           # domain height
//!   G: 0.22525763           # gravitational constant, domain units
//!   density: 500.0          # merged-body density
//!   t_end: 60.0             # simulated end time; omit to run until shutdown
//!
//! bodies:
//!   - x: [ 640.0, 360.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 100000000.0
//!     radius: 40.0
//!     color: 0xFFFF00
//! ```
//!
//! The engine maps this configuration into its internal runtime scenario
//! representation before the first tick runs.

use serde::Deserialize;

/// Collision resolution applied when two body circles overlap
/// `collisions: "elastic"` or `collisions: "merge"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionConfig {
    #[serde(rename = "elastic")] // bounce along the contact normal, masses unchanged
    Elastic,

    #[serde(rename = "merge")] // inelastic merge into the lower-indexed body
    Merge,
}

/// High-level engine configuration
/// Controls the structure of the simulation
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub collisions: CollisionConfig, // how overlapping pairs are resolved
    pub tick_hz: u32,                // fixed tick rate; dt = 1 / tick_hz
    pub log_every: Option<u32>,      // snapshot interval in ticks, default 30
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub width: f64,         // domain width
    pub height: f64,        // domain height
    pub G: f64,             // gravitational constant
    pub density: f64,       // merged-body density
    pub t_end: Option<f64>, // simulated end time; omit to run until shutdown
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: Vec<f64>, // Initial position vector `x` in domain units
    pub v: Vec<f64>, // Initial velocity vector `v` in domain units per second
    pub m: f64,      // Mass of the body
    pub radius: f64, // Radius of the body, used for collisions and culling
    pub color: u32,  // Opaque render token forwarded to the renderer
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // engine-level configuration
    pub parameters: ParametersConfig, // numerical and physical parameters
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
