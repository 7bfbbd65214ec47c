//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! consumed by the scheduler and the command processor:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - the shared body store behind its exclusive lock
//! - active interaction set (`ForceSet`)

use std::sync::{Arc, Mutex};

use crate::configuration::config::ScenarioConfig;
use crate::simulation::engine::Engine;
use crate::simulation::forces::{ForceSet, NewtonianGravity};
use crate::simulation::params::Parameters;
use crate::simulation::states::NVec2;
use crate::simulation::store::{BodyStore, StoreError};

/// Fully-initialized runtime bundle for one simulation run.
///
/// The store is already behind the exclusive lock both the scheduler and
/// the command processor will share.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub store: Arc<Mutex<BodyStore>>,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, StoreError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            collisions: e_cfg.collisions,
            tick_hz: e_cfg.tick_hz,
            log_every: e_cfg.log_every.unwrap_or(30),
        };

        // Parameters (runtime) from ParametersConfig; dt comes from the
        // configured tick rate, never from measured frame times
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            width: p_cfg.width,
            height: p_cfg.height,
            G: p_cfg.G,
            density: p_cfg.density,
            dt: 1.0 / f64::from(engine.tick_hz),
            t_end: p_cfg.t_end.unwrap_or(0.0),
        };

        // Bodies: seed the store from each `BodyConfig`
        let mut store = BodyStore::new();
        for bc in &cfg.bodies {
            store.insert(
                bc.m,
                bc.radius,
                NVec2::new(bc.x[0], bc.x[1]),
                NVec2::new(bc.v[0], bc.v[1]),
                bc.color,
            )?;
        }

        // Interactions: register Newtonian gravity with collision handling
        let forces = ForceSet::new().with(NewtonianGravity {
            G: parameters.G,
            dt: parameters.dt,
            density: parameters.density,
            collisions: engine.collisions,
        });

        Ok(Self {
            engine,
            parameters,
            store: Arc::new(Mutex::new(store)),
            forces,
        })
    }
}
