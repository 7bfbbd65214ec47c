pub mod simulation;
pub mod configuration;
pub mod command;

pub use simulation::states::{Body, BodyId, NVec2};
pub use simulation::store::{BodyStore, StoreError, DEFAULT_CAPACITY};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::step_positions;
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::scheduler::{
    DrawCircle, NullRender, RenderSink, Scheduler, SnapshotRecord, SnapshotSink, TickStats,
};
pub use simulation::scenario::Scenario;

pub use configuration::config::{
    BodyConfig, CollisionConfig, EngineConfig, ParametersConfig, ScenarioConfig,
};

pub use command::{CommandOutcome, CommandProcessor, ControlMessage};
