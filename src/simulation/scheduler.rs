//! Fixed-rate simulation scheduler
//!
//! Drives the per-tick pipeline under the shared store lock:
//! sanitize -> solve -> integrate -> export, then paces itself to the
//! target tick duration and accumulates timing statistics.
//!
//! Export surfaces are host-provided sinks: a render frame every tick and
//! a full body snapshot every `log_every` ticks. Sinks run after the lock
//! is released so slow consumers never stall the command channel.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;

use crate::simulation::engine::Engine;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{BodyId, NVec2};
use crate::simulation::store::BodyStore;

/// One draw descriptor per live body, in store order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCircle {
    pub center: NVec2,
    pub radius: f64,
    pub color: u32, // opaque token, forwarded untouched
}

/// Per-tick consumer of the live body set.
pub trait RenderSink: Send {
    fn present(&mut self, frame: &[DrawCircle]);
}

/// Renderer that discards every frame, for headless runs
#[derive(Debug, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn present(&mut self, _frame: &[DrawCircle]) {}
}

/// One body record in a periodic snapshot. Slots that died this tick are
/// still present until the next sanitize pass and export as tombstones
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotRecord {
    Live {
        id: BodyId,
        radius: f64,
        mass: f64,
        position: NVec2,
        velocity: NVec2,
    },
    Tombstone {
        id: BodyId,
    },
}

/// Periodic consumer of full body snapshots. `entry` counts exports,
/// starting at 1.
pub trait SnapshotSink: Send {
    fn append(&mut self, entry: u64, records: &[SnapshotRecord]);
}

/// Running aggregate of tick wall times for end-of-run reporting.
#[derive(Debug, Clone)]
pub struct TickStats {
    pub ticks: u64,
    pub total: Duration,
    pub min: Duration,
    pub max: Duration,
}

impl TickStats {
    fn new(target: Duration) -> Self {
        // min seeded with the tick budget, like the max with zero
        Self {
            ticks: 0,
            total: Duration::ZERO,
            min: target,
            max: Duration::ZERO,
        }
    }

    pub fn average(&self) -> Duration {
        if self.ticks == 0 {
            Duration::ZERO
        } else {
            self.total / self.ticks as u32
        }
    }

    fn record(&mut self, elapsed: Duration) {
        self.ticks += 1;
        self.total += elapsed;
        if elapsed < self.min {
            self.min = elapsed;
        }
        if elapsed > self.max {
            self.max = elapsed;
        }
    }
}

/// Owns the tick loop: `Running -> (tick)* -> Stopped`. The only terminal
/// transitions are the external shutdown flag and reaching `t_end`
pub struct Scheduler {
    store: Arc<Mutex<BodyStore>>,
    forces: ForceSet,
    engine: Engine,
    parameters: Parameters,
}

impl Scheduler {
    pub fn new(
        store: Arc<Mutex<BodyStore>>,
        forces: ForceSet,
        engine: Engine,
        parameters: Parameters,
    ) -> Self {
        Self {
            store,
            forces,
            engine,
            parameters,
        }
    }

    /// Run ticks until `shutdown` is raised or simulated time passes
    /// `t_end` (when positive). Returns the aggregated tick timings.
    ///
    /// A tick that finishes under the target duration sleeps off the
    /// remainder; an overlong tick simply runs long, nothing is skipped
    pub fn run(
        &self,
        shutdown: &AtomicBool,
        render: &mut dyn RenderSink,
        snapshots: &mut dyn SnapshotSink,
    ) -> TickStats {
        let target = Duration::from_secs_f64(self.parameters.dt);
        let mut stats = TickStats::new(target);
        let mut frame: Vec<DrawCircle> = Vec::new();
        let mut records: Vec<SnapshotRecord> = Vec::new();

        while !shutdown.load(Ordering::Relaxed) {
            if self.parameters.t_end > 0.0
                && stats.ticks as f64 * self.parameters.dt >= self.parameters.t_end
            {
                break;
            }

            let start = Instant::now();
            let tick = stats.ticks + 1;
            let mut log_entry = None;

            {
                let mut store = self.store.lock().expect("body store lock poisoned");

                store.sanitize();
                self.forces.apply_all(&mut store);
                integrator::step_positions(&mut store, &self.parameters);

                frame.clear();
                frame.extend(store.slots().iter().filter(|b| b.alive).map(|b| DrawCircle {
                    center: b.position,
                    radius: b.radius,
                    color: b.color,
                }));

                let log_every = u64::from(self.engine.log_every);
                if log_every > 0 && tick % log_every == 0 {
                    records.clear();
                    records.extend(store.slots().iter().map(|b| {
                        if b.alive {
                            SnapshotRecord::Live {
                                id: b.id,
                                radius: b.radius,
                                mass: b.mass,
                                position: b.position,
                                velocity: b.velocity,
                            }
                        } else {
                            SnapshotRecord::Tombstone { id: b.id }
                        }
                    }));
                    log_entry = Some(tick / log_every);
                }
            }

            render.present(&frame);
            if let Some(entry) = log_entry {
                snapshots.append(entry, &records);
            }

            let elapsed = start.elapsed();
            stats.record(elapsed);
            if elapsed < target {
                thread::sleep(target - elapsed);
            } else {
                debug!("tick {tick} ran {:?} past its budget", elapsed - target);
            }
        }

        stats
    }
}
