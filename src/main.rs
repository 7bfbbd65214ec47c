use gravsim::{
    CommandProcessor, ControlMessage, NullRender, Scenario, ScenarioConfig, Scheduler,
    SnapshotRecord, SnapshotSink,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::warn;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under scenarios/
    #[arg(short, default_value = "solar_orbit.yaml")]
    file_name: String,

    /// Snapshot log destination
    #[arg(long, default_value = "phys_sim_log.txt")]
    log_file: PathBuf,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

/// Appends one plain-text block per snapshot to the log file.
struct FileSnapshotSink {
    out: BufWriter<File>,
}

impl FileSnapshotSink {
    fn create(path: &Path) -> Result<Self> {
        let file =
            File::create(path).with_context(|| format!("creating log {}", path.display()))?;
        Ok(Self {
            out: BufWriter::new(file),
        })
    }

    fn write_entry(&mut self, entry: u64, records: &[SnapshotRecord]) -> io::Result<()> {
        writeln!(self.out, "ENTRY: #{entry}")?;
        for record in records {
            match record {
                SnapshotRecord::Live {
                    id,
                    radius,
                    mass,
                    position,
                    velocity,
                } => {
                    writeln!(self.out, "Circle {id}:")?;
                    writeln!(self.out, "Radius = {radius}")?;
                    writeln!(self.out, "Mass = {mass}")?;
                    writeln!(self.out, "Position = ({}, {})", position.x, position.y)?;
                    writeln!(self.out, "Velocity = ({}, {})", velocity.x, velocity.y)?;
                }
                SnapshotRecord::Tombstone { id } => {
                    writeln!(self.out, "Circle {id}:")?;
                    writeln!(self.out, "is Null.")?;
                }
            }
        }
        self.out.flush()
    }
}

impl SnapshotSink for FileSnapshotSink {
    fn append(&mut self, entry: u64, records: &[SnapshotRecord]) {
        if let Err(err) = self.write_entry(entry, records) {
            warn!("snapshot write failed: {err}");
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario {
        engine,
        parameters,
        store,
        forces,
    } = Scenario::build_scenario(scenario_cfg)?;
    let dt = parameters.dt;

    let shutdown = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    // Stdin pump: the blocking reader stays here in the host. EOF on the
    // control stream requests a full shutdown.
    {
        let tx = tx.clone();
        let shutdown = Arc::clone(&shutdown);
        thread::spawn(move || {
            println!("Supported Commands: create, clear, set");
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(ControlMessage::Line(line)).is_err() {
                    break;
                }
            }
            shutdown.store(true, Ordering::Relaxed);
            let _ = tx.send(ControlMessage::Shutdown);
        });
    }

    let commands = CommandProcessor::new(Arc::clone(&store)).spawn(rx);

    // Drawing is the window host's concern; this runner stays headless
    let mut render = NullRender;
    let mut snapshots = FileSnapshotSink::create(&args.log_file)?;

    let scheduler = Scheduler::new(store, forces, engine, parameters);
    let stats = scheduler.run(&shutdown, &mut render, &mut snapshots);

    // The scheduler stopped; release the command thread as well.
    shutdown.store(true, Ordering::Relaxed);
    let _ = tx.send(ControlMessage::Shutdown);
    let _ = commands.join();

    println!("Number of ticks: {}", stats.ticks);
    println!("Time passed: {}", stats.ticks as f64 * dt);
    println!("Avg. tick time: {:?}", stats.average());
    println!("Min. tick time: {:?}", stats.min);
    println!("Max. tick time: {:?}", stats.max);

    Ok(())
}
