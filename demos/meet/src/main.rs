//! meet — run two programmed robots on an integer line until they meet.
//!
//! Without `--scenario` the built-in converging pair is used: marker at 1,
//! robot 1 at 10 running `ML / IF FLAG / MR / GOTO 1`, robot 2 at −15
//! running the mirror image.  Sample scenario files live in `scenarios/`, and
//! `programs/` holds program files for `--program1` / `--program2`.
//!
//! Library diagnostics go to stderr through `tracing`; set `RUST_LOG=debug`
//! (or `trace` for every tick) to see them.

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use rb_agent::Step;
use rb_core::{AgentId, Position, Tick};
use rb_program::Program;
use rb_output::{CsvWriter, SimOutputObserver};
use rb_sim::{Outcome, Scenario, SimObserver, TickRecord};

#[derive(Parser)]
#[command(name = "meet", about = "Two programmed robots on an integer line: do they meet?")]
struct Cli {
    /// Scenario JSON file.  Defaults to the built-in converging pair.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Program file for robot 1, one instruction per line.  Replaces the
    /// scenario's program.
    #[arg(long)]
    program1: Option<PathBuf>,

    /// Program file for robot 2.
    #[arg(long)]
    program2: Option<PathBuf>,

    /// Override the scenario's tick ceiling.
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Pause between ticks, in milliseconds, so a run can be watched.
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Write `ticks.csv` and `outcome.csv` into this directory.
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print only the outcome, as JSON.
    #[arg(long)]
    json: bool,

    /// Suppress the per-tick position lines.
    #[arg(long)]
    quiet: bool,

    /// Also print the instruction each robot executed.
    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Whether anything beyond the outcome line is printed.
    fn show_progress(&self) -> bool {
        !self.json && !self.quiet
    }
}

// ── Console observer ──────────────────────────────────────────────────────────

/// Prints the run as it happens and forwards rows to the CSV writer, if any.
struct ConsoleObserver {
    ticks: bool,
    steps: bool,
    delay: Duration,
    csv:   Option<SimOutputObserver<CsvWriter>>,
}

impl SimObserver for ConsoleObserver {
    fn on_start(&mut self, initial: &TickRecord, marker: Position) {
        if !self.ticks {
            return;
        }
        println!("Initial conditions:");
        println!("  marker cell: {marker}");
        println!("  robot 1:     {}", initial.pos1);
        println!("  robot 2:     {}", initial.pos2);
        println!();
    }

    fn on_agent_step(&mut self, tick: Tick, agent: AgentId, step: &Step) {
        if self.steps {
            println!(
                "  {tick} robot {} line {:>2} {:<8} hops {}",
                agent.number(),
                step.at + 1,
                step.executed.to_string(),
                step.hops,
            );
        }
    }

    fn on_tick(&mut self, record: &TickRecord) {
        if self.ticks {
            println!(
                "tick {:>4}: robot 1 at {:>4}, robot 2 at {:>4}, gap {:>4}",
                record.tick.0,
                record.pos1.0,
                record.pos2.0,
                record.pos1.distance(record.pos2),
            );
        }
        if let Some(csv) = &mut self.csv {
            csv.on_tick(record);
        }
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }

    fn on_finish(&mut self, outcome: &Outcome) {
        if let Some(csv) = &mut self.csv {
            csv.on_finish(outcome);
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut scenario = match &cli.scenario {
        Some(path) => Scenario::load_json(path)
            .with_context(|| format!("loading scenario {}", path.display()))?,
        None => Scenario::converging_pair(),
    };
    if let Some(max_ticks) = cli.max_ticks {
        scenario.max_ticks = max_ticks;
    }
    for (robot, path) in scenario.robots.iter_mut().zip([&cli.program1, &cli.program2]) {
        if let Some(path) = path {
            let program = Program::load(path)
                .with_context(|| format!("loading program {}", path.display()))?;
            robot.program = program.instructions().iter().map(ToString::to_string).collect();
        }
    }

    debug!(marker = scenario.marker.0, max_ticks = scenario.max_ticks, "scenario loaded");
    let mut sim = scenario.build().context("building simulation")?;
    let show = cli.show_progress();

    if show {
        for robot in [AgentId::FIRST, AgentId::SECOND] {
            println!("Robot {} program:", robot.number());
            print!("{}", sim.agent(robot).program().listing());
            println!();
        }
    }

    let csv = match &cli.output {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("creating output in {}", dir.display()))?,
        )),
        None => None,
    };
    let mut observer = ConsoleObserver {
        ticks: show,
        steps: show && cli.verbose,
        delay: Duration::from_millis(cli.delay_ms),
        csv,
    };

    let t0 = Instant::now();
    let outcome = sim.run(&mut observer)?;
    let elapsed = t0.elapsed();

    if let Some(e) = observer.csv.as_mut().and_then(SimOutputObserver::take_error) {
        eprintln!("output error: {e}");
    }

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        if show {
            println!();
        }
        println!("Result: {outcome}");
        if show {
            println!("Simulated in {:.3} ms", elapsed.as_secs_f64() * 1e3);
        }
    }
    if let Some(dir) = cli.output.as_ref().filter(|_| show) {
        println!("Wrote {}/ticks.csv and {}/outcome.csv", dir.display(), dir.display());
    }

    Ok(())
}
