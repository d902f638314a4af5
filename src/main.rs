//! Ring Racer headless runner
//!
//! Replays an input script against the simulation and prints status lines.
//! Browser builds use the library's `WebSimulation` handle instead.
//!
//! # Usage
//!
//! ```bash
//! # Drive up the straight, turn right, coast
//! ring-racer --script "w*40, w+d*30, space*20"
//!
//! # Custom track, status every 10 ticks as JSON
//! ring-racer --config track.json --script "w*200" --report-every 10 --json
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::{Context, Result};
    use clap::Parser;

    use ring_racer::sim::{SimEvent, parse_script, tick};
    use ring_racer::{InputState, SimConfig, Simulation, StatusSnapshot};

    #[derive(Parser, Debug)]
    #[command(name = "ring-racer")]
    #[command(version, about = "Headless ring-track driving simulation", long_about = None)]
    struct Cli {
        /// JSON config (physics and track); defaults when omitted
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Input script, e.g. "w*40, w+a*20, space*10"
        #[arg(short, long)]
        script: Option<String>,

        /// Idle ticks to run after the script
        #[arg(short, long, default_value = "0")]
        ticks: usize,

        /// Print status every N ticks (0 = final status only)
        #[arg(short, long, default_value = "0")]
        report_every: u64,

        /// Print status as JSON lines
        #[arg(long)]
        json: bool,

        /// Logging verbosity level
        #[arg(short, long, default_value = "info")]
        log_level: String,
    }

    fn print_status(status: &StatusSnapshot, json: bool) -> Result<()> {
        if json {
            println!("{}", serde_json::to_string(status)?);
        } else {
            println!("{}", status.summary());
        }
        Ok(())
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();

        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
            .init();

        let config = match &cli.config {
            Some(path) => SimConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => SimConfig::default(),
        };
        let mut sim = Simulation::new(config).context("invalid configuration")?;

        let mut inputs = match &cli.script {
            Some(script) => parse_script(script).context("parsing input script")?,
            None => Vec::new(),
        };
        inputs.extend(std::iter::repeat_n(InputState::default(), cli.ticks));
        log::info!("Running {} ticks", inputs.len());

        for input in inputs {
            sim.apply_input(input);
            tick(&mut sim);

            for event in sim.take_events() {
                match event {
                    SimEvent::FinishReached { laps } => log::info!("Lap {} complete", laps),
                    SimEvent::LeftTrack { pos } => log::debug!("Off track near {:?}", pos),
                    SimEvent::ReturnedToTrack | SimEvent::Reset => {}
                }
            }

            if cli.report_every > 0 && sim.time_ticks() % cli.report_every == 0 {
                print_status(&sim.status(), cli.json)?;
            }
        }

        print_status(&sim.status(), cli.json)?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::init, this is just to satisfy the compiler
}
