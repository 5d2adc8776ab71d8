use anyhow::{ensure, Result};
use clap::Parser;
use log::info;

use intersection_sim::console;
use intersection_sim::simulation::{SimConfig, SimulationEngine, TICKS_PER_SECOND};

#[derive(Parser)]
#[command(name = "intersection_sim")]
#[command(about = "Four-way intersection traffic simulation with optional UI")]
struct Cli {
    /// Run with the Bevy game engine UI
    #[arg(long)]
    ui: bool,

    /// Number of simulation ticks to run in headless mode
    #[arg(long, default_value = "3600")]
    ticks: u32,

    /// Simulated frames per tick
    #[arg(long, default_value = "1.0")]
    delta: f64,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Toggle the lights every N ticks in headless mode (0 disables)
    #[arg(long, default_value = "240")]
    toggle_every: u32,

    /// Print a summary and map every N ticks in headless mode (0 disables)
    #[arg(long, default_value = "600")]
    report_every: u32,

    /// Milliseconds to pause after each report
    #[arg(long, default_value = "0")]
    pause_ms: u64,

    /// Frames between random spawn attempts
    #[arg(long)]
    spawn_interval: Option<f64>,

    /// Chance that a spawn attempt produces a vehicle
    #[arg(long)]
    spawn_probability: Option<f64>,

    /// Initial simulation speed multiplier
    #[arg(long)]
    speed: Option<f64>,
}

impl Cli {
    fn config(&self) -> SimConfig {
        let mut config = SimConfig::default();
        if let Some(interval) = self.spawn_interval {
            config.spawn_interval = interval;
        }
        if let Some(probability) = self.spawn_probability {
            config.spawn_probability = probability;
        }
        if let Some(speed) = self.speed {
            config.initial_speed_multiplier = speed;
        }
        config
    }

    fn engine(&self) -> Result<SimulationEngine> {
        match self.seed {
            Some(seed) => SimulationEngine::with_seed(self.config(), seed),
            None => SimulationEngine::new(self.config()),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let engine = cli.engine()?;

    if cli.ui {
        #[cfg(feature = "ui")]
        {
            run_with_ui(engine);
        }
        #[cfg(not(feature = "ui"))]
        {
            eprintln!("Error: UI feature is not enabled. Rebuild with --features ui");
            std::process::exit(1);
        }
    } else {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or("warn,intersection_sim=info"),
        )
        .init();
        run_headless(&cli, engine)?;
    }

    Ok(())
}

/// Run the simulation in headless mode (no graphics)
fn run_headless(cli: &Cli, mut engine: SimulationEngine) -> Result<()> {
    ensure!(cli.delta >= 0.0, "delta must be non-negative");
    println!("Running intersection simulation in headless mode...");
    println!("Ticks: {}, Delta: {} frames", cli.ticks, cli.delta);
    println!();

    println!("Initial state:");
    console::print_summary(&engine);
    console::draw_map(&engine);

    for tick in 1..=cli.ticks {
        engine.tick(cli.delta);

        if cli.toggle_every > 0 && tick % cli.toggle_every == 0 {
            engine.toggle_lights();
        }

        if cli.report_every > 0 && tick % cli.report_every == 0 {
            println!(
                "--- After tick {} ({:.1}s simulated time) ---",
                tick,
                engine.time() / TICKS_PER_SECOND
            );
            console::print_summary(&engine);
            console::draw_map(&engine);

            if cli.pause_ms > 0 && tick < cli.ticks {
                std::thread::sleep(std::time::Duration::from_millis(cli.pause_ms));
            }
        }
    }

    let stats = engine.stats();
    info!("=== SIMULATION COMPLETE ===");
    info!("Simulated time: {:.2}s", engine.time() / TICKS_PER_SECOND);
    info!("Ticks run: {}", stats.ticks);
    info!("Vehicles spawned: {}", stats.vehicles_spawned);
    info!("Vehicles despawned: {}", stats.vehicles_despawned);
    info!("Active vehicles: {}", engine.vehicle_count());
    info!("Spawns blocked: {}", stats.spawns_blocked);
    info!("Light toggles: {}", stats.light_toggles);

    Ok(())
}

#[cfg(feature = "ui")]
fn run_with_ui(engine: SimulationEngine) {
    use bevy::log::LogPlugin;
    use bevy::prelude::*;

    println!("Starting Intersection Sim UI...");
    println!();
    println!("Controls:");
    println!("  Space       - Toggle traffic lights");
    println!("  H / V       - Spawn a horizontal / vertical vehicle");
    println!("  Up / Down   - Speed up / slow down the simulation");
    println!("  ESC         - Exit");
    println!();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    filter: "warn,intersection_sim=info".to_string(),
                    level: bevy::log::Level::INFO,
                    ..default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Intersection Sim".into(),
                        resolution: (800, 800).into(),
                        ..default()
                    }),
                    ..default()
                }),
        )
        .add_plugins(intersection_sim::ui::IntersectionUiPlugin::new(engine))
        .run();
}
