use anyhow::Context as _;
use clap::{Parser, ValueEnum};

use isoroad::{
    ManualClock, Pacing, RecordingBackend, RoadFlow, Settings, Viewport, resources,
    sim::SpeedMode,
};

#[derive(Parser, Debug)]
#[command(name = "isoroad", version, about)]
struct Cli {
    /// Frame interval in milliseconds (clamped to 5..=200); sets the target
    /// framerate to match.
    #[arg(long)]
    wait_ms: Option<u32>,

    /// Target framerate; overrides --wait-ms.
    #[arg(long)]
    fps: Option<u32>,

    /// Hide the frame-rate readout.
    #[arg(long, default_value_t = false)]
    no_fps_display: bool,

    /// Who paces the frames.
    #[arg(long, value_enum, default_value_t = PacingArg::Host)]
    pacing: PacingArg,

    /// Drive at full speed instead of braking into curves.
    #[arg(long, default_value_t = false)]
    fixed_speed: bool,

    #[arg(long, default_value_t = 1280)]
    width: u32,

    #[arg(long, default_value_t = 720)]
    height: u32,

    /// Seed for the first course, stage and vehicle.
    #[arg(long)]
    seed: Option<u64>,

    /// Simulate without a window for this many ticks.
    #[arg(long)]
    headless: Option<u64>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PacingArg {
    Cooperative,
    Host,
}

impl Cli {
    fn settings(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(millis) = self.wait_ms {
            settings = settings.with_wait_millis(millis);
        }
        if let Some(fps) = self.fps {
            settings = settings.with_target_framerate(fps);
        }
        settings.fps_display = !self.no_fps_display;
        settings.pacing = match self.pacing {
            PacingArg::Cooperative => Pacing::Cooperative,
            PacingArg::Host => Pacing::Host,
        };
        settings.speed_mode = if self.fixed_speed {
            SpeedMode::Fixed
        } else {
            SpeedMode::Adaptive
        };
        settings.viewport = Viewport::new(self.width.max(1), self.height.max(1));
        settings.seed = self.seed;
        settings
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Err(e) = env_logger::try_init() {
        println!("Warning: Could not initialize logger: {}", e);
    };
    let settings = cli.settings();
    let catalog = resources::load_catalog().context("Failed to load the built-in catalog")?;

    match cli.headless {
        Some(ticks) => run_headless(catalog, settings, ticks),
        None => run_window(catalog, settings),
    }
}

#[cfg(feature = "window")]
fn run_window(
    catalog: std::sync::Arc<isoroad::data_structures::catalog::Catalog>,
    settings: Settings,
) -> anyhow::Result<()> {
    isoroad::app::run(catalog, settings)
}

#[cfg(not(feature = "window"))]
fn run_window(
    catalog: std::sync::Arc<isoroad::data_structures::catalog::Catalog>,
    settings: Settings,
) -> anyhow::Result<()> {
    log::warn!("built without the `window` feature, simulating 600 ticks instead");
    run_headless(catalog, settings, 600)
}

/// Tick against a recording backend on simulated time.
fn run_headless(
    catalog: std::sync::Arc<isoroad::data_structures::catalog::Catalog>,
    settings: Settings,
    ticks: u64,
) -> anyhow::Result<()> {
    let step = 1.0 / settings.target_framerate();
    let time = ManualClock::new(0.0);
    let mut flow = RoadFlow::new(
        catalog,
        settings,
        time.clone(),
        RecordingBackend::with_capacity(1),
    );
    for _ in 0..ticks {
        time.advance(step);
        flow.tick()?;
    }

    let state = flow.state();
    log::info!(
        "{} ticks on {:?}: phase {:?}, idx {:.2}, spd {:.4}, {} frames drawn",
        ticks,
        flow.catalog().course(&state.selection).name(),
        state.phase,
        state.idx(),
        state.spd(),
        flow.backend().drawn()
    );
    flow.teardown();
    Ok(())
}
