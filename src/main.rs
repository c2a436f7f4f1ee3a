mod config;
mod display;
mod error;
mod explorer;
mod fractal;
mod input;
mod util;

use clap::Parser;
use config::{parse_resolution, Config, Overrides, DEFAULT_CONFIG_PATH};
use display::{Display, InputEvent, MouseButtonKind, RenderTarget};
use error::Result;
use explorer::Explorer;
use input::{to_raster, Click};
use sdl2::keyboard::Keycode;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use util::FpsCounter;

/// Interactive Mandelbrot explorer
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON settings file (defaults to ./mandelzoom.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Raster size, e.g. 1920x1080
    #[arg(long, short = 'r', value_parser = parse_resolution_arg)]
    resolution: Option<(u32, u32)>,

    /// Iteration cap per pixel
    #[arg(long, short = 'i')]
    iterations: Option<u32>,

    /// Disable VSync for an uncapped redraw rate
    #[arg(long)]
    no_vsync: bool,
}

fn parse_resolution_arg(s: &str) -> std::result::Result<(u32, u32), String> {
    parse_resolution(s).map_err(|e| e.to_string())
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            config_path: self.config.clone(),
            resolution: self.resolution,
            max_iterations: self.iterations,
            no_vsync: self.no_vsync,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mandelzoom=info")),
        )
        .init();

    let args = Args::parse();
    let config = Config::resolve(&args.overrides(), DEFAULT_CONFIG_PATH)?;

    let (mut display, texture_creator) =
        Display::with_options("mandelzoom", config.width, config.height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;

    let mut explorer = Explorer::new(&config);

    // Rolling window of about one second at 60fps
    let mut fps_counter = FpsCounter::new(60);

    info!("=== mandelzoom v{} ===", env!("CARGO_PKG_VERSION"));
    info!(
        "Resolution: {}x{}, {} iterations, zoom {}",
        config.width,
        config.height,
        explorer.max_iterations(),
        explorer.view().zoom
    );
    if config.vsync {
        info!("VSync: ON. Use --no-vsync for uncapped.");
    } else {
        info!("VSync: OFF (uncapped framerate)");
    }
    info!("Controls:");
    info!("  Click        - Zoom in x{} at cursor", config.zoom_factor);
    info!("  Ctrl+Click   - Zoom out at cursor");
    info!("  Shift+Click  - Re-centre on cursor without zooming");
    info!("  R            - Reset view");
    info!("  Escape       - Quit");

    'main: loop {
        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::R) => explorer.reset(),
                InputEvent::MouseDown {
                    x,
                    y,
                    button: MouseButtonKind::Left,
                    modifiers,
                } => {
                    let (px, py) = to_raster(
                        x,
                        y,
                        display.window_size(),
                        (config.width, config.height),
                    );
                    explorer.click(Click::new(px, py, modifiers, config.zoom_factor));
                },
                _ => {},
            }
        }

        // Redraw every frame, changed or not
        display.present(&mut target, explorer.buffer())?;

        let avg_fps = fps_counter.tick();
        if fps_counter.window_complete() {
            debug!(
                fps = avg_fps,
                frame_ms = fps_counter.avg_frame_time_ms(),
                "present rate"
            );
        }
    }

    Ok(())
}
