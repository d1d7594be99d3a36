mod app;
mod clock;
mod colors;
mod config;
mod input;
mod render;
mod sprites;

use clap::Parser;
use eframe::egui;
use snake_common::logger::{self, LogLevel};
use snake_common::log;

use app::SnakeApp;
use config::{get_config_manager, DEFAULT_CONFIG_FILE};
use render::RenderContext;
use sprites::Sprites;

const HUD_MARGIN: egui::Vec2 = egui::vec2(16.0, 48.0);

#[derive(Parser)]
#[command(name = "snake_client", about = "Single-player grid snake")]
struct Args {
    /// YAML config file; defaults are used when it does not exist.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    /// Fixed food seed, overriding the config file.
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    /// Write the default config to `--config` if missing, then exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = args.use_log_prefix.then(|| "Snake".to_string());
    let level = if args.verbose { LogLevel::Debug } else { LogLevel::Info };
    logger::init_logger(prefix, level);

    let config_manager = get_config_manager(&args.config);
    if args.write_default_config {
        if config_manager.write_default_if_missing()? {
            log!("Default config written to {}", args.config);
        } else {
            log!("{} already exists, left untouched", args.config);
        }
        return Ok(());
    }

    let config = config_manager.get_config()?;
    let mut settings = config.game.to_settings();
    if args.seed.is_some() {
        settings.seed = args.seed;
    }

    let cell_size = config.window.cell_size_px;
    let inner_size = render::canvas_size(settings.grid, cell_size as f32) + HUD_MARGIN;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(inner_size)
            .with_resizable(false)
            .with_title(config.window.title.clone()),
        ..Default::default()
    };

    log!(
        "Starting {}x{} game, tick every {} ms",
        settings.grid.width,
        settings.grid.height,
        settings.tick_interval.as_millis()
    );

    let sprites = Sprites::load(&config.assets, cell_size);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |cc| {
            let render = RenderContext::new(&cc.egui_ctx, &sprites, cell_size);
            Ok(Box::new(SnakeApp::new(&settings, render)))
        }),
    )?;

    Ok(())
}
