use clap::Parser;
use log::{LevelFilter, error, info, warn};
use serde_json::json;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tabdock::core::config::{EnvOverrides, TabdockConfig, load_config, resolve};
use tabdock::core::quick_action::default_actions;
use tabdock::core::tab::Tab;

#[derive(Parser)]
#[command(name = "tabdock", about = "Bottom tab bar with a radial quick-action menu")]
struct Args {
    /// Tab to start on
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Draw icons with plain ASCII
    #[arg(long)]
    ascii: bool,

    /// Read config from this file instead of ~/.tabdock/config.toml
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the resting quick-action layout as JSON and exit
    #[arg(long)]
    print_layout: bool,
}

impl Args {
    /// `--print-layout` only prints JSON, so it leaves the log file alone.
    fn writes_log_file(&self) -> bool {
        !self.print_layout
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tabdock.log in current directory.
    // Starts wide open; narrowed to the configured level once it is known.
    if args.writes_log_file() {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        if let Ok(log_file) = File::create("tabdock.log") {
            let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
        }
    }

    let file_config = match load_config(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Falling back to default config: {}", e);
            TabdockConfig::default()
        }
    };
    let config = resolve(&file_config, &EnvOverrides::from_env(), args.tab, args.ascii);
    log::set_max_level(config.log_level);
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    if args.print_layout {
        let actions = default_actions();
        let layout = config.navbar.layout;
        let count = actions.len();
        let buttons: Vec<_> = actions
            .iter()
            .enumerate()
            .map(|(i, action)| {
                let frame = layout.frame(i, count, 1.0);
                json!({
                    "action": action.id,
                    "label": action.label,
                    "angle_degrees": layout.angle_degrees(i, count),
                    "distance": layout.distance(i),
                    "frame": frame,
                })
            })
            .collect();
        let text = serde_json::to_string_pretty(&buttons).map_err(std::io::Error::other)?;
        println!("{text}");
        return Ok(());
    }

    info!(
        "Tabdock starting on tab {} (tap policy {:?}, {} fps)",
        config.initial_tab, config.navbar.tap_policy, config.fps
    );
    tabdock::tui::run(config)
}
