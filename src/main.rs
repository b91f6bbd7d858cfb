//! labelstrip demo - Entry Point

use clap::{Parser, ValueEnum};
use labelstrip::config::{self, CliOverrides};
use labelstrip::model::{AppError, FlankLimit, Justification};
use labelstrip::view::{self, ColorConfig, DemoOptions};
use std::path::PathBuf;
use tracing::info;

/// Label justification as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum JustifyArg {
    /// Pin the start of the text to the strip.
    Start,
    /// Pin the end of the text to the strip.
    End,
}

impl From<JustifyArg> for Justification {
    fn from(arg: JustifyArg) -> Self {
        match arg {
            JustifyArg::Start => Justification::Start,
            JustifyArg::End => Justification::End,
        }
    }
}

/// labelstrip - heatmap label strip in the terminal
#[derive(Parser, Debug)]
#[command(name = "labelstrip")]
#[command(version)]
#[command(about = "Interactive label strip beside a synthetic heatmap")]
pub struct Args {
    /// Number of synthetic rows
    #[arg(short = 'n', long, default_value = "500", value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Word every label starts with
    #[arg(long, default_value = "gene")]
    pub seed_word: String,

    /// Label justification
    #[arg(short, long, value_enum)]
    pub justify: Option<JustifyArg>,

    /// Labels drawn either side of the hovered one (negative = unlimited)
    #[arg(long, allow_hyphen_values = true)]
    pub flank: Option<i32>,

    /// Never open the hover label port
    #[arg(long)]
    pub no_port: bool,

    /// Initial terminal rows per item
    #[arg(long, default_value = "1.0")]
    pub scale: f64,

    /// Initial strip width in columns
    #[arg(long, default_value = "24")]
    pub strip_width: u16,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write setting changes back to the configuration file
    #[arg(long)]
    pub persist: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            justification: self.justify.map(Justification::from),
            flank_limit: self.flank.map(FlankLimit::from_raw),
            disable_port: self.no_port,
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let settings = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);
        config::apply_cli_overrides(with_env, &args.cli_overrides())
    };

    labelstrip::logging::init(&settings.log_file_path)?;

    info!(settings = ?settings, "Configuration loaded and resolved");

    let persist_to = if args.persist {
        config::config_path_with_precedence(args.config.clone())
    } else {
        None
    };

    let options = DemoOptions {
        count: args.count as usize,
        seed_word: args.seed_word.clone(),
        scale: args.scale,
        strip_width: args.strip_width,
        colors: ColorConfig::from_env_and_args(args.no_color),
        settings,
        persist_to,
    };

    view::run(options)?;

    Ok(())
}
