use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use telly::Input;
use telly::core::config::{self, CliOverrides};

#[derive(Parser)]
#[command(name = "telly", about = "Browse and play a home media library from the couch")]
struct Args {
    /// Base URL of the media server (overrides config and TELLY_MEDIA_SOURCE)
    #[arg(short, long)]
    media_source: Option<String>,

    /// Where input comes from
    #[arg(short, long, value_enum)]
    input: Option<Input>,

    /// Video player command (overrides config and TELLY_PLAYER)
    #[arg(short, long)]
    player: Option<String>,

    /// Don't read or write the catalog cache
    #[arg(long)]
    no_cache: bool,

    /// Log at trace level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to telly.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = if args.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };

    if let Ok(log_file) = File::create("telly.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            media_source: args.media_source,
            input: args.input,
            player: args.player,
            no_cache: args.no_cache,
        },
    );

    log::info!(
        "Telly starting up: media_source={}, input={}, player={}",
        resolved.media_source,
        resolved.input.label(),
        resolved.player_command
    );

    telly::tui::run(resolved)
}
