use clap::Parser;
use flashdeck::core::card::Language;
use flashdeck::core::config::{self, CliOverrides, FlashdeckConfig};
use flashdeck::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "flashdeck", about = "Trilingual flashcards in the terminal")]
struct Args {
    /// Card data: a JSON file path or an http(s) URL
    #[arg(short, long)]
    data: Option<String>,

    /// Language shown on the front of each card
    #[arg(short, long, value_enum)]
    front: Option<Language>,

    /// Language shown on the back of each card
    #[arg(short, long, value_enum)]
    back: Option<Language>,

    /// Seed for a reproducible shuffle order
    #[arg(long)]
    seed: Option<u64>,

    /// Keep cards in file order
    #[arg(long)]
    no_shuffle: bool,

    /// Disable card illustrations
    #[arg(long)]
    no_images: bool,
}

impl From<Args> for CliOverrides {
    fn from(args: Args) -> Self {
        Self {
            data: args.data,
            front: args.front,
            back: args.back,
            seed: args.seed,
            no_shuffle: args.no_shuffle,
            no_images: args.no_images,
        }
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to flashdeck.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("flashdeck.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{}; falling back to defaults", e);
        FlashdeckConfig::default()
    });
    let resolved = config::resolve(&file_config, &CliOverrides::from(args));

    log::info!(
        "Flashdeck starting up: data={}, front={}, back={}",
        resolved.data_source,
        resolved.front,
        resolved.back
    );

    tui::run(resolved)
}
