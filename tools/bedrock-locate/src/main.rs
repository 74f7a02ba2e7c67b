use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use bedrock_locate::{Locations, Locator, Platform};

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    /// Save data (`com.mojang`) directories
    Data,
    /// Render/asset directories
    Assets,
}

/// Print where Minecraft: Bedrock Edition keeps its files
#[derive(Parser)]
struct Args {
    /// What to locate.
    #[arg(value_enum)]
    kind: Kind,

    /// Resolve for this platform instead of the host (windows, linux, macos, freebsd, android).
    #[arg(short, long)]
    platform: Option<String>,

    /// Print a JSON array instead of one path per line.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let platform = match args.platform.as_deref() {
        Some(name) => name.parse::<Platform>()?,
        None => Platform::current()?,
    };
    let locator = Locator::new(platform);

    let locations: Locations = match args.kind {
        Kind::Data => locator.data_locations()?,
        Kind::Assets => locator.asset_locations()?,
    };

    let paths: Vec<PathBuf> = locations.into_vec();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        for p in &paths {
            println!("{}", p.display());
        }
    }

    Ok(())
}
