mod cli;

use splitforge::convert;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use clap::Parser;
use cli::{Cli, Commands};
use splitforge_probe::sniff_icon;
use splitforge_splits::time;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "splitforge=trace,splitforge_splits=trace,splitforge_probe=debug".to_string()
        } else {
            "splitforge=info,splitforge_splits=warn,splitforge_probe=warn".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Convert { input } => convert_command(&input),
        Commands::Probe { file } => probe_command(&file),
    }
}

fn convert_command(input: &std::path::Path) -> Result<()> {
    tracing::info!("Converting split file: {:?}", input);

    let result = convert::convert_file(input)?;

    let json_str = serde_json::to_string_pretty(&result)?;
    println!("{}", json_str);

    Ok(())
}

fn probe_command(file: &std::path::Path) -> Result<()> {
    let splits = splitforge_splits::parse_file(file)?;

    println!("Game: {}", splits.game_name);
    println!("Category: {}", splits.category_name);
    println!("Offset: {} ms", time::offset_to_millis(&splits.offset));
    println!(
        "Layout: {} splits per page, auto update PB: {}, gold split: {}",
        splits.layout.splits_per_page, splits.layout.auto_update_pb, splits.layout.gold_split
    );

    println!("\nSegments: {}", splits.segments.len());
    for (i, segment) in splits.segments.iter().enumerate() {
        print!("  [{}] {}", i, segment.name);

        if let Some(encoded) = segment.icon.as_deref() {
            let compact: String = encoded.split_ascii_whitespace().collect();
            match STANDARD.decode(compact.as_bytes()) {
                Ok(decoded) => {
                    let (image, format) = sniff_icon(&decoded);
                    print!(" [icon: {}, {} bytes]", format, image.len());
                }
                Err(_) => print!(" [icon: undecodable]"),
            }
        }
        println!();
    }

    Ok(())
}
