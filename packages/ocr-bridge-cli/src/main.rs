mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Args, Commands};
use ocr_bridge::{Recognizer, ResultSet, TextRecognizer};
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_regions(results: &ResultSet) {
    for text_box in results {
        println!(
            "{},{} {}x{} {:.2} {}",
            text_box.x(),
            text_box.y(),
            text_box.width(),
            text_box.height(),
            text_box.confidence(),
            text_box.text_lossy()
        );
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Commands::Version => {
            println!("ocrb {}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Recognize {
            image,
            json,
            lang,
            psm,
            tesseract,
        } => {
            let recognizer = Recognizer::from_options(cli::engine_options(lang, psm, tesseract));
            tracing::debug!("using {}", TextRecognizer::name(&recognizer));

            if json {
                let locations = recognizer
                    .extract_text_with_locations(&image)
                    .await
                    .with_context(|| format!("Failed to recognize {}", image.display()))?;
                println!("{}", serde_json::to_string_pretty(&locations)?);
            } else {
                let image_path = image.clone();
                let results = tokio::task::spawn_blocking(move || recognizer.recognize_path(&image_path))
                    .await?
                    .with_context(|| format!("Failed to recognize {}", image.display()))?;
                print_regions(&results);
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
