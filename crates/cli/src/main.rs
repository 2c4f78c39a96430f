//! CLI tool for assembling a PPTX slide deck from PNG images.

use anyhow::{Context, Result};
use clap::Parser;
use deck_core::Presentation;
use deck_pptx::PptxWriter;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a PPTX slide deck from PNG images, one slide per image.
#[derive(Parser, Debug)]
#[command(name = "deck-gen")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input PNG file(s), in slide order
    #[arg(required_unless_present = "manifest")]
    images: Vec<PathBuf>,

    /// JSON manifest: a list of {"title": ..., "image": ...} records
    #[arg(short, long, conflicts_with = "images")]
    manifest: Option<PathBuf>,

    /// Slide title(s), matched to images by position (default: file stem)
    #[arg(short, long)]
    title: Vec<String>,

    /// Output .pptx path
    #[arg(short, long, default_value = "deck.pptx")]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// One slide in the JSON manifest.
#[derive(Debug, Deserialize)]
struct ManifestEntry {
    title: String,
    image: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let entries = collect_entries(&args)?;

    let mut presentation = Presentation::new();
    for entry in &entries {
        log::debug!("adding {}", entry.image.display());
        let bytes = fs::read(&entry.image)
            .with_context(|| format!("Failed to read {}", entry.image.display()))?;
        presentation
            .add_slide(entry.title.as_str(), bytes)
            .with_context(|| format!("Failed to add slide for {}", entry.image.display()))?;
        if args.verbose {
            eprintln!("Added slide: {}", entry.title);
        }
    }

    PptxWriter::new()
        .save_to(&presentation, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;

    if args.verbose {
        eprintln!(
            "Written {} slides to: {}",
            presentation.slides().len(),
            args.output.display()
        );
    }

    Ok(())
}

/// Turn the command line into an ordered slide list.
fn collect_entries(args: &Args) -> Result<Vec<ManifestEntry>> {
    if let Some(manifest_path) = &args.manifest {
        let content = fs::read_to_string(manifest_path)
            .with_context(|| format!("Failed to read {}", manifest_path.display()))?;
        let mut entries: Vec<ManifestEntry> = serde_json::from_str(&content)
            .with_context(|| format!("Invalid manifest {}", manifest_path.display()))?;

        // Image paths in the manifest are relative to the manifest file.
        if let Some(base) = manifest_path.parent() {
            for entry in &mut entries {
                if entry.image.is_relative() {
                    entry.image = base.join(&entry.image);
                }
            }
        }

        Ok(entries)
    } else {
        Ok(args
            .images
            .iter()
            .enumerate()
            .map(|(i, path)| ManifestEntry {
                title: args
                    .title
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| title_for(path)),
                image: path.clone(),
            })
            .collect())
    }
}

/// Default slide title: the image's file stem.
fn title_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("slide")
        .to_string()
}
