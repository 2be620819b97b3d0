//! CLI logic for the Fretwork chord diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use fretwork::{Diagram, DiagramBuilder, FretworkError, chord::ChordPattern, library};

/// Run the Fretwork CLI application
///
/// This function resolves the requested chord (by name or literal
/// pattern), renders it through the Fretwork pipeline, and writes the
/// resulting SVG to the output file.
///
/// # Errors
///
/// Returns `FretworkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Unknown chord names or malformed pattern literals
/// - A call with neither a chord name nor a pattern
/// - Layout errors (invalid parameters, pattern/tuning mismatch)
pub fn run(args: &Args) -> Result<(), FretworkError> {
    if args.list {
        for name in library::names() {
            println!("{name}");
        }
        return Ok(());
    }

    info!(output_path = args.output; "Rendering chord diagram");

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;
    let params = app_config.layout_parameters()?;

    // Resolve the diagram from the chord name or the pattern literal
    let mut diagram = match (&args.chord, &args.pattern) {
        (Some(name), _) => Diagram::named(name)?,
        (None, Some(pattern)) => Diagram::new(pattern.parse::<ChordPattern>()?),
        // clap enforces this on the binary path; direct callers get an error
        (None, None) => return Err(FretworkError::MissingChord),
    };
    diagram = diagram
        .with_capo(args.capo)
        .with_frets(args.frets.unwrap_or(params.frets()));
    if let Some(label) = &args.label {
        diagram = diagram.with_label(label.clone());
    }

    // Render and write the output file
    let builder = DiagramBuilder::new(params);
    let svg = builder.render_svg(&diagram)?;
    fs::write(&args.output, svg)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
