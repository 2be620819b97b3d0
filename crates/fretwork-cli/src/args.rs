//! Command-line argument definitions for the Fretwork CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the chord (by name or literal
//! pattern), per-diagram options, the output path, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Fretwork chord diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Name of a built-in chord (e.g. C, Amin); see --list
    #[arg(required_unless_present_any = ["pattern", "list"])]
    pub chord: Option<String>,

    /// Literal fret pattern, one value per string: e.g. "2,1,0,0" or "4,3,0,x"
    #[arg(short, long, conflicts_with = "chord")]
    pub pattern: Option<String>,

    /// Capo position (0 = no capo)
    #[arg(long, default_value_t = 0)]
    pub capo: u32,

    /// Number of fret rows to display (defaults to the configured value)
    #[arg(long)]
    pub frets: Option<u32>,

    /// Label above the diagram (defaults to the chord name)
    #[arg(short, long)]
    pub label: Option<String>,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// List the built-in chord names and exit
    #[arg(long)]
    pub list: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_chord() {
        let args = Args::parse_from(["fretwork", "C", "-o", "c.svg"]);
        assert_eq!(args.chord.as_deref(), Some("C"));
        assert_eq!(args.output, "c.svg");
        assert_eq!(args.capo, 0);
        assert_eq!(args.frets, None);
    }

    #[test]
    fn test_pattern_chord() {
        let args = Args::parse_from(["fretwork", "--pattern", "4,3,0,x", "--capo", "2"]);
        assert_eq!(args.chord, None);
        assert_eq!(args.pattern.as_deref(), Some("4,3,0,x"));
        assert_eq!(args.capo, 2);
    }

    #[test]
    fn test_chord_or_pattern_required() {
        assert!(Args::try_parse_from(["fretwork"]).is_err());
        assert!(Args::try_parse_from(["fretwork", "--list"]).is_ok());
        assert!(Args::try_parse_from(["fretwork", "C", "--pattern", "0,0,0,0"]).is_err());
    }
}
