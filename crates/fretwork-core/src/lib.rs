//! Fretwork Core Types and Definitions
//!
//! This crate provides the foundational types for the Fretwork chord
//! diagram engine. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Draw**: Stroke definitions and drawable primitives ([`draw`] module)
//! - **Chord**: The chord data model: tuning, fret pattern, capo ([`chord`] module)

pub mod chord;
pub mod color;
pub mod draw;
pub mod geometry;
