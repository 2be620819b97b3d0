//! The standard chord library.
//!
//! A small dictionary of common shapes for the default G C E A tuning,
//! looked up by name. This is a collaborator of the layout engine, not
//! part of it: callers are free to supply any [`ChordPattern`] directly.

use fretwork_core::chord::ChordPattern;

/// The built-in chord shapes, in display order.
const SHAPES: &[(&str, [i32; 4])] = &[
    ("A", [2, 1, 0, 0]),
    ("B", [4, 3, 2, 2]),
    ("C", [0, 0, 0, 3]),
    ("D", [2, 2, 2, 0]),
    ("E", [4, 4, 4, 2]),
    ("F", [2, 0, 1, 0]),
    ("G", [0, 2, 3, 2]),
    ("C6", [0, 0, 0, 0]),
    ("Amin", [2, 0, 0, 0]),
    ("Emin", [4, 4, 3, 2]),
];

/// Looks up a chord shape by name, case-insensitively.
///
/// # Examples
///
/// ```
/// # use fretwork::library;
/// # use fretwork_core::chord::ChordPattern;
/// assert_eq!(library::lookup("C"), Some(ChordPattern::from([0, 0, 0, 3])));
/// assert_eq!(library::lookup("amin"), Some(ChordPattern::from([2, 0, 0, 0])));
/// assert_eq!(library::lookup("H"), None);
/// ```
pub fn lookup(name: &str) -> Option<ChordPattern> {
    SHAPES
        .iter()
        .find(|(shape_name, _)| shape_name.eq_ignore_ascii_case(name))
        .map(|(_, pattern)| ChordPattern::from(*pattern))
}

/// Returns the names of all built-in chords, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    SHAPES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_chords() {
        assert_eq!(lookup("A"), Some(ChordPattern::from([2, 1, 0, 0])));
        assert_eq!(lookup("C6"), Some(ChordPattern::from([0, 0, 0, 0])));
        assert_eq!(lookup("Emin"), Some(ChordPattern::from([4, 4, 3, 2])));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(lookup("c6"), lookup("C6"));
        assert_eq!(lookup("EMIN"), lookup("Emin"));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup("H"), None);
        assert_eq!(lookup(""), None);
    }

    #[test]
    fn test_names_cover_all_shapes() {
        let names: Vec<_> = names().collect();
        assert_eq!(names.len(), 10);
        assert!(names.contains(&"C6"));
        for name in names {
            assert!(lookup(name).is_some());
        }
    }

    #[test]
    fn test_all_shapes_match_default_tuning() {
        use crate::{config::LayoutParameters, layout};

        let params = LayoutParameters::default();
        for name in names() {
            let pattern = lookup(name).unwrap();
            assert!(layout::compute_fingertips(&params, 5, &pattern).is_ok());
        }
    }
}
