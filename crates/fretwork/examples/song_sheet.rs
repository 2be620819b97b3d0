//! Example: Rendering a chord sheet for a song
//!
//! This example demonstrates how to programmatically build chord
//! diagrams and arrange them into a sheet, one row per song section.

use fretwork::{Diagram, DiagramBuilder, FretworkError, LayoutParameters};

fn main() -> Result<(), FretworkError> {
    println!("Building chord sheet...\n");

    // Each row is one section of the song
    let intro = vec![
        Diagram::named("C6")?,
        Diagram::named("Emin")?.with_capo(2),
        Diagram::named("B")?,
        Diagram::named("C")?,
    ];

    let verse = vec![
        Diagram::named("C")?,
        Diagram::named("Amin")?,
        Diagram::named("F")?,
        Diagram::named("G")?,
    ];

    // A chord that is not in the library, given as a literal pattern
    let bridge = vec![
        Diagram::new("0,2,1,2".parse()?).with_label("G7"),
        Diagram::named("C")?,
    ];

    let rows = [intro, verse, bridge];

    // Render the sheet with the default ukulele layout
    let builder = DiagramBuilder::new(LayoutParameters::default());
    let svg = builder.render_sheet_svg(&rows)?;

    println!("SVG generated successfully!");
    println!("SVG length: {} bytes", svg.len());

    let output_path = "song_sheet.svg";
    std::fs::write(output_path, &svg)?;
    println!("SVG written to: {}", output_path);

    Ok(())
}
