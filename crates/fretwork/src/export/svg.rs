//! SVG rendering for chord diagrams.

use log::debug;
use svg::node::element as svg_element;

use fretwork_core::geometry::Size;

use crate::{Diagram, config::LayoutParameters, error::FretworkError, layout};

/// SVG exporter for chord diagrams.
///
/// Borrows the shared [`LayoutParameters`] snapshot; rendering never
/// mutates it.
pub struct Svg<'a> {
    params: &'a LayoutParameters,
}

impl<'a> Svg<'a> {
    /// Creates an exporter over the given parameter set.
    pub fn new(params: &'a LayoutParameters) -> Self {
        Self { params }
    }

    /// Height of the label band above the string grid.
    fn label_band(&self) -> f32 {
        self.params.label().font_size() + self.params.margin()
    }

    /// Size of one labeled diagram, label band included.
    pub fn diagram_size(&self) -> Size {
        Size::new(
            self.params.width(),
            self.params.height() + self.label_band(),
        )
    }

    /// Renders a single labeled chord diagram to an SVG document.
    pub fn render_diagram(&self, diagram: &Diagram) -> Result<svg::Document, FretworkError> {
        let size = self.diagram_size();

        let doc = svg::Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        Ok(doc.add(self.diagram_group(diagram)?))
    }

    /// Renders rows of labeled chord diagrams into one SVG document.
    ///
    /// Each row is laid out left to right, rows stack top to bottom, and
    /// every cell is spaced by the configured margin. Ragged rows are
    /// allowed; the document is sized to the widest row.
    pub fn render_sheet(&self, rows: &[Vec<Diagram>]) -> Result<svg::Document, FretworkError> {
        let diagram = self.diagram_size();
        let margin = self.params.margin();
        let cell = Size::new(
            diagram.width() + 2.0 * margin,
            diagram.height() + 2.0 * margin,
        );

        // Rows accumulate horizontally into bands, bands stack vertically.
        // An empty row still occupies one band of height.
        let sheet = rows.iter().fold(Size::default(), |sheet, row| {
            let band = row
                .iter()
                .fold(Size::new(0.0, cell.height()), |band, _| {
                    band.merge_horizontal(cell)
                });
            sheet.merge_vertical(band)
        });

        debug!(rows = rows.len(); "Rendering chord sheet");

        let mut doc = svg::Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", sheet.width(), sheet.height()),
            )
            .set("width", sheet.width())
            .set("height", sheet.height());

        for (row_index, row) in rows.iter().enumerate() {
            // Center ragged rows horizontally
            let row_width = row.len() as f32 * cell.width();
            let x_offset = (sheet.width() - row_width) / 2.0;

            for (column_index, diagram) in row.iter().enumerate() {
                let x = x_offset + column_index as f32 * cell.width() + margin;
                let y = row_index as f32 * cell.height() + margin;

                let group = svg_element::Group::new()
                    .set("transform", format!("translate({x}, {y})"))
                    .add(self.diagram_group(diagram)?);
                doc = doc.add(group);
            }
        }

        Ok(doc)
    }

    /// Builds the SVG group for one labeled diagram at the local origin.
    fn diagram_group(&self, diagram: &Diagram) -> Result<svg_element::Group, FretworkError> {
        let frets = diagram.frets();
        let capo = diagram.capo();

        let mut grid = svg_element::Group::new().set(
            "transform",
            format!("translate(0, {})", self.label_band()),
        );

        for string in layout::compute_strings(self.params, frets)? {
            grid = grid.add(string.render_to_svg());
        }
        for fret in layout::compute_frets(self.params, frets)? {
            grid = grid.add(fret.render_to_svg());
        }

        // The capo segment is always computed; only its visual is skipped.
        let capo_bar = layout::compute_capo(self.params, frets, capo)?;
        if !capo_bar.is_hidden() {
            grid = grid.add(capo_bar.render_to_svg());
        }

        for marker in layout::compute_fingertips(self.params, frets, diagram.pattern())? {
            if !layout::is_suppressed(marker.kind(), capo) {
                grid = grid.add(marker.render_to_svg());
            }
        }

        let mut group = svg_element::Group::new();
        if let Some(label) = diagram.label() {
            group = group.add(self.label_text(label));
        }
        Ok(group.add(grid))
    }

    fn label_text(&self, label: &str) -> svg_element::Text {
        let style = self.params.label();
        svg_element::Text::new(label)
            .set("x", self.params.width() / 2.0)
            .set("y", style.font_size())
            .set("text-anchor", "middle")
            .set("font-family", style.font_family())
            .set("font-size", style.font_size())
    }
}
