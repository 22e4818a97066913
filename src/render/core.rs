use std::fmt::Display;
use std::io::Write;

use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};

use crate::editor::{EditorField, GridEditor};
use crate::error::Result;
use crate::layout::{Grid, GridError, LayoutSlot, LetterSpecification};

use super::width::{display_width, pad_to_width};

pub const PRIMARY_GRID_TITLE: &str = "Primary Grid";
pub const SUBGRID_TITLE: &str = "Subgrid";

/// Renderer parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Emit colour and bold escape sequences.
    pub color: bool,
    /// Spaces on each side of a cell's text.
    pub cell_padding: usize,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            color: true,
            cell_padding: 1,
        }
    }
}

/// Text renderer for letter grids, layout inputs and validation errors.
pub struct GridRenderer {
    settings: RendererSettings,
}

impl GridRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    /// Renderer producing plain text only.
    pub fn plain() -> Self {
        Self::new(RendererSettings {
            color: false,
            ..RendererSettings::default()
        })
    }

    /// Render a titled, bordered grid. Empty grids render nothing at all.
    pub fn render_grid<T: Display>(
        &self,
        writer: &mut impl Write,
        title: &str,
        grid: &Grid<T>,
    ) -> Result<()> {
        if grid.is_empty() {
            return Ok(());
        }

        let cells = grid.to_strings();
        let cell_width = cells
            .iter()
            .flatten()
            .map(|cell| display_width(cell))
            .max()
            .unwrap_or(0);
        let padding = " ".repeat(self.settings.cell_padding);
        let border = border_line(grid.columns(), cell_width + 2 * self.settings.cell_padding);

        self.heading(writer, title)?;
        self.dim(writer, &border)?;
        for row in &cells {
            let mut line = String::from("|");
            for cell in row {
                line.push_str(&padding);
                line.push_str(&pad_to_width(cell, cell_width));
                line.push_str(&padding);
                line.push('|');
            }
            queue!(writer, Print(line), Print("\n"))?;
        }
        self.dim(writer, &border)?;
        writer.flush()?;
        Ok(())
    }

    /// Render one layout's inputs, followed by its error if it has one.
    pub fn render_spec(
        &self,
        writer: &mut impl Write,
        label: &str,
        spec: &LetterSpecification,
        error: Option<&GridError>,
    ) -> Result<()> {
        self.heading(writer, label)?;
        queue!(
            writer,
            Print(format!("  letters: {}\n", spec.letters)),
            Print(format!("  columns: {}  rows: {}\n", spec.columns, spec.rows)),
        )?;
        if let Some(err) = error {
            self.render_error(writer, err)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn render_error(&self, writer: &mut impl Write, error: &GridError) -> Result<()> {
        let line = format!("  ! {error}\n");
        if self.settings.color {
            queue!(writer, SetForegroundColor(Color::Red), Print(line), ResetColor)?;
        } else {
            queue!(writer, Print(line))?;
        }
        Ok(())
    }

    /// Render the whole editor: both levels, the primary grid, then the
    /// subgrid inputs and grid.
    pub fn render_editor(&self, writer: &mut impl Write, editor: &GridEditor) -> Result<()> {
        for slot in [LayoutSlot::Level1, LayoutSlot::Level2] {
            self.render_spec(writer, slot.label(), editor.spec(slot), editor.error(slot.into()))?;
            queue!(writer, Print("\n"))?;
        }

        if let Some(err) = editor.error(EditorField::Grid) {
            self.render_error(writer, err)?;
            queue!(writer, Print("\n"))?;
        }

        if !editor.primary_grid().is_empty() {
            self.render_grid(writer, PRIMARY_GRID_TITLE, editor.primary_grid())?;
            queue!(writer, Print("\n"))?;
        }

        let slot = LayoutSlot::Subgrid;
        self.render_spec(writer, slot.label(), editor.spec(slot), editor.error(slot.into()))?;
        if !editor.subgrid().is_empty() {
            queue!(writer, Print("\n"))?;
            self.render_grid(writer, SUBGRID_TITLE, editor.subgrid())?;
        }

        writer.flush()?;
        Ok(())
    }

    fn heading(&self, writer: &mut impl Write, text: &str) -> Result<()> {
        if self.settings.color {
            queue!(
                writer,
                SetAttribute(Attribute::Bold),
                Print(text),
                SetAttribute(Attribute::Reset),
                Print("\n"),
            )?;
        } else {
            queue!(writer, Print(text), Print("\n"))?;
        }
        Ok(())
    }

    fn dim(&self, writer: &mut impl Write, text: &str) -> Result<()> {
        if self.settings.color {
            queue!(
                writer,
                SetForegroundColor(Color::DarkGrey),
                Print(text),
                ResetColor,
                Print("\n"),
            )?;
        } else {
            queue!(writer, Print(text), Print("\n"))?;
        }
        Ok(())
    }
}

fn border_line(columns: usize, span: usize) -> String {
    let mut line = String::from("+");
    for _ in 0..columns {
        line.push_str(&"-".repeat(span));
        line.push('+');
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridLevels, LetterGrid, tile};

    fn render_to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut output = Vec::new();
        f(&mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn grid_renders_as_bordered_table() {
        let grid = tile(&LetterSpecification::new("AB CD", 2, 2), "Subgrid").unwrap();
        let renderer = GridRenderer::plain();
        let text = render_to_string(|out| renderer.render_grid(out, "Subgrid", &grid));
        assert_eq!(
            text,
            "Subgrid\n+---+---+\n| A | B |\n| C | D |\n+---+---+\n"
        );
    }

    #[test]
    fn empty_grid_renders_nothing() {
        let renderer = GridRenderer::plain();
        let text = render_to_string(|out| renderer.render_grid(out, "Subgrid", &LetterGrid::empty()));
        assert!(text.is_empty());
    }

    #[test]
    fn colour_wraps_headings_in_escapes() {
        let grid = tile(&LetterSpecification::new("A", 1, 1), "Subgrid").unwrap();
        let renderer = GridRenderer::with_default();
        let text = render_to_string(|out| renderer.render_grid(out, "Subgrid", &grid));
        assert!(text.contains("\u{1b}[1mSubgrid"));
        assert!(text.contains("| A |"));
    }

    #[test]
    fn editor_view_shows_errors_beside_their_layout() {
        let mut levels = GridLevels::default();
        levels.level2.letters = "QQ".to_string();
        let editor = GridEditor::new(levels);

        let renderer = GridRenderer::plain();
        let text = render_to_string(|out| renderer.render_editor(out, &editor));

        let level2 = text.find("Level 2\n").unwrap();
        let error = text.find("! Level 2 requires at least 24 letters").unwrap();
        let subgrid = text.find("Subgrid\n").unwrap();
        assert!(level2 < error && error < subgrid);
        assert!(!text.contains(PRIMARY_GRID_TITLE));
        assert!(text.contains("| Y | U | I | O | P |"));
    }

    #[test]
    fn editor_view_includes_primary_grid() {
        let editor = GridEditor::new(GridLevels::default());
        let renderer = GridRenderer::plain();
        let text = render_to_string(|out| renderer.render_editor(out, &editor));
        assert!(text.contains(PRIMARY_GRID_TITLE));
        assert!(text.contains("| QQ | QW | QE | QR | QT | QA | YQ |"));
    }
}
