use std::collections::HashMap;
use std::time::Instant;

use serde_json::json;

use crate::layout::{
    CompositeGrid, GridError, GridLevels, LayoutSlot, LetterGrid, LetterSpecification,
    SUBGRID_NAME, compose, tile,
};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv, json_str};
use crate::metrics::{EditorMetrics, MetricSnapshot};

const LOG_TARGET: &str = "mouseless::editor";

/// Input area a validation failure is displayed next to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EditorField {
    Level1,
    Level2,
    Subgrid,
    /// Composite-level failures that belong to no single layout.
    Grid,
}

impl EditorField {
    pub const ALL: [EditorField; 4] = [
        EditorField::Level1,
        EditorField::Level2,
        EditorField::Subgrid,
        EditorField::Grid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EditorField::Level1 => LayoutSlot::Level1.label(),
            EditorField::Level2 => LayoutSlot::Level2.label(),
            EditorField::Subgrid => LayoutSlot::Subgrid.label(),
            EditorField::Grid => "Grid",
        }
    }

    /// Field for an error raised while tiling or composing.
    pub fn for_error(err: &GridError) -> Self {
        match err.layout_name().and_then(LayoutSlot::from_label) {
            Some(slot) => slot.into(),
            None => EditorField::Grid,
        }
    }
}

impl From<LayoutSlot> for EditorField {
    fn from(slot: LayoutSlot) -> Self {
        match slot {
            LayoutSlot::Level1 => EditorField::Level1,
            LayoutSlot::Level2 => EditorField::Level2,
            LayoutSlot::Subgrid => EditorField::Subgrid,
        }
    }
}

/// Reactive editor state: the current levels plus the grids and errors
/// derived from them.
///
/// Every input change recomputes both grids from scratch. The primary
/// (Level 1 × Level 2) and subgrid paths never affect each other: a failure
/// in one leaves the other's grid intact.
pub struct GridEditor {
    levels: GridLevels,
    primary: CompositeGrid,
    subgrid: LetterGrid,
    errors: HashMap<EditorField, GridError>,
    digest: Option<blake3::Hash>,
    logger: Option<Logger>,
    metrics: EditorMetrics,
    started: Instant,
}

impl GridEditor {
    pub fn new(levels: GridLevels) -> Self {
        Self::build(levels, None)
    }

    pub fn with_logger(levels: GridLevels, logger: Logger) -> Self {
        Self::build(levels, Some(logger))
    }

    fn build(levels: GridLevels, logger: Option<Logger>) -> Self {
        let mut editor = Self {
            levels,
            primary: CompositeGrid::empty(),
            subgrid: LetterGrid::empty(),
            errors: HashMap::new(),
            digest: None,
            logger,
            metrics: EditorMetrics::new(),
            started: Instant::now(),
        };
        editor.refresh();
        editor
    }

    pub fn levels(&self) -> &GridLevels {
        &self.levels
    }

    pub fn spec(&self, slot: LayoutSlot) -> &LetterSpecification {
        self.levels.get(slot)
    }

    pub fn primary_grid(&self) -> &CompositeGrid {
        &self.primary
    }

    pub fn subgrid(&self) -> &LetterGrid {
        &self.subgrid
    }

    pub fn error(&self, field: EditorField) -> Option<&GridError> {
        self.errors.get(&field)
    }

    /// Current errors in display order.
    pub fn errors(&self) -> impl Iterator<Item = (EditorField, &GridError)> {
        EditorField::ALL
            .into_iter()
            .filter_map(|field| self.errors.get(&field).map(|err| (field, err)))
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn metrics(&self) -> &EditorMetrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> MetricSnapshot {
        self.metrics.snapshot(self.started.elapsed())
    }

    /// Replace every level. Returns whether the grids were recomputed.
    pub fn set_levels(&mut self, levels: GridLevels) -> bool {
        self.levels = levels;
        self.refresh()
    }

    /// Replace a single layout. Returns whether the grids were recomputed.
    pub fn update(&mut self, slot: LayoutSlot, spec: LetterSpecification) -> bool {
        *self.levels.get_mut(slot) = spec;
        self.refresh()
    }

    pub fn set_letters(&mut self, slot: LayoutSlot, letters: impl Into<String>) -> bool {
        self.levels.get_mut(slot).letters = letters.into();
        self.refresh()
    }

    /// Set the column count, clamped to at least one.
    pub fn set_columns(&mut self, slot: LayoutSlot, columns: usize) -> bool {
        self.levels.get_mut(slot).columns = columns.max(1);
        self.refresh()
    }

    /// Set the row count, clamped to at least one.
    pub fn set_rows(&mut self, slot: LayoutSlot, rows: usize) -> bool {
        self.levels.get_mut(slot).rows = rows.max(1);
        self.refresh()
    }

    pub fn step_columns(&mut self, slot: LayoutSlot, delta: isize) -> bool {
        let columns = step(self.levels.get(slot).columns, delta);
        self.set_columns(slot, columns)
    }

    pub fn step_rows(&mut self, slot: LayoutSlot, delta: isize) -> bool {
        let rows = step(self.levels.get(slot).rows, delta);
        self.set_rows(slot, rows)
    }

    /// Restore the default levels.
    pub fn reset(&mut self) -> bool {
        self.set_levels(GridLevels::default())
    }

    /// Recompute both grids if the levels changed since the last pass.
    fn refresh(&mut self) -> bool {
        let digest = digest_levels(&self.levels);
        if self.digest == Some(digest) {
            self.metrics.record_skip();
            return false;
        }
        self.digest = Some(digest);
        self.recompute();
        true
    }

    fn recompute(&mut self) {
        self.errors.clear();

        let primary = compose(&self.levels.level1, &self.levels.level2);
        let primary_ok = primary.is_ok();
        self.primary = match primary {
            Ok(grid) => grid,
            Err(err) => {
                self.reject(EditorField::for_error(&err), err);
                CompositeGrid::empty()
            }
        };

        let subgrid = tile(&self.levels.subgrid, SUBGRID_NAME);
        let subgrid_ok = subgrid.is_ok();
        self.subgrid = match subgrid {
            Ok(grid) => grid,
            Err(err) => {
                self.reject(EditorField::Subgrid, err);
                LetterGrid::empty()
            }
        };

        self.metrics.record_recompute(primary_ok, subgrid_ok);
        self.log(
            LogLevel::Debug,
            "grids_recomputed",
            [
                json_kv("primary_rows", json!(self.primary.rows())),
                json_kv("primary_columns", json!(self.primary.columns())),
                json_kv("subgrid_rows", json!(self.subgrid.rows())),
                json_kv("subgrid_columns", json!(self.subgrid.columns())),
                json_kv("errors", json!(self.errors.len())),
            ],
        );
    }

    fn reject(&mut self, field: EditorField, err: GridError) {
        self.log(
            LogLevel::Warn,
            "layout_rejected",
            [
                json_str("field", field.label()),
                json_str("kind", err.kind().as_str()),
                json_str("error", err.to_string()),
            ],
        );
        self.errors.insert(field, err);
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, LOG_TARGET, message, fields);
            let _ = logger.log_event(event);
        }
    }
}

fn step(value: usize, delta: isize) -> usize {
    value.saturating_add_signed(delta).max(1)
}

fn digest_levels(levels: &GridLevels) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    for slot in LayoutSlot::ALL {
        let spec = levels.get(slot);
        hasher.update(&(spec.letters.len() as u64).to_le_bytes());
        hasher.update(spec.letters.as_bytes());
        hasher.update(&(spec.columns as u64).to_le_bytes());
        hasher.update(&(spec.rows as u64).to_le_bytes());
    }
    hasher.finalize()
}
