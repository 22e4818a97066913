//! Layout module orchestrator.
//!
//! Downstream code imports the tiler, composer and grid types from here while
//! the algorithms live in the private `core` and `compose` modules.

mod compose;
mod core;
pub mod grid;
mod spec;

pub use compose::{compose, compose_grids};
pub use self::core::{find_duplicates, letter_pool, tile};
pub use grid::{
    CompositeGrid, DuplicateLetter, Grid, GridError, GridErrorKind, LetterGrid, Pair,
};
pub use spec::{
    GridLevels, LEVEL1_NAME, LEVEL2_NAME, LayoutSlot, LetterSpecification, SUBGRID_NAME,
};
