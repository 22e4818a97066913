//! Terminal rendering for grids and editor state.

mod core;
pub mod width;

pub use self::core::{GridRenderer, PRIMARY_GRID_TITLE, RendererSettings, SUBGRID_TITLE};
pub use width::{display_width, pad_to_width};
