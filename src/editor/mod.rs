//! Editor state orchestrator.
//!
//! Front-ends drive a [`GridEditor`] with input changes and read back the
//! derived grids and per-field errors.

mod core;

pub use self::core::{EditorField, GridEditor};
