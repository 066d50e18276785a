//! Settings panel core, free of any GUI toolkit
//!
//! - **list_model**: ordered elements plus save scheduling
//! - **drag**: pointer-gesture state machine and insertion arithmetic
//! - **toggle**: visibility flips
//! - **rows**: projection of the model into display rows

pub mod drag;
pub mod list_model;
pub mod rows;
pub mod toggle;

pub use drag::{DragController, DropOutcome, PointerTarget, RowBounds};
pub use list_model::ListModel;
