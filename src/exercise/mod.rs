//! Exercise flow
//!
//! Per-exercise session state (expected shape, captured strokes, drawing
//! clock) and uniform random prompt selection. Each exercise instance owns
//! its session exclusively; nothing here is shared or ambient.

pub mod prompt;
pub mod session;

pub use prompt::{random_prompt, Prompt};
pub use session::{Evaluation, ExerciseSession, RejectReason};
