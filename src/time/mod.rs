//! Drawing clock
//!
//! Monotonic elapsed-time measurement for the anti-automation gate.

pub mod clock;

pub use clock::DrawClock;
