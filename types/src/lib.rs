//! Core domain types for Handcount.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

mod hands;
mod number;
mod round;

pub use hands::{FINGERS_PER_HAND, HandGroups};
pub use number::{InvalidNumber, Number};
pub use round::{AnswerResult, Outcome, Resolution, TimeoutResult};
