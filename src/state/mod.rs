/// State management module
///
/// This module holds all application state:
/// - Shared data structures (data.rs)
/// - The try-on state machine (controller.rs)

pub mod controller;
pub mod data;

pub use controller::{Controller, Submission};
pub use data::{ResultView, Slot, TryOnResult};
