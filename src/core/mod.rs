//! Core session state and operation modes.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - [`OperationMode`]: The closed set of image operations
//! - [`ModeSelector`]: Which single operation is currently armed
//! - [`Session`]: Owned mutable state of the pipeline, including the
//!   in-flight dispatch guard

mod mode;
mod session;

pub use mode::{ModeSelector, OperationMode};
pub use session::{DispatchGuard, Session};
