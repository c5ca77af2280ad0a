pub mod error;

pub use error::{StudioError, StudioResult};
