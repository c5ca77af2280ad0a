// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod acquire;
pub mod codec;
pub mod render;
pub mod dispatch;

// Public exports for external consumers
pub use crate::core::{ModeSelector, OperationMode, Session};
pub use crate::acquire::{Preview, SourceImage, SourceSlot};
pub use crate::dispatch::{
    CommandTable, ControlRegistry, ProcessingBackend, ProcessingDispatcher, ResultWrapping,
};
pub use crate::render::{DATA_URI_PREFIX, DisplaySurface};
pub use crate::utils::{StudioError, StudioResult};

// This crate is the client-side orchestration layer of the studio; the
// embedding application supplies the widgets and the real backend bridge.
