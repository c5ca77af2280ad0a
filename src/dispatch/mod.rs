//! Mapping from armed mode to backend command, and the dispatch cycle.

mod backend;
mod command;
mod controls;
mod dispatcher;

pub use backend::ProcessingBackend;
pub use command::{CommandSpec, CommandTable, ParamBinding, ResultWrapping};
pub use controls::ControlRegistry;
pub use dispatcher::ProcessingDispatcher;
