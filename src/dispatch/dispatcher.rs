//! The dispatch cycle: encode, invoke, render.

use serde_json::Value;
use tracing::debug;

use super::backend::ProcessingBackend;
use super::command::CommandTable;
use crate::codec;
use crate::core::Session;
use crate::utils::{StudioError, StudioResult};

/// Orchestrates one full dispatch cycle for the currently armed mode.
///
/// Each user trigger performs exactly one backend call; dispatches for
/// different modes are never merged. The command table is resolved once at
/// initialization and injected here.
pub struct ProcessingDispatcher {
    table: CommandTable,
}

impl ProcessingDispatcher {
    pub fn new(table: CommandTable) -> Self {
        Self { table }
    }

    /// Runs encode → backend call → render for the armed mode.
    ///
    /// Encoding always completes before the backend call is issued, and the
    /// call completes before rendering is attempted. Failures propagate to
    /// the caller and leave the display untouched; a failed call requires a
    /// new user-triggered attempt.
    ///
    /// # Errors
    /// * [`StudioError::Busy`] - another dispatch is already in flight
    /// * [`StudioError::NoModeArmed`] - triggered before any mode was armed
    /// * [`StudioError::NoSourceImage`] - triggered before an image was selected
    /// * [`StudioError::Encoding`] - the source file could not be read
    /// * [`StudioError::Backend`] - the backend command failed
    pub async fn dispatch<B: ProcessingBackend>(
        &self,
        session: &mut Session,
        backend: &B,
    ) -> StudioResult<()> {
        let _guard = session.begin_dispatch()?;

        // The mode is read once here; arming a different mode after this
        // point only affects future dispatches.
        let mode = session.modes().current().ok_or(StudioError::NoModeArmed)?;
        let source = session
            .source()
            .current()
            .ok_or(StudioError::NoSourceImage)?
            .path()
            .to_path_buf();

        let spec = self.table.spec(mode);
        debug!("Dispatching {} as backend command {}", mode.id(), spec.command);

        // Recomputed every dispatch; the encoded payload is never cached.
        let payload = codec::encode_file(&source).await?;

        let mut args = serde_json::Map::new();
        args.insert("image_data_base64".to_string(), Value::String(payload));
        for binding in spec.params {
            let value = session.controls().read_int(binding.control);
            args.insert(binding.name.to_string(), Value::from(value));
        }

        let result = backend.invoke(spec.command, Value::Object(args)).await?;
        debug!("Backend command {} completed ({} chars)", spec.command, result.len());

        session.display_mut().render(&result, spec.wrapping);
        Ok(())
    }
}
