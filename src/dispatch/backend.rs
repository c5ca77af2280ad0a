//! Bridge to the external processing backend.

use std::future::Future;

use serde_json::Value;

use crate::utils::StudioResult;

/// Opaque request/response bridge to the image-processing engine.
///
/// Implementations carry the command across whatever transport the host
/// application uses; the pipeline only relies on a command name and a JSON
/// object of named arguments, and gets back the payload string the command
/// produced. All actual image algorithms live behind this trait.
pub trait ProcessingBackend {
    /// Invokes `command` with `args` and resolves to the returned payload.
    ///
    /// A failed invocation propagates to the dispatch caller; there is no
    /// retry policy.
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = StudioResult<String>> + Send;
}
