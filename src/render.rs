//! Display surface for processed results.

use tracing::debug;

use crate::dispatch::ResultWrapping;

/// Scheme prepended to backend results that arrive as bare base64.
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The single display surface showing the current image.
///
/// Holds whatever the image element's source is set to: a source preview
/// before processing, a backend result after. A new result replaces the
/// previous one.
#[derive(Debug, Default)]
pub struct DisplaySurface {
    src: Option<String>,
}

impl DisplaySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes a backend result into the surface, applying the wrapping the
    /// command contract requires.
    ///
    /// Some commands return a ready-to-display reference, others bare base64
    /// needing the `data:` scheme; the asymmetry is a backend contract fact
    /// and is not unified here.
    pub fn render(&mut self, payload: &str, wrapping: ResultWrapping) {
        let src = match wrapping {
            ResultWrapping::AsIs => payload.to_string(),
            ResultWrapping::DataUriPrefix => format!("{DATA_URI_PREFIX}{payload}"),
        };
        debug!("Display updated ({} chars)", src.len());
        self.src = Some(src);
    }

    /// Current content of the image source, if anything has been rendered.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }
}
