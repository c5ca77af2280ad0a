//! Source image acquisition.
//!
//! The file picker and the drag-and-drop surface both land here and converge
//! on a single current-source slot; a new selection overwrites the previous
//! one. No file type or size validation happens at this stage — whatever the
//! file API hands over is accepted.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Binary image selected by the user, prior to encoding.
///
/// Held exclusively by the source slot until the codec consumes it at
/// dispatch time; replaced wholesale when a new file is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceImage {
    path: PathBuf,
}

impl SourceImage {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Visual state of the drop surface.
///
/// `Placeholder` shows the drop-an-image affordance; `Ready` means a preview
/// of the selected file has replaced it (placeholder text and border cleared).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preview {
    #[default]
    Placeholder,
    Ready,
}

/// The single slot holding the currently selected source image.
#[derive(Debug, Default)]
pub struct SourceSlot {
    current: Option<SourceImage>,
    preview: Preview,
}

impl SourceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reacts to a change event from the file picker.
    ///
    /// A cancelled picker yields no file and leaves the slot inert.
    pub fn select_from_picker(&mut self, file: Option<PathBuf>) {
        if let Some(path) = file {
            self.select(path);
        }
    }

    /// Reacts to a drop event on the drop surface.
    ///
    /// The surface has already suppressed the default navigate-to-file
    /// handling; only the dropped file list arrives here. The first file of
    /// the list wins; an empty list leaves the slot inert.
    pub fn select_from_drop(&mut self, files: Vec<PathBuf>) {
        if let Some(path) = files.into_iter().next() {
            self.select(path);
        }
    }

    fn select(&mut self, path: PathBuf) {
        debug!("Source image selected: {}", path.display());
        self.current = Some(SourceImage { path });
        self.preview = Preview::Ready;
    }

    /// The selected image, if any.
    pub fn current(&self) -> Option<&SourceImage> {
        self.current.as_ref()
    }

    pub fn preview(&self) -> Preview {
        self.preview
    }
}
