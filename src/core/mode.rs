//! Operation modes and the selector state machine.

use serde::{Deserialize, Serialize};

/// The seven image operations the studio can run.
///
/// Exactly one mode is armed at a time; there is no default before the user
/// picks one. The kebab-case identifiers double as the serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OperationMode {
    ImageEnhance,
    ImageRestoration,
    MorphologicalErosion,
    MorphologicalDilation,
    DenoisingGaussian,
    DenoisingNlm,
    Segmentation,
}

impl OperationMode {
    /// All modes, in the order they appear on the control surface.
    pub const ALL: [OperationMode; 7] = [
        OperationMode::ImageEnhance,
        OperationMode::ImageRestoration,
        OperationMode::MorphologicalErosion,
        OperationMode::MorphologicalDilation,
        OperationMode::DenoisingGaussian,
        OperationMode::DenoisingNlm,
        OperationMode::Segmentation,
    ];

    /// Stable identifier of the mode.
    pub fn id(&self) -> &'static str {
        match self {
            OperationMode::ImageEnhance => "image-enhance",
            OperationMode::ImageRestoration => "image-restoration",
            OperationMode::MorphologicalErosion => "morphological-erosion",
            OperationMode::MorphologicalDilation => "morphological-dilation",
            OperationMode::DenoisingGaussian => "denoising-gaussian",
            OperationMode::DenoisingNlm => "denoising-nlm",
            OperationMode::Segmentation => "segmentation",
        }
    }

    /// Identifier of the parameter panel revealed when this mode is armed.
    pub fn panel_id(&self) -> &'static str {
        match self {
            OperationMode::ImageEnhance => "image-enhance-option",
            OperationMode::ImageRestoration => "image-restoration-option",
            OperationMode::MorphologicalErosion => "morphological-erosion-option",
            OperationMode::MorphologicalDilation => "morphological-dilation-option",
            OperationMode::DenoisingGaussian => "denoising-gaussian-option",
            OperationMode::DenoisingNlm => "denoising-nlm-option",
            OperationMode::Segmentation => "segmentation-option",
        }
    }
}

/// Tracks which single operation is currently armed.
///
/// Pure state, no I/O. Arming one mode disarms all others, so at most one
/// parameter panel is visible at any time.
#[derive(Debug, Default)]
pub struct ModeSelector {
    armed: Option<OperationMode>,
}

impl ModeSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `mode`, disarming whatever was armed before.
    pub fn arm(&mut self, mode: OperationMode) {
        self.armed = Some(mode);
    }

    /// The currently armed mode, if the user has picked one yet.
    pub fn current(&self) -> Option<OperationMode> {
        self.armed
    }

    /// Panel of the armed mode; every other panel is hidden.
    pub fn visible_panel(&self) -> Option<&'static str> {
        self.armed.map(|mode| mode.panel_id())
    }
}
