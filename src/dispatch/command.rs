//! Backend command contract: one spec per operation mode.
//!
//! The table below mirrors the backend's fixed contract exactly. Parameter
//! names must match what each command expects, and the result wrapping
//! follows what each command actually returns.

use crate::core::OperationMode;

/// How a backend result must be wrapped before display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultWrapping {
    /// Ready-to-display reference, used as-is.
    AsIs,
    /// Bare base64; the `data:image/png;base64,` scheme must be prepended.
    DataUriPrefix,
}

/// Binds a backend parameter name to the numeric control it is read from.
///
/// Control ids and parameter names diverge for some modes (the erosion and
/// dilation panels both feed a parameter named `k`), so the binding carries
/// both.
#[derive(Debug, Clone, Copy)]
pub struct ParamBinding {
    /// Parameter name expected by the backend command.
    pub name: &'static str,
    /// Identifier of the numeric control supplying the value.
    pub control: &'static str,
}

/// Contract of a single backend command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command name on the backend bridge.
    pub command: &'static str,
    /// Named parameters beyond the encoded image payload.
    pub params: &'static [ParamBinding],
    /// How the returned payload must be wrapped for display.
    pub wrapping: ResultWrapping,
}

const IMAGE_ENHANCE: CommandSpec = CommandSpec {
    command: "image_enhance",
    params: &[ParamBinding {
        name: "amt",
        control: "amt",
    }],
    wrapping: ResultWrapping::AsIs,
};

const RESTORE_IMAGE: CommandSpec = CommandSpec {
    command: "restore_image",
    params: &[
        ParamBinding {
            name: "brightness",
            control: "brightness",
        },
        ParamBinding {
            name: "contrast",
            control: "contrast",
        },
    ],
    wrapping: ResultWrapping::AsIs,
};

const MORPHOLOGICAL_EROSION: CommandSpec = CommandSpec {
    command: "morphological_erosion",
    params: &[ParamBinding {
        name: "k",
        control: "k-erosion",
    }],
    wrapping: ResultWrapping::DataUriPrefix,
};

const MORPHOLOGICAL_DILATION: CommandSpec = CommandSpec {
    command: "morphological_dilation",
    params: &[ParamBinding {
        name: "k",
        control: "k-dilation",
    }],
    wrapping: ResultWrapping::DataUriPrefix,
};

// The misspelled command name is part of the backend contract.
const DENOISING_GAUSSIAN: CommandSpec = CommandSpec {
    command: "denoising_image_gausian_blur",
    params: &[ParamBinding {
        name: "radius",
        control: "radius",
    }],
    wrapping: ResultWrapping::AsIs,
};

const DENOISING_NLM: CommandSpec = CommandSpec {
    command: "denoising_image_nlm",
    params: &[
        ParamBinding {
            name: "window_size",
            control: "window_size",
        },
        ParamBinding {
            name: "h",
            control: "h",
        },
    ],
    wrapping: ResultWrapping::DataUriPrefix,
};

const SEGMENT_IMAGE: CommandSpec = CommandSpec {
    command: "segment_image",
    params: &[ParamBinding {
        name: "threshold",
        control: "k-segmentation",
    }],
    wrapping: ResultWrapping::AsIs,
};

/// Immutable command table resolved once at initialization and injected into
/// the dispatcher.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandTable;

impl CommandTable {
    pub fn new() -> Self {
        Self
    }

    /// The backend contract for `mode`.
    pub fn spec(&self, mode: OperationMode) -> &'static CommandSpec {
        match mode {
            OperationMode::ImageEnhance => &IMAGE_ENHANCE,
            OperationMode::ImageRestoration => &RESTORE_IMAGE,
            OperationMode::MorphologicalErosion => &MORPHOLOGICAL_EROSION,
            OperationMode::MorphologicalDilation => &MORPHOLOGICAL_DILATION,
            OperationMode::DenoisingGaussian => &DENOISING_GAUSSIAN,
            OperationMode::DenoisingNlm => &DENOISING_NLM,
            OperationMode::Segmentation => &SEGMENT_IMAGE,
        }
    }
}
