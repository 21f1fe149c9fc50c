use thiserror::Error;

use crate::model::WizardStep;

pub type Result<T> = std::result::Result<T, WizardError>;

/// Failures a wizard panel can report back to its caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    /// Microphone access was refused; recoverable by starting again.
    #[error("microphone permission required")]
    PermissionDenied,

    #[error("audio device error: {0}")]
    Device(String),

    #[error("a recording is already in progress")]
    AlreadyRecording,

    #[error("audio generation is already in progress")]
    GenerationInFlight,

    #[error("no async runtime available to run audio generation")]
    RuntimeUnavailable,

    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    /// Only produced when step gating is switched on in the settings.
    #[error("step {} is incomplete: {reason}", .step.number())]
    StepIncomplete { step: WizardStep, reason: String },
}
