//! Headless core of the course-to-audio wizard: intake, voice, recording and
//! generation state, plus the demo document viewer and instruction panel.

pub mod controller;
pub mod document;
pub mod error;
pub mod generation;
pub mod instruction;
pub mod intake;
pub mod model;
pub mod recording;
pub mod services;
pub mod settings;
pub mod speech;
pub mod store;
pub mod synthesizer;
pub mod voice;
pub mod wizard;

pub use error::{Result, WizardError};
pub use wizard::CourseWizard;
