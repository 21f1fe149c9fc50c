use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;

use crate::{
    model::GeneratedAudio,
    voice::{ToneParameters, VoiceSelection},
};

/// Everything the generator needs from the first two steps.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub material_names: Vec<String>,
    pub pasted_text: String,
    pub voice: VoiceSelection,
    pub tone: ToneParameters,
}

#[async_trait]
pub trait AudioSynthesizer: Send + Sync {
    fn display_name(&self) -> &'static str;
    async fn synthesize(&self, request: GenerationRequest) -> Result<GeneratedAudio>;
}

/// Waits a fixed delay and reports a canned preview file.
pub struct SimulatedSynthesizer {
    delay: Duration,
}

impl SimulatedSynthesizer {
    pub const PREVIEW_FILE: &'static str = "intro-lesson.mp3";

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl AudioSynthesizer for SimulatedSynthesizer {
    fn display_name(&self) -> &'static str {
        "Simulated (no audio produced)"
    }

    async fn synthesize(&self, request: GenerationRequest) -> Result<GeneratedAudio> {
        tokio::time::sleep(self.delay).await;
        Ok(GeneratedAudio {
            file_name: Self::PREVIEW_FILE.to_string(),
            voice_label: request.voice.label(),
            tone: request.tone,
        })
    }
}
