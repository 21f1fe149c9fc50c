use anyhow::Result;
use tracing::info;

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

pub trait SpeechSynthesizer: Send {
    /// Queues the utterance; completion is not reported back.
    fn speak(&self, utterance: &Utterance) -> Result<()>;
}

#[derive(Default)]
pub struct LoggingSpeechSynthesizer;

impl SpeechSynthesizer for LoggingSpeechSynthesizer {
    fn speak(&self, utterance: &Utterance) -> Result<()> {
        info!(
            rate = utterance.rate,
            pitch = utterance.pitch,
            "[speech stub] Would speak: {}",
            utterance.text
        );
        Ok(())
    }
}
