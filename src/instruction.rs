use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::speech::{SpeechSynthesizer, Utterance};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionCard {
    pub title: &'static str,
    pub text: &'static str,
    pub speak: &'static str,
}

pub const INSTRUCTION_CARDS: [InstructionCard; 2] = [
    InstructionCard {
        title: "Think & Write",
        text: "Note down your thoughts, stories, or ideas just like writing in your personal notebook.",
        speak: "Think and write your creative ideas freely.",
    },
    InstructionCard {
        title: "Listen & Learn",
        text: "Click the speaker below to hear your content, perfect for learning on the go.",
        speak: "Listen to your notes come alive through speech.",
    },
];

/// The pronunciation panel: a sliding card carousel plus a "hear it" box.
pub struct InstructionPanel {
    page: usize,
    rate: f32,
    pitch: f32,
    speech: Box<dyn SpeechSynthesizer>,
}

impl InstructionPanel {
    pub fn new(speech: Box<dyn SpeechSynthesizer>, rate: f32, pitch: f32) -> Self {
        Self {
            page: 0,
            rate,
            pitch,
            speech,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn current_card(&self) -> &'static InstructionCard {
        &INSTRUCTION_CARDS[self.page]
    }

    /// Slides to the next card, wrapping after the last one.
    pub fn tick(&mut self) {
        self.page = (self.page + 1) % INSTRUCTION_CARDS.len();
    }

    /// Auto-slides the carousel every `interval` until `cancel` fires.
    pub async fn run_carousel(&mut self, interval: Duration, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(interval);
        // The first tick of a tokio interval completes immediately.
        ticker.tick().await;
        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => self.tick(),
            }
        }
    }

    /// Speaks typed text. Returns `false` without speaking when it is blank.
    pub fn speak_input(&self, text: &str) -> Result<bool> {
        if text.trim().is_empty() {
            debug!("Ignoring blank speech input");
            return Ok(false);
        }
        self.speech.speak(&Utterance {
            text: text.to_string(),
            rate: self.rate,
            pitch: self.pitch,
        })?;
        Ok(true)
    }

    pub fn speak_current_card(&self) -> Result<bool> {
        self.speak_input(self.current_card().speak)
    }
}
