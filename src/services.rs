use async_trait::async_trait;

use crate::error::{Result, WizardError};

/// Microphone access as seen by a recording session.
#[async_trait]
pub trait AudioCaptureService: Send {
    /// Asks the platform for a capture stream. May wait on a permission prompt.
    async fn request_access(&mut self) -> Result<()>;
    /// Returns the chunks captured since the previous drain.
    fn drain_chunks(&mut self) -> Result<Vec<Vec<f32>>>;
    /// Stops every track of the stream.
    fn release(&mut self) -> Result<()>;
}

/// Always grants access and yields one fixed chunk per drain.
#[derive(Default)]
pub struct StubAudioCaptureService {
    streaming: bool,
}

impl StubAudioCaptureService {
    pub const CHUNK_LEN: usize = 1600;
}

#[async_trait]
impl AudioCaptureService for StubAudioCaptureService {
    async fn request_access(&mut self) -> Result<()> {
        self.streaming = true;
        Ok(())
    }

    fn drain_chunks(&mut self) -> Result<Vec<Vec<f32>>> {
        if !self.streaming {
            return Err(WizardError::Device("capture stream is not open".to_string()));
        }
        Ok(vec![vec![0.1; Self::CHUNK_LEN]])
    }

    fn release(&mut self) -> Result<()> {
        self.streaming = false;
        Ok(())
    }
}

/// A device whose permission prompt is always refused.
#[derive(Default)]
pub struct DeniedAudioCaptureService;

#[async_trait]
impl AudioCaptureService for DeniedAudioCaptureService {
    async fn request_access(&mut self) -> Result<()> {
        Err(WizardError::PermissionDenied)
    }

    fn drain_chunks(&mut self) -> Result<Vec<Vec<f32>>> {
        Ok(Vec::new())
    }

    fn release(&mut self) -> Result<()> {
        Ok(())
    }
}
