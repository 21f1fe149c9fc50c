use tokio::time::Instant;
use tracing::{info, warn};

use crate::{
    error::{Result, WizardError},
    model::RecordingState,
    services::AudioCaptureService,
    voice::RecordedClip,
};

/// One microphone capture at a time over an exclusively owned device.
pub struct RecordingSession {
    state: RecordingState,
    device: Box<dyn AudioCaptureService>,
    chunks: Vec<Vec<f32>>,
    started_at: Option<Instant>,
    clips_recorded: usize,
}

impl RecordingSession {
    pub fn new(device: Box<dyn AudioCaptureService>) -> Self {
        Self {
            state: RecordingState::Idle,
            device,
            chunks: Vec::new(),
            started_at: None,
            clips_recorded: 0,
        }
    }

    pub fn state(&self) -> RecordingState {
        self.state
    }

    pub fn is_recording(&self) -> bool {
        self.state == RecordingState::Recording
    }

    pub async fn start(&mut self) -> Result<()> {
        if self.is_recording() {
            return Err(WizardError::AlreadyRecording);
        }

        if let Err(err) = self.device.request_access().await {
            warn!(error = %err, "Microphone unavailable");
            self.state = RecordingState::Idle;
            return Err(err);
        }

        self.chunks.clear();
        self.started_at = Some(Instant::now());
        self.state = RecordingState::Recording;
        info!("Recording started");
        Ok(())
    }

    /// Moves whatever the device has captured so far into the session buffer.
    pub fn pump(&mut self) -> Result<usize> {
        if !self.is_recording() {
            return Ok(0);
        }
        let fresh = self.device.drain_chunks()?;
        let count = fresh.len();
        self.chunks.extend(fresh);
        Ok(count)
    }

    /// Finalizes the capture. Returns `None` unless a recording is running.
    pub fn stop(&mut self) -> Option<RecordedClip> {
        if !self.is_recording() {
            return None;
        }

        if let Err(err) = self.pump() {
            warn!(error = %err, "Dropping trailing audio chunks");
        }
        if let Err(err) = self.device.release() {
            warn!(error = %err, "Failed to release capture stream");
        }

        let elapsed = self
            .started_at
            .take()
            .map(|started| started.elapsed().as_secs())
            .unwrap_or_default();
        let chunks = std::mem::take(&mut self.chunks);
        self.clips_recorded += 1;
        self.state = RecordingState::Stopped;

        let clip = RecordedClip {
            label: format!("Recording {}", self.clips_recorded),
            duration_label: format_clock(elapsed),
            chunk_count: chunks.len(),
            samples: chunks.concat(),
        };
        info!(clip = %clip.label, duration = %clip.duration_label, "Recording stopped");
        Some(clip)
    }
}

fn format_clock(total_secs: u64) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::services::{DeniedAudioCaptureService, StubAudioCaptureService};

    fn session() -> RecordingSession {
        RecordingSession::new(Box::new(StubAudioCaptureService::default()))
    }

    fn is_short_clock(label: &str) -> bool {
        let bytes = label.as_bytes();
        bytes.len() == 5
            && &label[..3] == "00:"
            && bytes[3].is_ascii_digit()
            && bytes[4].is_ascii_digit()
    }

    #[tokio::test]
    async fn start_then_stop_yields_short_clip() {
        let mut session = session();
        session.start().await.expect("start");
        assert_eq!(session.state(), RecordingState::Recording);

        let clip = session.stop().expect("clip");
        assert!(is_short_clock(&clip.duration_label), "{}", clip.duration_label);
        assert_eq!(clip.label, "Recording 1");
        assert_eq!(clip.chunk_count, 1);
        assert_eq!(clip.samples.len(), StubAudioCaptureService::CHUNK_LEN);
        assert_eq!(session.state(), RecordingState::Stopped);
    }

    #[tokio::test]
    async fn stop_without_recording_is_a_no_op() {
        let mut session = session();
        assert!(session.stop().is_none());
        assert_eq!(session.state(), RecordingState::Idle);

        session.start().await.expect("start");
        session.stop().expect("clip");
        assert!(session.stop().is_none());
        assert_eq!(session.state(), RecordingState::Stopped);
    }

    #[tokio::test]
    async fn second_start_is_rejected_while_recording() {
        let mut session = session();
        session.start().await.expect("start");
        assert_eq!(session.start().await, Err(WizardError::AlreadyRecording));
        assert!(session.is_recording());
    }

    #[tokio::test]
    async fn denied_permission_stays_idle() {
        let mut session = RecordingSession::new(Box::new(DeniedAudioCaptureService));
        let err = session.start().await.unwrap_err();
        assert_eq!(err, WizardError::PermissionDenied);
        assert_eq!(err.to_string(), "microphone permission required");
        assert_eq!(session.state(), RecordingState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn duration_tracks_elapsed_time() {
        let mut session = session();
        session.start().await.expect("start");
        tokio::time::advance(Duration::from_secs(75)).await;
        session.pump().expect("pump");
        session.pump().expect("pump");

        let clip = session.stop().expect("clip");
        assert_eq!(clip.duration_label, "01:15");
        assert_eq!(clip.chunk_count, 3);
    }

    #[tokio::test]
    async fn restarting_discards_previous_buffer() {
        let mut session = session();
        session.start().await.expect("start");
        session.pump().expect("pump");
        session.stop().expect("first clip");

        session.start().await.expect("restart");
        let clip = session.stop().expect("second clip");
        assert_eq!(clip.label, "Recording 2");
        assert_eq!(clip.chunk_count, 1);
    }

    #[test]
    fn clock_formats_minutes_and_seconds() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(600), "10:00");
    }
}
