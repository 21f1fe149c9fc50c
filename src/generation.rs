use std::sync::Arc;

use tokio::{runtime::Handle, sync::watch};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::{
    error::{Result, WizardError},
    model::GenerationState,
    synthesizer::{AudioSynthesizer, GenerationRequest},
};

/// The "Generate Audio" job. At most one synthesis runs at a time.
pub struct GenerationJob {
    synthesizer: Arc<dyn AudioSynthesizer>,
    state_tx: watch::Sender<GenerationState>,
    cancel: Option<CancellationToken>,
}

impl GenerationJob {
    pub fn new(synthesizer: Arc<dyn AudioSynthesizer>) -> Self {
        let (state_tx, _) = watch::channel(GenerationState::Idle);
        Self {
            synthesizer,
            state_tx,
            cancel: None,
        }
    }

    pub fn state(&self) -> GenerationState {
        self.state_tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<GenerationState> {
        self.state_tx.subscribe()
    }

    /// Marks the job as generating and spawns the synthesis task on the
    /// current tokio runtime.
    pub fn trigger(&mut self, request: GenerationRequest) -> Result<()> {
        if self.state_tx.borrow().is_generating() {
            return Err(WizardError::GenerationInFlight);
        }
        let runtime = Handle::try_current().map_err(|_| WizardError::RuntimeUnavailable)?;

        let token = CancellationToken::new();
        self.cancel = Some(token.clone());
        self.state_tx.send_replace(GenerationState::Generating);
        info!(backend = self.synthesizer.display_name(), "Audio generation started");

        let synthesizer = Arc::clone(&self.synthesizer);
        let state_tx = self.state_tx.clone();
        runtime.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {
                    info!("Audio generation cancelled");
                }
                result = synthesizer.synthesize(request) => {
                    let next = match result {
                        Ok(audio) => {
                            info!(file = %audio.file_name, "Audio generation finished");
                            GenerationState::Done(audio)
                        }
                        Err(err) => {
                            warn!(error = %err, "Audio generation failed");
                            GenerationState::Idle
                        }
                    };
                    // cancel() flips the token before taking the watch lock.
                    state_tx.send_if_modified(|state| {
                        if token.is_cancelled() {
                            return false;
                        }
                        *state = next;
                        true
                    });
                }
            }
        });
        Ok(())
    }

    /// Abandons an in-flight run and returns `true` if there was one.
    /// Does nothing when idle or done.
    pub fn cancel(&mut self) -> bool {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
        self.state_tx.send_if_modified(|state| {
            if state.is_generating() {
                *state = GenerationState::Idle;
                true
            } else {
                false
            }
        })
    }

    /// Waits until no run is in flight and returns the settled state.
    pub async fn wait(&self) -> GenerationState {
        let mut rx = self.state_tx.subscribe();
        let settled = match rx.wait_for(|state| !state.is_generating()).await {
            Ok(state) => state.clone(),
            Err(_) => self.state(),
        };
        settled
    }
}

impl Drop for GenerationJob {
    fn drop(&mut self) {
        if let Some(token) = self.cancel.take() {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::GeneratedAudio,
        synthesizer::SimulatedSynthesizer,
        voice::{ToneParameters, VoicePreset, VoiceSelection},
    };

    const DELAY: Duration = Duration::from_millis(1500);

    fn job() -> GenerationJob {
        GenerationJob::new(Arc::new(SimulatedSynthesizer::new(DELAY)))
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            material_names: vec!["lesson.pdf".to_string()],
            pasted_text: String::new(),
            voice: VoiceSelection::Avatar(VoicePreset::Female),
            tone: ToneParameters::default(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn completes_after_the_fixed_delay() {
        let mut job = job();
        assert_eq!(job.state(), GenerationState::Idle);

        job.trigger(request()).expect("trigger");
        assert_eq!(job.state(), GenerationState::Generating);

        tokio::time::sleep(DELAY / 2).await;
        assert_eq!(job.state(), GenerationState::Generating);

        let settled = job.wait().await;
        assert_eq!(
            settled,
            GenerationState::Done(GeneratedAudio {
                file_name: "intro-lesson.mp3".to_string(),
                voice_label: "Female".to_string(),
                tone: ToneParameters::default(),
            })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn trigger_while_generating_is_rejected() {
        let mut job = job();
        job.trigger(request()).expect("trigger");
        assert_eq!(job.trigger(request()), Err(WizardError::GenerationInFlight));
        assert_eq!(job.state(), GenerationState::Generating);
    }

    #[tokio::test(start_paused = true)]
    async fn can_trigger_again_once_done() {
        let mut job = job();
        job.trigger(request()).expect("trigger");
        job.wait().await;
        job.trigger(request()).expect("second trigger");
        assert_eq!(job.state(), GenerationState::Generating);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_returns_to_idle_and_never_completes() {
        let mut job = job();
        job.trigger(request()).expect("trigger");
        assert!(job.cancel());
        assert_eq!(job.state(), GenerationState::Idle);
        assert!(!job.cancel());

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(job.state(), GenerationState::Idle);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn cancelled_run_never_publishes_done() {
        let mut job = GenerationJob::new(Arc::new(SimulatedSynthesizer::new(Duration::ZERO)));
        for _ in 0..200 {
            job.trigger(request()).expect("trigger");
            tokio::task::yield_now().await;
            let cancelled = job.cancel();
            tokio::time::sleep(Duration::from_millis(1)).await;
            if cancelled {
                assert_eq!(job.state(), GenerationState::Idle);
            } else {
                assert!(matches!(job.wait().await, GenerationState::Done(_)));
            }
        }
    }

    #[test]
    fn trigger_outside_a_runtime_is_rejected() {
        let mut job = job();
        assert_eq!(job.trigger(request()), Err(WizardError::RuntimeUnavailable));
        assert_eq!(job.state(), GenerationState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_job_stops_its_run() {
        let mut job = job();
        job.trigger(request()).expect("trigger");
        let rx = job.subscribe();
        drop(job);

        tokio::time::sleep(DELAY * 2).await;
        assert_eq!(*rx.borrow(), GenerationState::Generating);
    }

    struct FailingSynthesizer;

    #[async_trait]
    impl AudioSynthesizer for FailingSynthesizer {
        fn display_name(&self) -> &'static str {
            "Failing"
        }

        async fn synthesize(&self, _request: GenerationRequest) -> anyhow::Result<GeneratedAudio> {
            anyhow::bail!("backend unavailable")
        }
    }

    #[tokio::test]
    async fn backend_failure_falls_back_to_idle() {
        let mut job = GenerationJob::new(Arc::new(FailingSynthesizer));
        job.trigger(request()).expect("trigger");
        assert_eq!(job.wait().await, GenerationState::Idle);
    }
}
