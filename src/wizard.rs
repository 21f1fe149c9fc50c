use std::sync::Arc;

use tracing::info;

use crate::{
    controller::WizardController,
    error::{Result, WizardError},
    generation::GenerationJob,
    intake::{FileCandidate, IntakeReport, MaterialIntakeState, UploadedFile},
    model::{GenerationState, RecordingState, WizardStep},
    recording::RecordingSession,
    services::AudioCaptureService,
    settings::WizardSettings,
    synthesizer::{AudioSynthesizer, GenerationRequest},
    voice::{ToneField, UploadedVoiceFile, VoicePreset, VoiceSelectionState},
};

/// One course-to-audio session: the step machine plus each panel's state.
pub struct CourseWizard {
    settings: WizardSettings,
    controller: WizardController,
    intake: MaterialIntakeState,
    voice: VoiceSelectionState,
    recording: RecordingSession,
    generation: GenerationJob,
}

impl CourseWizard {
    pub fn new(
        settings: WizardSettings,
        audio: Box<dyn AudioCaptureService>,
        synthesizer: Arc<dyn AudioSynthesizer>,
    ) -> Self {
        Self {
            settings,
            controller: WizardController::new(),
            intake: MaterialIntakeState::new(),
            voice: VoiceSelectionState::new(),
            recording: RecordingSession::new(audio),
            generation: GenerationJob::new(synthesizer),
        }
    }

    pub fn settings(&self) -> &WizardSettings {
        &self.settings
    }

    pub fn step(&self) -> WizardStep {
        self.controller.step()
    }

    pub fn intake(&self) -> &MaterialIntakeState {
        &self.intake
    }

    pub fn voice(&self) -> &VoiceSelectionState {
        &self.voice
    }

    /// "Next". Only refuses when step gating is enabled and the step is empty.
    pub fn next(&mut self) -> Result<WizardStep> {
        if self.settings.require_step_input {
            self.check_step_complete()?;
        }
        Ok(self.controller.advance())
    }

    /// "Finish". Returns to the first step; entered data is kept.
    pub fn finish(&mut self) {
        info!("Wizard finished, back to step 1");
        self.controller.reset();
    }

    fn check_step_complete(&self) -> Result<()> {
        let step = self.controller.step();
        let reason = match step {
            WizardStep::Intake if !self.intake.has_material() => {
                "paste some text or upload a file"
            }
            WizardStep::Voice if self.voice.selection().is_none() => {
                "choose, record, or upload a voice"
            }
            _ => return Ok(()),
        };
        Err(WizardError::StepIncomplete {
            step,
            reason: reason.to_string(),
        })
    }

    pub fn add_files<I>(&mut self, candidates: I) -> IntakeReport
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        self.intake.add_files(candidates)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile> {
        self.intake.remove_file(index)
    }

    pub fn set_pasted_text(&mut self, text: impl Into<String>) {
        self.intake.set_pasted_text(text);
    }

    pub fn select_avatar(&mut self, preset: VoicePreset) {
        self.voice.select_avatar(preset);
    }

    pub fn upload_voice_file(&mut self, candidate: FileCandidate) -> Result<()> {
        let file = UploadedVoiceFile::from_candidate(candidate)?;
        self.voice.set_uploaded_voice_file(file);
        Ok(())
    }

    pub fn set_tone(&mut self, field: ToneField, value: i32) {
        self.voice.set_tone(field, value);
    }

    pub fn recording_state(&self) -> RecordingState {
        self.recording.state()
    }

    /// Opens the microphone. A successful start drops the current voice choice.
    pub async fn start_recording(&mut self) -> Result<()> {
        self.recording.start().await?;
        self.voice.clear();
        Ok(())
    }

    pub fn pump_recording(&mut self) -> Result<usize> {
        self.recording.pump()
    }

    /// Stops the microphone and makes the clip the active voice.
    /// Returns `false` when nothing was recording.
    pub fn stop_recording(&mut self) -> bool {
        match self.recording.stop() {
            Some(clip) => {
                self.voice.set_recorded_clip(clip);
                true
            }
            None => false,
        }
    }

    pub fn generate(&mut self) -> Result<()> {
        let request = GenerationRequest {
            material_names: self.intake.files().iter().map(|f| f.name.clone()).collect(),
            pasted_text: self.intake.pasted_text().to_string(),
            voice: self.voice.selection().clone(),
            tone: self.voice.tone(),
        };
        self.generation.trigger(request)
    }

    pub fn cancel_generation(&mut self) -> bool {
        self.generation.cancel()
    }

    pub fn generation_state(&self) -> GenerationState {
        self.generation.state()
    }

    pub async fn wait_for_generation(&self) -> GenerationState {
        self.generation.wait().await
    }
}
