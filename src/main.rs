use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use course_audio_wizard::{
    document::DocumentViewer,
    instruction::InstructionPanel,
    intake::FileCandidate,
    model::{format_size, GenerationState},
    services::StubAudioCaptureService,
    speech::LoggingSpeechSynthesizer,
    store::SettingsStore,
    synthesizer::SimulatedSynthesizer,
    voice::{ToneField, VoicePreset},
    CourseWizard,
};

const DEFAULT_SETTINGS_FILE: &str = "course-audio-wizard.json";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let settings = SettingsStore::new(settings_path.clone())
        .load()
        .with_context(|| format!("loading {}", settings_path.display()))?;
    info!(skin = ?settings.skin, "Settings loaded");

    let mut instructions = InstructionPanel::new(
        Box::new(LoggingSpeechSynthesizer),
        settings.speech_rate,
        settings.speech_pitch,
    );
    instructions.speak_current_card()?;
    instructions.speak_input("Welcome to your first lesson")?;
    let carousel_stop = CancellationToken::new();
    let carousel = {
        let interval = settings.carousel_interval();
        let cancel = carousel_stop.clone();
        tokio::spawn(async move {
            instructions.run_carousel(interval, cancel).await;
            instructions
        })
    };

    let synthesizer = Arc::new(SimulatedSynthesizer::new(settings.generation_delay()));
    let mut wizard = CourseWizard::new(
        settings,
        Box::new(StubAudioCaptureService::default()),
        synthesizer,
    );

    info!("{}: {}", wizard.step().indicator(), wizard.step().title());
    let report = wizard.add_files(vec![
        FileCandidate::new("intro-lesson.pdf", 482_304),
        FileCandidate::new("diagram.png", 12_000),
    ]);
    for file in wizard.intake().files() {
        info!(file = %file.name, size = %format_size(file.size_bytes), "Material attached");
    }
    if !report.rejected.is_empty() {
        info!(rejected = ?report.rejected, "Skipped unsupported files");
    }
    wizard.next()?;

    info!("{}: {}", wizard.step().indicator(), wizard.step().title());
    wizard.select_avatar(VoicePreset::Narrator);
    wizard.start_recording().await?;
    wizard.pump_recording()?;
    wizard.stop_recording();
    info!(
        recording = wizard.recording_state().label(),
        chips = ?wizard.voice().summary_chips(),
        "Voice chosen"
    );
    wizard.set_tone(ToneField::Pitch, 60);
    wizard.next()?;

    info!("{}: {}", wizard.step().indicator(), wizard.step().title());
    wizard.generate()?;
    if let GenerationState::Done(audio) = wizard.wait_for_generation().await {
        info!(file = %audio.file_name, voice = %audio.voice_label, "Preview ready");
    }
    wizard.finish();
    info!(
        step = %wizard.step().indicator(),
        generation = wizard.generation_state().label(),
        "Wizard reset"
    );

    carousel_stop.cancel();
    let instructions = carousel.await.context("carousel task panicked")?;
    info!(card = instructions.current_card().title, "Instruction carousel stopped");

    let mut viewer = DocumentViewer::default();
    let hits = viewer.search("zoom");
    info!(
        hits = hits.len(),
        page = viewer.current_page_number(),
        "Searched the sample document"
    );

    Ok(())
}
