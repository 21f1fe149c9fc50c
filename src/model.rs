use crate::voice::ToneParameters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    Intake,
    Voice,
    Generate,
}

impl WizardStep {
    pub const COUNT: u8 = 3;

    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Intake => 1,
            WizardStep::Voice => 2,
            WizardStep::Generate => 3,
        }
    }

    pub fn next(&self) -> Option<WizardStep> {
        match self {
            WizardStep::Intake => Some(WizardStep::Voice),
            WizardStep::Voice => Some(WizardStep::Generate),
            WizardStep::Generate => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::Intake => "Input Course Material",
            WizardStep::Voice => "Choose or Customize Voice",
            WizardStep::Generate => "Convert & Listen",
        }
    }

    /// Text shown above the active panel, e.g. "Step 2 of 3".
    pub fn indicator(&self) -> String {
        format!("Step {} of {}", self.number(), Self::COUNT)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordingState {
    Idle,
    Recording,
    Stopped,
}

impl RecordingState {
    pub fn label(&self) -> &'static str {
        match self {
            RecordingState::Idle => "Idle",
            RecordingState::Recording => "Recording",
            RecordingState::Stopped => "Stopped",
        }
    }
}

/// Output of a finished generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAudio {
    pub file_name: String,
    pub voice_label: String,
    pub tone: ToneParameters,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    Generating,
    Done(GeneratedAudio),
}

impl GenerationState {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationState::Idle => "Idle",
            GenerationState::Generating => "Generating",
            GenerationState::Done(_) => "Done",
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self, GenerationState::Generating)
    }
}

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;

/// Human-readable file size: bytes below 1 KB, then KB and MB with one decimal.
pub fn format_size(bytes: u64) -> String {
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    }
}

/// Extension after the last dot, lowercased. Names without one yield `None`.
pub(crate) fn extension_of(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_tiers_switch_at_1024() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(1024 * 1024 - 1), "1024.0 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5_242_880), "5.0 MB");
    }

    #[test]
    fn step_order_and_indicator() {
        assert_eq!(WizardStep::Intake.next(), Some(WizardStep::Voice));
        assert_eq!(WizardStep::Generate.next(), None);
        assert_eq!(WizardStep::Voice.indicator(), "Step 2 of 3");
        assert_eq!(WizardStep::Intake.title(), "Input Course Material");
        assert_eq!(WizardStep::Voice.title(), "Choose or Customize Voice");
        assert_eq!(WizardStep::Generate.title(), "Convert & Listen");
    }

    #[test]
    fn extension_is_case_insensitive() {
        assert_eq!(extension_of("Notes.PDF").as_deref(), Some("pdf"));
        assert_eq!(extension_of("archive.tar.TXT").as_deref(), Some("txt"));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of("notes."), None);
    }
}
