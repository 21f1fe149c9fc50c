use tracing::debug;

use crate::{
    error::{Result, WizardError},
    intake::FileCandidate,
    model::{extension_of, format_size},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoicePreset {
    Male,
    Female,
    Narrator,
    Energetic,
}

impl VoicePreset {
    pub const ALL: [VoicePreset; 4] = [
        VoicePreset::Male,
        VoicePreset::Female,
        VoicePreset::Narrator,
        VoicePreset::Energetic,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            VoicePreset::Male => 0,
            VoicePreset::Female => 1,
            VoicePreset::Narrator => 2,
            VoicePreset::Energetic => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VoicePreset::Male => "Male",
            VoicePreset::Female => "Female",
            VoicePreset::Narrator => "Narrator",
            VoicePreset::Energetic => "Energetic",
        }
    }
}

/// A finished microphone recording, handed over by the recording session.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedClip {
    pub label: String,
    pub duration_label: String,
    pub chunk_count: usize,
    pub samples: Vec<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedVoiceFile {
    pub name: String,
    pub size_bytes: u64,
}

impl UploadedVoiceFile {
    pub const EXTENSIONS: [&'static str; 2] = ["mp3", "wav"];

    pub fn from_candidate(candidate: FileCandidate) -> Result<Self> {
        let supported = extension_of(&candidate.name)
            .is_some_and(|ext| Self::EXTENSIONS.contains(&ext.as_str()));
        if !supported {
            return Err(WizardError::UnsupportedFileType(candidate.name));
        }
        Ok(Self {
            name: candidate.name,
            size_bytes: candidate.size_bytes,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum VoiceSelection {
    #[default]
    None,
    Avatar(VoicePreset),
    RecordedClip(RecordedClip),
    UploadedVoiceFile(UploadedVoiceFile),
}

impl VoiceSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, VoiceSelection::None)
    }

    pub fn label(&self) -> String {
        match self {
            VoiceSelection::None => "Default voice".to_string(),
            VoiceSelection::Avatar(preset) => preset.label().to_string(),
            VoiceSelection::RecordedClip(clip) => clip.label.clone(),
            VoiceSelection::UploadedVoiceFile(file) => file.name.clone(),
        }
    }
}

/// Summary chip shown under the voice panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceChip {
    Avatar { label: String },
    Recording { label: String, duration: String },
    Upload { name: String, size: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToneField {
    Pitch,
    Speed,
    Tone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneParameters {
    pub pitch: u8,
    pub speed: u8,
    pub tone: u8,
}

impl ToneParameters {
    pub const MAX: u8 = 100;

    pub fn get(&self, field: ToneField) -> u8 {
        match field {
            ToneField::Pitch => self.pitch,
            ToneField::Speed => self.speed,
            ToneField::Tone => self.tone,
        }
    }
}

impl Default for ToneParameters {
    fn default() -> Self {
        Self {
            pitch: 50,
            speed: 50,
            tone: 50,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct VoiceSelectionState {
    selection: VoiceSelection,
    tone: ToneParameters,
}

impl VoiceSelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_avatar(&mut self, preset: VoicePreset) {
        debug!(preset = preset.label(), "Voice preset selected");
        self.selection = VoiceSelection::Avatar(preset);
    }

    pub fn set_recorded_clip(&mut self, clip: RecordedClip) {
        debug!(clip = %clip.label, duration = %clip.duration_label, "Recorded clip selected");
        self.selection = VoiceSelection::RecordedClip(clip);
    }

    pub fn set_uploaded_voice_file(&mut self, file: UploadedVoiceFile) {
        debug!(file = %file.name, "Voice sample selected");
        self.selection = VoiceSelection::UploadedVoiceFile(file);
    }

    pub fn clear(&mut self) {
        self.selection = VoiceSelection::None;
    }

    pub fn selection(&self) -> &VoiceSelection {
        &self.selection
    }

    /// Stores `value` clamped into 0..=100.
    pub fn set_tone(&mut self, field: ToneField, value: i32) {
        let value = value.clamp(0, i32::from(ToneParameters::MAX)) as u8;
        match field {
            ToneField::Pitch => self.tone.pitch = value,
            ToneField::Speed => self.tone.speed = value,
            ToneField::Tone => self.tone.tone = value,
        }
    }

    pub fn tone(&self) -> ToneParameters {
        self.tone
    }

    pub fn summary_chips(&self) -> Vec<VoiceChip> {
        match &self.selection {
            VoiceSelection::None => Vec::new(),
            VoiceSelection::Avatar(preset) => vec![VoiceChip::Avatar {
                label: preset.label().to_string(),
            }],
            VoiceSelection::RecordedClip(clip) => vec![VoiceChip::Recording {
                label: clip.label.clone(),
                duration: clip.duration_label.clone(),
            }],
            VoiceSelection::UploadedVoiceFile(file) => vec![VoiceChip::Upload {
                name: file.name.clone(),
                size: format_size(file.size_bytes),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn clip() -> RecordedClip {
        RecordedClip {
            label: "Recording 1".to_string(),
            duration_label: "00:04".to_string(),
            chunk_count: 4,
            samples: vec![0.0; 8],
        }
    }

    #[test]
    fn each_setter_leaves_exactly_one_choice() {
        let mut state = VoiceSelectionState::new();
        assert!(state.summary_chips().is_empty());

        state.select_avatar(VoicePreset::Narrator);
        assert_eq!(state.summary_chips().len(), 1);

        state.set_recorded_clip(clip());
        assert_eq!(
            state.summary_chips(),
            vec![VoiceChip::Recording {
                label: "Recording 1".to_string(),
                duration: "00:04".to_string(),
            }]
        );

        state.set_uploaded_voice_file(UploadedVoiceFile {
            name: "me.wav".to_string(),
            size_bytes: 2048,
        });
        assert_eq!(
            state.summary_chips(),
            vec![VoiceChip::Upload {
                name: "me.wav".to_string(),
                size: "2.0 KB".to_string(),
            }]
        );

        state.select_avatar(VoicePreset::Male);
        assert_eq!(state.selection(), &VoiceSelection::Avatar(VoicePreset::Male));
    }

    #[test]
    fn tone_values_are_clamped_independently() {
        let mut state = VoiceSelectionState::new();
        assert_eq!(state.tone(), ToneParameters::default());

        state.set_tone(ToneField::Pitch, 140);
        state.set_tone(ToneField::Speed, -3);
        state.set_tone(ToneField::Tone, 72);

        let tone = state.tone();
        assert_eq!(tone.get(ToneField::Pitch), 100);
        assert_eq!(tone.get(ToneField::Speed), 0);
        assert_eq!(tone.get(ToneField::Tone), 72);
    }

    #[test]
    fn voice_uploads_accept_mp3_and_wav_only() {
        let file = UploadedVoiceFile::from_candidate(FileCandidate::new("Sample.MP3", 10))
            .expect("mp3 accepted");
        assert_eq!(file.name, "Sample.MP3");

        let err = UploadedVoiceFile::from_candidate(FileCandidate::new("sample.ogg", 10))
            .unwrap_err();
        assert_eq!(err, WizardError::UnsupportedFileType("sample.ogg".to_string()));
    }

    #[test]
    fn presets_map_to_indices() {
        for (i, preset) in VoicePreset::ALL.iter().enumerate() {
            assert_eq!(preset.index(), i);
            assert_eq!(VoicePreset::from_index(i), Some(*preset));
        }
        assert_eq!(VoicePreset::from_index(4), None);
    }
}
