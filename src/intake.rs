use tracing::debug;

use crate::model::{extension_of, format_size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Pdf,
    Docx,
    Txt,
}

impl MaterialKind {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(MaterialKind::Pdf),
            "docx" => Some(MaterialKind::Docx),
            "txt" => Some(MaterialKind::Txt),
            _ => None,
        }
    }
}

/// A file offered by the picker or a drop. Contents are never inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCandidate {
    pub name: String,
    pub size_bytes: u64,
}

impl FileCandidate {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub name: String,
    pub size_bytes: u64,
    pub kind: MaterialKind,
}

impl UploadedFile {
    pub fn display_size(&self) -> String {
        format_size(self.size_bytes)
    }
}

/// What `add_files` did with a batch of candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntakeReport {
    pub accepted: usize,
    pub rejected: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MaterialIntakeState {
    files: Vec<UploadedFile>,
    pasted_text: String,
}

impl MaterialIntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends every pdf/docx/txt candidate in order. Other files are left out
    /// and named in the report.
    pub fn add_files<I>(&mut self, candidates: I) -> IntakeReport
    where
        I: IntoIterator<Item = FileCandidate>,
    {
        let mut report = IntakeReport::default();
        for candidate in candidates {
            let kind = extension_of(&candidate.name)
                .as_deref()
                .and_then(MaterialKind::from_extension);
            match kind {
                Some(kind) => {
                    self.files.push(UploadedFile {
                        name: candidate.name,
                        size_bytes: candidate.size_bytes,
                        kind,
                    });
                    report.accepted += 1;
                }
                None => {
                    debug!(file = %candidate.name, "Dropping unsupported course material");
                    report.rejected.push(candidate.name);
                }
            }
        }
        report
    }

    pub fn remove_file(&mut self, index: usize) -> Option<UploadedFile> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn set_pasted_text(&mut self, text: impl Into<String>) {
        self.pasted_text = text.into();
    }

    pub fn pasted_text(&self) -> &str {
        &self.pasted_text
    }

    /// The text box is hidden as soon as any file is attached.
    pub fn shows_text_input(&self) -> bool {
        self.files.is_empty()
    }

    pub fn has_material(&self) -> bool {
        !self.files.is_empty() || !self.pasted_text.trim().is_empty()
    }
}
