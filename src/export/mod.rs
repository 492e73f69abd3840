//! Export of the rendered preview to a paginated document
//!
//! The exporter receives a finished [`Preview`] and writes `resume.pdf` into
//! an output directory. It does not look at the wizard or the store.

mod paginate;
mod pdf;

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Utc;
use thiserror::Error;

use crate::preview::Preview;

pub use paginate::{paginate, wrap_text, Align, FontFace, LaidOutLine, Page, PageSetup, Paper};
pub use pdf::{render_pdf, write_pdf};

/// Name of every exported file
pub const EXPORT_FILE_NAME: &str = "resume.pdf";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Something that turns a preview into a downloadable file
pub trait Exporter {
    /// Write the document into `output_dir`, returning the file's path
    fn export(&self, preview: &Preview, output_dir: &Path) -> Result<PathBuf, ExportError>;
}

/// Writes the preview as a paginated PDF
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    setup: PageSetup,
}

impl PdfExporter {
    pub fn new(setup: PageSetup) -> Self {
        Self { setup }
    }
}

impl Exporter for PdfExporter {
    fn export(&self, preview: &Preview, output_dir: &Path) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(output_dir).map_err(|source| ExportError::CreateDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let path = output_dir.join(EXPORT_FILE_NAME);
        let pages = paginate(preview, &self.setup);

        let write_err = |source| ExportError::Write {
            path: path.clone(),
            source,
        };
        let file = File::create(&path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        write_pdf(&mut writer, &pages, &self.setup, Utc::now()).map_err(write_err)?;

        tracing::info!(
            path = %path.display(),
            pages = pages.len(),
            "Exported resume"
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ResumeDocument;
    use crate::preview::render_preview;

    #[test]
    fn test_export_writes_resume_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let preview = render_preview(&ResumeDocument::default());

        let path = PdfExporter::default()
            .export(&preview, dir.path())
            .unwrap();

        assert_eq!(path, dir.path().join("resume.pdf"));
        let bytes = fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("cv");
        let preview = render_preview(&ResumeDocument::default());

        let path = PdfExporter::default().export(&preview, &nested).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_export_into_a_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();
        let preview = render_preview(&ResumeDocument::default());

        let err = PdfExporter::default()
            .export(&preview, &blocker)
            .unwrap_err();
        assert!(matches!(err, ExportError::CreateDir { .. }));
    }
}
