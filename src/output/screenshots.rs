//! Filesystem attachment sink for embedded screenshots.

use super::files::ensure_directory;
use crate::aggregator::attachments::{screenshot_file_name, AttachmentSink};
use crate::utils::error::AttachmentError;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Standard alphabet, padding optional
const SCREENSHOT_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Writes decoded screenshots as `<directory>/<scenario_name>.png`
///
/// Every embedding of a scenario targets the same file, so re-running on
/// the same input rewrites identical files.
#[derive(Debug, Clone)]
pub struct ScreenshotWriter {
    directory: PathBuf,
    written: usize,
}

impl ScreenshotWriter {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            written: 0,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Number of files written so far
    pub fn written(&self) -> usize {
        self.written
    }

    fn reference_path(&self, file_name: &str) -> String {
        let dir = self.directory.to_string_lossy().replace('\\', "/");
        format!("{}/{}", dir.trim_end_matches('/'), file_name)
    }
}

impl AttachmentSink for ScreenshotWriter {
    fn store(&mut self, scenario_name: Option<&str>, encoded: &str) -> Result<String, AttachmentError> {
        let file_name = screenshot_file_name(scenario_name);
        if file_name.contains(['/', '\\']) {
            return Err(AttachmentError::InvalidName(file_name));
        }

        // Producers wrap long payloads; whitespace is not part of the data
        let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        let bytes = SCREENSHOT_ENGINE.decode(compact)?;

        ensure_directory(&self.directory)?;

        let path = self.directory.join(&file_name);
        fs::write(&path, &bytes)?;
        self.written += 1;

        debug!("Wrote screenshot {} ({} bytes)", path.display(), bytes.len());

        Ok(self.reference_path(&file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_writes_decoded_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let shots = dir.path().join("screenshots");
        let mut writer = ScreenshotWriter::new(&shots);

        let reference = writer.store(Some("Add to cart"), "aGVsbG8=").unwrap();

        assert_eq!(fs::read(shots.join("Add_to_cart.png")).unwrap(), b"hello");
        assert!(reference.ends_with("/Add_to_cart.png"));
        assert_eq!(writer.written(), 1);
    }

    #[test]
    fn test_store_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ScreenshotWriter::new(dir.path());

        let first = writer.store(Some("Same"), "aGVsbG8").unwrap();
        let second = writer.store(Some("Same"), "aGVs\nbG8=").unwrap();

        assert_eq!(first, second);
        assert_eq!(fs::read(dir.path().join("Same.png")).unwrap(), b"hello");
    }

    #[test]
    fn test_reference_path_default_dir() {
        let writer = ScreenshotWriter::new("./screenshots");
        assert_eq!(writer.reference_path("a.png"), "./screenshots/a.png");
    }

    #[test]
    fn test_store_rejects_bad_payload() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ScreenshotWriter::new(dir.path());

        let result = writer.store(Some("x"), "not base64 at all!");
        assert!(matches!(result, Err(AttachmentError::Decode(_))));
        assert_eq!(writer.written(), 0);
    }

    #[test]
    fn test_store_rejects_path_separators() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ScreenshotWriter::new(dir.path());

        let result = writer.store(Some("a/b"), "aGVsbG8=");
        assert!(matches!(result, Err(AttachmentError::InvalidName(_))));
    }

    #[test]
    fn test_store_accepts_leading_dots() {
        let dir = tempfile::tempdir().unwrap();
        let mut writer = ScreenshotWriter::new(dir.path());

        let path = writer.store(Some("...loading spinner"), "UE5H").unwrap();

        assert!(path.ends_with("/...loading_spinner.png"));
        assert_eq!(fs::read(dir.path().join("...loading_spinner.png")).unwrap(), b"PNG");
    }
}
