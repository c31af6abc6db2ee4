//! Atomic delivery of encoded animations into the output directory

use crate::animation::{Animation, encode_gif};
use crate::io::configuration::{OUTPUT_EXTENSION, OUTPUT_PREFIX, PARTIAL_SUFFIX};
use crate::io::error::{Result, StarloopError, WithPath};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes animations under unique names without exposing partial files
///
/// Each animation is encoded into a hidden `.space-XXXXXX.gif.part` file in
/// the output directory and renamed to `space-XXXXXX.gif` once complete.
/// Both names live in the same directory, so the rename is atomic.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    directory: PathBuf,
}

impl OutputWriter {
    /// Create a writer targeting `directory`
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory animations are delivered to
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Encode and deliver one animation, returning its final path
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The temporary file cannot be created in the output directory
    /// - Encoding or flushing the temporary file fails
    /// - The temporary file cannot be renamed into place
    pub fn write(&self, animation: &Animation) -> Result<PathBuf> {
        let final_suffix = format!(".{OUTPUT_EXTENSION}");
        let partial_suffix = format!("{final_suffix}{PARTIAL_SUFFIX}");
        let mut temp = tempfile::Builder::new()
            .prefix(&format!(".{OUTPUT_PREFIX}"))
            .suffix(&partial_suffix)
            .tempfile_in(&self.directory)
            .with_path(&self.directory, "create temporary file")?;

        let temp_path = temp.path().to_path_buf();
        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            encode_gif(animation, &mut writer, &temp_path)?;
            writer.flush().with_path(&temp_path, "flush")?;
        }
        temp.as_file()
            .sync_all()
            .with_path(&temp_path, "sync")?;

        let final_path = self.final_path(&temp_path, &partial_suffix);
        temp.persist_noclobber(&final_path)
            .map_err(|e| StarloopError::FileSystem {
                path: final_path.clone(),
                operation: "rename into place",
                source: e.error,
            })?;

        Ok(final_path)
    }

    // `.space-XXXXXX.gif.part` -> `space-XXXXXX.gif`
    fn final_path(&self, temp_path: &Path, partial_suffix: &str) -> PathBuf {
        let temp_name = temp_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let token = temp_name
            .strip_prefix('.')
            .and_then(|name| name.strip_prefix(OUTPUT_PREFIX))
            .and_then(|name| name.strip_suffix(partial_suffix))
            .unwrap_or(temp_name.as_str());
        self.directory
            .join(format!("{OUTPUT_PREFIX}{token}.{OUTPUT_EXTENSION}"))
    }
}

/// Whether `path` names a delivered animation rather than a partial one
pub fn is_delivered_animation(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    name.starts_with(OUTPUT_PREFIX)
        && path.extension().and_then(|ext| ext.to_str()) == Some(OUTPUT_EXTENSION)
}
