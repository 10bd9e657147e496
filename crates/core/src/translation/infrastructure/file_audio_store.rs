use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::shared::constants::{SYNTHESIS_FILE_EXTENSION, SYNTHESIS_FILE_PREFIX};
use crate::shared::service_error::ServiceError;
use crate::translation::domain::audio_store::AudioStore;

/// Writes each synthesized clip to its own `<prefix>-<uuid>.mp3` file.
///
/// Names are unique per call, so repeated or concurrent runs never
/// overwrite each other's output.
#[derive(Debug, Clone)]
pub struct FileAudioStore {
    dir: PathBuf,
    prefix: String,
}

impl FileAudioStore {
    pub fn new(dir: &Path) -> Self {
        Self::with_prefix(dir, SYNTHESIS_FILE_PREFIX)
    }

    pub fn with_prefix(dir: &Path, prefix: &str) -> Self {
        Self {
            dir: dir.to_path_buf(),
            prefix: prefix.to_string(),
        }
    }

    fn next_path(&self) -> PathBuf {
        self.dir.join(format!(
            "{}-{}.{SYNTHESIS_FILE_EXTENSION}",
            self.prefix,
            Uuid::new_v4().simple()
        ))
    }
}

impl AudioStore for FileAudioStore {
    fn store(&self, audio: &[u8]) -> Result<PathBuf, ServiceError> {
        let output_error = |path: &Path, e: std::io::Error| ServiceError::Output {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        fs::create_dir_all(&self.dir).map_err(|e| output_error(&self.dir, e))?;
        let dest = self.next_path();
        write_atomically(audio, &dest).map_err(|(path, e)| output_error(&path, e))?;

        log::info!("Synthesized audio written to {}", dest.display());
        Ok(dest)
    }
}

/// Write to `<dest>.part` then rename onto `dest`. The temp file is removed
/// on failure.
fn write_atomically(audio: &[u8], dest: &Path) -> Result<(), (PathBuf, std::io::Error)> {
    let temp_path = dest.with_extension("part");
    let mut file = fs::File::create(&temp_path).map_err(|e| (temp_path.clone(), e))?;
    let written = file.write_all(audio).and_then(|_| file.flush());
    drop(file);
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err((temp_path, e));
    }
    if let Err(e) = fs::rename(&temp_path, dest) {
        let _ = fs::remove_file(&temp_path);
        return Err((dest.to_path_buf(), e));
    }
    Ok(())
}
