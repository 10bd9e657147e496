use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::constants::{RECOGNITION_CHANNELS, RECOGNITION_SAMPLE_RATE};

#[derive(Error, Debug)]
pub enum AudioClipError {
    #[error("audio clip '{0}' is empty")]
    Empty(String),
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Header fields of a WAV clip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WavFormat {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl WavFormat {
    /// Whether the recognizer accepts this format as-is (mono PCM at 16 kHz).
    pub fn is_recognition_format(&self) -> bool {
        self.sample_rate == RECOGNITION_SAMPLE_RATE && self.channels == RECOGNITION_CHANNELS
    }
}

/// Uploaded audio: the file name and its untouched bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioClip {
    name: String,
    bytes: Vec<u8>,
}

impl AudioClip {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, AudioClipError> {
        let name = name.into();
        if bytes.is_empty() {
            return Err(AudioClipError::Empty(name));
        }
        Ok(Self { name, bytes })
    }

    pub fn open(path: &Path) -> Result<Self, AudioClipError> {
        let bytes = fs::read(path).map_err(|e| AudioClipError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio.wav");
        Self::new(name, bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Parse the WAV header, or `None` if the bytes are not a readable WAV file.
    pub fn wav_format(&self) -> Option<WavFormat> {
        let reader = hound::WavReader::new(Cursor::new(self.bytes.as_slice())).ok()?;
        let spec = reader.spec();
        Some(WavFormat {
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            bits_per_sample: spec.bits_per_sample,
        })
    }
}

#[cfg(test)]
pub(crate) fn wav_bytes(sample_rate: u32, channels: u16, samples: usize) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for _ in 0..samples * channels as usize {
            writer.write_sample(0i16).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}
