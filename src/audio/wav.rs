//! WAV file decoding into [`AudioSample`].
//!
//! Accepts arbitrary sample rates and channel counts: stereo is downmixed to
//! mono, the native rate is preserved for waveform analysis.

use crate::audio::AudioSample;
use crate::error::{OrateError, Result};
use std::io::Read;
use std::path::Path;

/// Decode a WAV file from any reader.
pub fn read_wav(reader: Box<dyn Read + Send>) -> Result<AudioSample> {
    let mut wav_reader = hound::WavReader::new(reader).map_err(|e| OrateError::AudioRead {
        message: format!("Failed to parse WAV file: {}", e),
    })?;

    let spec = wav_reader.spec();
    let source_rate = spec.sample_rate;
    let source_channels = spec.channels;

    let raw_samples: Vec<i16> = wav_reader
        .samples::<i16>()
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| OrateError::AudioRead {
            message: format!("Failed to read WAV samples: {}", e),
        })?;

    // Convert to mono if stereo
    let mono_samples = if source_channels == 2 {
        raw_samples
            .chunks_exact(2)
            .map(|chunk| {
                let left = chunk[0] as i32;
                let right = chunk[1] as i32;
                ((left + right) / 2) as i16
            })
            .collect()
    } else {
        raw_samples
    };

    Ok(AudioSample::new(mono_samples, source_rate))
}

/// Decode a WAV file from a path.
pub fn read_wav_file(path: &Path) -> Result<AudioSample> {
    let file = std::fs::File::open(path).map_err(|e| OrateError::AudioRead {
        message: format!("Failed to open {}: {}", path.display(), e),
    })?;
    read_wav(Box::new(file))
}

/// Decode WAV data piped to stdin.
pub fn read_wav_stdin() -> Result<AudioSample> {
    use std::io::Cursor;

    // Read all data from stdin into memory first (StdinLock is not Send)
    let mut buffer = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut buffer)
        .map_err(|e| OrateError::AudioRead {
            message: format!("Failed to read from stdin: {}", e),
        })?;

    read_wav(Box::new(Cursor::new(buffer)))
}

/// Simple linear interpolation resampling.
pub fn resample(samples: &[i16], from_rate: u32, to_rate: u32) -> Vec<i16> {
    if from_rate == to_rate {
        return samples.to_vec();
    }

    let ratio = from_rate as f64 / to_rate as f64;
    let output_len = (samples.len() as f64 / ratio).ceil() as usize;

    (0..output_len)
        .map(|i| {
            let source_pos = i as f64 * ratio;
            let source_idx = source_pos.floor() as usize;
            let fraction = source_pos - source_idx as f64;

            if source_idx + 1 >= samples.len() {
                samples[source_idx]
            } else {
                let left = samples[source_idx] as f64;
                let right = samples[source_idx + 1] as f64;
                (left + (right - left) * fraction) as i16
            }
        })
        .collect()
}
