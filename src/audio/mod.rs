//! Audio decoding and the in-memory waveform type.

pub mod wav;

/// A decoded mono waveform.
///
/// Samples are signed 16-bit PCM at the file's native rate. Pause detection
/// runs directly on this buffer; the transcription leg resamples to 16kHz
/// separately (see [`wav::resample`]).
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSample {
    samples: Vec<i16>,
    sample_rate: u32,
}

impl AudioSample {
    /// Create a waveform from raw mono samples.
    ///
    /// An empty buffer is legal and yields a zero duration; callers treat
    /// that as a degenerate input, not an error.
    pub fn new(samples: Vec<i16>, sample_rate: u32) -> Self {
        Self {
            samples,
            sample_rate,
        }
    }

    /// The raw samples.
    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Native sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Duration in seconds, derived from sample count and rate.
    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    /// The samples resampled to the transcription backend's 16kHz rate.
    pub fn to_transcription_rate(&self) -> Vec<i16> {
        wav::resample(
            &self.samples,
            self.sample_rate,
            crate::defaults::TRANSCRIPTION_SAMPLE_RATE,
        )
    }
}
