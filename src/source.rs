// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

/// Provider of magnitude spectra, e.g. a windowed FFT stage
///
/// The spectrum is one-sided: bin `i` represents the frequency
/// `i * sample_rate / (2 * spectrum.len())`.
pub trait SpectrumSource {
    /// Sample rate of the audio the spectrum has been captured from
    fn sample_rate_hz(&self) -> f32;

    /// Overwrite all bins of `spectrum` with the current magnitudes
    fn fill_spectrum(&mut self, spectrum: &mut [f32]);
}

/// A fixed, pre-captured spectrum
///
/// Useful for replaying recorded frames. Bins that are missing when
/// filling a longer buffer are set to zero, surplus bins are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticSpectrum {
    sample_rate_hz: f32,
    magnitudes: Vec<f32>,
}

impl StaticSpectrum {
    #[must_use]
    pub const fn new(sample_rate_hz: f32, magnitudes: Vec<f32>) -> Self {
        Self {
            sample_rate_hz,
            magnitudes,
        }
    }

    #[must_use]
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }
}

impl SpectrumSource for StaticSpectrum {
    fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }

    fn fill_spectrum(&mut self, spectrum: &mut [f32]) {
        let len = spectrum.len().min(self.magnitudes.len());
        let (head, tail) = spectrum.split_at_mut(len);
        head.copy_from_slice(&self.magnitudes[..len]);
        tail.fill(0.0);
    }
}
