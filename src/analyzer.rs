// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    AnalyzerError, BAND_COUNT, OctaveBand, SpectrumSource, THIRD_OCTAVE_BANDS, error::Result,
};

// The band table has been laid out for 4096 bins at 44.1 kHz, i.e.
// a frequency resolution of ~5.38 Hz per bin. The lowest band is
// still wider than a single bin.
const DEFAULT_SPECTRUM_LEN: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OctaveBandAnalyzerConfig {
    /// Number of bins of the one-sided magnitude spectrum
    ///
    /// Must be a power of two.
    pub spectrum_len: usize,
}

impl OctaveBandAnalyzerConfig {
    pub const DEFAULT: Self = Self {
        spectrum_len: DEFAULT_SPECTRUM_LEN,
    };
}

impl Default for OctaveBandAnalyzerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Inclusive range of spectrum bins that contribute to a band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinRange {
    pub min: usize,
    pub max: usize,
}

impl BinRange {
    /// Number of bins, at least 1
    #[must_use]
    pub const fn bin_count(self) -> usize {
        debug_assert!(self.min <= self.max);
        self.max - self.min + 1
    }
}

/// Maps frequencies onto the bins of a one-sided spectrum
#[derive(Debug, Clone, Copy)]
struct BinMapper {
    bins_per_hz: f32,
    max_index: usize,
}

impl BinMapper {
    fn new(spectrum_len: usize, sample_rate_hz: f32) -> Result<Self> {
        debug_assert!(spectrum_len.is_power_of_two());
        if !sample_rate_hz.is_finite() || sample_rate_hz <= 0.0 {
            return Err(AnalyzerError::InvalidSampleRate(sample_rate_hz));
        }
        // Bin width is `sample_rate / (2 * spectrum_len)`. Multiplying
        // by the inverse avoids a division per band edge.
        #[allow(clippy::cast_precision_loss)]
        let bins_per_hz = 2.0 * spectrum_len as f32 / sample_rate_hz;
        Ok(Self {
            bins_per_hz,
            max_index: spectrum_len - 1,
        })
    }

    fn index(self, freq_hz: f32) -> usize {
        let index = (freq_hz * self.bins_per_hz).floor();
        if index <= 0.0 {
            return 0;
        }
        // Saturates for frequencies far beyond Nyquist.
        #[allow(clippy::cast_possible_truncation)]
        #[allow(clippy::cast_sign_loss)]
        let index = index as usize;
        index.min(self.max_index)
    }

    fn band_range(self, band: &OctaveBand) -> BinRange {
        let min = self.index(band.lower_hz());
        let max = self.index(band.upper_hz());
        // Both edges may have been clamped onto the same boundary bin.
        BinRange {
            min,
            max: max.max(min),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
fn mean(bins: &[f32]) -> f32 {
    debug_assert!(!bins.is_empty());
    // Accumulate with extended precision. A constant spectrum then
    // results in exactly that constant.
    let sum = bins.iter().copied().map(f64::from).sum::<f64>();
    (sum / bins.len() as f64) as f32
}

fn aggregate_bands(
    mapper: BinMapper,
    spectrum: &[f32],
    octave_bands: &mut [f32; BAND_COUNT],
) {
    debug_assert_eq!(spectrum.len(), mapper.max_index + 1);
    let mut single_bin_bands = 0_usize;
    for (band, band_value) in THIRD_OCTAVE_BANDS.iter().zip(octave_bands.iter_mut()) {
        let BinRange { min, max } = mapper.band_range(band);
        if min == max {
            single_bin_bands += 1;
        }
        *band_value = mean(&spectrum[min..=max]);
    }
    trace!(single_bin_bands, "Computed octave bands");
}

/// Aggregates a magnitude spectrum into one-third octave bands
///
/// Each band value is the arithmetic mean of all spectrum bins
/// between the lower and upper edge frequency of the band. Bands
/// beyond the Nyquist frequency saturate on the topmost bin.
///
/// No smoothing is applied. Every computation yields an instantaneous
/// snapshot of the given spectrum.
#[derive(Debug)]
pub struct OctaveBandAnalyzer {
    config: OctaveBandAnalyzerConfig,
    spectrum: Box<[f32]>,
    octave_bands: [f32; BAND_COUNT],
}

impl Default for OctaveBandAnalyzer {
    fn default() -> Self {
        Self::with_config(OctaveBandAnalyzerConfig::DEFAULT)
    }
}

impl OctaveBandAnalyzer {
    pub fn new(config: OctaveBandAnalyzerConfig) -> Result<Self> {
        let OctaveBandAnalyzerConfig { spectrum_len } = config;
        if !spectrum_len.is_power_of_two() {
            return Err(AnalyzerError::InvalidSpectrumLength(spectrum_len));
        }
        debug!(spectrum_len, "Created octave band analyzer");
        Ok(Self::with_config(config))
    }

    fn with_config(config: OctaveBandAnalyzerConfig) -> Self {
        let spectrum = vec![0.0; config.spectrum_len].into_boxed_slice();
        Self {
            config,
            spectrum,
            octave_bands: [0.0; BAND_COUNT],
        }
    }

    #[must_use]
    pub const fn config(&self) -> &OctaveBandAnalyzerConfig {
        &self.config
    }

    #[must_use]
    pub const fn spectrum_len(&self) -> usize {
        self.config.spectrum_len
    }

    /// The spectrum that has been filled by the last [`SpectrumSource`]
    #[must_use]
    pub fn spectrum(&self) -> &[f32] {
        &self.spectrum
    }

    /// Band values of the last successful computation
    ///
    /// All zero initially.
    #[must_use]
    pub const fn octave_bands(&self) -> &[f32; BAND_COUNT] {
        &self.octave_bands
    }

    /// Frequency represented by a spectrum bin
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bin_frequency_hz(&self, index: usize, sample_rate_hz: f32) -> f32 {
        index as f32 * sample_rate_hz / (2 * self.spectrum_len()) as f32
    }

    /// Bin ranges of all bands at the given sample rate
    pub fn band_bin_ranges(&self, sample_rate_hz: f32) -> Result<[BinRange; BAND_COUNT]> {
        let mapper = BinMapper::new(self.spectrum_len(), sample_rate_hz)?;
        Ok(std::array::from_fn(|index| {
            mapper.band_range(&THIRD_OCTAVE_BANDS[index])
        }))
    }

    /// Compute the band values of a magnitude spectrum
    ///
    /// The previous band values are only replaced if the input is valid.
    pub fn compute_bands(
        &mut self,
        spectrum: &[f32],
        sample_rate_hz: f32,
    ) -> Result<&[f32; BAND_COUNT]> {
        if spectrum.len() != self.spectrum_len() {
            return Err(AnalyzerError::SpectrumLengthMismatch {
                expected: self.spectrum_len(),
                actual: spectrum.len(),
            });
        }
        let mapper = BinMapper::new(self.spectrum_len(), sample_rate_hz)?;
        aggregate_bands(mapper, spectrum, &mut self.octave_bands);
        Ok(&self.octave_bands)
    }

    /// Fetch the current spectrum from `source` and compute its band values
    pub fn update_from_source<S>(&mut self, source: &mut S) -> Result<&[f32; BAND_COUNT]>
    where
        S: SpectrumSource + ?Sized,
    {
        let mapper = BinMapper::new(self.spectrum_len(), source.sample_rate_hz())?;
        source.fill_spectrum(&mut self.spectrum);
        aggregate_bands(mapper, &self.spectrum, &mut self.octave_bands);
        Ok(&self.octave_bands)
    }

    pub fn reset(&mut self) {
        self.spectrum.fill(0.0);
        self.octave_bands = [0.0; BAND_COUNT];
        debug!("Reset octave band analyzer");
    }
}
