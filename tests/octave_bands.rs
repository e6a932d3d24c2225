// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

use octave_bands::{
    BAND_COUNT, OctaveBandAnalyzer, OctaveBandAnalyzerConfig, SpectrumSource, THIRD_OCTAVE_BANDS,
};

const SAMPLE_RATES_HZ: [f32; 6] = [8_000.0, 22_050.0, 44_100.0, 48_000.0, 96_000.0, 192_000.0];

const SPECTRUM_LENS: [usize; 4] = [256, 1024, 4096, 16384];

fn new_analyzer(spectrum_len: usize) -> OctaveBandAnalyzer {
    OctaveBandAnalyzer::new(OctaveBandAnalyzerConfig { spectrum_len }).unwrap()
}

#[test]
fn bin_ranges_stay_within_spectrum() {
    for spectrum_len in SPECTRUM_LENS {
        let analyzer = new_analyzer(spectrum_len);
        for sample_rate_hz in SAMPLE_RATES_HZ {
            for range in analyzer.band_bin_ranges(sample_rate_hz).unwrap() {
                assert!(range.min <= range.max, "{range:?}");
                assert!(range.max < spectrum_len, "{range:?}");
                assert!(range.bin_count() >= 1);
            }
        }
    }
}

#[test]
fn bin_ranges_do_not_regress() {
    for spectrum_len in SPECTRUM_LENS {
        let analyzer = new_analyzer(spectrum_len);
        for sample_rate_hz in SAMPLE_RATES_HZ {
            let ranges = analyzer.band_bin_ranges(sample_rate_hz).unwrap();
            for pair in ranges.windows(2) {
                assert!(pair[0].min <= pair[1].min, "{pair:?}");
                assert!(pair[0].max <= pair[1].max, "{pair:?}");
            }
        }
    }
}

#[test]
fn uniform_spectrum_yields_uniform_bands() {
    for spectrum_len in SPECTRUM_LENS {
        let mut analyzer = new_analyzer(spectrum_len);
        for value in [0.0, 0.1, 1.0 / 3.0, 0.75, 42.0, 1.0e-20] {
            let spectrum = vec![value; spectrum_len];
            for sample_rate_hz in SAMPLE_RATES_HZ {
                let bands = analyzer.compute_bands(&spectrum, sample_rate_hz).unwrap();
                assert_eq!(bands, &[value; BAND_COUNT]);
            }
        }
    }
}

#[test]
fn bands_beyond_nyquist_saturate_on_top_bin() {
    let mut analyzer = OctaveBandAnalyzer::default();
    let mut spectrum = vec![0.0; analyzer.spectrum_len()];
    *spectrum.last_mut().unwrap() = 1.0;
    let sample_rate_hz = 8_000.0;
    let bands = *analyzer.compute_bands(&spectrum, sample_rate_hz).unwrap();
    for (band, value) in THIRD_OCTAVE_BANDS.iter().zip(bands) {
        if band.lower_hz() > sample_rate_hz / 2.0 {
            assert_eq!(value, 1.0, "{band:?}");
        } else {
            assert!(value < 1.0, "{band:?}");
        }
    }
}

/// Emits a single spectral peak, like a pure sine tone
struct PeakSource {
    sample_rate_hz: f32,
    peak_hz: f32,
}

impl SpectrumSource for PeakSource {
    fn sample_rate_hz(&self) -> f32 {
        self.sample_rate_hz
    }

    #[allow(clippy::cast_possible_truncation)]
    #[allow(clippy::cast_precision_loss)]
    #[allow(clippy::cast_sign_loss)]
    fn fill_spectrum(&mut self, spectrum: &mut [f32]) {
        spectrum.fill(0.0);
        let bin_width_hz = self.sample_rate_hz / (2 * spectrum.len()) as f32;
        let peak_index = (self.peak_hz / bin_width_hz).round() as usize;
        spectrum[peak_index] = 1.0;
    }
}

#[test]
fn peak_shows_up_in_matching_band() {
    let mut analyzer = OctaveBandAnalyzer::default();
    let mut source = PeakSource {
        sample_rate_hz: 48_000.0,
        peak_hz: 1_000.0,
    };
    let source: &mut dyn SpectrumSource = &mut source;
    let bands = *analyzer.update_from_source(source).unwrap();
    let loudest = bands
        .iter()
        .enumerate()
        .max_by(|(_, lhs), (_, rhs)| lhs.total_cmp(rhs))
        .map(|(index, _)| index)
        .unwrap();
    assert_eq!(THIRD_OCTAVE_BANDS[loudest].center_hz(), 1_000.0);
    assert_eq!(bands.iter().filter(|&&value| value > 0.0).count(), 1);
}

#[test]
fn band_table_serializes_to_json() {
    assert_eq!(
        serde_json::to_string(&THIRD_OCTAVE_BANDS[0]).unwrap(),
        r#"{"center_hz":12.5,"lower_hz":11.2,"upper_hz":14.1}"#
    );
}
