// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

#![doc = include_str!("../README.md")]

mod analyzer;
pub use analyzer::{BinRange, OctaveBandAnalyzer, OctaveBandAnalyzerConfig};

mod band;
pub use band::{
    BAND_COUNT, ONE_THIRD_OCTAVE_RATIO, OctaveBand, THIRD_OCTAVE_BANDS, third_octave_band,
};

mod error;
pub use error::{AnalyzerError, Result};

mod source;
pub use source::{SpectrumSource, StaticSpectrum};
