// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

use thiserror::Error;

/// Invalid input passed to an [`OctaveBandAnalyzer`](crate::OctaveBandAnalyzer)
///
/// All variants are caller errors. Degenerate band ranges at the edges
/// of the spectrum are resolved by clamping and never show up here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    #[error("spectrum length {0} is not a power of two")]
    InvalidSpectrumLength(usize),

    #[error("spectrum contains {actual} bins, expected {expected}")]
    SpectrumLengthMismatch { expected: usize, actual: usize },

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(f32),
}

pub type Result<T> = std::result::Result<T, AnalyzerError>;
