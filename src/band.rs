// SPDX-FileCopyrightText: The octave-bands authors
// SPDX-License-Identifier: MPL-2.0

use serde::Serialize;

/// Number of one-third octave bands between 12.5 Hz and 20 kHz.
pub const BAND_COUNT: usize = 33;

/// Ratio between the upper and the lower edge of a one-third octave band
///
/// The cube root of two, i.e. `2^(1/3) ~= 1.260`.
pub const ONE_THIRD_OCTAVE_RATIO: f32 = 1.259_921;

/// A single one-third octave band
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OctaveBand {
    center_hz: f32,
    lower_hz: f32,
    upper_hz: f32,
}

impl OctaveBand {
    const fn new(center_hz: f32, lower_hz: f32, upper_hz: f32) -> Self {
        Self {
            center_hz,
            lower_hz,
            upper_hz,
        }
    }

    /// Nominal (ISO 266) center frequency
    ///
    /// Informational only, the aggregation uses the band edges.
    #[must_use]
    pub const fn center_hz(&self) -> f32 {
        self.center_hz
    }

    #[must_use]
    pub const fn lower_hz(&self) -> f32 {
        self.lower_hz
    }

    #[must_use]
    pub const fn upper_hz(&self) -> f32 {
        self.upper_hz
    }

    #[must_use]
    pub const fn bandwidth_hz(&self) -> f32 {
        self.upper_hz - self.lower_hz
    }
}

/// The fixed table of one-third octave bands, ordered by increasing frequency
pub static THIRD_OCTAVE_BANDS: [OctaveBand; BAND_COUNT] = [
    OctaveBand::new(12.5, 11.2, 14.1),
    OctaveBand::new(16.0, 14.1, 17.8),
    OctaveBand::new(20.0, 17.8, 22.4),
    OctaveBand::new(25.0, 22.4, 28.2),
    OctaveBand::new(31.5, 28.2, 35.5),
    OctaveBand::new(40.0, 35.5, 44.7),
    OctaveBand::new(50.0, 44.7, 56.2),
    OctaveBand::new(63.0, 56.2, 70.8),
    OctaveBand::new(80.0, 70.8, 89.1),
    OctaveBand::new(100.0, 89.1, 112.0),
    OctaveBand::new(125.0, 112.0, 141.0),
    OctaveBand::new(160.0, 141.0, 178.0),
    OctaveBand::new(200.0, 178.0, 224.0),
    OctaveBand::new(250.0, 224.0, 282.0),
    OctaveBand::new(315.0, 282.0, 355.0),
    OctaveBand::new(400.0, 355.0, 447.0),
    OctaveBand::new(500.0, 447.0, 562.0),
    OctaveBand::new(630.0, 562.0, 708.0),
    OctaveBand::new(800.0, 708.0, 891.0),
    OctaveBand::new(1_000.0, 891.0, 1_122.0),
    OctaveBand::new(1_250.0, 1_122.0, 1_413.0),
    OctaveBand::new(1_600.0, 1_413.0, 1_778.0),
    OctaveBand::new(2_000.0, 1_778.0, 2_239.0),
    OctaveBand::new(2_500.0, 2_239.0, 2_818.0),
    OctaveBand::new(3_150.0, 2_818.0, 3_548.0),
    OctaveBand::new(4_000.0, 3_548.0, 4_467.0),
    OctaveBand::new(5_000.0, 4_467.0, 5_623.0),
    OctaveBand::new(6_300.0, 5_623.0, 7_079.0),
    OctaveBand::new(8_000.0, 7_079.0, 8_913.0),
    OctaveBand::new(10_000.0, 8_913.0, 11_220.0),
    OctaveBand::new(12_500.0, 11_220.0, 14_130.0),
    OctaveBand::new(16_000.0, 14_130.0, 17_780.0),
    OctaveBand::new(20_000.0, 17_780.0, 22_390.0),
];

/// Look up a band by its index into [`THIRD_OCTAVE_BANDS`]
#[must_use]
pub fn third_octave_band(index: usize) -> Option<&'static OctaveBand> {
    THIRD_OCTAVE_BANDS.get(index)
}
