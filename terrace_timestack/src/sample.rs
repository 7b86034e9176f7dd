// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observation data model and NDVI reduction.

use chrono::NaiveDate;

/// Per-observation quality flags.
///
/// Any raised flag makes the observation unusable for vegetation statistics;
/// the chart still shows the date, marked as cloudy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct QualityFlags {
    /// Clouds over the parcel.
    pub cloud_cover: bool,
    /// Haze over the parcel.
    pub haze: bool,
    /// Cloud shadow over the parcel.
    pub cloud_shadow: bool,
}

impl QualityFlags {
    /// Whether any flag is raised.
    #[must_use]
    pub const fn any(self) -> bool {
        self.cloud_cover || self.haze || self.cloud_shadow
    }
}

/// Digital numbers for one sample point, by band name.
#[derive(Clone, Debug, PartialEq)]
pub struct PointSample {
    /// Point label, e.g. `P3`.
    pub label: String,
    /// `(band, digital number)` pairs in column order, e.g. `("NIR", 5200.0)`.
    pub bands: Vec<(String, f64)>,
}

impl PointSample {
    /// Returns the digital number for `band`, if sampled.
    #[must_use]
    pub fn band(&self, band: &str) -> Option<f64> {
        self.bands
            .iter()
            .find(|(name, _)| name == band)
            .map(|(_, value)| *value)
    }

    /// Computes the point's NDVI, `(NIR − R) / (NIR + R)`.
    ///
    /// Returns `None` if either band is missing. A zero denominator yields a
    /// non-finite value; reductions skip those.
    #[must_use]
    pub fn ndvi(&self) -> Option<f64> {
        let nir = self.band("NIR")?;
        let red = self.band("R")?;
        Some((nir - red) / (nir + red))
    }
}

/// One satellite observation over a parcel.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    /// Week number within the season.
    pub week: u32,
    /// Acquisition date.
    pub date: NaiveDate,
    /// Sensor name, e.g. `S2A`.
    pub sensor: String,
    /// Quality flags.
    pub flags: QualityFlags,
    /// Sample points in label order.
    pub points: Vec<PointSample>,
}

/// NDVI summary statistics over an observation's sample points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdviStats {
    /// Median NDVI (interpolated for even counts).
    pub median: f64,
    /// Minimum NDVI.
    pub min: f64,
    /// Maximum NDVI.
    pub max: f64,
}

impl Observation {
    /// Whether the observation is usable for vegetation statistics.
    #[must_use]
    pub const fn cloudfree(&self) -> bool {
        !self.flags.any()
    }

    /// Reduces the sample points to NDVI statistics.
    ///
    /// Non-finite NDVI values (dead pixels, zero denominators) are skipped;
    /// returns `None` when nothing finite remains.
    #[must_use]
    pub fn ndvi_stats(&self) -> Option<NdviStats> {
        let mut values: Vec<f64> = self
            .points
            .iter()
            .filter_map(PointSample::ndvi)
            .filter(|value| value.is_finite())
            .collect();
        if values.is_empty() {
            return None;
        }
        values.sort_by(f64::total_cmp);

        let n = values.len();
        let median = if n % 2 == 1 {
            values[n / 2]
        } else {
            (values[n / 2 - 1] + values[n / 2]) / 2.0
        };
        Some(NdviStats {
            median,
            min: values[0],
            max: values[n - 1],
        })
    }

    /// Reduces the observation to one chart point, if statistics exist.
    #[must_use]
    pub fn reduce(&self) -> Option<NdviPoint> {
        let stats = self.ndvi_stats()?;
        Some(NdviPoint {
            date: self.date,
            median: stats.median,
            min: stats.min,
            max: stats.max,
            cloudfree: self.cloudfree(),
        })
    }
}

/// One reduced point of the NDVI chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdviPoint {
    /// Acquisition date.
    pub date: NaiveDate,
    /// Median NDVI over the sample points.
    pub median: f64,
    /// Minimum NDVI over the sample points.
    pub min: f64,
    /// Maximum NDVI over the sample points.
    pub max: f64,
    /// Whether the observation was cloud-free.
    pub cloudfree: bool,
}
