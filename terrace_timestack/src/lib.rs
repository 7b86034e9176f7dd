// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-parcel NDVI time-series decoding and statistics.
//!
//! A *timestack* is the season-long record of satellite observations over
//! one parcel: per observation, digital numbers for eight sample points in
//! several spectral bands plus acquisition metadata and quality flags. This
//! crate turns the backend's CSV into typed observations and reduces them to
//! the NDVI summary the chart collaborator draws:
//!
//! - [`decode_observations`] — header-indexed CSV decoding with typed
//!   [`TimestackError`]s.
//! - [`Observation::ndvi_stats`] — per-date NDVI median/min/max over the
//!   sample points, skipping non-finite values.
//! - [`Timestack`] — the date-sorted series with nearest-date lookup for
//!   hover snapping and access to the raw observation behind each point.
//!
//! Fetching the CSV (and deciding what to show when a parcel has no
//! timestack) stays with the host.

mod decode;
mod sample;
mod series;

pub use decode::{TimestackError, decode_observations};
pub use sample::{NdviPoint, NdviStats, Observation, PointSample, QualityFlags};
pub use series::Timestack;
