// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date-sorted NDVI series.

use chrono::NaiveDate;

use crate::decode::{TimestackError, decode_observations};
use crate::sample::{NdviPoint, Observation};

/// A parcel's season of observations, reduced and sorted by date.
///
/// Chart points exist only for observations with computable NDVI statistics;
/// the raw observations are all retained for the metadata panel.
#[derive(Clone, Debug, PartialEq)]
pub struct Timestack {
    observations: Vec<Observation>,
    points: Vec<NdviPoint>,
}

impl Timestack {
    /// Builds a timestack from observations, sorting by date.
    #[must_use]
    pub fn from_observations(mut observations: Vec<Observation>) -> Self {
        observations.sort_by_key(|obs| obs.date);
        let points = observations.iter().filter_map(Observation::reduce).collect();
        Self {
            observations,
            points,
        }
    }

    /// Decodes a timestack CSV for the given season year.
    pub fn decode(csv: &str, year: i32) -> Result<Self, TimestackError> {
        Ok(Self::from_observations(decode_observations(csv, year)?))
    }

    /// All observations, sorted by date.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// The reduced chart points, sorted by date.
    #[must_use]
    pub fn points(&self) -> &[NdviPoint] {
        &self.points
    }

    /// Number of chart points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no chart points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// First and last chart dates, for axis domains.
    #[must_use]
    pub fn date_domain(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }

    /// Returns the chart point nearest to `target`, snapping to the closer
    /// neighbor (ties go to the earlier date).
    ///
    /// This is what hover tracking uses: the pointer's x position inverts to
    /// a date, and the tooltip snaps to the closest observed one.
    #[must_use]
    pub fn nearest(&self, target: NaiveDate) -> Option<&NdviPoint> {
        if self.points.is_empty() {
            return None;
        }
        let i = self.points.partition_point(|p| p.date < target);
        if i == 0 {
            return self.points.first();
        }
        if i == self.points.len() {
            return self.points.last();
        }
        let before = &self.points[i - 1];
        let after = &self.points[i];
        let to_before = (target - before.date).num_days();
        let to_after = (after.date - target).num_days();
        if to_after < to_before {
            Some(after)
        } else {
            Some(before)
        }
    }

    /// Returns the raw observation for a chart date, for the metadata panel.
    #[must_use]
    pub fn observation_on(&self, date: NaiveDate) -> Option<&Observation> {
        self.observations.iter().find(|obs| obs.date == date)
    }
}
