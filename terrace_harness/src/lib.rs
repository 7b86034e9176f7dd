// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reusable classification-agreement metrics and grading for demo harnesses.

#![no_std]

extern crate alloc;

use alloc::string::String;
use terrace_core::parcel::Conformity;

/// How strictly agreement quality is judged.
///
/// The same disagreement rate reads very differently depending on what the
/// survey is for; thresholds below are per profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurveyProfile {
    /// Pre-payment certification checks.
    Certification,
    /// Season-long monitoring.
    Monitoring,
    /// First-pass screening of a new region.
    Screening,
}

/// Per-parcel metrics sample fed into [`AgreementTracker::observe`].
#[derive(Clone, Copy, Debug)]
pub struct AgreementSample {
    /// Agreement between declaration and classification.
    pub conformity: Conformity,
    /// Classification confidence in percent, if classified.
    pub confidence: Option<f32>,
}

/// Letter grade for classification-agreement quality.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgreementGrade {
    /// High agreement and high confidence.
    A,
    /// Good agreement with moderate exceptions.
    B,
    /// Degraded but reviewable.
    C,
    /// Poor agreement.
    D,
}

impl AgreementGrade {
    /// Returns a short label for HUD rendering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}

/// Aggregated report returned by [`AgreementTracker::observe`].
#[derive(Clone, Copy, Debug)]
pub struct AgreementReport {
    /// Current grade.
    pub grade: AgreementGrade,
    /// Non-conform parcels per 1000 observed.
    pub disagreement_per_1000: f64,
    /// Below-threshold parcels per 1000 observed.
    pub low_confidence_per_1000: f64,
    /// Total parcels observed.
    pub total_parcels: u64,
    /// Total non-conform parcels observed.
    pub nonconform_parcels: u64,
}

/// Rolling agreement tracker with fixed-size confidence history.
#[derive(Debug)]
pub struct AgreementTracker<const N: usize> {
    profile: SurveyProfile,
    threshold: f32,
    confidences: [f32; N],
    cursor: usize,
    total_parcels: u64,
    nonconform_parcels: u64,
    low_confidence_parcels: u64,
}

impl<const N: usize> AgreementTracker<N> {
    /// Creates a tracker with the ring buffer prefilled at full confidence.
    #[must_use]
    pub const fn new(profile: SurveyProfile, threshold: f32) -> Self {
        Self {
            profile,
            threshold,
            confidences: [100.0; N],
            cursor: 0,
            total_parcels: 0,
            nonconform_parcels: 0,
            low_confidence_parcels: 0,
        }
    }

    /// Observes one parcel and returns an updated report.
    #[must_use]
    pub fn observe(&mut self, sample: AgreementSample) -> AgreementReport {
        self.total_parcels = self.total_parcels.saturating_add(1);
        self.confidences[self.cursor % N] = sample.confidence.unwrap_or(0.0);
        self.cursor = (self.cursor + 1) % N;

        if sample.conformity == Conformity::NotConform {
            self.nonconform_parcels = self.nonconform_parcels.saturating_add(1);
        }
        if sample.confidence.is_some_and(|c| c < self.threshold) {
            self.low_confidence_parcels = self.low_confidence_parcels.saturating_add(1);
        }

        let disagreement = self.rate_per_1000(self.nonconform_parcels);
        let low_confidence = self.rate_per_1000(self.low_confidence_parcels);
        let grade = grade_for(self.profile, disagreement, low_confidence);

        AgreementReport {
            grade,
            disagreement_per_1000: disagreement,
            low_confidence_per_1000: low_confidence,
            total_parcels: self.total_parcels,
            nonconform_parcels: self.nonconform_parcels,
        }
    }

    /// Returns ring-buffer confidences oldest→newest.
    #[must_use]
    pub fn confidences(&self) -> [f32; N] {
        let mut out = [0.0; N];
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            out[i] = self.confidences[idx];
            i += 1;
        }
        out
    }

    /// Returns an ASCII sparkline over `confidences()`.
    #[must_use]
    pub fn sparkline_ascii(&self, min: f32, max: f32) -> String {
        const LEVELS: &[u8] = b" .:-=+*#%@";
        let mut out = String::with_capacity(N);
        let mut i = 0;
        while i < N {
            let idx = (self.cursor + i) % N;
            let v = self.confidences[idx].clamp(min, max);
            let t = f64::from((v - min) / (max - min));
            #[expect(
                clippy::cast_possible_truncation,
                reason = "index is clamped to ASCII level count"
            )]
            let level = (t * (LEVELS.len() as f64 - 1.0) + 0.5) as usize;
            out.push(LEVELS[level] as char);
            i += 1;
        }
        out
    }

    fn rate_per_1000(&self, count: u64) -> f64 {
        if self.total_parcels == 0 {
            0.0
        } else {
            count as f64 * 1000.0 / self.total_parcels as f64
        }
    }
}

fn grade_for(
    profile: SurveyProfile,
    disagreement_per_1000: f64,
    low_confidence_per_1000: f64,
) -> AgreementGrade {
    let (a_dis, b_dis, c_dis, a_low, b_low, c_low) = match profile {
        SurveyProfile::Certification => (5.0, 20.0, 60.0, 30.0, 80.0, 200.0),
        SurveyProfile::Monitoring => (15.0, 50.0, 120.0, 60.0, 150.0, 350.0),
        SurveyProfile::Screening => (40.0, 100.0, 250.0, 120.0, 300.0, 600.0),
    };

    if disagreement_per_1000 < a_dis && low_confidence_per_1000 < a_low {
        AgreementGrade::A
    } else if disagreement_per_1000 < b_dis && low_confidence_per_1000 < b_low {
        AgreementGrade::B
    } else if disagreement_per_1000 < c_dis && low_confidence_per_1000 < c_low {
        AgreementGrade::C
    } else {
        AgreementGrade::D
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disagreement_rate_accumulates() {
        let mut t = AgreementTracker::<8>::new(SurveyProfile::Screening, 95.0);
        let mut i = 0;
        while i < 10 {
            let report = t.observe(AgreementSample {
                conformity: if i < 2 {
                    Conformity::NotConform
                } else {
                    Conformity::Conform
                },
                confidence: Some(98.0),
            });
            if i == 9 {
                assert!((report.disagreement_per_1000 - 200.0).abs() < 1e-6);
            }
            i += 1;
        }
    }

    #[test]
    fn certification_thresholds_are_stricter() {
        // Identical history: one low-confidence parcel out of ten
        // (100 per 1000).
        fn run(profile: SurveyProfile) -> AgreementGrade {
            let mut t = AgreementTracker::<4>::new(profile, 95.0);
            let mut report = t.observe(AgreementSample {
                conformity: Conformity::Conform,
                confidence: Some(90.0),
            });
            let mut i = 0;
            while i < 9 {
                report = t.observe(AgreementSample {
                    conformity: Conformity::Conform,
                    confidence: Some(99.0),
                });
                i += 1;
            }
            report.grade
        }

        assert_eq!(run(SurveyProfile::Certification), AgreementGrade::C);
        assert_eq!(run(SurveyProfile::Screening), AgreementGrade::A);
    }

    #[test]
    fn unclassified_counts_as_zero_confidence_in_history() {
        let mut t = AgreementTracker::<4>::new(SurveyProfile::Monitoring, 95.0);
        let _ = t.observe(AgreementSample {
            conformity: Conformity::Unclassified,
            confidence: None,
        });
        let history = t.confidences();
        assert!(history.contains(&0.0));
    }

    #[test]
    fn sparkline_has_one_char_per_slot() {
        let mut t = AgreementTracker::<16>::new(SurveyProfile::Monitoring, 95.0);
        let _ = t.observe(AgreementSample {
            conformity: Conformity::Conform,
            confidence: Some(50.0),
        });
        let line = t.sparkline_ascii(0.0, 100.0);
        assert_eq!(line.len(), 16);
    }

    #[test]
    fn perfect_run_grades_a() {
        let mut t = AgreementTracker::<8>::new(SurveyProfile::Certification, 95.0);
        let mut report = None;
        let mut i = 0;
        while i < 100 {
            report = Some(t.observe(AgreementSample {
                conformity: Conformity::Conform,
                confidence: Some(99.0),
            }));
            i += 1;
        }
        assert_eq!(report.expect("observed").grade, AgreementGrade::A);
    }
}
