// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Classification styling policy.
//!
//! Style is policy, not state: the [`LayerStack`](crate::layer::LayerStack)
//! only tracks *that* a node needs restyling, while the functions here
//! compute *what* the style is from feature properties. Hosts call them when
//! applying [`StackChanges`](crate::layer::StackChanges) or when a feature
//! is hovered or selected.
//!
//! The traffic-light scheme: a parcel below the confidence threshold is
//! always yellow; above it, agreement between declaration and classification
//! decides green or red; parcels without a classification are grey.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Default classification confidence threshold, in percent.
pub const CONFIDENCE_THRESHOLD: f32 = 95.0;

/// Agreement between the declared crop and the classified crop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Conformity {
    /// Classification agrees with the declaration.
    Conform,
    /// Classification contradicts the declaration.
    NotConform,
    /// No classification result for this parcel.
    #[default]
    Unclassified,
}

impl Conformity {
    /// Short answer for hover summaries.
    #[must_use]
    pub const fn as_answer(self) -> &'static str {
        match self {
            Self::Conform => "yes",
            Self::NotConform => "no",
            Self::Unclassified => "not classified",
        }
    }
}

/// Attributes of one agricultural parcel feature.
#[derive(Clone, Debug, PartialEq)]
pub struct ParcelProperties {
    /// Unique parcel identifier.
    pub id: u64,
    /// Declared crop type.
    pub declared_crop: String,
    /// Agreement between declaration and classification.
    pub conformity: Conformity,
    /// Classification confidence in percent, if classified.
    pub confidence: Option<f32>,
}

/// Attributes of one reference-block feature.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockProperties {
    /// Unique block identifier.
    pub id: u64,
    /// Reference type code.
    pub kind: String,
}

/// The traffic-light palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TrafficColor {
    /// Conform with high confidence.
    Green,
    /// Below the confidence threshold.
    Yellow,
    /// Not conform with high confidence.
    Red,
    /// Not classified.
    Grey,
}

impl TrafficColor {
    /// CSS color keyword for this entry.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Grey => "grey",
        }
    }
}

/// Outline color of a drawn parcel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutlineColor {
    /// Matches the fill (the traffic-light color).
    Traffic(TrafficColor),
    /// The selection highlight.
    Highlight,
}

impl OutlineColor {
    /// CSS color keyword for this entry.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Traffic(color) => color.as_css(),
            Self::Highlight => "orange",
        }
    }
}

/// Computed paint values for one parcel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParcelStyle {
    /// Fill color.
    pub fill: TrafficColor,
    /// Outline color.
    pub outline: OutlineColor,
    /// Stroke weight in pixels.
    pub weight: f64,
    /// Fill opacity in `0.0..=1.0`.
    pub fill_opacity: f64,
}

/// Classifies a parcel into the traffic-light palette.
///
/// Low confidence dominates: a parcel below `threshold` is yellow no matter
/// what the classifier said. A parcel without a confidence value is judged on
/// conformity alone.
#[must_use]
pub fn classify(properties: &ParcelProperties, threshold: f32) -> TrafficColor {
    if properties.confidence.is_some_and(|c| c < threshold) {
        return TrafficColor::Yellow;
    }
    match properties.conformity {
        Conformity::Conform => TrafficColor::Green,
        Conformity::NotConform => TrafficColor::Red,
        Conformity::Unclassified => TrafficColor::Grey,
    }
}

/// Computes the paint style for a parcel.
///
/// Selected parcels switch to the highlight outline and a solid fill so they
/// read through neighboring geometry.
#[must_use]
pub fn parcel_style(
    properties: &ParcelProperties,
    threshold: f32,
    highlighted: bool,
) -> ParcelStyle {
    let fill = classify(properties, threshold);
    if highlighted {
        ParcelStyle {
            fill,
            outline: OutlineColor::Highlight,
            weight: 0.3,
            fill_opacity: 1.0,
        }
    } else {
        ParcelStyle {
            fill,
            outline: OutlineColor::Traffic(fill),
            weight: 0.3,
            fill_opacity: 0.6,
        }
    }
}

/// Zoom-dependent paint toggles for administrative boundary geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundaryStyle {
    /// Whether the region fill is drawn.
    pub fill: bool,
    /// Whether the region outline is drawn.
    pub stroke: bool,
}

/// Computes the boundary style for a zoom level.
///
/// The solid region fill is only useful as a far-out locator; the outline
/// stays a little longer and disappears once parcel geometry carries the
/// picture.
#[must_use]
pub fn boundary_style(zoom: u8) -> BoundaryStyle {
    BoundaryStyle {
        fill: zoom < 11,
        stroke: zoom < 13,
    }
}

/// One row of the classification legend.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendRow {
    /// Swatch color.
    pub color: TrafficColor,
    /// Description lines under the swatch.
    pub lines: Vec<String>,
}

/// Builds the legend rows for the given confidence threshold.
#[must_use]
pub fn legend_rows(threshold: f32) -> Vec<LegendRow> {
    let high_confidence = format!("High Confidence (≥{threshold}%)");
    alloc::vec![
        LegendRow {
            color: TrafficColor::Green,
            lines: alloc::vec![String::from("Conform"), high_confidence.clone()],
        },
        LegendRow {
            color: TrafficColor::Yellow,
            lines: alloc::vec![format!("Low Confidence (<{threshold}%)")],
        },
        LegendRow {
            color: TrafficColor::Red,
            lines: alloc::vec![String::from("Not conform"), high_confidence],
        },
    ]
}

/// Hover summary for a parcel.
#[must_use]
pub fn parcel_summary(properties: &ParcelProperties) -> String {
    let confidence = match properties.confidence {
        Some(value) => format!("{value}%"),
        None => String::new(),
    };
    format!(
        "ID: {}\nDeclaration: {}\nConform: {}\nConfidence level: {}",
        properties.id,
        properties.declared_crop,
        properties.conformity.as_answer(),
        confidence
    )
}

/// Hover summary for a reference block.
#[must_use]
pub fn block_summary(properties: &BlockProperties) -> String {
    format!("ID: {}\nType: {}", properties.id, properties.kind)
}
