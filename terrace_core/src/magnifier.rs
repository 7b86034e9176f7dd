// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Magnifying-glass overlay state.
//!
//! The magnifier shows a high-resolution orthophoto in a circular lens that
//! follows the pointer. Its state machine is small but easy to get wrong in
//! scattered handlers: a wheel-in at the map's deepest useful zoom escalates
//! the lens to a fixed deeper zoom with a larger radius, and the next
//! wheel-out de-escalates *instead of* zooming the map out — so the
//! de-escalating wheel event must be consumed by the host.

/// Static configuration for a [`Magnifier`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MagnifierConfig {
    /// Lens radius in pixels while following the map zoom.
    pub radius: f64,
    /// Lens radius in pixels while escalated.
    pub boosted_radius: f64,
    /// Map zoom at which a wheel-in escalates the lens.
    pub trigger_zoom: u8,
    /// Fixed lens zoom while escalated.
    pub boosted_zoom: u8,
}

impl Default for MagnifierConfig {
    fn default() -> Self {
        Self {
            radius: 140.0,
            boosted_radius: 280.0,
            trigger_zoom: 18,
            boosted_zoom: 19,
        }
    }
}

/// What a wheel event did to the magnifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    /// Whether radius or fixed zoom changed (the host must resize the lens).
    pub changed: bool,
    /// Whether the host must stop the event from also zooming the map.
    pub consumed: bool,
}

/// State machine for the magnifying-glass overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Magnifier {
    config: MagnifierConfig,
    active: bool,
    radius: f64,
    fixed_zoom: Option<u8>,
}

impl Default for Magnifier {
    fn default() -> Self {
        Self::new(MagnifierConfig::default())
    }
}

impl Magnifier {
    /// Creates an inactive magnifier.
    #[must_use]
    pub const fn new(config: MagnifierConfig) -> Self {
        Self {
            config,
            active: false,
            radius: config.radius,
            fixed_zoom: None,
        }
    }

    /// Toggles the overlay on or off, returning the new state.
    ///
    /// Escalation survives a toggle, as re-activating mid-inspection should
    /// restore the lens the user left.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }

    /// Whether the overlay is on the map.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Current lens radius in pixels.
    #[must_use]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Fixed lens zoom while escalated, `None` while following the map.
    #[must_use]
    pub const fn fixed_zoom(&self) -> Option<u8> {
        self.fixed_zoom
    }

    /// Handles a wheel event over the lens.
    ///
    /// `delta_y < 0` is wheel-in. Escalates at the trigger zoom, and
    /// de-escalates (consuming the event) on the first wheel-out afterwards.
    pub fn on_wheel(&mut self, delta_y: f64, map_zoom: u8) -> WheelOutcome {
        if !self.active {
            return WheelOutcome::default();
        }
        if delta_y < 0.0 && map_zoom == self.config.trigger_zoom && self.fixed_zoom.is_none() {
            self.fixed_zoom = Some(self.config.boosted_zoom);
            self.radius = self.config.boosted_radius;
            return WheelOutcome {
                changed: true,
                consumed: false,
            };
        }
        if delta_y > 0.0 && self.fixed_zoom.is_some() {
            self.fixed_zoom = None;
            self.radius = self.config.radius;
            return WheelOutcome {
                changed: true,
                consumed: true,
            };
        }
        WheelOutcome::default()
    }
}
