// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport state and the host event stream.
//!
//! The host shell owns the real viewport (a DOM container, a native view).
//! This module defines the events it forwards into the core — all
//! container-relative, in CSS pixels — plus a small [`Viewport`] tracker
//! that turns host callbacks into well-formed [`MapEvent`]s (notably the
//! `old`/`new` pair a resize needs).

use kurbo::{Size, Vec2};

use crate::layer::LayerId;

/// An input event delivered by the host shell.
///
/// All coordinates are relative to the map container. Events are delivered
/// synchronously on the host's UI thread; the core never blocks on them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MapEvent {
    /// The container was resized.
    Resize {
        /// Size before the resize.
        old: Size,
        /// Size after the resize.
        new: Size,
    },
    /// The map content moved by `delta` pixels.
    Pan {
        /// Screen-space movement of the map content.
        delta: Vec2,
    },
    /// A zoom gesture or animation began.
    ZoomStart,
    /// A zoom gesture or animation settled on `zoom`.
    ZoomEnd {
        /// The new integer zoom level.
        zoom: u8,
    },
    /// A layer was added to the map (e.g. via a layer-selector control).
    LayerAdded(LayerId),
    /// A layer was removed from the map.
    LayerRemoved(LayerId),
    /// The swipe divider handle was dragged to horizontal position `x`.
    DividerDrag {
        /// Container-relative x position of the handle, unclamped.
        x: f64,
    },
    /// A pointer went down anywhere on the map.
    PointerDown,
}

/// Tracks the host viewport's size and zoom between events.
///
/// Optional convenience: hosts that do not keep their own previous-size
/// bookkeeping can route size and zoom updates through this tracker and
/// forward the returned events.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    size: Size,
    zoom: u8,
}

impl Viewport {
    /// Creates a viewport tracker.
    #[must_use]
    pub const fn new(size: Size, zoom: u8) -> Self {
        Self { size, zoom }
    }

    /// Current size in pixels.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Current integer zoom level.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Records a resize and returns the corresponding event.
    pub fn resize(&mut self, new: Size) -> MapEvent {
        let old = self.size;
        self.size = new;
        MapEvent::Resize { old, new }
    }

    /// Records a settled zoom and returns the corresponding event.
    pub fn zoom_to(&mut self, zoom: u8) -> MapEvent {
        self.zoom = zoom;
        MapEvent::ZoomEnd { zoom }
    }
}
