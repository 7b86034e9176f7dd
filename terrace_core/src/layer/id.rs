// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer and data-source identity types.

use core::fmt;

/// Sentinel value indicating "no node" or "no source" in index fields.
pub const INVALID: u32 = u32::MAX;

/// A handle to a pane or layer in a [`LayerStack`](super::LayerStack).
///
/// Contains both a slot index and a generation counter so that stale handles
/// can be detected after a node is destroyed and the slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerId {
    /// Slot index into the stack's arrays.
    pub(crate) idx: u32,
    /// Generation counter — must match the stack's generation for this slot.
    pub(crate) generation: u32,
}

impl LayerId {
    /// Returns the raw slot index (for diagnostics only).
    #[inline]
    #[must_use]
    pub const fn index(self) -> u32 {
        self.idx
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LayerId({}@gen{})", self.idx, self.generation)
    }
}

/// An opaque reference to an externally managed data source.
///
/// Sources are created and owned by the host (a tile endpoint, a decoded
/// GeoJSON document, a raster basemap). A layer with `Some(SourceId)` as its
/// source draws that data; `None` indicates a pure grouping pane.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub u32);

impl fmt::Debug for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SourceId({})", self.0)
    }
}
