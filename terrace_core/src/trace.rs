// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the interaction loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! event-loop instrumentation calls at each stage. All method bodies default
//! to no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! Hosts drive the tracer around their event loop:
//!
//! ```rust,ignore
//! tracer.input(&InputEvent::new(seq, &event));
//! coordinator.handle(&event);
//! let changes = coordinator.evaluate();
//! for e in AttachmentEvent::from_changes(seq, &changes) {
//!     tracer.attachment(&e);
//! }
//! ```

use alloc::vec::Vec;

use crate::layer::StackChanges;
use crate::swipe::{ControlId, SwipeChanges};
use crate::viewport::MapEvent;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Which kind of host input was delivered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputKind {
    /// Divider drag.
    Drag,
    /// Container resize.
    Resize,
    /// Map pan.
    Pan,
    /// Zoom gesture began.
    ZoomStart,
    /// Zoom settled.
    ZoomEnd,
    /// Layer added to the map.
    LayerAdded,
    /// Layer removed from the map.
    LayerRemoved,
    /// Pointer went down.
    PointerDown,
}

impl From<&MapEvent> for InputKind {
    fn from(event: &MapEvent) -> Self {
        match event {
            MapEvent::DividerDrag { .. } => Self::Drag,
            MapEvent::Resize { .. } => Self::Resize,
            MapEvent::Pan { .. } => Self::Pan,
            MapEvent::ZoomStart => Self::ZoomStart,
            MapEvent::ZoomEnd { .. } => Self::ZoomEnd,
            MapEvent::LayerAdded(_) => Self::LayerAdded,
            MapEvent::LayerRemoved(_) => Self::LayerRemoved,
            MapEvent::PointerDown => Self::PointerDown,
        }
    }
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when the host delivers an input event.
#[derive(Clone, Copy, Debug)]
pub struct InputEvent {
    /// Monotonic event counter, assigned by the host.
    pub seq: u64,
    /// Which kind of input.
    pub kind: InputKind,
}

impl InputEvent {
    /// Creates an event record for a [`MapEvent`].
    #[must_use]
    pub fn new(seq: u64, event: &MapEvent) -> Self {
        Self {
            seq,
            kind: InputKind::from(event),
        }
    }
}

/// Emitted when a control attaches to or detaches from the map UI.
#[derive(Clone, Copy, Debug)]
pub struct AttachmentEvent {
    /// Event counter of the input that caused the transition.
    pub seq: u64,
    /// Which control transitioned.
    pub control: ControlId,
    /// `true` on attach, `false` on detach.
    pub attached: bool,
}

impl AttachmentEvent {
    /// Collects the attachment transitions of a drained batch.
    #[must_use]
    pub fn from_changes(seq: u64, changes: &SwipeChanges) -> Vec<Self> {
        let mut events = Vec::new();
        for &control in &changes.attached {
            events.push(Self {
                seq,
                control,
                attached: true,
            });
        }
        for &control in &changes.detached {
            events.push(Self {
                seq,
                control,
                attached: false,
            });
        }
        events
    }
}

/// Emitted when the pane extent changes.
#[derive(Clone, Copy, Debug)]
pub struct ExtentEvent {
    /// Event counter of the input that caused the change.
    pub seq: u64,
    /// New pane width in pixels.
    pub width: f64,
    /// New pane height in pixels.
    pub height: f64,
}

/// Per-evaluate summary of stack changes (counts only).
#[derive(Clone, Copy, Debug)]
pub struct StackSummary {
    /// Event counter of the triggering input, if any.
    pub seq: u64,
    /// Nodes with recomputed visibility.
    pub visibility: usize,
    /// Nodes with recomputed opacity.
    pub opacities: usize,
    /// Nodes marked for restyle.
    pub restyled: usize,
    /// Nodes with toggled presence.
    pub presence: usize,
    /// Visible→hidden transitions.
    pub hidden: usize,
    /// Hidden→visible transitions.
    pub unhidden: usize,
    /// Whether the traversal order was rebuilt.
    pub topology_changed: bool,
}

impl StackSummary {
    /// Summarizes a [`StackChanges`] batch.
    #[must_use]
    pub fn new(seq: u64, changes: &StackChanges) -> Self {
        Self {
            seq,
            visibility: changes.visibility.len(),
            opacities: changes.opacities.len(),
            restyled: changes.restyled.len(),
            presence: changes.presence.len(),
            hidden: changes.hidden.len(),
            unhidden: changes.unhidden.len(),
            topology_changed: changes.topology_changed,
        }
    }
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the interaction loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a host input event is delivered.
    fn on_input(&mut self, e: &InputEvent) {
        _ = e;
    }

    /// Called when a control attaches or detaches.
    fn on_attachment(&mut self, e: &AttachmentEvent) {
        _ = e;
    }

    /// Called when the pane extent changes.
    fn on_extent(&mut self, e: &ExtentEvent) {
        _ = e;
    }

    /// Called with a per-evaluate stack summary.
    fn on_stack_summary(&mut self, s: &StackSummary) {
        _ = s;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`InputEvent`].
    #[inline]
    pub fn input(&mut self, e: &InputEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_input(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`AttachmentEvent`].
    #[inline]
    pub fn attachment(&mut self, e: &AttachmentEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attachment(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits an [`ExtentEvent`].
    #[inline]
    pub fn extent(&mut self, e: &ExtentEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_extent(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StackSummary`].
    #[inline]
    pub fn stack_summary(&mut self, s: &StackSummary) {
        #[cfg(feature = "trace")]
        if let Some(sink) = &mut self.sink {
            sink.on_stack_summary(s);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = s;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_kind_covers_every_event() {
        use kurbo::{Size, Vec2};

        let mut stack = crate::layer::LayerStack::new();
        let id = stack.create_layer();

        let pairs = [
            (MapEvent::DividerDrag { x: 1.0 }, InputKind::Drag),
            (
                MapEvent::Resize {
                    old: Size::ZERO,
                    new: Size::ZERO,
                },
                InputKind::Resize,
            ),
            (MapEvent::Pan { delta: Vec2::ZERO }, InputKind::Pan),
            (MapEvent::ZoomStart, InputKind::ZoomStart),
            (MapEvent::ZoomEnd { zoom: 14 }, InputKind::ZoomEnd),
            (MapEvent::LayerAdded(id), InputKind::LayerAdded),
            (MapEvent::LayerRemoved(id), InputKind::LayerRemoved),
            (MapEvent::PointerDown, InputKind::PointerDown),
        ];
        for (event, kind) in pairs {
            assert_eq!(InputKind::from(&event), kind);
        }
    }

    #[test]
    fn attachment_events_from_changes() {
        use crate::swipe::ControlId;

        let changes = SwipeChanges {
            attached: alloc::vec![ControlId::Divider, ControlId::Legend],
            detached: alloc::vec![],
            ..SwipeChanges::default()
        };
        let events = AttachmentEvent::from_changes(7, &changes);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.attached && e.seq == 7));
    }

    #[test]
    fn noop_sink_accepts_everything() {
        let mut sink = NoopSink;
        sink.on_input(&InputEvent {
            seq: 0,
            kind: InputKind::Pan,
        });
        sink.on_extent(&ExtentEvent {
            seq: 0,
            width: 1.0,
            height: 2.0,
        });
    }
}
