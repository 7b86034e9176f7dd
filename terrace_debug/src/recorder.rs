// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! In-memory event recording.
//!
//! [`RecorderSink`] implements [`TraceSink`] and stores events as
//! [`RecordedEvent`] values in arrival order. Useful for interaction-loop
//! assertions in tests and for feeding [`json`](crate::json) exports.

use terrace_core::swipe::ControlId;
use terrace_core::trace::{
    AttachmentEvent, ExtentEvent, InputEvent, InputKind, StackSummary, TraceSink,
};

/// One recorded interaction-loop event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RecordedEvent {
    /// A host input was delivered.
    Input {
        /// Event counter.
        seq: u64,
        /// Input kind.
        kind: InputKind,
    },
    /// A control attached or detached.
    Attachment {
        /// Event counter of the triggering input.
        seq: u64,
        /// Which control.
        control: ControlId,
        /// `true` on attach.
        attached: bool,
    },
    /// The pane extent changed.
    Extent {
        /// Event counter of the triggering input.
        seq: u64,
        /// New width in pixels.
        width: f64,
        /// New height in pixels.
        height: f64,
    },
    /// A stack evaluation completed.
    Stack {
        /// Event counter of the triggering input.
        seq: u64,
        /// Nodes with recomputed visibility.
        visibility: usize,
        /// Visible→hidden transitions.
        hidden: usize,
        /// Hidden→visible transitions.
        unhidden: usize,
        /// Nodes marked for restyle.
        restyled: usize,
        /// Whether topology was rebuilt.
        topology_changed: bool,
    },
}

/// Short label for an input kind, for line and JSON output.
#[must_use]
pub fn input_kind_label(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Drag => "drag",
        InputKind::Resize => "resize",
        InputKind::Pan => "pan",
        InputKind::ZoomStart => "zoom-start",
        InputKind::ZoomEnd => "zoom-end",
        InputKind::LayerAdded => "layer-added",
        InputKind::LayerRemoved => "layer-removed",
        InputKind::PointerDown => "pointer-down",
    }
}

/// Short label for a control, for line and JSON output.
#[must_use]
pub fn control_label(control: ControlId) -> &'static str {
    match control {
        ControlId::Divider => "divider",
        ControlId::Legend => "legend",
    }
}

/// A [`TraceSink`] that stores events in memory.
#[derive(Debug, Default)]
pub struct RecorderSink {
    events: Vec<RecordedEvent>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded events.
    #[must_use]
    pub fn events(&self) -> &[RecordedEvent] {
        &self.events
    }

    /// Consumes the recorder and returns the recorded events.
    #[must_use]
    pub fn into_events(self) -> Vec<RecordedEvent> {
        self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Discards all recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl TraceSink for RecorderSink {
    fn on_input(&mut self, e: &InputEvent) {
        self.events.push(RecordedEvent::Input {
            seq: e.seq,
            kind: e.kind,
        });
    }

    fn on_attachment(&mut self, e: &AttachmentEvent) {
        self.events.push(RecordedEvent::Attachment {
            seq: e.seq,
            control: e.control,
            attached: e.attached,
        });
    }

    fn on_extent(&mut self, e: &ExtentEvent) {
        self.events.push(RecordedEvent::Extent {
            seq: e.seq,
            width: e.width,
            height: e.height,
        });
    }

    fn on_stack_summary(&mut self, s: &StackSummary) {
        self.events.push(RecordedEvent::Stack {
            seq: s.seq,
            visibility: s.visibility,
            hidden: s.hidden,
            unhidden: s.unhidden,
            restyled: s.restyled,
            topology_changed: s.topology_changed,
        });
    }
}
