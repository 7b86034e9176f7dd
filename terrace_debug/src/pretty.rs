// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per
//! event to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use terrace_core::trace::{AttachmentEvent, ExtentEvent, InputEvent, StackSummary, TraceSink};

use crate::recorder::{control_label, input_kind_label};

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_input(&mut self, e: &InputEvent) {
        let _ = writeln!(self.writer, "input  #{} {}", e.seq, input_kind_label(e.kind));
    }

    fn on_attachment(&mut self, e: &AttachmentEvent) {
        let verb = if e.attached { "attach" } else { "detach" };
        let _ = writeln!(self.writer, "{verb} #{} {}", e.seq, control_label(e.control));
    }

    fn on_extent(&mut self, e: &ExtentEvent) {
        let _ = writeln!(
            self.writer,
            "extent #{} {:.1}x{:.1}",
            e.seq, e.width, e.height
        );
    }

    fn on_stack_summary(&mut self, s: &StackSummary) {
        let _ = writeln!(
            self.writer,
            "stack  #{} vis={} hid={} unhid={} restyle={} presence={}{}",
            s.seq,
            s.visibility,
            s.hidden,
            s.unhidden,
            s.restyled,
            s.presence,
            if s.topology_changed { " topo" } else { "" }
        );
    }
}
