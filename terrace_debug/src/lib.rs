// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON session export for Terrace
//! diagnostics.
//!
//! This crate provides [`TraceSink`](terrace_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`pretty::PrettyPrintSink`] — human-readable one-line-per-event output.
//! - [`recorder::RecorderSink`] — in-memory event recording for playback
//!   and assertions.
//! - [`json::session_json`] — JSON export of a recorded session for
//!   external tooling.

pub mod json;
pub mod pretty;
pub mod recorder;
