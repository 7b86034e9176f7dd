// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core layer stack and swipe coordination for parcel-classification map
//! views.
//!
//! `terrace_core` provides the state model behind a map viewer that overlays
//! classification results on basemaps and compares them against reference
//! geometry with a draggable swipe pane. It is `no_std` compatible (with
//! `alloc`) and owns no I/O: tile fetching, DOM handling, and drawing stay in
//! the host.
//!
//! # Architecture
//!
//! The crate is organized around two event-driven update loops that turn host
//! callbacks into incremental change batches:
//!
//! ```text
//!   Host (map shell)
//!       │ mutations (presence, opacity, zoom, …)
//!       ▼
//!   LayerStack::evaluate() ──► StackChanges ──► Presenter::apply()
//!
//!   Host (pointer / viewport events)
//!       │ MapEvent
//!       ▼
//!   SwipeCoordinator::handle() ─► SwipeChanges ─► ControlHost::apply()
//! ```
//!
//! **[`layer`]** — Struct-of-arrays pane/layer tree with generational
//! handles. Properties (opacity, flags, zoom range, presence, role) are set
//! by the host; effective opacities and effective hidden state are computed
//! by evaluation.
//!
//! **[`dirty`]** — Multi-channel dirty tracking via `understory_dirty`.
//! VISIBILITY and OPACITY propagate to descendants; STYLE and PRESENCE are
//! local-only; TOPOLOGY triggers a traversal rebuild.
//!
//! **[`swipe`]** — The [`SwipeCoordinator`](swipe::SwipeCoordinator): owns
//! the clipped pane's pixel extent and the attachment state machines for the
//! swipe divider and legend controls.
//!
//! **[`viewport`]** — The [`MapEvent`](viewport::MapEvent) input stream and a
//! small [`Viewport`](viewport::Viewport) tracker hosts can route through.
//!
//! **[`parcel`]** — Traffic-light classification styling, legend content, and
//! hover summaries.
//!
//! **[`table`]** — Click-to-inspect attribute table with CSV export.
//!
//! **[`magnifier`]** — State machine for the magnifying-glass overlay.
//!
//! **[`backend`]** — The [`Presenter`](backend::Presenter) and
//! [`ControlHost`](backend::ControlHost) traits host shells implement to
//! apply change batches to their native UI.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! interaction-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod dirty;
pub mod layer;
pub mod magnifier;
pub mod parcel;
pub mod swipe;
pub mod table;
pub mod trace;
pub mod viewport;
