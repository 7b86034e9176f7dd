// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pane/layer tree data model.
//!
//! A *node* is either a pane (a z-ordered container the host materializes as
//! a positioned DOM element or native view) or a layer (a drawable overlay:
//! basemap tiles, vector parcels, boundaries, labels). Each node has:
//!
//! - An identity ([`LayerId`]) — a generational handle that becomes stale
//!   when the node is destroyed, preventing use-after-free bugs at the API
//!   level.
//! - Topology — pane, first-member, and sibling links forming an ordered
//!   tree whose sibling order is the draw order.
//! - **Local properties** set by the host:
//!   [`opacity`](LayerStack::set_opacity), [`flags`](LayerStack::set_flags),
//!   [`zoom_range`](LayerStack::set_zoom_range),
//!   [`presence`](LayerStack::set_present), [`role`](LayerStack::set_role),
//!   and [`source`](LayerStack::set_source).
//! - **Computed properties** produced by [`evaluate`](LayerStack::evaluate):
//!   `effective_opacity` (product of ancestor opacities) and
//!   `effective_hidden` (ancestor hidden, own flag, absence from the map, or
//!   the stack-wide zoom gate).
//!
//! Nodes are stored in struct-of-arrays layout with index-based handles for
//! cache-friendly traversal.
//!
//! # Dirty tracking
//!
//! Property mutations automatically mark the corresponding dirty channel
//! (see [`dirty`](crate::dirty)). The channels map to property categories:
//!
//! - **VISIBILITY** / **OPACITY** — propagate to all descendants, since
//!   effective hidden state and effective opacities are inherited.
//! - **STYLE** / **PRESENCE** — local-only; only the modified node is
//!   marked.
//! - **TOPOLOGY** — structural changes (place/lift, create/destroy) that
//!   trigger a traversal-order rebuild.

mod evaluate;
mod id;
mod store;
mod traverse;

pub use evaluate::StackChanges;
pub use id::{INVALID, LayerId, SourceId};
pub use store::{LayerFlags, LayerRole, LayerStack, ZoomRange};
pub use traverse::Members;
