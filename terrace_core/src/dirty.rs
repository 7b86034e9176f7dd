// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! Terrace uses multi-channel dirty tracking (via [`understory_dirty`]) to
//! propagate invalidation through the pane/layer tree. Each channel
//! represents an independent category of change.
//!
//! # Propagation semantics
//!
//! Channels differ in whether dirtiness propagates to descendants:
//!
//! - **Propagating** — [`VISIBILITY`] and [`OPACITY`] use
//!   [`EagerPolicy`](understory_dirty::EagerPolicy) and have dependency
//!   edges from child to parent. Marking a parent dirty automatically marks
//!   all descendants, because effective hidden state and effective opacity
//!   are inherited properties. (Presence and zoom-range changes are routed
//!   through [`VISIBILITY`] so the same drain pass recomputes
//!   `effective_hidden` for the whole subtree.)
//!
//! - **Local-only** — [`STYLE`] and [`PRESENCE`] are marked with the default
//!   policy. Only the explicitly marked layer appears in the drain output:
//!   paint invalidation is per-layer, and presence lists feed per-layer
//!   control gating.
//!
//! - **Structural** — [`TOPOLOGY`] is marked on topology mutations (place
//!   in / lift from a pane, create/destroy). It triggers a traversal-order
//!   rebuild during evaluation but does not propagate to descendants.
//!
//! # Consumption
//!
//! Callers never need to query dirty state directly. Each
//! [`LayerStack::evaluate`](crate::layer::LayerStack::evaluate) call drains
//! all channels and surfaces the results as
//! [`StackChanges`](crate::layer::StackChanges), which hosts
//! [consume](crate::backend::Presenter::apply) to apply incremental updates.

use understory_dirty::Channel;

/// Effective visibility input changed (hidden flag, presence, zoom range, or
/// the stack zoom) — requires effective hidden recomputation for descendants.
pub const VISIBILITY: Channel = Channel::new(0);

/// Opacity changed — requires effective opacity recomputation for
/// descendants.
pub const OPACITY: Channel = Channel::new(1);

/// Paint style invalidated — no propagation needed.
pub const STYLE: Channel = Channel::new(2);

/// Map presence toggled — no propagation needed (the visibility consequence
/// is routed through [`VISIBILITY`] separately).
pub const PRESENCE: Channel = Channel::new(3);

/// Tree topology changed — triggers traversal order rebuild.
pub const TOPOLOGY: Channel = Channel::new(4);
