// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for shell integrations.
//!
//! Terrace keeps platform-specific work in *host shells* (a DOM/browser
//! shell, a native widget shell, or a test double). Each shell provides the
//! following pieces:
//!
//! - **Event source** — Translates pointer, resize, zoom, and layer-selector
//!   callbacks into [`MapEvent`](crate::viewport::MapEvent) values. This is
//!   shell-specific and not abstracted by a trait because listener setup and
//!   lifecycle differ fundamentally across environments.
//!
//! - **Presenter** — Implements the [`Presenter`] trait to apply
//!   [`StackChanges`](crate::layer::StackChanges) to a native layer
//!   representation (positioned DOM panes, tile layer objects, native
//!   views).
//!
//! - **Control host** — Implements the [`ControlHost`] trait to apply
//!   [`SwipeChanges`](crate::swipe::SwipeChanges): resize the clipping
//!   element, move the divider handle, add/remove the divider and legend
//!   widgets, open/close tooltips.
//!
//! - **Data plane** — Fetching tiles, parsing vector data, and drawing stay
//!   entirely in the shell; the core sees data sources only as opaque
//!   [`SourceId`](crate::layer::SourceId)s.
//!
//! # Crate boundaries
//!
//! `terrace_core` owns the data model, evaluation, coordination, and this
//! contract module. Shell crates depend on `terrace_core` and provide
//! environment glue. Application code depends on both and wires them
//! together in an event loop.
//!
//! A typical event callback wires the pieces together like this:
//!
//! ```rust,ignore
//! fn on_map_event(event: MapEvent) {
//!     // Mirror the event into the stack where it applies.
//!     if let MapEvent::ZoomEnd { zoom } = event {
//!         stack.set_zoom(zoom);
//!     }
//!
//!     // Route the event through the single coordinator owner.
//!     coordinator.handle(&event);
//!
//!     // Drain and apply both change batches.
//!     presenter.apply(&stack, &stack.evaluate());
//!     control_host.apply(&coordinator, &coordinator.evaluate());
//! }
//! ```

use crate::layer::{LayerStack, StackChanges};
use crate::swipe::{SwipeChanges, SwipeCoordinator};

/// Applies evaluated stack changes to a native layer representation.
///
/// Both DOM-based and native shells implement this trait, enabling generic
/// event loops and test doubles.
pub trait Presenter {
    /// Applies the given [`StackChanges`] to the backing layer
    /// representation, reading current property values from `stack` as
    /// needed.
    fn apply(&mut self, stack: &LayerStack, changes: &StackChanges);
}

/// Applies drained swipe commands to the map UI.
///
/// Implementations must honor the batch ordering: detach commands for a
/// control always follow its earlier attach within the same interaction, and
/// extent/divider values are the final coalesced state.
pub trait ControlHost {
    /// Applies the given [`SwipeChanges`], reading current geometry from
    /// `coordinator` as needed.
    fn apply(&mut self, coordinator: &SwipeCoordinator, changes: &SwipeChanges);
}
