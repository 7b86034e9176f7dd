// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe-pane geometry and control-attachment coordination.
//!
//! The [`SwipeCoordinator`] owns the clipped comparison pane's pixel extent
//! and the attachment state of the two dependent map-UI controls: the
//! draggable swipe divider and the classification legend. Every input that
//! can affect them — divider drags, container resizes, pans, zoom changes,
//! layer presence changes — is routed through this single owner, which
//! accumulates the resulting commands into a [`SwipeChanges`] batch for the
//! host to [drain](SwipeCoordinator::evaluate) and
//! [apply](crate::backend::ControlHost::apply).
//!
//! # Attachment rules
//!
//! Attachment is a pure function of the zoom level and the presence of the
//! two comparison layers ([`desired_attachment`]):
//!
//! | condition | divider | legend |
//! |---|---|---|
//! | zoom below the attach zoom | detached | detached |
//! | attach zoom or deeper, both layers present | attached | attached |
//! | attach zoom or deeper, classification only | detached | attached |
//! | attach zoom or deeper, classification absent | detached | detached |
//!
//! Transitions are edge-triggered: re-delivering the same zoom or presence
//! produces no commands, so a host can never be asked to attach a control
//! twice. Divider attached implies legend attached in every reachable state.
//!
//! # Extent invariants
//!
//! `0 <= extent.width <= viewport.width` and
//! `extent.height == viewport.height` hold after every operation. Out-of-range
//! drag positions are routine (the pointer leaves the container) and are
//! clamped, never rejected. On divider detach the extent resets to the full
//! viewport so a stale oversized pane cannot outlive the comparison.

use alloc::vec::Vec;

use kurbo::{Rect, Size, Vec2};

use crate::layer::LayerId;
use crate::viewport::MapEvent;

/// Map-UI controls managed by the coordinator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// The draggable swipe divider.
    Divider,
    /// The classification legend.
    Legend,
}

/// Whether a control is currently attached to the map UI.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Attachment {
    /// Not part of the map UI.
    #[default]
    Detached,
    /// Part of the map UI.
    Attached,
}

impl Attachment {
    /// Returns whether this is [`Attached`](Self::Attached).
    #[must_use]
    pub const fn is_attached(self) -> bool {
        matches!(self, Self::Attached)
    }
}

/// Static configuration for a [`SwipeCoordinator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Shallowest zoom at which the comparison controls may attach.
    pub attach_zoom: u8,
    /// Fraction of the viewport width the pane covers when the divider
    /// attaches, in `0.0..=1.0`.
    pub initial_fraction: f64,
    /// The classification overlay the legend describes.
    pub classification: LayerId,
    /// The reference overlay shown inside the swipe pane.
    pub reference: LayerId,
}

impl SwipeConfig {
    /// Creates a configuration with the default attach zoom (14) and a
    /// zero-width initial pane.
    #[must_use]
    pub fn new(classification: LayerId, reference: LayerId) -> Self {
        Self {
            attach_zoom: 14,
            initial_fraction: 0.0,
            classification,
            reference,
        }
    }
}

/// The pane/member counter-shift emitted after a pan.
///
/// The clipped pane lives in screen space while its members are positioned
/// in map space, so a pan must move the pane one way and its members the
/// other: `members == -pane` always.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaneShift {
    /// Absolute position offset for the pane element.
    pub pane: Vec2,
    /// Absolute position offset for every member inside the pane.
    pub members: Vec2,
}

/// The command batch produced by a [`SwipeCoordinator`] drain.
///
/// `Option` fields coalesce: only the final value of a burst of events
/// survives until the host drains. Attach/detach lists are edge-triggered
/// and never contain a control twice for the same transition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SwipeChanges {
    /// New pane clip extent, if it changed.
    pub extent: Option<Size>,
    /// New divider handle x position, if it changed.
    pub divider_x: Option<f64>,
    /// New pane/member positioning after a pan, if any.
    pub pane_shift: Option<PaneShift>,
    /// Controls to attach to the map UI, in order.
    pub attached: Vec<ControlId>,
    /// Controls to detach from the map UI, in order.
    pub detached: Vec<ControlId>,
    /// Whether to open the instructional divider tooltip.
    pub tip_opened: bool,
    /// Whether to close any open tooltips.
    pub clear_tooltips: bool,
}

impl SwipeChanges {
    /// Clears all commands.
    pub fn clear(&mut self) {
        self.extent = None;
        self.divider_x = None;
        self.pane_shift = None;
        self.attached.clear();
        self.detached.clear();
        self.tip_opened = false;
        self.clear_tooltips = false;
    }

    /// Returns whether the batch contains no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.extent.is_none()
            && self.divider_x.is_none()
            && self.pane_shift.is_none()
            && self.attached.is_empty()
            && self.detached.is_empty()
            && !self.tip_opened
            && !self.clear_tooltips
    }
}

/// Computes the attachment both controls should have for the given zoom and
/// layer presence.
///
/// Returns `(divider, legend)`. The divider needs both comparison layers;
/// the legend needs only the classification layer. The result is what makes
/// "divider attached implies legend attached" hold structurally.
#[must_use]
pub fn desired_attachment(
    zoom: u8,
    attach_zoom: u8,
    classification_present: bool,
    reference_present: bool,
) -> (Attachment, Attachment) {
    let deep_enough = zoom >= attach_zoom;
    let divider = if deep_enough && classification_present && reference_present {
        Attachment::Attached
    } else {
        Attachment::Detached
    };
    let legend = if deep_enough && classification_present {
        Attachment::Attached
    } else {
        Attachment::Detached
    };
    (divider, legend)
}

/// Owner of the swipe pane extent and the control-attachment state machines.
///
/// See the [module docs](self) for the rules. All operations are synchronous
/// and infallible; the host drains accumulated commands with
/// [`evaluate`](Self::evaluate) after each event (or each event burst).
#[derive(Debug)]
pub struct SwipeCoordinator {
    config: SwipeConfig,
    viewport: Size,
    zoom: u8,
    /// Accumulated pan of the map content since creation.
    origin: Vec2,
    extent: Size,
    classification_present: bool,
    reference_present: bool,
    divider: Attachment,
    legend: Attachment,
    tip_open: bool,
    pending: SwipeChanges,
}

impl SwipeCoordinator {
    /// Creates a coordinator for a viewport of the given size and zoom.
    ///
    /// The extent starts at the configured fraction of the viewport width.
    /// Both controls start detached; both comparison layers are assumed
    /// present until the host reports otherwise (nodes start present on the
    /// map, see [`LayerStack`](crate::layer::LayerStack)).
    #[must_use]
    pub fn new(config: SwipeConfig, viewport: Size, zoom: u8) -> Self {
        let fraction = config.initial_fraction.clamp(0.0, 1.0);
        Self {
            config,
            viewport,
            zoom,
            origin: Vec2::ZERO,
            extent: Size::new(fraction * viewport.width, viewport.height),
            classification_present: true,
            reference_present: true,
            divider: Attachment::Detached,
            legend: Attachment::Detached,
            tip_open: false,
            pending: SwipeChanges::default(),
        }
    }

    /// Routes a host event to the matching operation.
    pub fn handle(&mut self, event: &MapEvent) {
        match *event {
            MapEvent::Resize { old, new } => self.on_resize(old, new),
            MapEvent::Pan { delta } => self.on_pan(delta),
            MapEvent::ZoomStart | MapEvent::PointerDown => self.dismiss_tip(),
            MapEvent::ZoomEnd { zoom } => self.on_zoom_change(zoom),
            MapEvent::LayerAdded(id) => self.on_layer_presence_change(id, true),
            MapEvent::LayerRemoved(id) => {
                self.dismiss_tip();
                self.on_layer_presence_change(id, false);
            }
            MapEvent::DividerDrag { x } => self.on_drag(x),
        }
    }

    // -- Operations --

    /// Handles a divider drag to container-relative position `x`.
    ///
    /// The position is clamped to `[0, viewport.width]`; out-of-range values
    /// are routine, not errors.
    pub fn on_drag(&mut self, x: f64) {
        let clamped = x.clamp(0.0, self.viewport.width);
        self.set_extent_if_changed(Size::new(clamped, self.viewport.height));
    }

    /// Handles a container resize, preserving the relative split fraction.
    ///
    /// A non-positive `old` width is treated as a no-op for the width (a
    /// mis-ordered event must not divide by zero); the height always tracks
    /// the new viewport.
    pub fn on_resize(&mut self, old: Size, new: Size) {
        self.viewport = new;
        let width = if old.width > 0.0 {
            self.extent.width * new.width / old.width
        } else {
            self.extent.width
        };
        self.set_extent_if_changed(Size::new(width.clamp(0.0, new.width), new.height));
    }

    /// Handles a pan of the map content by `delta` pixels.
    ///
    /// Emits the double-shift: the pane is repositioned opposite the
    /// accumulated pan so it stays fixed on screen, and every member inside
    /// it is repositioned by the inverse so it stays fixed on the map.
    pub fn on_pan(&mut self, delta: Vec2) {
        self.origin += delta;
        self.pending.pane_shift = Some(PaneShift {
            pane: -self.origin,
            members: self.origin,
        });
    }

    /// Handles a settled zoom change.
    ///
    /// Below the attach zoom any open tooltips are closed; attachment is then
    /// re-derived from the shared table.
    pub fn on_zoom_change(&mut self, zoom: u8) {
        self.zoom = zoom;
        if zoom < self.config.attach_zoom {
            self.tip_open = false;
            self.pending.clear_tooltips = true;
        }
        self.sync_attachment();
    }

    /// Handles a layer presence change (layer-selector toggles).
    ///
    /// Layers other than the two configured comparison layers are ignored.
    pub fn on_layer_presence_change(&mut self, layer: LayerId, present: bool) {
        if layer == self.config.classification {
            self.classification_present = present;
        } else if layer == self.config.reference {
            self.reference_present = present;
        } else {
            return;
        }
        self.sync_attachment();
    }

    /// Drains accumulated commands.
    #[must_use]
    pub fn evaluate(&mut self) -> SwipeChanges {
        let mut changes = SwipeChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut SwipeChanges) {
        changes.clear();
        core::mem::swap(changes, &mut self.pending);
    }

    // -- State accessors --

    /// Current pane extent in pixels.
    #[must_use]
    pub const fn extent(&self) -> Size {
        self.extent
    }

    /// Current divider handle x position (always the extent width).
    #[must_use]
    pub const fn divider_x(&self) -> f64 {
        self.extent.width
    }

    /// The pane's clip rectangle in container coordinates.
    #[must_use]
    pub fn clip_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.extent.width, self.extent.height)
    }

    /// Last known viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Last known zoom level.
    #[must_use]
    pub const fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Accumulated pan of the map content since creation.
    #[must_use]
    pub const fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Attachment state of the swipe divider.
    #[must_use]
    pub const fn divider(&self) -> Attachment {
        self.divider
    }

    /// Attachment state of the legend.
    #[must_use]
    pub const fn legend(&self) -> Attachment {
        self.legend
    }

    /// Whether both comparison layers are present.
    #[must_use]
    pub const fn comparison_ready(&self) -> bool {
        self.classification_present && self.reference_present
    }

    /// Whether the instructional divider tooltip is open.
    #[must_use]
    pub const fn tip_open(&self) -> bool {
        self.tip_open
    }

    // -- Internal --

    /// Re-derives both attachment machines and performs transition side
    /// effects. Edge-triggered: a no-transition call emits nothing.
    fn sync_attachment(&mut self) {
        let (want_divider, want_legend) = desired_attachment(
            self.zoom,
            self.config.attach_zoom,
            self.classification_present,
            self.reference_present,
        );

        if want_divider != self.divider {
            self.divider = want_divider;
            match want_divider {
                Attachment::Attached => {
                    let fraction = self.config.initial_fraction.clamp(0.0, 1.0);
                    self.extent =
                        Size::new(fraction * self.viewport.width, self.viewport.height);
                    self.emit_extent();
                    self.pending.attached.push(ControlId::Divider);
                    self.tip_open = true;
                    self.pending.tip_opened = true;
                }
                Attachment::Detached => {
                    // Reset-on-detach: never leave a stale oversized pane.
                    self.extent = self.viewport;
                    self.emit_extent();
                    self.pending.detached.push(ControlId::Divider);
                }
            }
        }

        if want_legend != self.legend {
            self.legend = want_legend;
            match want_legend {
                Attachment::Attached => self.pending.attached.push(ControlId::Legend),
                Attachment::Detached => self.pending.detached.push(ControlId::Legend),
            }
        }
    }

    fn set_extent_if_changed(&mut self, extent: Size) {
        if extent != self.extent {
            self.extent = extent;
            self.emit_extent();
        }
    }

    fn emit_extent(&mut self) {
        self.pending.extent = Some(self.extent);
        self.pending.divider_x = Some(self.extent.width);
    }

    fn dismiss_tip(&mut self) {
        if self.tip_open {
            self.tip_open = false;
            self.pending.clear_tooltips = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::LayerStack;

    fn comparison_ids() -> (LayerStack, LayerId, LayerId) {
        let mut stack = LayerStack::new();
        let classification = stack.create_layer();
        let reference = stack.create_layer();
        (stack, classification, reference)
    }

    fn coordinator(initial_fraction: f64, zoom: u8) -> SwipeCoordinator {
        let (_stack, classification, reference) = comparison_ids();
        let config = SwipeConfig {
            initial_fraction,
            ..SwipeConfig::new(classification, reference)
        };
        SwipeCoordinator::new(config, Size::new(1000.0, 600.0), zoom)
    }

    #[test]
    fn drag_clamps_negative_to_zero() {
        let mut coord = coordinator(0.1, 14);
        coord.on_drag(-50.0);
        assert_eq!(coord.extent(), Size::new(0.0, 600.0));
    }

    #[test]
    fn drag_clamps_to_viewport_width() {
        let mut coord = coordinator(0.1, 14);
        coord.on_drag(1500.0);
        assert_eq!(coord.extent(), Size::new(1000.0, 600.0));
    }

    #[test]
    fn drag_notifies_pane_and_divider() {
        let mut coord = coordinator(0.1, 14);
        coord.on_drag(250.0);
        let changes = coord.evaluate();
        assert_eq!(changes.extent, Some(Size::new(250.0, 600.0)));
        assert_eq!(changes.divider_x, Some(250.0));
        assert_eq!(coord.divider_x(), 250.0);
    }

    #[test]
    fn resize_preserves_split_fraction() {
        let mut coord = coordinator(0.1, 14);
        assert_eq!(coord.extent(), Size::new(100.0, 600.0));

        coord.on_resize(Size::new(1000.0, 600.0), Size::new(2000.0, 600.0));
        assert_eq!(coord.extent(), Size::new(200.0, 600.0));

        let before = 100.0 / 1000.0;
        let after = coord.extent().width / coord.viewport().width;
        assert!((before - after).abs() < 1e-12, "split fraction must survive");
    }

    #[test]
    fn resize_with_zero_old_width_keeps_extent_width() {
        let mut coord = coordinator(0.1, 14);
        coord.on_resize(Size::new(0.0, 600.0), Size::new(2000.0, 500.0));
        // Width untouched, height follows the viewport.
        assert_eq!(coord.extent(), Size::new(100.0, 500.0));
    }

    #[test]
    fn resize_updates_height_with_viewport() {
        let mut coord = coordinator(0.5, 14);
        coord.on_resize(Size::new(1000.0, 600.0), Size::new(1000.0, 800.0));
        assert_eq!(coord.extent(), Size::new(500.0, 800.0));
    }

    #[test]
    fn zoom_in_attaches_both_and_keeps_extent() {
        let mut coord = coordinator(0.1, 13);
        assert_eq!(coord.extent(), Size::new(100.0, 600.0));

        coord.on_zoom_change(14);
        let changes = coord.evaluate();
        assert!(coord.divider().is_attached());
        assert!(coord.legend().is_attached());
        assert!(changes.attached.contains(&ControlId::Divider));
        assert!(changes.attached.contains(&ControlId::Legend));
        assert_eq!(coord.extent(), Size::new(100.0, 600.0));
    }

    #[test]
    fn zoom_out_detaches_both_and_resets_extent() {
        let mut coord = coordinator(0.1, 13);
        coord.on_zoom_change(14);
        let _ = coord.evaluate();

        coord.on_zoom_change(13);
        let changes = coord.evaluate();
        assert!(!coord.divider().is_attached());
        assert!(!coord.legend().is_attached());
        assert!(changes.detached.contains(&ControlId::Divider));
        assert!(changes.detached.contains(&ControlId::Legend));
        assert_eq!(coord.extent(), Size::new(1000.0, 600.0));
    }

    #[test]
    fn zoom_change_is_idempotent() {
        let mut coord = coordinator(0.1, 13);
        coord.on_zoom_change(14);
        let first = coord.evaluate();
        assert_eq!(first.attached.len(), 2);

        coord.on_zoom_change(14);
        let second = coord.evaluate();
        assert!(second.attached.is_empty(), "no redundant attach commands");
        assert!(second.detached.is_empty(), "no redundant detach commands");
        assert!(coord.divider().is_attached());
    }

    #[test]
    fn attach_initializes_extent_from_fraction() {
        let mut coord = coordinator(0.1, 13);
        // Drag while detached moves the extent away from the fraction.
        coord.on_drag(700.0);
        let _ = coord.evaluate();

        coord.on_zoom_change(14);
        let changes = coord.evaluate();
        assert_eq!(changes.extent, Some(Size::new(100.0, 600.0)));
        assert_eq!(coord.extent(), Size::new(100.0, 600.0));
    }

    #[test]
    fn classification_only_attaches_legend_only() {
        let (_stack, classification, reference) = comparison_ids();
        let config = SwipeConfig::new(classification, reference);
        let mut coord = SwipeCoordinator::new(config, Size::new(1000.0, 600.0), 14);

        coord.on_layer_presence_change(reference, false);
        let _ = coord.evaluate();
        coord.on_zoom_change(14);
        let changes = coord.evaluate();

        assert!(!coord.divider().is_attached());
        assert!(coord.legend().is_attached());
        assert_eq!(changes.attached, alloc::vec![ControlId::Legend]);
    }

    #[test]
    fn neither_layer_attaches_nothing() {
        let (_stack, classification, reference) = comparison_ids();
        let config = SwipeConfig::new(classification, reference);
        let mut coord = SwipeCoordinator::new(config, Size::new(1000.0, 600.0), 13);

        coord.on_layer_presence_change(classification, false);
        coord.on_layer_presence_change(reference, false);
        coord.on_zoom_change(14);
        let changes = coord.evaluate();

        assert!(!coord.divider().is_attached());
        assert!(!coord.legend().is_attached());
        assert!(changes.attached.is_empty());
    }

    #[test]
    fn divider_attached_implies_legend_attached_everywhere() {
        let (_stack, classification, reference) = comparison_ids();
        for zoom in [12u8, 13, 14, 15] {
            for classification_present in [false, true] {
                for reference_present in [false, true] {
                    let config = SwipeConfig::new(classification, reference);
                    let mut coord =
                        SwipeCoordinator::new(config, Size::new(1000.0, 600.0), 4);
                    coord.on_layer_presence_change(classification, classification_present);
                    coord.on_layer_presence_change(reference, reference_present);
                    coord.on_zoom_change(zoom);
                    assert!(
                        !coord.divider().is_attached() || coord.legend().is_attached(),
                        "divider without legend at zoom {zoom}, presence \
                         ({classification_present}, {reference_present})"
                    );
                }
            }
        }
    }

    #[test]
    fn layer_removal_detaches_divider_and_resets_pane() {
        let (_stack, classification, reference) = comparison_ids();
        let config = SwipeConfig {
            initial_fraction: 0.1,
            ..SwipeConfig::new(classification, reference)
        };
        let mut coord = SwipeCoordinator::new(config, Size::new(1000.0, 600.0), 13);
        coord.on_zoom_change(14);
        let _ = coord.evaluate();

        coord.handle(&MapEvent::LayerRemoved(reference));
        let changes = coord.evaluate();
        assert!(!coord.divider().is_attached());
        assert!(coord.legend().is_attached(), "legend survives the divider");
        assert!(changes.detached.contains(&ControlId::Divider));
        assert_eq!(coord.extent(), Size::new(1000.0, 600.0));

        // Re-adding the layer re-attaches at the initial fraction.
        coord.handle(&MapEvent::LayerAdded(reference));
        let changes = coord.evaluate();
        assert!(changes.attached.contains(&ControlId::Divider));
        assert_eq!(coord.extent(), Size::new(100.0, 600.0));
    }

    #[test]
    fn unknown_layer_presence_is_ignored() {
        let (mut stack, classification, reference) = comparison_ids();
        let bystander = stack.create_layer();
        let config = SwipeConfig::new(classification, reference);
        let mut coord = SwipeCoordinator::new(config, Size::new(1000.0, 600.0), 14);
        coord.on_zoom_change(14);
        let _ = coord.evaluate();

        coord.on_layer_presence_change(bystander, false);
        let changes = coord.evaluate();
        assert!(changes.is_empty());
        assert!(coord.divider().is_attached());
    }

    #[test]
    fn pan_emits_double_shift() {
        let mut coord = coordinator(0.1, 14);
        coord.on_pan(Vec2::new(30.0, -10.0));
        let changes = coord.evaluate();
        let shift = changes.pane_shift.expect("pan must emit a shift");
        assert_eq!(shift.pane, Vec2::new(-30.0, 10.0));
        assert_eq!(shift.members, Vec2::new(30.0, -10.0));
        assert_eq!(shift.members, -shift.pane);
    }

    #[test]
    fn pan_shift_accumulates() {
        let mut coord = coordinator(0.1, 14);
        coord.on_pan(Vec2::new(30.0, 0.0));
        coord.on_pan(Vec2::new(-10.0, 5.0));
        let changes = coord.evaluate();
        let shift = changes.pane_shift.expect("pan must emit a shift");
        assert_eq!(shift.pane, Vec2::new(-20.0, -5.0));
        assert_eq!(shift.members, Vec2::new(20.0, 5.0));
    }

    #[test]
    fn tip_opens_on_attach_and_dismisses_once() {
        let mut coord = coordinator(0.1, 13);
        coord.on_zoom_change(14);
        let changes = coord.evaluate();
        assert!(changes.tip_opened);
        assert!(coord.tip_open());

        coord.handle(&MapEvent::PointerDown);
        let changes = coord.evaluate();
        assert!(changes.clear_tooltips);
        assert!(!coord.tip_open());

        // Further pointer events are no-ops.
        coord.handle(&MapEvent::PointerDown);
        let changes = coord.evaluate();
        assert!(changes.is_empty());
    }

    #[test]
    fn zoom_below_attach_clears_tooltips() {
        let mut coord = coordinator(0.1, 13);
        coord.on_zoom_change(12);
        let changes = coord.evaluate();
        assert!(changes.clear_tooltips);
        // No transition happened, so no detach commands.
        assert!(changes.detached.is_empty());
    }

    #[test]
    fn handle_routes_drag_and_resize() {
        let mut coord = coordinator(0.1, 14);
        coord.handle(&MapEvent::DividerDrag { x: 420.0 });
        assert_eq!(coord.divider_x(), 420.0);

        coord.handle(&MapEvent::Resize {
            old: Size::new(1000.0, 600.0),
            new: Size::new(500.0, 600.0),
        });
        assert_eq!(coord.extent(), Size::new(210.0, 600.0));
    }

    #[test]
    fn clip_rect_matches_extent() {
        let mut coord = coordinator(0.1, 14);
        coord.on_drag(320.0);
        assert_eq!(coord.clip_rect(), Rect::new(0.0, 0.0, 320.0, 600.0));
    }

    #[test]
    fn evaluate_drains_pending() {
        let mut coord = coordinator(0.1, 14);
        coord.on_drag(250.0);
        let first = coord.evaluate();
        assert!(!first.is_empty());
        let second = coord.evaluate();
        assert!(second.is_empty());
    }
}
