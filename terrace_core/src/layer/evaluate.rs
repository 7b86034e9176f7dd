// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack evaluation and change tracking.
//!
//! Evaluation follows a drain-recompute pattern for each dirty channel:
//!
//! 1. **VISIBILITY** — Drain dirty indices, recompute each node's
//!    `effective_hidden` as `parent_effective_hidden || flags.hidden ||
//!    !present || !zoom_range.admits(zoom)`.
//! 2. **OPACITY** — Drain dirty indices, recompute each node's
//!    `effective_opacity` as `parent_effective * local_opacity`.
//! 3. **STYLE** / **PRESENCE** — Drain dirty indices (no recomputation;
//!    hosts read the current values directly from the stack).
//! 4. **TOPOLOGY** — Drain and discard (the traversal order was already
//!    rebuilt at the start of evaluation if needed).
//!
//! [`StackChanges`] uses raw slot indices (`u32`) rather than [`LayerId`]
//! handles so that hosts can index directly into the stack's SoA arrays via
//! the `*_at()` accessors (e.g.
//! [`effective_hidden_at`](super::LayerStack::effective_hidden_at)) without
//! paying for generation checks on every access.
//!
//! [`LayerId`]: super::LayerId

use alloc::vec::Vec;

use super::id::INVALID;
use super::store::LayerStack;
use crate::dirty;

/// The set of changes produced by a single [`LayerStack::evaluate`] call.
///
/// Each field contains the raw slot indices of nodes that changed in the
/// corresponding category. Hosts use these to apply incremental updates.
#[derive(Clone, Debug, Default)]
pub struct StackChanges {
    /// Nodes whose effective hidden state was recomputed.
    pub visibility: Vec<u32>,
    /// Nodes whose effective opacity was recomputed.
    pub opacities: Vec<u32>,
    /// Nodes whose paint style must be re-read from the style policy.
    pub restyled: Vec<u32>,
    /// Nodes whose map presence was toggled.
    pub presence: Vec<u32>,
    /// Nodes that transitioned from visible to effectively hidden.
    pub hidden: Vec<u32>,
    /// Nodes that transitioned from effectively hidden to visible.
    pub unhidden: Vec<u32>,
    /// Nodes added since the last evaluate.
    pub added: Vec<u32>,
    /// Nodes removed since the last evaluate.
    pub removed: Vec<u32>,
    /// Whether the tree topology changed (traversal order was rebuilt).
    pub topology_changed: bool,
}

impl StackChanges {
    /// Clears all change lists.
    pub fn clear(&mut self) {
        self.visibility.clear();
        self.opacities.clear();
        self.restyled.clear();
        self.presence.clear();
        self.hidden.clear();
        self.unhidden.clear();
        self.added.clear();
        self.removed.clear();
        self.topology_changed = false;
    }
}

impl LayerStack {
    /// Evaluates the stack, recomputing dirty properties and returning the
    /// set of changes.
    ///
    /// This rebuilds the traversal order if topology changed, then drains
    /// each dirty channel and recomputes effective hidden state and
    /// effective opacities in pane-before-member order.
    pub fn evaluate(&mut self) -> StackChanges {
        let mut changes = StackChanges::default();
        self.evaluate_into(&mut changes);
        changes
    }

    /// Like [`evaluate`](Self::evaluate), but reuses a caller-provided
    /// buffer to avoid allocation.
    pub fn evaluate_into(&mut self, changes: &mut StackChanges) {
        changes.clear();

        // Rebuild traversal order if needed.
        if self.traversal_dirty {
            self.rebuild_traversal_order();
            changes.topology_changed = true;
            self.traversal_dirty = false;
        }

        // Drain VISIBILITY channel — collect dirty indices, then recompute.
        let dirty_visibility: Vec<u32> = self
            .dirty
            .drain(dirty::VISIBILITY)
            .affected()
            .deterministic()
            .run()
            .collect();
        for &idx in &dirty_visibility {
            let parent_idx = self.parent[idx as usize];
            let parent_hidden = if parent_idx != INVALID {
                self.effective_hidden[parent_idx as usize]
            } else {
                false
            };
            let new_hidden = parent_hidden
                || self.flags[idx as usize].hidden
                || !self.present[idx as usize]
                || !self.zoom_range[idx as usize].admits(self.zoom);
            let old_hidden = self.effective_hidden[idx as usize];
            if new_hidden != old_hidden {
                if new_hidden {
                    changes.hidden.push(idx);
                } else {
                    changes.unhidden.push(idx);
                }
                self.effective_hidden[idx as usize] = new_hidden;
            }
        }
        changes.visibility = dirty_visibility;

        // Drain OPACITY channel.
        let dirty_opacities: Vec<u32> = self
            .dirty
            .drain(dirty::OPACITY)
            .affected()
            .deterministic()
            .run()
            .collect();
        for &idx in &dirty_opacities {
            let parent_opacity = if self.parent[idx as usize] != INVALID {
                self.effective_opacity[self.parent[idx as usize] as usize]
            } else {
                1.0
            };
            self.effective_opacity[idx as usize] =
                parent_opacity * self.local_opacity[idx as usize];
        }
        changes.opacities = dirty_opacities;

        // Drain STYLE channel — no recomputation, just collect.
        changes.restyled = self
            .dirty
            .drain(dirty::STYLE)
            .deterministic()
            .run()
            .collect();

        // Drain PRESENCE channel.
        changes.presence = self
            .dirty
            .drain(dirty::PRESENCE)
            .deterministic()
            .run()
            .collect();

        // Drain TOPOLOGY channel (just consume, changes are structural).
        let _: Vec<u32> = self
            .dirty
            .drain(dirty::TOPOLOGY)
            .deterministic()
            .run()
            .collect();

        // Move lifecycle lists.
        core::mem::swap(&mut self.pending_added, &mut changes.added);
        core::mem::swap(&mut self.pending_removed, &mut changes.removed);
    }

    /// Returns the current traversal order (depth-first pre-order).
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called at
    /// least once (or if the traversal has been manually rebuilt).
    #[must_use]
    pub fn traversal_order(&self) -> &[u32] {
        &self.traversal_order
    }

    /// Rebuilds the depth-first pre-order traversal of all live nodes.
    fn rebuild_traversal_order(&mut self) {
        self.traversal_order.clear();
        // Start from roots.
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                self.dfs_collect(idx);
            }
        }
    }

    /// Depth-first pre-order collection starting from `idx`.
    fn dfs_collect(&mut self, idx: u32) {
        self.traversal_order.push(idx);
        let mut child = self.first_child[idx as usize];
        while child != INVALID {
            self.dfs_collect(child);
            child = self.next_sibling[child as usize];
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::layer::{LayerFlags, ZoomRange};

    use super::*;

    #[test]
    fn evaluate_computes_effective_opacity() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let layer = stack.create_layer();

        stack.set_opacity(pane, 0.5);
        stack.set_opacity(layer, 0.8);
        stack.place_in(pane, layer);

        let _changes = stack.evaluate();

        let eps = 1e-6;
        assert!((stack.effective_opacity(pane) - 0.5).abs() < eps);
        assert!((stack.effective_opacity(layer) - 0.4).abs() < eps);
    }

    #[test]
    fn no_change_evaluate_returns_empty() {
        let mut stack = LayerStack::new();
        let _pane = stack.create_layer();

        // First evaluate processes initial creation.
        let _ = stack.evaluate();

        // Second evaluate should have no changes.
        let changes = stack.evaluate();
        assert!(changes.visibility.is_empty());
        assert!(changes.opacities.is_empty());
        assert!(changes.restyled.is_empty());
        assert!(changes.presence.is_empty());
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());
        assert!(!changes.topology_changed);
    }

    #[test]
    fn traversal_order_is_depth_first() {
        let mut stack = LayerStack::new();
        let a = stack.create_layer();
        let b = stack.create_layer();
        let c = stack.create_layer();
        let d = stack.create_layer();

        // Tree: a -> [b -> [d], c]
        stack.place_in(a, b);
        stack.place_in(a, c);
        stack.place_in(b, d);

        let _ = stack.evaluate();

        let order = stack.traversal_order();
        assert_eq!(order, &[a.idx, b.idx, d.idx, c.idx]);
    }

    #[test]
    fn evaluate_added_and_removed_lifecycle() {
        let mut stack = LayerStack::new();
        let id = stack.create_layer();

        // First evaluate: node should appear in `added`.
        let changes = stack.evaluate();
        assert!(changes.added.contains(&id.idx));
        assert!(changes.removed.is_empty());

        // Second evaluate: no lifecycle events.
        let changes = stack.evaluate();
        assert!(changes.added.is_empty());
        assert!(changes.removed.is_empty());

        // Destroy: should appear in `removed` on next evaluate.
        stack.destroy_layer(id);
        let changes = stack.evaluate();
        assert!(changes.removed.contains(&id.idx));
        assert!(changes.added.is_empty());
    }

    #[test]
    fn hidden_flag_hides_node() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let _ = stack.evaluate();

        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let changes = stack.evaluate();

        assert!(stack.effective_hidden(pane));
        assert!(changes.hidden.contains(&pane.idx));
        assert!(changes.unhidden.is_empty());
    }

    #[test]
    fn hidden_propagates_to_members() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let layer = stack.create_layer();
        stack.place_in(pane, layer);
        let _ = stack.evaluate();

        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let changes = stack.evaluate();

        assert!(stack.effective_hidden(pane));
        assert!(stack.effective_hidden(layer));
        assert!(changes.hidden.contains(&pane.idx));
        assert!(changes.hidden.contains(&layer.idx));
    }

    #[test]
    fn unhide_restores_visibility() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let _ = stack.evaluate();

        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let _ = stack.evaluate();
        assert!(stack.effective_hidden(pane));

        stack.set_flags(pane, LayerFlags::default());
        let changes = stack.evaluate();

        assert!(!stack.effective_hidden(pane));
        assert!(changes.unhidden.contains(&pane.idx));
        assert!(changes.hidden.is_empty());
    }

    #[test]
    fn zoom_gate_hides_and_reveals() {
        let mut stack = LayerStack::new();
        let parcels = stack.create_layer();
        stack.set_zoom_range(
            parcels,
            ZoomRange {
                min: Some(14),
                max: None,
            },
        );
        let changes = stack.evaluate();
        // Stack starts at zoom 0, below the gate.
        assert!(stack.effective_hidden(parcels));
        assert!(changes.hidden.contains(&parcels.idx));

        stack.set_zoom(14);
        let changes = stack.evaluate();
        assert!(!stack.effective_hidden(parcels));
        assert!(changes.unhidden.contains(&parcels.idx));

        stack.set_zoom(13);
        let changes = stack.evaluate();
        assert!(stack.effective_hidden(parcels));
        assert!(changes.hidden.contains(&parcels.idx));
    }

    #[test]
    fn set_zoom_same_value_is_noop() {
        let mut stack = LayerStack::new();
        let parcels = stack.create_layer();
        stack.set_zoom_range(
            parcels,
            ZoomRange {
                min: Some(14),
                max: None,
            },
        );
        stack.set_zoom(14);
        let _ = stack.evaluate();

        stack.set_zoom(14);
        let changes = stack.evaluate();
        assert!(changes.visibility.is_empty());
    }

    #[test]
    fn absence_hides_subtree() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let layer = stack.create_layer();
        stack.place_in(pane, layer);
        let _ = stack.evaluate();

        stack.set_present(pane, false);
        let changes = stack.evaluate();
        assert!(stack.effective_hidden(pane));
        assert!(stack.effective_hidden(layer));
        assert!(changes.hidden.contains(&layer.idx));

        stack.set_present(pane, true);
        let changes = stack.evaluate();
        assert!(!stack.effective_hidden(layer));
        assert!(changes.unhidden.contains(&layer.idx));
    }

    #[test]
    fn mutation_while_hidden() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let _ = stack.evaluate();

        // Mutate opacity while hidden.
        stack.set_opacity(pane, 0.25);
        let _ = stack.evaluate();
        let eps = 1e-6;
        assert!((stack.effective_opacity(pane) - 0.25).abs() < eps);

        // Unhide — opacity should reflect the mutation.
        stack.set_flags(pane, LayerFlags::default());
        let changes = stack.evaluate();

        assert!(!stack.effective_hidden(pane));
        assert!(changes.unhidden.contains(&pane.idx));
        assert!((stack.effective_opacity(pane) - 0.25).abs() < eps);
    }

    #[test]
    fn place_in_recomputes_inherited_properties_for_subtree() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let layer = stack.create_layer();
        let sublayer = stack.create_layer();
        stack.place_in(layer, sublayer);
        let _ = stack.evaluate();

        stack.set_opacity(pane, 0.5);
        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let _ = stack.evaluate();

        stack.place_in(pane, layer);
        let changes = stack.evaluate();

        assert!(changes.visibility.contains(&layer.idx));
        assert!(changes.visibility.contains(&sublayer.idx));
        assert!(changes.opacities.contains(&layer.idx));
        assert!(changes.opacities.contains(&sublayer.idx));
        assert!(changes.hidden.contains(&layer.idx));
        assert!(changes.hidden.contains(&sublayer.idx));

        let eps = 1e-6;
        assert!((stack.effective_opacity(layer) - 0.5).abs() < eps);
        assert!((stack.effective_opacity(sublayer) - 0.5).abs() < eps);
        assert!(stack.effective_hidden(layer));
        assert!(stack.effective_hidden(sublayer));
    }

    #[test]
    fn lift_recomputes_inherited_properties_for_subtree() {
        let mut stack = LayerStack::new();
        let pane = stack.create_layer();
        let layer = stack.create_layer();
        let sublayer = stack.create_layer();

        stack.place_in(pane, layer);
        stack.place_in(layer, sublayer);

        stack.set_opacity(pane, 0.5);
        stack.set_flags(
            pane,
            LayerFlags {
                hidden: true,
                ..LayerFlags::default()
            },
        );
        let _ = stack.evaluate();

        stack.lift(layer);
        let changes = stack.evaluate();

        assert!(changes.unhidden.contains(&layer.idx));
        assert!(changes.unhidden.contains(&sublayer.idx));

        let eps = 1e-6;
        assert!((stack.effective_opacity(layer) - 1.0).abs() < eps);
        assert!((stack.effective_opacity(sublayer) - 1.0).abs() < eps);
        assert!(!stack.effective_hidden(layer));
        assert!(!stack.effective_hidden(sublayer));
    }

    #[test]
    fn evaluate_into_reuses_buffer() {
        let mut stack = LayerStack::new();
        let a = stack.create_layer();
        let b = stack.create_layer();

        let mut changes = StackChanges::default();

        // First evaluate: both nodes added.
        stack.evaluate_into(&mut changes);
        assert_eq!(changes.added.len(), 2);

        // Mutate one node.
        stack.set_opacity(a, 0.5);
        stack.evaluate_into(&mut changes);

        // Buffer should be cleared and refilled (not accumulating).
        assert!(changes.added.is_empty(), "added should be cleared");
        assert!(
            changes.opacities.contains(&a.idx),
            "opacity change should be present"
        );
        assert!(
            !changes.opacities.contains(&b.idx),
            "unchanged node should not appear"
        );
    }
}
