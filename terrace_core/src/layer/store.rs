// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays pane/layer storage with allocation, topology, and
//! property management.

use alloc::vec::Vec;

use understory_dirty::{CycleHandling, DirtyTracker, EagerPolicy};

use super::id::{INVALID, LayerId, SourceId};
use super::traverse::Members;
use crate::dirty;

/// Per-node boolean flags.
///
/// Setting [`hidden`](Self::hidden) suppresses all visual contribution of the
/// node and its entire subtree. Properties can still be mutated while hidden;
/// unhiding restores state immediately without re-evaluation.
/// [`interactive`](Self::interactive) marks layers that produce hover/click
/// feature events; it has no effect on evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LayerFlags {
    /// Whether the node (and its subtree) is hidden.
    pub hidden: bool,
    /// Whether the layer emits feature hover/click events.
    pub interactive: bool,
}

/// The zoom interval in which a node is drawable.
///
/// `None` bounds are open. Web-map convention: a layer with `min = Some(14)`
/// appears at zoom 14 and deeper.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ZoomRange {
    /// Shallowest zoom at which the node is drawable, inclusive.
    pub min: Option<u8>,
    /// Deepest zoom at which the node is drawable, inclusive.
    pub max: Option<u8>,
}

impl ZoomRange {
    /// The unbounded range.
    pub const ANY: Self = Self {
        min: None,
        max: None,
    };

    /// Returns whether `zoom` falls inside this range.
    #[must_use]
    pub fn admits(self, zoom: u8) -> bool {
        self.min.is_none_or(|lo| zoom >= lo) && self.max.is_none_or(|hi| zoom <= hi)
    }
}

/// What a layer contributes to the comparison workflow.
///
/// Roles are how the host asks gating questions ("is a classification layer
/// on the map?") without holding on to specific handles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayerRole {
    /// No special role.
    #[default]
    Generic,
    /// A raster basemap.
    Basemap,
    /// The parcel classification overlay.
    Classification,
    /// The reference-geometry overlay compared against the classification.
    Reference,
    /// Administrative boundary geometry.
    Boundary,
    /// A label/annotation overlay.
    Labels,
}

/// Struct-of-arrays storage for all panes and layers.
///
/// Nodes are addressed by [`LayerId`] handles. Internally, each node occupies
/// a slot in parallel arrays. Destroyed nodes are recycled via a free list,
/// and generation counters prevent stale handle access.
///
/// Panes sit at the roots of the tree and layers beneath them; deeper
/// nesting is allowed and inherits the same way. Nodes start *present*
/// (considered added to the map); hosts toggle presence when the user
/// removes a layer through a selector control.
#[derive(Debug)]
pub struct LayerStack {
    // -- Topology --
    pub(crate) parent: Vec<u32>,
    pub(crate) first_child: Vec<u32>,
    pub(crate) next_sibling: Vec<u32>,
    pub(crate) prev_sibling: Vec<u32>,

    // -- Local properties (set by the host) --
    pub(crate) local_opacity: Vec<f32>,
    pub(crate) flags: Vec<LayerFlags>,
    pub(crate) zoom_range: Vec<ZoomRange>,
    pub(crate) present: Vec<bool>,
    pub(crate) role: Vec<LayerRole>,
    pub(crate) source: Vec<Option<SourceId>>,

    // -- Computed properties (written by evaluate) --
    pub(crate) effective_opacity: Vec<f32>,
    pub(crate) effective_hidden: Vec<bool>,

    // -- Allocation --
    pub(crate) generation: Vec<u32>,
    pub(crate) free_list: Vec<u32>,
    pub(crate) len: u32,

    // -- Stack-wide state --
    pub(crate) zoom: u8,

    // -- Dirty tracking --
    pub(crate) dirty: DirtyTracker<u32>,

    // -- Traversal cache --
    pub(crate) traversal_order: Vec<u32>,
    pub(crate) traversal_dirty: bool,

    // -- Lifecycle tracking --
    pub(crate) pending_added: Vec<u32>,
    pub(crate) pending_removed: Vec<u32>,
}

impl Default for LayerStack {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerStack {
    /// Creates an empty layer stack at zoom 0.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parent: Vec::new(),
            first_child: Vec::new(),
            next_sibling: Vec::new(),
            prev_sibling: Vec::new(),
            local_opacity: Vec::new(),
            flags: Vec::new(),
            zoom_range: Vec::new(),
            present: Vec::new(),
            role: Vec::new(),
            source: Vec::new(),
            effective_opacity: Vec::new(),
            effective_hidden: Vec::new(),
            generation: Vec::new(),
            free_list: Vec::new(),
            len: 0,
            zoom: 0,
            dirty: DirtyTracker::with_cycle_handling(CycleHandling::Error),
            traversal_order: Vec::new(),
            traversal_dirty: true,
            pending_added: Vec::new(),
            pending_removed: Vec::new(),
        }
    }

    // -- Allocation API --

    /// Creates a new node and returns its handle.
    ///
    /// The node starts with full opacity, default flags, an unbounded zoom
    /// range, present on the map, no role, no source, and no pane.
    pub fn create_layer(&mut self) -> LayerId {
        let idx = if let Some(idx) = self.free_list.pop() {
            // Reuse a freed slot.
            self.generation[idx as usize] += 1;
            self.parent[idx as usize] = INVALID;
            self.first_child[idx as usize] = INVALID;
            self.next_sibling[idx as usize] = INVALID;
            self.prev_sibling[idx as usize] = INVALID;
            self.local_opacity[idx as usize] = 1.0;
            self.flags[idx as usize] = LayerFlags::default();
            self.zoom_range[idx as usize] = ZoomRange::ANY;
            self.present[idx as usize] = true;
            self.role[idx as usize] = LayerRole::Generic;
            self.source[idx as usize] = None;
            self.effective_opacity[idx as usize] = 1.0;
            self.effective_hidden[idx as usize] = false;
            idx
        } else {
            // Allocate a new slot.
            let idx = self.len;
            self.len += 1;
            self.parent.push(INVALID);
            self.first_child.push(INVALID);
            self.next_sibling.push(INVALID);
            self.prev_sibling.push(INVALID);
            self.local_opacity.push(1.0);
            self.flags.push(LayerFlags::default());
            self.zoom_range.push(ZoomRange::ANY);
            self.present.push(true);
            self.role.push(LayerRole::Generic);
            self.source.push(None);
            self.effective_opacity.push(1.0);
            self.effective_hidden.push(false);
            self.generation.push(0);
            idx
        };

        self.traversal_dirty = true;
        self.pending_added.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);

        LayerId {
            idx,
            generation: self.generation[idx as usize],
        }
    }

    /// Destroys a node, freeing its slot for reuse.
    ///
    /// # Panics
    ///
    /// Panics if the node has members (lift them first) or if the handle is
    /// stale.
    pub fn destroy_layer(&mut self, id: LayerId) {
        self.validate(id);
        let idx = id.idx;
        assert!(
            self.first_child[idx as usize] == INVALID,
            "cannot destroy a pane that still has members"
        );

        // Detach from the containing pane if placed.
        if self.parent[idx as usize] != INVALID {
            self.unlink_from_parent(idx);
        }

        // Remove dirty tracking dependencies.
        self.dirty.remove_key(idx);

        // Bump generation so old handles immediately fail validation.
        self.generation[idx as usize] += 1;

        self.free_list.push(idx);
        self.traversal_dirty = true;
        self.pending_removed.push(idx);
        self.dirty.mark(idx, dirty::TOPOLOGY);
    }

    /// Returns whether the given handle refers to a live node.
    #[must_use]
    pub fn is_alive(&self, id: LayerId) -> bool {
        (id.idx < self.len)
            && self.generation[id.idx as usize] == id.generation
            && !self.free_list.contains(&id.idx)
    }

    // -- Topology API --

    /// Places `layer` as the last (topmost) member of `pane`.
    ///
    /// Marks inherited channels for `layer`'s subtree so effective opacity
    /// and effective hidden state are recomputed under the new ancestry.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale, or if `layer` is already placed.
    pub fn place_in(&mut self, pane: LayerId, layer: LayerId) {
        self.validate(pane);
        self.validate(layer);
        let p = pane.idx;
        let c = layer.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "layer is already placed in a pane"
        );

        self.link_as_last_member(p, c);

        // Dirty dependency edges: member depends on pane for inherited channels.
        let _ = self.dirty.add_dependency(c, p, dirty::VISIBILITY);
        let _ = self.dirty.add_dependency(c, p, dirty::OPACITY);

        self.mark_subtree_inherited_dirty(c);
        self.traversal_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Lifts `layer` out of its containing pane.
    ///
    /// Marks inherited channels for `layer`'s subtree so effective opacity
    /// and effective hidden state are recomputed after detaching from the old
    /// ancestry.
    ///
    /// # Panics
    ///
    /// Panics if the handle is stale or the node is not placed in a pane.
    pub fn lift(&mut self, layer: LayerId) {
        self.validate(layer);
        let c = layer.idx;
        assert!(
            self.parent[c as usize] != INVALID,
            "layer is not placed in a pane"
        );

        let p = self.parent[c as usize];
        self.unlink_from_parent(c);

        self.dirty.remove_dependency(c, p, dirty::VISIBILITY);
        self.dirty.remove_dependency(c, p, dirty::OPACITY);

        self.mark_subtree_inherited_dirty(c);
        self.traversal_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Moves `layer` into `new_pane`, lifting it from its current pane first
    /// if necessary.
    ///
    /// # Panics
    ///
    /// Panics if either handle is stale.
    pub fn move_to(&mut self, layer: LayerId, new_pane: LayerId) {
        self.validate(layer);
        self.validate(new_pane);

        if self.parent[layer.idx as usize] != INVALID {
            let old_p = self.parent[layer.idx as usize];
            self.unlink_from_parent(layer.idx);
            self.dirty
                .remove_dependency(layer.idx, old_p, dirty::VISIBILITY);
            self.dirty
                .remove_dependency(layer.idx, old_p, dirty::OPACITY);
            self.dirty.mark(old_p, dirty::TOPOLOGY);
        }

        let p = new_pane.idx;
        let c = layer.idx;
        self.link_as_last_member(p, c);

        let _ = self.dirty.add_dependency(c, p, dirty::VISIBILITY);
        let _ = self.dirty.add_dependency(c, p, dirty::OPACITY);

        self.mark_subtree_inherited_dirty(c);
        self.traversal_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Inserts `layer` before `sibling` in the pane's draw order.
    ///
    /// `layer` must not already be placed. `sibling` must be placed.
    ///
    /// # Panics
    ///
    /// Panics if handles are stale, `layer` is already placed, or `sibling`
    /// is not placed in a pane.
    pub fn order_before(&mut self, layer: LayerId, sibling: LayerId) {
        self.validate(layer);
        self.validate(sibling);
        let c = layer.idx;
        let s = sibling.idx;
        assert!(
            self.parent[c as usize] == INVALID,
            "layer is already placed in a pane"
        );
        let p = self.parent[s as usize];
        assert!(p != INVALID, "sibling is not placed in a pane");

        self.parent[c as usize] = p;
        self.next_sibling[c as usize] = s;
        self.prev_sibling[c as usize] = self.prev_sibling[s as usize];

        if self.prev_sibling[s as usize] != INVALID {
            self.next_sibling[self.prev_sibling[s as usize] as usize] = c;
        } else {
            // `sibling` was the bottom of the draw order.
            self.first_child[p as usize] = c;
        }
        self.prev_sibling[s as usize] = c;

        let _ = self.dirty.add_dependency(c, p, dirty::VISIBILITY);
        let _ = self.dirty.add_dependency(c, p, dirty::OPACITY);

        self.traversal_dirty = true;
        self.dirty.mark(p, dirty::TOPOLOGY);
    }

    /// Returns the pane containing a node, if any.
    #[must_use]
    pub fn pane_of(&self, id: LayerId) -> Option<LayerId> {
        self.validate(id);
        let p = self.parent[id.idx as usize];
        if p == INVALID {
            None
        } else {
            Some(LayerId {
                idx: p,
                generation: self.generation[p as usize],
            })
        }
    }

    /// Returns an iterator over the direct members of a pane, bottom to top.
    #[must_use]
    pub fn members(&self, id: LayerId) -> Members<'_> {
        self.validate(id);
        Members::new(self, self.first_child[id.idx as usize])
    }

    /// Returns the root nodes (panes and unplaced layers).
    #[must_use]
    pub fn roots(&self) -> Vec<LayerId> {
        let mut roots = Vec::new();
        for idx in 0..self.len {
            if self.parent[idx as usize] == INVALID && !self.free_list.contains(&idx) {
                roots.push(LayerId {
                    idx,
                    generation: self.generation[idx as usize],
                });
            }
        }
        roots
    }

    // -- Property getters (read-only, no dirty marking) --

    /// Returns the local opacity of a node.
    #[must_use]
    pub fn opacity(&self, id: LayerId) -> f32 {
        self.validate(id);
        self.local_opacity[id.idx as usize]
    }

    /// Returns the flags of a node.
    #[must_use]
    pub fn flags(&self, id: LayerId) -> LayerFlags {
        self.validate(id);
        self.flags[id.idx as usize]
    }

    /// Returns the zoom range of a node.
    #[must_use]
    pub fn zoom_range(&self, id: LayerId) -> ZoomRange {
        self.validate(id);
        self.zoom_range[id.idx as usize]
    }

    /// Returns whether a node is present on the map.
    #[must_use]
    pub fn present(&self, id: LayerId) -> bool {
        self.validate(id);
        self.present[id.idx as usize]
    }

    /// Returns the role of a node.
    #[must_use]
    pub fn role(&self, id: LayerId) -> LayerRole {
        self.validate(id);
        self.role[id.idx as usize]
    }

    /// Returns the data source of a node.
    #[must_use]
    pub fn source(&self, id: LayerId) -> Option<SourceId> {
        self.validate(id);
        self.source[id.idx as usize]
    }

    /// Returns the current stack zoom level.
    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Returns the computed effective opacity of a node.
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called.
    #[must_use]
    pub fn effective_opacity(&self, id: LayerId) -> f32 {
        self.validate(id);
        self.effective_opacity[id.idx as usize]
    }

    /// Returns whether the node is effectively hidden (by its own flag, an
    /// ancestor, absence from the map, or the zoom gate).
    ///
    /// Only valid after [`evaluate`](Self::evaluate) has been called.
    #[must_use]
    pub fn effective_hidden(&self, id: LayerId) -> bool {
        self.validate(id);
        self.effective_hidden[id.idx as usize]
    }

    /// Returns whether any live node with `role` is present on the map.
    ///
    /// This is the gating question the comparison controls ask; it is about
    /// presence, not zoom-gated visibility.
    #[must_use]
    pub fn role_present(&self, role: LayerRole) -> bool {
        (0..self.len).any(|idx| {
            self.role[idx as usize] == role
                && self.present[idx as usize]
                && !self.free_list.contains(&idx)
        })
    }

    // -- Mutation API (auto-marks dirty) --

    /// Sets the local opacity of a node.
    ///
    /// Marks the OPACITY channel dirty with eager propagation to descendants.
    pub fn set_opacity(&mut self, id: LayerId, opacity: f32) {
        self.validate(id);
        self.local_opacity[id.idx as usize] = opacity;
        self.dirty.mark_with(id.idx, dirty::OPACITY, &EagerPolicy);
    }

    /// Sets the flags of a node.
    ///
    /// Marks the VISIBILITY channel dirty with eager propagation to
    /// descendants (the hidden flag is inherited).
    pub fn set_flags(&mut self, id: LayerId, flags: LayerFlags) {
        self.validate(id);
        self.flags[id.idx as usize] = flags;
        self.dirty
            .mark_with(id.idx, dirty::VISIBILITY, &EagerPolicy);
    }

    /// Sets the zoom range of a node.
    pub fn set_zoom_range(&mut self, id: LayerId, range: ZoomRange) {
        self.validate(id);
        self.zoom_range[id.idx as usize] = range;
        self.dirty
            .mark_with(id.idx, dirty::VISIBILITY, &EagerPolicy);
    }

    /// Toggles whether a node is present on the map.
    ///
    /// Marks PRESENCE (local, for control gating) and VISIBILITY (eager,
    /// because absence hides the subtree).
    pub fn set_present(&mut self, id: LayerId, present: bool) {
        self.validate(id);
        self.present[id.idx as usize] = present;
        self.dirty.mark(id.idx, dirty::PRESENCE);
        self.dirty
            .mark_with(id.idx, dirty::VISIBILITY, &EagerPolicy);
    }

    /// Assigns the role of a node.
    pub fn set_role(&mut self, id: LayerId, role: LayerRole) {
        self.validate(id);
        self.role[id.idx as usize] = role;
        self.dirty.mark(id.idx, dirty::PRESENCE);
    }

    /// Sets the data source of a node.
    pub fn set_source(&mut self, id: LayerId, source: Option<SourceId>) {
        self.validate(id);
        self.source[id.idx as usize] = source;
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Invalidates the paint style of a node.
    ///
    /// Terrace does not store paint values; style policy lives with the host
    /// (see [`parcel`](crate::parcel)). This marks the node so the next
    /// [`StackChanges`](super::StackChanges) tells the host to restyle it.
    pub fn mark_restyled(&mut self, id: LayerId) {
        self.validate(id);
        self.dirty.mark(id.idx, dirty::STYLE);
    }

    /// Updates the stack zoom level, re-gating every zoom-ranged node.
    pub fn set_zoom(&mut self, zoom: u8) {
        if self.zoom == zoom {
            return;
        }
        self.zoom = zoom;
        let roots: Vec<u32> = (0..self.len)
            .filter(|idx| {
                self.parent[*idx as usize] == INVALID && !self.free_list.contains(idx)
            })
            .collect();
        for idx in roots {
            self.dirty.mark_with(idx, dirty::VISIBILITY, &EagerPolicy);
        }
    }

    // -- Raw-index accessors for hosts --
    //
    // These accept raw slot indices (as found in `StackChanges`) rather than
    // `LayerId` handles, skipping generation validation. Only use with
    // indices that came from `StackChanges` or `traversal_order()`.

    /// Returns the computed effective opacity at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn effective_opacity_at(&self, idx: u32) -> f32 {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.effective_opacity[idx as usize]
    }

    /// Returns whether the node at raw slot `idx` is effectively hidden.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn effective_hidden_at(&self, idx: u32) -> bool {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.effective_hidden[idx as usize]
    }

    /// Returns whether the node at raw slot `idx` is present on the map.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn present_at(&self, idx: u32) -> bool {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.present[idx as usize]
    }

    /// Returns the role at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn role_at(&self, idx: u32) -> LayerRole {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.role[idx as usize]
    }

    /// Returns the data source at raw slot `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len`.
    #[must_use]
    pub fn source_at(&self, idx: u32) -> Option<SourceId> {
        assert!(
            idx < self.len,
            "slot index {idx} out of range (len {})",
            self.len
        );
        self.source[idx as usize]
    }

    // -- Internal helpers --

    /// Panics if the handle is stale.
    fn validate(&self, id: LayerId) {
        assert!(
            id.idx < self.len && self.generation[id.idx as usize] == id.generation,
            "stale LayerId: {id:?} (current gen: {})",
            if id.idx < self.len {
                self.generation[id.idx as usize]
            } else {
                u32::MAX
            }
        );
    }

    /// Links `c` as the last member of `p` without touching dirty state.
    fn link_as_last_member(&mut self, p: u32, c: u32) {
        self.parent[c as usize] = p;
        self.prev_sibling[c as usize] = INVALID;
        self.next_sibling[c as usize] = INVALID;

        if self.first_child[p as usize] == INVALID {
            self.first_child[p as usize] = c;
        } else {
            // Walk to the top of the draw order.
            let mut last = self.first_child[p as usize];
            while self.next_sibling[last as usize] != INVALID {
                last = self.next_sibling[last as usize];
            }
            self.next_sibling[last as usize] = c;
            self.prev_sibling[c as usize] = last;
        }
    }

    /// Removes `idx` from its pane's member list without touching dirty state.
    fn unlink_from_parent(&mut self, idx: u32) {
        let p = self.parent[idx as usize];
        let prev = self.prev_sibling[idx as usize];
        let next = self.next_sibling[idx as usize];

        if prev != INVALID {
            self.next_sibling[prev as usize] = next;
        } else {
            // Was the bottom of the draw order.
            self.first_child[p as usize] = next;
        }

        if next != INVALID {
            self.prev_sibling[next as usize] = prev;
        }

        self.parent[idx as usize] = INVALID;
        self.prev_sibling[idx as usize] = INVALID;
        self.next_sibling[idx as usize] = INVALID;
    }

    /// Marks the subtree rooted at `idx` dirty for inherited channels.
    fn mark_subtree_inherited_dirty(&mut self, idx: u32) {
        self.dirty
            .mark_with(idx, dirty::VISIBILITY, &EagerPolicy);
        self.dirty.mark_with(idx, dirty::OPACITY, &EagerPolicy);
    }
}
