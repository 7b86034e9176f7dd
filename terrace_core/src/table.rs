// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click-to-inspect attribute table.
//!
//! Clicking a parcel adds its attributes as a row and highlights the
//! feature; clicking empty map space clears the table and the highlights.
//! The table owns the selection bookkeeping so hosts only have to forward
//! outcomes to their feature styling (see
//! [`parcel_style`](crate::parcel::parcel_style)).
//!
//! On small screens a single highlighted parcel is easier to follow, so the
//! table supports an *exclusive* mode in which each insert displaces the
//! previous selection.

use alloc::string::String;
use alloc::vec::Vec;

/// Outcome of [`AttributeTable::insert`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsertOutcome {
    /// The row was added. Highlight the new parcel and reset the style of
    /// every `displaced` one (non-empty only in exclusive mode).
    Added {
        /// Previously selected parcels that lost their highlight.
        displaced: Vec<u64>,
    },
    /// The parcel is already listed; nothing changes.
    AlreadyListed,
}

/// An ordered table of selected parcels and their attribute values.
#[derive(Clone, Debug)]
pub struct AttributeTable {
    columns: Vec<String>,
    ids: Vec<u64>,
    values: Vec<Vec<String>>,
    exclusive: bool,
}

impl AttributeTable {
    /// Creates an empty table with the given column labels.
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            ids: Vec::new(),
            values: Vec::new(),
            exclusive: false,
        }
    }

    /// Switches between exclusive (single-selection) and cumulative mode.
    ///
    /// Changing the mode does not displace existing rows.
    pub fn set_exclusive(&mut self, exclusive: bool) {
        self.exclusive = exclusive;
    }

    /// Column labels, in order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Whether the parcel is already listed.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// The ids of all listed parcels, in insertion order.
    #[must_use]
    pub fn selected(&self) -> &[u64] {
        &self.ids
    }

    /// Adds a row for `id` with one value per column.
    ///
    /// Inserting an already-listed parcel is a no-op (re-clicking a
    /// highlighted parcel must not duplicate its row). In exclusive mode the
    /// previous rows are displaced first.
    ///
    /// # Panics
    ///
    /// Panics if `values` does not have one entry per column.
    pub fn insert(&mut self, id: u64, values: Vec<String>) -> InsertOutcome {
        assert!(
            values.len() == self.columns.len(),
            "row has {} values for {} columns",
            values.len(),
            self.columns.len()
        );
        if self.contains(id) {
            return InsertOutcome::AlreadyListed;
        }

        let displaced = if self.exclusive { self.clear() } else { Vec::new() };
        self.ids.push(id);
        self.values.push(values);
        InsertOutcome::Added { displaced }
    }

    /// Removes all rows, returning the ids whose highlight must be reset.
    pub fn clear(&mut self) -> Vec<u64> {
        self.values.clear();
        core::mem::take(&mut self.ids)
    }

    /// Iterates over `(id, values)` rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = (u64, &[String])> {
        self.ids
            .iter()
            .zip(self.values.iter())
            .map(|(id, values)| (*id, values.as_slice()))
    }

    /// Renders the table as CSV with CRLF line endings, header first.
    #[must_use]
    pub fn to_csv(&self) -> String {
        let mut lines = Vec::with_capacity(self.values.len() + 1);
        lines.push(self.columns.join(","));
        for values in &self.values {
            lines.push(values.join(","));
        }
        lines.join("\r\n")
    }
}
