// Copyright 2026 the Terrace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON export of recorded sessions.
//!
//! Serializes a [`RecorderSink`](crate::recorder::RecorderSink) log as a
//! JSON array, one object per event, for external tooling (timeline viewers,
//! regression diffing).

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, control_label, input_kind_label};

/// Converts recorded events to a JSON array.
#[must_use]
pub fn session_json(events: &[RecordedEvent]) -> Value {
    let entries: Vec<Value> = events.iter().map(event_json).collect();
    Value::Array(entries)
}

/// Converts recorded events to a pretty-printed JSON string.
#[must_use]
pub fn session_to_string(events: &[RecordedEvent]) -> String {
    serde_json::to_string_pretty(&session_json(events)).unwrap_or_default()
}

fn event_json(event: &RecordedEvent) -> Value {
    match *event {
        RecordedEvent::Input { seq, kind } => json!({
            "type": "input",
            "seq": seq,
            "kind": input_kind_label(kind),
        }),
        RecordedEvent::Attachment {
            seq,
            control,
            attached,
        } => json!({
            "type": "attachment",
            "seq": seq,
            "control": control_label(control),
            "attached": attached,
        }),
        RecordedEvent::Extent { seq, width, height } => json!({
            "type": "extent",
            "seq": seq,
            "width": width,
            "height": height,
        }),
        RecordedEvent::Stack {
            seq,
            visibility,
            hidden,
            unhidden,
            restyled,
            topology_changed,
        } => json!({
            "type": "stack",
            "seq": seq,
            "visibility": visibility,
            "hidden": hidden,
            "unhidden": unhidden,
            "restyled": restyled,
            "topology_changed": topology_changed,
        }),
    }
}
