//! Item Records
//!
//! Data structures matching the authored roadmap data (inline JSON or the
//! `window.data` global). All fields are optional; unknown fields are ignored.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One checklist entry as authored in the source data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemRecord {
    /// Top-level grouping key (any JSON primitive, compared by string form)
    pub step: Option<Value>,
    /// Second-level grouping key (any JSON primitive, compared by string form)
    pub substep: Option<Value>,
    /// Display title for the step, first record wins
    pub step_title: Option<String>,
    /// Display title for the substep, first record wins
    pub substep_title: Option<String>,
    /// Item display title
    pub title: Option<String>,
    /// Primary resource URL; when present the title renders as a link
    pub article: Option<String>,
    pub gfg: Option<String>,
    pub leetcode: Option<String>,
    pub solution: Option<String>,
    pub video: Option<String>,
    /// Stable identity override for completion storage
    pub checkbox_id: Option<Value>,
}

impl ItemRecord {
    /// Stable identity string used as the completion storage key.
    ///
    /// `checkboxId` wins when present; otherwise the key is synthesized from
    /// step, substep, and lower-cased title. Renaming a title without a
    /// `checkboxId` therefore resets that item's completion state.
    pub fn storage_key(&self) -> String {
        if let Some(id) = &self.checkbox_id {
            return value_str(id);
        }
        format!(
            "s{}-{}-{}",
            self.step.as_ref().map(value_str).unwrap_or_default(),
            self.substep.as_ref().map(value_str).unwrap_or_default(),
            self.title.as_deref().unwrap_or_default().to_lowercase(),
        )
    }
}

/// String form of a JSON primitive: strings render unquoted, everything
/// else via the JSON text representation.
pub fn value_str(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
