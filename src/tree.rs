//! Grouping Engine
//!
//! Partitions the flat item sequence into the two-level step → substep tree.

use crate::models::{value_str, ItemRecord};
use std::collections::HashMap;

/// Bucket key used when a record carries no step/substep
const UNKNOWN: &str = "Unknown";

/// A substep bucket: display title plus the items in authoring order
#[derive(Debug, Clone, PartialEq)]
pub struct SubNode {
    pub key: String,
    pub title: String,
    pub items: Vec<ItemRecord>,
}

/// A step bucket: display title plus its substeps in first-seen order
#[derive(Debug, Clone, PartialEq)]
pub struct StepNode {
    pub key: String,
    pub title: String,
    pub subs: Vec<SubNode>,
}

/// Group items by step then substep in a single pass.
///
/// First appearance of a step/substep key fixes its position and its title
/// (authored title when present, synthesized label otherwise). Items are
/// never dropped or deduplicated.
pub fn group_by_step(items: &[ItemRecord]) -> Vec<StepNode> {
    let mut steps: Vec<StepNode> = Vec::new();
    let mut step_index: HashMap<String, usize> = HashMap::new();
    let mut sub_index: HashMap<(String, String), usize> = HashMap::new();

    for item in items {
        let step_key = item
            .step
            .as_ref()
            .map(value_str)
            .unwrap_or_else(|| UNKNOWN.to_string());
        let sub_key = item
            .substep
            .as_ref()
            .map(value_str)
            .unwrap_or_else(|| UNKNOWN.to_string());

        let si = *step_index.entry(step_key.clone()).or_insert_with(|| {
            steps.push(StepNode {
                key: step_key.clone(),
                title: item
                    .step_title
                    .clone()
                    .unwrap_or_else(|| format!("Step {step_key}")),
                subs: Vec::new(),
            });
            steps.len() - 1
        });

        let step = &mut steps[si];
        let sj = *sub_index
            .entry((step_key.clone(), sub_key.clone()))
            .or_insert_with(|| {
                step.subs.push(SubNode {
                    key: sub_key.clone(),
                    title: item
                        .substep_title
                        .clone()
                        .unwrap_or_else(|| format!("Step {step_key}.{sub_key}")),
                    items: Vec::new(),
                });
                step.subs.len() - 1
            });

        step.subs[sj].items.push(item.clone());
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(step: i64, substep: i64, title: &str) -> ItemRecord {
        ItemRecord {
            step: Some(json!(step)),
            substep: Some(json!(substep)),
            title: Some(title.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn groups_by_step_then_substep() {
        let items = vec![
            item(1, 1, "Two Sum"),
            item(1, 1, "3Sum"),
            item(1, 2, "Merge Sort"),
        ];
        let tree = group_by_step(&items);

        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].key, "1");
        assert_eq!(tree[0].subs.len(), 2);
        assert_eq!(tree[0].subs[0].key, "1");
        assert_eq!(tree[0].subs[0].items.len(), 2);
        assert_eq!(tree[0].subs[1].key, "2");
        assert_eq!(tree[0].subs[1].items.len(), 1);
    }

    #[test]
    fn preserves_first_seen_order_and_loses_nothing() {
        let items = vec![
            item(2, 1, "a"),
            item(1, 9, "b"),
            item(2, 3, "c"),
            item(2, 1, "d"),
            item(1, 9, "e"),
        ];
        let tree = group_by_step(&items);

        let step_keys: Vec<&str> = tree.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(step_keys, ["2", "1"]);
        let sub_keys: Vec<&str> = tree[0].subs.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(sub_keys, ["1", "3"]);

        // Flattening back reproduces every item, with in-bucket order intact
        let flat: Vec<&ItemRecord> = tree
            .iter()
            .flat_map(|s| s.subs.iter())
            .flat_map(|s| s.items.iter())
            .collect();
        assert_eq!(flat.len(), items.len());
        let titles: Vec<&str> = tree[0].subs[0]
            .items
            .iter()
            .map(|i| i.title.as_deref().unwrap())
            .collect();
        assert_eq!(titles, ["a", "d"]);
    }

    #[test]
    fn synthesizes_titles_when_absent() {
        let tree = group_by_step(&[item(3, 2, "x")]);
        assert_eq!(tree[0].title, "Step 3");
        assert_eq!(tree[0].subs[0].title, "Step 3.2");
    }

    #[test]
    fn authored_titles_win_on_first_sight() {
        let mut first = item(1, 1, "x");
        first.step_title = Some("Arrays".to_string());
        first.substep_title = Some("Easy".to_string());
        let mut second = item(1, 1, "y");
        second.step_title = Some("Renamed".to_string());

        let tree = group_by_step(&[first, second]);
        assert_eq!(tree[0].title, "Arrays");
        assert_eq!(tree[0].subs[0].title, "Easy");
    }

    #[test]
    fn missing_keys_land_in_unknown_bucket() {
        let orphan = ItemRecord {
            title: Some("stray".to_string()),
            ..Default::default()
        };
        let tree = group_by_step(&[orphan, item(1, 1, "x")]);
        assert_eq!(tree[0].key, "Unknown");
        assert_eq!(tree[0].subs[0].key, "Unknown");
        assert_eq!(tree[1].key, "1");
    }

    #[test]
    fn empty_input_yields_empty_tree() {
        assert!(group_by_step(&[]).is_empty());
    }
}
