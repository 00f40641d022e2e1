//! Counter Engine
//!
//! Done/total pairs per step and per substep, held in standalone signals so
//! each counter label re-renders from exactly its own signal. Counts are
//! seeded once from persisted state and updated incrementally on toggles;
//! there is no full-rescan path.

use leptos::prelude::*;
use std::collections::HashMap;

use crate::store::DoneStore;
use crate::tree::StepNode;

/// A done/total pair for one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Count {
    pub done: u32,
    pub total: u32,
}

impl Count {
    /// Counter label text, e.g. `(3/12)`
    pub fn label(&self) -> String {
        format!("({}/{})", self.done, self.total)
    }
}

/// Counters keyed by step and by `step.sub` composite key
#[derive(Clone, Default)]
pub struct Counters {
    steps: HashMap<String, ArcRwSignal<Count>>,
    subs: HashMap<String, ArcRwSignal<Count>>,
}

impl Counters {
    /// Build counters for every bucket in one traversal, reading each item's
    /// persisted done flag. A failed read counts as not done.
    pub fn seed(tree: &[StepNode], store: &dyn DoneStore) -> Self {
        let mut steps = HashMap::new();
        let mut subs = HashMap::new();

        for step in tree {
            let mut step_count = Count::default();
            for sub in &step.subs {
                let mut sub_count = Count::default();
                for item in &sub.items {
                    sub_count.total += 1;
                    step_count.total += 1;
                    if store.load(&item.storage_key()).unwrap_or(false) {
                        sub_count.done += 1;
                        step_count.done += 1;
                    }
                }
                subs.insert(
                    format!("{}.{}", step.key, sub.key),
                    ArcRwSignal::new(sub_count),
                );
            }
            steps.insert(step.key.clone(), ArcRwSignal::new(step_count));
        }

        Self { steps, subs }
    }

    /// Apply a toggle to the two affected buckets. `delta` is +1 for
    /// unchecked→checked, -1 for checked→unchecked; matching the actual
    /// checkbox transition is the caller's invariant. Totals never change.
    pub fn apply_toggle(&self, step_key: &str, sub_key: &str, delta: i32) {
        let bump = |count: &mut Count| {
            if delta > 0 {
                count.done += 1;
            } else {
                count.done = count.done.saturating_sub(1);
            }
        };
        if let Some(sig) = self.steps.get(step_key) {
            sig.update(|c| bump(c));
        }
        if let Some(sig) = self.subs.get(&format!("{step_key}.{sub_key}")) {
            sig.update(|c| bump(c));
        }
    }

    /// Counter signal for a step bucket
    pub fn step(&self, step_key: &str) -> Option<ArcRwSignal<Count>> {
        self.steps.get(step_key).cloned()
    }

    /// Counter signal for a substep bucket
    pub fn sub(&self, step_key: &str, sub_key: &str) -> Option<ArcRwSignal<Count>> {
        self.subs.get(&format!("{step_key}.{sub_key}")).cloned()
    }
}
