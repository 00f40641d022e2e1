//! Application Context
//!
//! Per-page-load state shared with all components via the Leptos Context
//! API: the seeded counters and the persistence store. Created at load,
//! discarded with the page.

use std::sync::Arc;

use crate::counters::Counters;
use crate::store::DoneStore;

#[derive(Clone)]
pub struct AppContext {
    /// Done/total counters, one signal per step and substep bucket
    pub counters: Counters,
    /// Write-through completion store
    pub store: Arc<dyn DoneStore + Send + Sync>,
}

impl AppContext {
    pub fn new(counters: Counters, store: Arc<dyn DoneStore + Send + Sync>) -> Self {
        Self { counters, store }
    }
}
