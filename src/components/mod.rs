//! UI Components
//!
//! Leptos components for the collapsible roadmap tree.

mod counter_label;
mod item_row;
mod resource_link;
mod step_section;
mod substep_section;

pub use counter_label::CounterLabel;
pub use item_row::ItemRow;
pub use resource_link::ResourceLink;
pub use step_section::StepSection;
pub use substep_section::SubstepSection;
