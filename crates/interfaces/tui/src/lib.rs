pub mod catalog;
pub mod events;
pub mod theme;
pub mod widgets;
pub mod wizard;

pub use catalog::{SuggestionItem, suggestions};
pub use events::Action;
pub use wizard::{Profile, Step, Style, Wizard, run_gift_wizard};
