pub mod choices;
pub mod suggestions;
pub mod transcript;
