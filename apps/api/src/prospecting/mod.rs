pub mod classifier;
pub mod filter;
pub mod handlers;
pub mod prompts;
pub mod rules;
