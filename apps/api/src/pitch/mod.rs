pub mod cheese_match;
pub mod cuisine;
pub mod generator;
pub mod handlers;
pub mod persona;
pub mod prompts;
