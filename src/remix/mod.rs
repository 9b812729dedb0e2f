//! Themed recipe remixes through a generative text provider

pub mod client;
pub mod prompt;

pub use client::{extract_completion, ChatRemixer, ChatSettings, Remixer};
pub use prompt::{RemixPrompt, SYSTEM_PROMPT};
