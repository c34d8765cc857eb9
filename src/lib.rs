pub mod agent;
pub mod config;
pub mod gemini;
pub mod news;
