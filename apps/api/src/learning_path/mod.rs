// Learning Path: skills → AI-generated step list.
// All LLM calls go through the injected `TextGenerator`.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
