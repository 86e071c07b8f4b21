// Mock Interview: role → questions, answers → scored feedback.
// All LLM calls go through the injected `TextGenerator`.

pub mod generator;
pub mod handlers;
pub mod parser;
pub mod prompts;
