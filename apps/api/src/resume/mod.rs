// Resume Analyzer: resume text (pasted or extracted from a PDF) → AI feedback.

pub mod extract;
pub mod generator;
pub mod handlers;
pub mod prompts;
