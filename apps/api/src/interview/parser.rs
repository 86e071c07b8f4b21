//! Interview normalizers.
//!
//! Evaluation text is cut into blocks at every line that starts with
//! `Question <N>:`. Each block must then read, in order:
//!
//! ```text
//! Question <N>: <question>
//! Answer <N>: <answer>
//! Score: <integer>
//! Feedback: <feedback, may span lines>
//! ```
//!
//! Blocks that don't match are kept as `Skipped` so callers can see what was dropped.
//! Nothing here returns an error.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::models::interview::{QAFeedback, QaPair};

/// One `Question <N>:` block of evaluation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationBlock {
    Parsed(QAFeedback),
    /// Raw block text (trimmed) that did not follow the expected layout.
    Skipped(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEvaluation {
    pub feedback: Vec<QAFeedback>,
    pub skipped: Vec<String>,
}

fn block_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^Question\s\d+:").expect("block start regex is valid"))
}

fn block_layout() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?s)\AQuestion\s\d+:\s(.*?)\nAnswer\s\d+:\s(.*?)\nScore:\s?(\d+)\nFeedback:\s?(.*)\z",
        )
        .expect("evaluation block regex is valid")
    })
}

/// Splits a numbered question list into lines, trimmed, blank lines dropped.
/// Numbering written by the model stays part of each line.
pub fn parse_interview_questions(raw_text: &str) -> Vec<String> {
    raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Cuts `raw_text` into question blocks, in order. Text before the first block is ignored.
fn split_blocks(raw_text: &str) -> Vec<&str> {
    let starts: Vec<usize> = block_start()
        .find_iter(raw_text)
        .map(|m| m.start())
        .collect();

    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(raw_text.len());
            &raw_text[start..end]
        })
        .collect()
}

fn parse_block(block: &str) -> EvaluationBlock {
    let Some(caps) = block_layout().captures(block) else {
        return EvaluationBlock::Skipped(block.trim().to_string());
    };

    // \d+ always matches digits; only overflow can fail here.
    let Ok(score) = caps[3].parse::<u32>() else {
        return EvaluationBlock::Skipped(block.trim().to_string());
    };

    if score > 10 {
        debug!("Evaluation score {score} is outside 0-10; keeping as written");
    }

    EvaluationBlock::Parsed(QAFeedback {
        question: caps[1].trim().to_string(),
        user_answer: caps[2].trim().to_string(),
        feedback: caps[4].trim().to_string(),
        score,
    })
}

/// Classifies every question block in `raw_text`, left to right.
pub fn evaluate_blocks(raw_text: &str) -> Vec<EvaluationBlock> {
    split_blocks(raw_text).into_iter().map(parse_block).collect()
}

/// Parses model evaluation text into feedback records.
///
/// `qa_pairs` is only used to report a count mismatch; records come solely from
/// the text, and their number may differ from the number of pairs.
pub fn parse_interview_evaluation(raw_text: &str, qa_pairs: &[QaPair]) -> ParsedEvaluation {
    let mut parsed = ParsedEvaluation::default();

    for block in evaluate_blocks(raw_text) {
        match block {
            EvaluationBlock::Parsed(feedback) => parsed.feedback.push(feedback),
            EvaluationBlock::Skipped(raw) => {
                warn!(
                    "Skipping evaluation block that does not match the expected layout: {:?}",
                    raw.chars().take(80).collect::<String>()
                );
                parsed.skipped.push(raw);
            }
        }
    }

    if parsed.feedback.len() != qa_pairs.len() {
        warn!(
            "Evaluation produced {} records for {} submitted answers",
            parsed.feedback.len(),
            qa_pairs.len()
        );
    }

    parsed
}
