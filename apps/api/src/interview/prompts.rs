// Mock interview prompt templates.
// The evaluation answer layout is parsed by `parser::evaluate_blocks`; keep the two in step.

use crate::models::interview::QaPair;

/// Replace `{role}` before sending.
pub const INTERVIEW_QUESTIONS_PROMPT_TEMPLATE: &str =
    "Generate exactly 5 technical interview questions for a {role}. \
    Format them as a numbered list, one question per line.";

/// Replace `{qa_pairs}` before sending.
pub const INTERVIEW_EVALUATION_PROMPT_TEMPLATE: &str = r#"You are an AI interviewer. Evaluate the following answers to technical interview questions.

Provide:
- A score from 0 to 10 for each answer based on relevance, accuracy, and clarity.
- A brief explanation for each score.

Respond for every question using exactly this format:
Question 1: <question>
Answer 1: <userAnswer>
Score: X
Feedback: <your feedback>

{qa_pairs}"#;

pub fn build_interview_questions_prompt(role: &str) -> String {
    INTERVIEW_QUESTIONS_PROMPT_TEMPLATE.replace("{role}", role)
}

/// Embeds each pair as `Question i: ...\nAnswer i: ...`, numbered from 1.
pub fn build_interview_evaluation_prompt(qa_pairs: &[QaPair]) -> String {
    let pairs = qa_pairs
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let n = i + 1;
            format!(
                "Question {n}: {}\nAnswer {n}: {}",
                pair.question, pair.user_answer
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    INTERVIEW_EVALUATION_PROMPT_TEMPLATE.replace("{qa_pairs}", &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(q: &str, a: &str) -> QaPair {
        QaPair {
            question: q.to_string(),
            user_answer: a.to_string(),
        }
    }

    #[test]
    fn test_questions_prompt_names_role_and_count() {
        let prompt = build_interview_questions_prompt("Backend Engineer");
        assert!(prompt.contains("5 technical interview questions for a Backend Engineer"));
        assert!(prompt.contains("numbered list"));
    }

    #[test]
    fn test_evaluation_prompt_embeds_numbered_pairs() {
        let prompt = build_interview_evaluation_prompt(&[
            pair("What is a closure?", "A function with bound scope"),
            pair("What is a promise?", "idk"),
        ]);
        assert!(prompt.contains("Question 1: What is a closure?\nAnswer 1: A function with bound scope"));
        assert!(prompt.contains("Question 2: What is a promise?\nAnswer 2: idk"));
        assert!(!prompt.contains("{qa_pairs}"));
    }

    #[test]
    fn test_evaluation_prompt_states_response_layout() {
        let prompt = build_interview_evaluation_prompt(&[pair("Q", "A")]);
        assert!(prompt.contains(
            "Question 1: <question>\nAnswer 1: <userAnswer>\nScore: X\nFeedback: <your feedback>"
        ));
    }
}
