// Prompt template for learning-path generation.
// The "Step N: <title>" / description layout is what `parser::parse_learning_path` pairs on.

/// Replace `{skills}` before sending.
pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = r#"Given the following user skills: {skills}, generate a personalized, progressive tech learning path.

Format the output as clearly labeled steps using the structure below. Each step must include both:
1. A short title on the first line (prefixed with "Step N: ")
2. A description on the next line

Separate each step with a blank line so it's easy to split for UI rendering.

Example format:
Step 1: [Short Title]
[Detailed description here.]

Step 2: [Short Title]
[Detailed description here.]

Continue in this format for 6 to 8 steps depending on depth."#;

/// Builds the learning-path prompt. Skills are embedded verbatim, comma-joined, in input order.
/// Callers reject an empty skill list before getting here.
pub fn build_learning_path_prompt(skills: &[String]) -> String {
    LEARNING_PATH_PROMPT_TEMPLATE.replace("{skills}", &skills.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_skills_comma_joined_in_order() {
        let skills = vec![
            "Rust".to_string(),
            "PostgreSQL".to_string(),
            "Distributed systems".to_string(),
        ];
        let prompt = build_learning_path_prompt(&skills);
        assert!(prompt.contains("Rust, PostgreSQL, Distributed systems"));
        assert!(!prompt.contains("{skills}"));
    }

    #[test]
    fn test_prompt_requests_step_layout() {
        let prompt = build_learning_path_prompt(&["Go".to_string()]);
        assert!(prompt.contains("Step 1: [Short Title]"));
        assert!(prompt.contains("6 to 8 steps"));
    }

    #[test]
    fn test_skill_with_braces_is_embedded_verbatim() {
        let prompt = build_learning_path_prompt(&["{skills}".to_string(), "C++".to_string()]);
        assert!(prompt.contains("{skills}, C++"));
    }
}
