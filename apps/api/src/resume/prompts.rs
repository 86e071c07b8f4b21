/// Replace `{resume_text}` before sending. The resume is embedded verbatim.
pub const RESUME_FEEDBACK_PROMPT_TEMPLATE: &str = r#"Here is the resume text:
"{resume_text}"

Provide detailed feedback on formatting, missing skills, and improvement areas."#;

pub fn build_resume_feedback_prompt(resume_text: &str) -> String {
    RESUME_FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}
