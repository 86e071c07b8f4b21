//! Learning-path normalizer: raw model text → ordered step blocks.
//!
//! Lines are paired strictly two at a time (title, description) after blank
//! lines are dropped. Output whose descriptions span several lines drifts out
//! of alignment; that is detected and logged, not corrected.

use tracing::warn;

/// Splits `raw_text` into step strings of the form `**title**\n\ndescription`.
///
/// A trailing unpaired line becomes a step with an empty description.
pub fn parse_learning_path(raw_text: &str) -> Vec<String> {
    let lines: Vec<&str> = raw_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    let drifted = pairing_drift(&lines);
    if drifted > 0 || lines.len() % 2 != 0 {
        warn!(
            "Learning path text does not alternate title/description lines \
             ({} lines, {} pairs without a step title); steps may be misaligned",
            lines.len(),
            drifted
        );
    }

    lines
        .chunks(2)
        .map(|pair| {
            let title = pair[0];
            let description = pair.get(1).copied().unwrap_or("");
            format!("**{title}**\n\n{description}")
        })
        .collect()
}

/// Number of pairs whose first line does not look like a `Step N:` title.
fn pairing_drift(lines: &[&str]) -> usize {
    lines
        .chunks(2)
        .filter(|pair| !looks_like_step_title(pair[0]))
        .count()
}

fn looks_like_step_title(line: &str) -> bool {
    line.trim_start_matches(['*', '#', ' '])
        .to_ascii_lowercase()
        .starts_with("step")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_steps_separated_by_blank_lines() {
        let raw = "Step 1: Learn X\n\nDo X daily.\n\nStep 2: Learn Y\n\nDo Y weekly.";
        let steps = parse_learning_path(raw);
        assert_eq!(
            steps,
            vec![
                "**Step 1: Learn X**\n\nDo X daily.".to_string(),
                "**Step 2: Learn Y**\n\nDo Y weekly.".to_string(),
            ]
        );
        assert!(steps.iter().all(|s| s.starts_with("**Step ")));
    }

    #[test]
    fn test_lines_are_trimmed_and_crlf_tolerated() {
        let raw = "  Step 1: Ownership  \r\n   Read the book chapter 4.\r\n";
        assert_eq!(
            parse_learning_path(raw),
            vec!["**Step 1: Ownership**\n\nRead the book chapter 4.".to_string()]
        );
    }

    #[test]
    fn test_odd_line_count_leaves_empty_description() {
        let raw = "Step 1: A\nalpha\nStep 2: B";
        let steps = parse_learning_path(raw);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1], "**Step 2: B**\n\n");
    }

    #[test]
    fn test_multi_line_description_drifts_literally() {
        let raw = "Step 1: A\nline one\nline two\nStep 2: B\nbeta";
        let steps = parse_learning_path(raw);
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1], "**line two**\n\nStep 2: B");
        assert_eq!(pairing_drift(&raw.lines().collect::<Vec<_>>()), 2);
    }

    #[test]
    fn test_empty_text_yields_no_steps() {
        assert!(parse_learning_path("\n \n").is_empty());
    }

    #[test]
    fn test_bold_step_titles_are_not_counted_as_drift() {
        assert!(looks_like_step_title("**Step 3: Async Rust**"));
        assert!(!looks_like_step_title("Practice every day."));
    }
}
