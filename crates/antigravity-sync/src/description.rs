//! Description extraction from OpenCode command markdown
//!
//! Antigravity workflow metadata is a single `description` line, so each
//! command needs a one-line summary. Sources are tried in priority order:
//!
//! 1. the `description:` key of a leading `---` frontmatter block
//! 2. the first non-blank line of the document (truncated)
//! 3. the caller-supplied fallback

/// Frontmatter delimiter line
const DELIMITER: &str = "---";

/// Key looked up inside the frontmatter block
const DESCRIPTION_KEY: &str = "description:";

/// Maximum length, in characters, of a description taken from the body
pub const MAX_LINE_DESCRIPTION_CHARS: usize = 200;

/// Extract a one-line description from command markdown.
///
/// Frontmatter values are returned whole; only the first-line fallback is
/// truncated to [`MAX_LINE_DESCRIPTION_CHARS`].
pub fn extract_description(markdown: &str, fallback: &str) -> String {
    if let Some(value) = frontmatter_description(markdown) {
        return value;
    }

    if let Some(line) = first_non_blank_line(markdown) {
        return line;
    }

    fallback.to_string()
}

/// Lines strictly between the opening and closing `---`, if the document
/// opens with a closed frontmatter block.
fn frontmatter_lines(markdown: &str) -> Option<Vec<&str>> {
    let mut lines = markdown.lines();

    if lines.next()? != DELIMITER {
        return None;
    }

    let mut inner = Vec::new();
    for line in lines {
        if line.trim() == DELIMITER {
            return Some(inner);
        }
        inner.push(line);
    }

    // No closing delimiter
    None
}

fn frontmatter_description(markdown: &str) -> Option<String> {
    let lines = frontmatter_lines(markdown)?;
    let line = lines
        .into_iter()
        .find(|line| line.trim_start().starts_with(DESCRIPTION_KEY))?;

    let (_, raw) = line.split_once(':')?;
    let value = strip_matching_quotes(raw.trim());

    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Remove one layer of matching `"` or `'` around a value.
fn strip_matching_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn first_non_blank_line(markdown: &str) -> Option<String> {
    markdown
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(|line| line.chars().take(MAX_LINE_DESCRIPTION_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_frontmatter_description() {
        let md = "---\ndescription: \"Do the thing\"\n---\nbody text";
        assert_eq!(extract_description(md, "fallback"), "Do the thing");
    }

    #[test]
    fn reads_single_quoted_description() {
        let md = "---\ndescription: 'Review a PR'\n---\n";
        assert_eq!(extract_description(md, "fallback"), "Review a PR");
    }

    #[test]
    fn reads_unquoted_description_among_other_keys() {
        let md = r#"---
agent: build
model: anthropic/claude
  description: Indented key still counts
---

# Heading
"#;
        assert_eq!(
            extract_description(md, "fallback"),
            "Indented key still counts"
        );
    }

    #[test]
    fn value_keeps_later_colons() {
        let md = "---\ndescription: Step 1: plan, Step 2: do\n---\n";
        assert_eq!(
            extract_description(md, "fallback"),
            "Step 1: plan, Step 2: do"
        );
    }

    #[test]
    fn only_one_layer_of_matching_quotes_is_removed() {
        let md = "---\ndescription: \"'nested'\"\n---\n";
        assert_eq!(extract_description(md, "fallback"), "'nested'");

        let md = "---\ndescription: \"unbalanced'\n---\n";
        assert_eq!(extract_description(md, "fallback"), "\"unbalanced'");
    }

    #[test]
    fn key_is_case_sensitive() {
        let md = "---\nDescription: Wrong case\n---\nFirst body line";
        // Falls through to the first non-blank line, which is the delimiter
        assert_eq!(extract_description(md, "fallback"), "---");
    }

    #[test]
    fn empty_frontmatter_value_falls_through() {
        let md = "---\ndescription: ''\n---\nBody";
        assert_eq!(extract_description(md, "fallback"), "---");
    }

    #[test]
    fn unclosed_frontmatter_falls_through() {
        let md = "---\ndescription: Never closed\nBody";
        assert_eq!(extract_description(md, "fallback"), "---");
    }

    #[test]
    fn closing_delimiter_is_trimmed() {
        let md = "---\ndescription: Closed loosely\n  ---  \nBody";
        assert_eq!(extract_description(md, "fallback"), "Closed loosely");
    }

    #[test]
    fn opening_delimiter_must_be_exact() {
        let md = "--- \ndescription: Not frontmatter\n---\n";
        assert_eq!(extract_description(md, "fallback"), "---");

        let md = "----\ndescription: Not frontmatter\n---\n";
        assert_eq!(extract_description(md, "fallback"), "----");
    }

    #[test]
    fn description_after_closing_delimiter_is_ignored() {
        let md = "---\ntitle: x\n---\ndescription: In the body";
        assert_eq!(extract_description(md, "fallback"), "---");
    }

    #[test]
    fn first_non_blank_line_is_trimmed() {
        let md = "\n\n   First real line  \nSecond line";
        assert_eq!(extract_description(md, "fallback"), "First real line");
    }

    #[test]
    fn first_line_is_truncated_by_characters() {
        let line = "é".repeat(250);
        let out = extract_description(&line, "fallback");
        assert_eq!(out.chars().count(), MAX_LINE_DESCRIPTION_CHARS);
        assert!(out.chars().all(|c| c == 'é'));
    }

    #[test]
    fn frontmatter_description_is_not_truncated() {
        let long = "x".repeat(300);
        let md = format!("---\ndescription: {long}\n---\n");
        assert_eq!(extract_description(&md, "fallback"), long);
    }

    #[test]
    fn blank_body_returns_fallback() {
        assert_eq!(extract_description("", "fallback text"), "fallback text");
        assert_eq!(
            extract_description(" \n\t\n  \n", "fallback text"),
            "fallback text"
        );
    }

    #[test]
    fn windows_line_endings_are_handled() {
        let md = "---\r\ndescription: CRLF command\r\n---\r\nBody\r\n";
        assert_eq!(extract_description(md, "fallback"), "CRLF command");
    }
}
