use antigravity_sync::{build_wrapper_workflow, extract_description, sanitize_workflow_stem};

#[test]
fn test_extract_from_opencode_command() {
    let content = r#"---
description: Create well-formatted git commits with conventional messages
agent: build
model: anthropic/claude-sonnet
---

# Commit

Stage changes, write a message, commit.
"#;

    assert_eq!(
        extract_description(content, "fallback"),
        "Create well-formatted git commits with conventional messages"
    );
}

#[test]
fn test_extract_without_frontmatter() {
    let content = "\n\nFirst real line\nSecond line";
    assert_eq!(extract_description(content, "fallback"), "First real line");
}

#[test]
fn test_extract_from_heading_line() {
    let content = "# Summarize the diff\n\nUse git diff.";
    assert_eq!(
        extract_description(content, "fallback"),
        "# Summarize the diff"
    );
}

#[test]
fn test_extract_blank_document() {
    assert_eq!(extract_description("\n \n", "fallback text"), "fallback text");
}

#[test]
fn test_wrapper_for_namespaced_command() {
    let stem = "git:commit";
    let description = extract_description("---\ndescription: \"Commit work\"\n---\n", "x");
    let doc = build_wrapper_workflow(&description, "/cmds/git:commit.md", stem);

    assert_eq!(sanitize_workflow_stem(stem, "oc-"), "oc-git-commit");
    assert!(doc.contains("description: [OpenCode git:commit] Commit work\n"));
    assert!(doc.contains("## Source\n- `/cmds/git:commit.md`\n"));
}
