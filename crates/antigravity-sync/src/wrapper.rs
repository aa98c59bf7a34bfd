//! Antigravity workflow wrapper rendering
//!
//! A wrapper is deliberately short: frontmatter with the description, four
//! numbered steps that delegate to the source command file, and a glossary
//! mapping OpenCode tool names onto their Antigravity counterparts.

/// Directory the agent is told to open when the source file is unreadable
pub const WORKSPACE_ROOT_HINT: &str = "~/code/ai-configs";

/// OpenCode terms and how to carry them out in Antigravity
pub const COMPATIBILITY_NOTES: [&str; 3] = [
    "OpenCode `Task` / subagents: use Antigravity Agent Manager (parallel chats) or split the work into multiple conversations.",
    "OpenCode `todowrite`: use a numbered plan / Task Plan artifact and update it as you work.",
    "OpenCode `Bash` tool: run terminal commands in Antigravity (respect terminal policy; don't auto-run destructive commands unless allowed).",
];

/// Tag identifying the originating OpenCode command, e.g. `[OpenCode review-pr]`
pub fn opencode_tag(stem: &str) -> String {
    format!("[OpenCode {stem}]")
}

/// Render the wrapper workflow document for one command.
///
/// Inputs are interpolated as-is; nothing is escaped or validated.
pub fn build_wrapper_workflow(description: &str, source_path: &str, stem: &str) -> String {
    let full_description = format!("{} {}", opencode_tag(stem), description);
    let full_description = full_description.trim_end();

    let mut lines = vec![
        "---".to_string(),
        format!("description: {full_description}"),
        "---".to_string(),
        String::new(),
        "1. Ask for any missing inputs implied by this command (OpenCode may refer to `$ARGUMENTS`).".to_string(),
        format!("2. Read the source command file at `{source_path}`."),
        "3. Follow the source instructions, adapting OpenCode-specific terms using `Compatibility` below.".to_string(),
        format!(
            "4. If you cannot read the source file (workspace/permissions limits), open `{WORKSPACE_ROOT_HINT}` in Antigravity and retry."
        ),
        String::new(),
        "## Compatibility".to_string(),
    ];
    lines.extend(COMPATIBILITY_NOTES.iter().map(|note| format!("- {note}")));
    lines.extend([
        String::new(),
        "## Source".to_string(),
        format!("- `{source_path}`"),
        String::new(),
    ]);

    lines.join("\n")
}

/// A rendered wrapper for a single OpenCode command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    pub description: String,
    pub source_path: String,
    pub stem: String,
}

impl Workflow {
    pub fn new(
        description: impl Into<String>,
        source_path: impl Into<String>,
        stem: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            source_path: source_path.into(),
            stem: stem.into(),
        }
    }

    /// Document text as written to disk
    pub fn render(&self) -> String {
        build_wrapper_workflow(&self.description, &self.source_path, &self.stem)
    }
}
