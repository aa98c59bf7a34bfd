//! Workflow filename sanitization

use once_cell::sync::Lazy;
use regex::Regex;

/// Stem used when sanitization leaves nothing behind
pub const FALLBACK_STEM: &str = "workflow";

static UNSAFE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-{2,}").unwrap());

/// Map an arbitrary command stem to a portable workflow filename stem.
///
/// The stem is lowercased, `:` becomes `-`, every run of characters outside
/// `[a-z0-9-]` becomes a single `-`, repeated dashes collapse and edge dashes
/// are stripped. An empty result becomes [`FALLBACK_STEM`]. `prefix` is
/// prepended verbatim.
///
/// ```
/// use antigravity_sync::sanitize_workflow_stem;
///
/// assert_eq!(sanitize_workflow_stem("Review: PR #42!", "oc-"), "oc-review-pr-42");
/// assert_eq!(sanitize_workflow_stem("", "oc-"), "oc-workflow");
/// ```
pub fn sanitize_workflow_stem(stem: &str, prefix: &str) -> String {
    let lowered = stem.to_lowercase().replace(':', "-");
    let replaced = UNSAFE_RUN.replace_all(&lowered, "-");
    let collapsed = DASH_RUN.replace_all(&replaced, "-");
    let trimmed = collapsed.trim_matches('-');

    let suffix = if trimmed.is_empty() {
        FALLBACK_STEM
    } else {
        trimmed
    };

    format!("{prefix}{suffix}")
}
