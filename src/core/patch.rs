//! Patch engine — read each target file, run its rule groups, write back on change.
//!
//! Strictly sequential: each file's read-transform-write cycle completes
//! before the next begins. Any read, decode, or write failure aborts the
//! run; files already rewritten stay rewritten (no rollback).

use std::path::Path;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::rules::{rules_for, FileRules, TARGET_FILES};

/// Outcome of processing one target file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileOutcome {
    /// Path relative to the run root.
    pub file: String,
    /// Whether the file was rewritten.
    pub changed: bool,
    /// Number of occurrences replaced across all matching rules.
    pub replacements: usize,
}

/// Aggregate result of a full run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunReport {
    /// Per-file outcomes in processing order.
    pub outcomes: Vec<FileOutcome>,
    /// Count of files actually rewritten.
    pub files_changed: usize,
}

/// Fold the ordered rule groups over `content`, returning the final text
/// and the total number of occurrences replaced.
pub fn apply_rules(content: &str, groups: &[&FileRules]) -> (String, usize) {
    let mut text = content.to_string();
    let mut total = 0;

    for group in groups {
        for rule in group.rules {
            let (next, count) = rule.apply(&text);
            text = next;
            total += count;
        }
    }

    (text, total)
}

/// Process a single target file: read it, apply every rule group whose
/// marker the path contains, and rewrite it only if the content changed.
///
/// Errors propagate unhandled — a failing file aborts the caller's run.
pub fn process_file(root: &Path, relative: &str) -> Result<FileOutcome> {
    let path = root.join(relative);

    let original = std::fs::read_to_string(&path).map_err(|e| Error::file_read(&path, e))?;

    let groups = rules_for(relative);
    let (patched, replacements) = apply_rules(&original, &groups);

    let changed = patched != original;
    if changed {
        std::fs::write(&path, &patched).map_err(|e| Error::file_write(&path, e))?;
        crate::log_status!("patch", "Rewrote {} ({} replacement(s))", relative, replacements);
    }

    Ok(FileOutcome {
        file: relative.to_string(),
        changed,
        replacements,
    })
}

/// Process all three target files in fixed order, aborting on the first
/// failure. Returns the aggregate report; printing belongs to the caller.
pub fn run(root: &Path) -> Result<RunReport> {
    let mut outcomes = Vec::new();

    for relative in TARGET_FILES {
        outcomes.push(process_file(root, relative)?);
    }

    let files_changed = outcomes.iter().filter(|o| o.changed).count();

    Ok(RunReport {
        outcomes,
        files_changed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn container_groups() -> Vec<&'static FileRules> {
        rules_for(TARGET_FILES[0])
    }

    #[test]
    fn pixel_sizes_bumped_to_text_xs() {
        let input = "<span className=\"text-[9px]\">a</span>\n<span className=\"text-[10px]\">b</span>\n";
        let (output, count) = apply_rules(input, &container_groups());
        assert_eq!(count, 2);
        assert_eq!(
            output,
            "<span className=\"text-xs\">a</span>\n<span className=\"text-xs\">b</span>\n"
        );
    }

    #[test]
    fn disambiguating_fragment_fires_only_in_context() {
        let input = concat!(
            "<div className=\"text-sm text-gray-500\">Total Questions</div>\n",
            "<div className=\"text-sm text-gray-500\">Unrelated label</div>\n",
        );
        let (output, count) = apply_rules(input, &container_groups());
        assert_eq!(count, 1);
        assert!(output.contains("text-sm text-gray-700\">Total Questions"));
        assert!(output.contains("text-sm text-gray-500\">Unrelated label"));
    }

    #[test]
    fn bare_gray_token_outside_fragments_untouched() {
        let input = "const hint = \"text-gray-500\";\n";
        let (output, count) = apply_rules(input, &container_groups());
        assert_eq!(count, 0);
        assert_eq!(output, input);
    }

    #[test]
    fn dark_span_swapped_others_preserved() {
        let groups = rules_for(TARGET_FILES[1]);
        let input = concat!(
            "<span className=\"text-sm text-gray-400 mt-1 block\">subtitle</span>\n",
            "<p className=\"text-gray-400\">elsewhere</p>\n",
        );
        let (output, count) = apply_rules(input, &groups);
        assert_eq!(count, 1);
        assert!(output.contains("<span className=\"text-sm text-gray-300 mt-1 block\">subtitle</span>"));
        assert!(output.contains("<p className=\"text-gray-400\">elsewhere</p>"));
    }

    #[test]
    fn apply_rules_is_idempotent() {
        let input = "<h3 className=\"text-sm font-bold text-gray-500 uppercase\">Modules</h3>\n";
        let groups = rules_for(TARGET_FILES[2]);
        let (first, count) = apply_rules(input, &groups);
        assert_eq!(count, 1);
        let (second, count) = apply_rules(&first, &groups);
        assert_eq!(count, 0);
        assert_eq!(first, second);
    }

    #[test]
    fn process_file_writes_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("components").join("questionnaire");
        std::fs::create_dir_all(&sub).unwrap();

        let target = sub.join("ModuleNav.tsx");
        std::fs::write(&target, "<h3 className=\"text-sm font-bold text-gray-500 uppercase\">Nav</h3>\n").unwrap();

        let outcome = process_file(dir.path(), TARGET_FILES[2]).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.replacements, 1);

        let content = std::fs::read_to_string(&target).unwrap();
        assert!(content.contains("text-gray-700 uppercase"));

        // Second pass is a no-op
        let outcome = process_file(dir.path(), TARGET_FILES[2]).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.replacements, 0);
    }

    #[test]
    fn process_file_missing_target_is_read_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = process_file(dir.path(), TARGET_FILES[0]).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileReadFailed);
    }

    #[test]
    fn process_file_non_utf8_target_is_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("components").join("questionnaire");
        std::fs::create_dir_all(&sub).unwrap();
        std::fs::write(sub.join("QuestionnaireDark.tsx"), [0xff, 0xfe, 0x00, 0x41]).unwrap();

        let err = process_file(dir.path(), TARGET_FILES[1]).unwrap_err();
        assert_eq!(err.code, ErrorCode::FileDecodeFailed);
    }
}
