//! The hardcoded replacement table — which files get patched and how.
//!
//! Three questionnaire components carry WCAG 2.1 AA contrast violations:
//! sub-12px font sizes and gray text classes too faint for their backgrounds.
//! Each file has an ordered rule list keyed by a filename marker; a rule is
//! either an exact-substring swap or a regex substitution.
//!
//! Literal rules embed the surrounding markup fragment so that only the
//! intended occurrence of an otherwise-common class like `text-gray-500`
//! is touched; bare occurrences outside a listed fragment are left alone.

use regex::Regex;

/// The three files this tool is hardcoded to process, relative to the
/// project root, in processing order.
pub const TARGET_FILES: [&str; 3] = [
    "components/questionnaire/QuestionnaireContainer.tsx",
    "components/questionnaire/QuestionnaireDark.tsx",
    "components/questionnaire/ModuleNav.tsx",
];

/// A single text substitution.
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Exact substring match, all occurrences.
    Literal {
        find: &'static str,
        replace: &'static str,
    },
    /// Regex match, all non-overlapping occurrences. The replacement is
    /// inserted verbatim (no capture-group expansion).
    Pattern {
        pattern: &'static str,
        replace: &'static str,
    },
}

impl Rule {
    /// Apply this rule to `content`, returning the new text and the number
    /// of occurrences replaced.
    pub fn apply(&self, content: &str) -> (String, usize) {
        match self {
            Rule::Literal { find, replace } => {
                let count = content.matches(find).count();
                (content.replace(find, replace), count)
            }
            Rule::Pattern { pattern, replace } => {
                // Table patterns are fixed literals, compile cannot fail
                let re = Regex::new(pattern).unwrap();
                let count = re.find_iter(content).count();
                let replaced = re.replace_all(content, regex::NoExpand(replace));
                (replaced.into_owned(), count)
            }
        }
    }
}

/// An ordered rule group gated on a filename marker.
#[derive(Debug)]
pub struct FileRules {
    /// Substring of the relative path that activates this group.
    pub marker: &'static str,
    /// Rules applied left to right, each output feeding the next.
    pub rules: &'static [Rule],
}

/// The full table. Group order is table order; within a group, rule order
/// is significant (size fixes before gray-class fixes for the container).
pub static RULE_TABLE: [FileRules; 3] = [
    FileRules {
        marker: "QuestionnaireContainer.tsx",
        rules: &[
            // Minimum 12px font size (text-xs)
            Rule::Pattern {
                pattern: r"text-\[9px\]",
                replace: "text-xs",
            },
            Rule::Pattern {
                pattern: r"text-\[10px\]",
                replace: "text-xs",
            },
            // text-gray-500 on light backgrounds needs text-gray-700.
            // Only the listed fragments sit on light backgrounds.
            Rule::Literal {
                find: "text-sm text-gray-500\">Total Questions",
                replace: "text-sm text-gray-700\">Total Questions",
            },
            Rule::Literal {
                find: "text-sm text-gray-500\">Required",
                replace: "text-sm text-gray-700\">Required",
            },
            Rule::Literal {
                find: "text-sm text-gray-500\">Sections",
                replace: "text-sm text-gray-700\">Sections",
            },
            Rule::Literal {
                find: "text-sm text-gray-500\">Minutes",
                replace: "text-sm text-gray-700\">Minutes",
            },
            Rule::Literal {
                find: "text-center text-sm text-gray-500 mt-6",
                replace: "text-center text-sm text-gray-700 mt-6",
            },
            Rule::Literal {
                find: "text-xs text-gray-500\" aria-label=",
                replace: "text-xs text-gray-700\" aria-label=",
            },
            Rule::Literal {
                find: "text-sm text-gray-500\">{currentModule?.subtitle}",
                replace: "text-sm text-gray-700\">{currentModule?.subtitle}",
            },
            Rule::Literal {
                find: "text-gray-500\">Syncing with cloud storage",
                replace: "text-gray-700\">Syncing with cloud storage",
            },
        ],
    },
    FileRules {
        marker: "QuestionnaireDark.tsx",
        rules: &[
            // text-gray-400 on the dark background needs text-gray-300
            Rule::Pattern {
                pattern: "<span className=\"text-sm text-gray-400 mt-1 block\">",
                replace: "<span className=\"text-sm text-gray-300 mt-1 block\">",
            },
        ],
    },
    FileRules {
        marker: "ModuleNav.tsx",
        rules: &[
            // Section heading on the glass background
            Rule::Literal {
                find: "text-sm font-bold text-gray-500 uppercase",
                replace: "text-sm font-bold text-gray-700 uppercase",
            },
        ],
    },
];

/// All rule groups whose marker appears in `relative_path`, in table order.
///
/// Marker checks are independent: a path containing several markers
/// accumulates every matching group, and a path containing none gets an
/// empty set (and is therefore never rewritten).
pub fn rules_for(relative_path: &str) -> Vec<&'static FileRules> {
    RULE_TABLE
        .iter()
        .filter(|group| relative_path.contains(group.marker))
        .collect()
}
