// Public modules
pub mod error;
pub mod patch;
pub mod rules;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use patch::{process_file, run, FileOutcome, RunReport};
pub use rules::{rules_for, FileRules, Rule, TARGET_FILES};
