use std::path::Path;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    FileReadFailed,
    FileDecodeFailed,
    FileWriteFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::FileReadFailed => "file.read_failed",
            ErrorCode::FileDecodeFailed => "file.decode_failed",
            ErrorCode::FileWriteFailed => "file.write_failed",
        }
    }

    /// Stable process exit code for this error class.
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCode::FileReadFailed => 10,
            ErrorCode::FileDecodeFailed => 11,
            ErrorCode::FileWriteFailed => 12,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileAccessDetails {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Clone)]
pub struct Error {
    pub code: ErrorCode,
    pub message: String,
    pub details: Value,
}

pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn new(code: ErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    /// Classify a failed read. `InvalidData` means the file exists but is not
    /// valid UTF-8; everything else (missing, permissions) is a plain read failure.
    pub fn file_read(path: &Path, err: std::io::Error) -> Self {
        let code = if err.kind() == std::io::ErrorKind::InvalidData {
            ErrorCode::FileDecodeFailed
        } else {
            ErrorCode::FileReadFailed
        };

        let details = serde_json::to_value(FileAccessDetails {
            path: path.display().to_string(),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            code,
            format!("Failed to read {}: {}", path.display(), err),
            details,
        )
    }

    pub fn file_write(path: &Path, err: std::io::Error) -> Self {
        let details = serde_json::to_value(FileAccessDetails {
            path: path.display().to_string(),
            error: err.to_string(),
        })
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

        Self::new(
            ErrorCode::FileWriteFailed,
            format!("Failed to write {}: {}", path.display(), err),
            details,
        )
    }
}
