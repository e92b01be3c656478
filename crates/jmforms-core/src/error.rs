use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error at byte {position}: {message}")]
    Parse { position: usize, message: String },

    #[error("Invalid entry {}: {message}", .ent_seq.as_deref().unwrap_or("<no ent_seq>"))]
    InvalidEntry {
        ent_seq: Option<String>,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn parse(position: usize, message: impl ToString) -> Self {
        Self::Parse {
            position,
            message: message.to_string(),
        }
    }

    /// Maps a failed read of `path`, keeping "not found" distinct from other I/O failures
    pub fn from_read(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound(path.display().to_string())
        } else {
            Self::Io(err)
        }
    }
}
