use crate::storage::EntryId;

#[derive(Debug, thiserror::Error)]
pub enum FilesystemError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown entry: {0}")]
    UnknownEntry(EntryId),

    #[error("Not a directory: {0}")]
    NotADirectory(EntryId),

    #[error("Not a file: {0}")]
    NotAFile(EntryId),

    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    #[error("Cannot attach {child} under {parent}: would create a cycle")]
    CycleDetected { parent: EntryId, child: EntryId },
}

pub type Result<T> = std::result::Result<T, FilesystemError>;
