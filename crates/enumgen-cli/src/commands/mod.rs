pub mod generate;
pub mod input;
pub mod inspect;

#[cfg(test)]
mod generate_tests;
#[cfg(test)]
mod inspect_tests;

use std::path::PathBuf;

/// Errors surfaced by command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to read stdin: {0}")]
    Stdin(std::io::Error),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Extraction(#[from] enumgen_core::ExtractionError),

    #[error(transparent)]
    Generate(#[from] enumgen_compiler::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Print the error the way every command reports failures and exit.
pub(crate) fn exit_with(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
