use miette::Diagnostic;
use thiserror::Error;

/// Main error type for mapart operations
#[derive(Error, Diagnostic, Debug)]
pub enum MapartError {
    #[error("IO error: {0}")]
    #[diagnostic(code(mapart::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(mapart::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(mapart::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(mapart::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Unknown colour set '{id}'")]
    #[diagnostic(code(mapart::catalog))]
    UnknownColourSet { id: String },

    #[error("Block '{block}' is not eligible for colour set '{colour_set}' in version {version}")]
    #[diagnostic(
        code(mapart::selection),
        help("Pick a block listed for this colour set under the active version")
    )]
    IneligibleSelection {
        colour_set: String,
        block: String,
        version: String,
    },

    #[error("Preset name '{name}' is reserved by a built-in preset")]
    #[diagnostic(code(mapart::preset))]
    NameConflict { name: String },

    #[error("Preset '{name}' is built-in and cannot be deleted")]
    #[diagnostic(code(mapart::preset))]
    ProtectedPreset { name: String },

    #[error("No preset named '{name}'")]
    #[diagnostic(code(mapart::preset))]
    NotFound { name: String },

    #[error("Malformed share token: {message}")]
    #[diagnostic(code(mapart::share))]
    MalformedShareToken {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, MapartError>;
