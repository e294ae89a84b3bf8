//! Identity-mapping error types.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while turning a CSV of identities into a SAF batch job.
///
/// Every variant is fatal: per-row validation failures are logged as
/// warnings and the row is dropped instead of surfacing here.
#[derive(Debug, Error, Diagnostic)]
pub enum MappingError {
    /// Input CSV file missing or unreadable.
    #[error("unable to read identity file '{path}': {message}")]
    #[diagnostic(code(idf::file_not_found))]
    FileNotFound {
        /// Path the caller supplied.
        path: PathBuf,
        /// Underlying I/O error text.
        message: String,
    },

    /// Input CSV is structurally malformed.
    #[error("invalid identity file format: {message}")]
    #[diagnostic(
        code(idf::invalid_format),
        help("Each row must hold exactly three values: userName, distributedId, mainframeId")
    )]
    InvalidFormat {
        /// The CSV parser's own description of the problem.
        message: String,
    },

    /// Every input row was rejected, or the input was empty.
    #[error("Error when trying to create the identity mapping.")]
    #[diagnostic(
        code(idf::no_valid_identities),
        help("No input row survived validation, so there is nothing to map")
    )]
    NoValidIdentities,

    /// Unknown external security manager name.
    #[error("unsupported external security manager '{name}'")]
    #[diagnostic(
        code(idf::unsupported_esm),
        help("Supported security managers are RACF, ACF2 and TSS")
    )]
    UnsupportedEsm {
        /// The name as the caller supplied it.
        name: String,
    },

    /// Required CLI options absent.
    #[error("missing required option(s): {names}")]
    #[diagnostic(code(idf::missing_option))]
    MissingOption {
        /// All missing option names, comma-separated.
        names: String,
    },

    /// An option value exceeds its SAF length limit.
    #[error("option '{option}' exceeds the maximum length of {max} characters")]
    #[diagnostic(code(idf::value_too_long))]
    ValueTooLong {
        /// The offending option name.
        option: &'static str,
        /// The limit that was broken.
        max: usize,
    },
}
