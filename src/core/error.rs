//! Error handling for bannerforge
//!
//! This module provides the error types and user-friendly error reporting for
//! the banner toolkit. The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise error handling in code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! The error system consists of two main types:
//! - [`BannerError`] - Enumerated error types for all failure cases
//! - [`ErrorContext`] - Wrapper that adds user-friendly messages and suggestions
//!
//! # Error Categories
//!
//! Errors are organized into several categories:
//! - **Input validation**: [`BannerError::InvalidSize`] - rejected before any
//!   directory is touched
//! - **Project configuration**: [`BannerError::ManifestNotFound`],
//!   [`BannerError::ManifestParseError`], [`BannerError::ManifestValidationError`]
//! - **Reference banner**: [`BannerError::ReferenceNotFound`],
//!   [`BannerError::ReferenceFileMissing`]
//! - **Packaging**: [`BannerError::ReviewTreeMissing`], [`BannerError::ArchiveFailed`]
//! - **Dev tooling**: [`BannerError::BannerNotFound`], [`BannerError::ToolNotFound`]
//! - **File system**: [`BannerError::FileSystemError`], [`BannerError::PermissionDenied`],
//!   [`BannerError::IoError`]
//!
//! # Error Conversion and Context
//!
//! Common standard library errors are automatically converted:
//! - [`std::io::Error`] → [`BannerError::IoError`]
//! - [`toml::de::Error`] → [`BannerError::TomlError`]
//!
//! Use [`user_friendly_error`] to convert any error into a user-friendly format
//! with contextual suggestions.
//!
//! # Examples
//!
//! ## Basic Error Handling
//!
//! ```rust,no_run
//! use bannerforge::core::{BannerError, user_friendly_error};
//!
//! fn check_reference() -> Result<(), BannerError> {
//!     Err(BannerError::ReferenceNotFound { path: "banners/300x250-1".to_string() })
//! }
//!
//! match check_reference() {
//!     Ok(()) => println!("Reference looks good"),
//!     Err(e) => {
//!         let ctx = user_friendly_error(anyhow::Error::from(e));
//!         ctx.display(); // Shows colored error with suggestions
//!     }
//! }
//! ```
//!
//! ## Creating Error Context Manually
//!
//! ```rust,no_run
//! use bannerforge::core::{BannerError, ErrorContext};
//!
//! let context = ErrorContext::new(BannerError::ManifestNotFound)
//!     .with_suggestion("Create a banner.toml file next to your banners/ directory")
//!     .with_details("bannerforge searches for banner.toml in current and parent directories");
//!
//! // Display with colors in terminal
//! context.display();
//!
//! // Or get as string for logging
//! let message = format!("{}", context);
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for banner toolkit operations
///
/// Each variant represents a specific failure mode and carries the details
/// needed to explain it to the operator. Validation errors are raised before
/// any directory is created or removed, so a failed command never leaves a
/// half-built banner behind.
///
/// # Examples
///
/// ## Pattern Matching on Errors
///
/// ```rust,no_run
/// use bannerforge::core::BannerError;
///
/// fn handle_error(error: BannerError) {
///     match error {
///         BannerError::ManifestNotFound => {
///             eprintln!("Create a banner.toml to define the project");
///         }
///         BannerError::ReviewTreeMissing { .. } => {
///             eprintln!("Compile the banners before deploying");
///         }
///         _ => {
///             eprintln!("Unexpected error: {}", error);
///         }
///     }
/// }
/// ```
///
/// ## Creating Specific Errors
///
/// ```rust,no_run
/// use bannerforge::core::BannerError;
///
/// let error = BannerError::InvalidSize {
///     input: "300by250".to_string(),
/// };
///
/// let error = BannerError::ReferenceFileMissing {
///     file: "assets/css/source.css".to_string(),
/// };
/// ```
#[derive(Error, Debug)]
pub enum BannerError {
    /// A size argument did not match the strict `<width>x<height>` shape
    ///
    /// Sizes name banner directories, so malformed values are rejected up
    /// front rather than producing a misnamed directory.
    ///
    /// # Fields
    /// - `input`: The offending command-line token
    #[error("Invalid size '{input}': expected <width>x<height>, e.g. 300x250")]
    InvalidSize {
        /// The offending command-line token
        input: String,
    },

    /// No `banner.toml` manifest was found during project discovery
    ///
    /// Discovery walks from the current directory up to the filesystem root.
    #[error("No banner.toml found in the current directory or any parent")]
    ManifestNotFound,

    /// The manifest file exists but contains invalid TOML
    ///
    /// # Fields
    /// - `file`: Path of the manifest that failed to parse
    /// - `reason`: Parser diagnostic
    #[error("Invalid manifest file: {file}")]
    ManifestParseError {
        /// Path of the manifest that failed to parse
        file: String,
        /// Parser diagnostic
        reason: String,
    },

    /// The manifest parsed but its content is unusable
    ///
    /// # Fields
    /// - `reason`: What the validation found
    #[error("Invalid manifest: {reason}")]
    ManifestValidationError {
        /// What the validation found
        reason: String,
    },

    /// The configured reference banner directory does not exist
    ///
    /// New variants are copies of the reference banner, so generation cannot
    /// proceed without it.
    ///
    /// # Fields
    /// - `path`: Expected location of the reference banner
    #[error("Reference banner not found: {path}")]
    ReferenceNotFound {
        /// Expected location of the reference banner
        path: String,
    },

    /// A required file is missing from the reference banner
    ///
    /// # Fields
    /// - `file`: The missing file, relative to the reference banner directory
    #[error("Required file missing in reference banner: {file}")]
    ReferenceFileMissing {
        /// The missing file, relative to the reference banner directory
        file: String,
    },

    /// A named banner directory does not exist
    ///
    /// # Fields
    /// - `name`: The banner name as given on the command line
    #[error("Banner '{name}' not found")]
    BannerNotFound {
        /// The banner name as given on the command line
        name: String,
    },

    /// The compiled review tree is absent, so there is nothing to package
    ///
    /// Deploy packages compiled markup from the review tree and never
    /// triggers the build itself.
    ///
    /// # Fields
    /// - `path`: Where the review tree was expected
    #[error("Review directory not found: {path}")]
    ReviewTreeMissing {
        /// Where the review tree was expected
        path: String,
    },

    /// Writing a zip archive for a staged banner failed
    ///
    /// # Fields
    /// - `name`: The banner being archived
    /// - `reason`: The underlying zip or I/O diagnostic
    #[error("Failed to archive banner '{name}': {reason}")]
    ArchiveFailed {
        /// The banner being archived
        name: String,
        /// The underlying zip or I/O diagnostic
        reason: String,
    },

    /// The configured dev-server executable could not be resolved
    ///
    /// # Fields
    /// - `command`: The executable that was searched for in `PATH`
    #[error("Command '{command}' not found in PATH")]
    ToolNotFound {
        /// The executable that was searched for in `PATH`
        command: String,
    },

    /// General file system operation failure
    ///
    /// # Fields
    /// - `operation`: What was being attempted (e.g., "copy", "create directory")
    /// - `path`: The path involved
    #[error("File system error during {operation}: {path}")]
    FileSystemError {
        /// What was being attempted
        operation: String,
        /// The path involved
        path: String,
    },

    /// Insufficient permissions for a file system operation
    ///
    /// # Fields
    /// - `operation`: What was being attempted
    /// - `path`: The path involved
    #[error("Permission denied during {operation}: {path}")]
    PermissionDenied {
        /// What was being attempted
        operation: String,
        /// The path involved
        path: String,
    },

    /// Standard I/O error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Generic error with a custom message
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for BannerError {
    fn clone(&self) -> Self {
        match self {
            Self::InvalidSize {
                input,
            } => Self::InvalidSize {
                input: input.clone(),
            },
            Self::ManifestNotFound => Self::ManifestNotFound,
            Self::ManifestParseError {
                file,
                reason,
            } => Self::ManifestParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::ManifestValidationError {
                reason,
            } => Self::ManifestValidationError {
                reason: reason.clone(),
            },
            Self::ReferenceNotFound {
                path,
            } => Self::ReferenceNotFound {
                path: path.clone(),
            },
            Self::ReferenceFileMissing {
                file,
            } => Self::ReferenceFileMissing {
                file: file.clone(),
            },
            Self::BannerNotFound {
                name,
            } => Self::BannerNotFound {
                name: name.clone(),
            },
            Self::ReviewTreeMissing {
                path,
            } => Self::ReviewTreeMissing {
                path: path.clone(),
            },
            Self::ArchiveFailed {
                name,
                reason,
            } => Self::ArchiveFailed {
                name: name.clone(),
                reason: reason.clone(),
            },
            Self::ToolNotFound {
                command,
            } => Self::ToolNotFound {
                command: command.clone(),
            },
            Self::FileSystemError {
                operation,
                path,
            } => Self::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            },
            Self::PermissionDenied {
                operation,
                path,
            } => Self::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`BannerError`] and adds optional suggestions for
/// resolution and additional details. This is the primary way errors are
/// presented to CLI users.
///
/// # Display Format
///
/// When displayed, errors show:
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context about the error in yellow (optional)
/// 3. **Suggestion**: Actionable steps to resolve the issue in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use bannerforge::core::{BannerError, ErrorContext};
///
/// let context = ErrorContext::new(BannerError::ManifestNotFound)
///     .with_suggestion("Create a banner.toml with a [project] name")
///     .with_details("bannerforge searches current and parent directories for banner.toml");
///
/// // Display to terminal with colors
/// context.display();
///
/// // Or convert to string for logging
/// let message = context.to_string();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: BannerError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`BannerError`]
    ///
    /// This creates a basic error context with no additional suggestions or
    /// details. Use the builder methods [`with_suggestion`] and
    /// [`with_details`] to add user-friendly information.
    ///
    /// [`with_suggestion`]: ErrorContext::with_suggestion
    /// [`with_details`]: ErrorContext::with_details
    #[must_use]
    pub const fn new(error: BannerError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions should be actionable steps that users can take to resolve
    /// the error. They are displayed in green in the terminal.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details provide context about why the error occurred or what it means.
    /// They are displayed in yellow in the terminal.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Create an [`ErrorContext`] with only a suggestion (no specific error)
    ///
    /// Useful for generic errors where a suggestion helps but no specific
    /// [`BannerError`] variant applies.
    pub fn suggestion(suggestion: impl Into<String>) -> Self {
        Self {
            error: BannerError::Other {
                message: String::new(),
            },
            suggestion: Some(suggestion.into()),
            details: None,
        }
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// Prints the error, details, and suggestion to stderr using color
    /// coding: red/bold for the error, yellow for details, green for the
    /// suggestion. This is the primary way errors reach users in the CLI.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Extension trait for converting [`BannerError`] to [`anyhow::Error`] with context
///
/// Converts toolkit-specific errors into generic [`anyhow::Error`] instances
/// while preserving user-friendly context information.
pub trait IntoAnyhowWithContext {
    /// Convert the error to an [`anyhow::Error`] with the provided context
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error;
}

impl IntoAnyhowWithContext for BannerError {
    fn into_anyhow_with_context(self, context: ErrorContext) -> anyhow::Error {
        anyhow::Error::new(ErrorContext {
            error: self,
            suggestion: context.suggestion,
            details: context.details,
        })
    }
}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// This function is the main entry point for converting arbitrary errors into
/// user-friendly error messages for CLI display. It recognizes common error
/// types and provides appropriate context and suggestions:
/// - [`BannerError`] variants with tailored suggestions
/// - [`std::io::Error`] with filesystem-specific guidance
/// - [`toml::de::Error`] with TOML syntax help
/// - Generic errors with the full cause chain appended
///
/// # Examples
///
/// ```rust,no_run
/// use bannerforge::core::{BannerError, user_friendly_error};
///
/// let error = BannerError::ManifestNotFound;
/// let context = user_friendly_error(anyhow::Error::from(error));
///
/// context.display(); // Shows manifest creation suggestions
/// ```
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Check for specific error types and provide helpful suggestions
    if let Some(banner_error) = error.downcast_ref::<BannerError>() {
        return create_error_context(banner_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(BannerError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion(
                    "Check file ownership, or run with elevated permissions if the project lives in a protected location",
                )
                .with_details(
                    "This error occurs when bannerforge doesn't have permission to read or write files",
                );
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(BannerError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(
                    "This error occurs when a required file or directory cannot be found",
                );
            }
            std::io::ErrorKind::AlreadyExists => {
                return ErrorContext::new(BannerError::FileSystemError {
                    operation: "file creation".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Remove the existing file or directory and retry")
                .with_details("The target file or directory already exists");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(BannerError::ManifestParseError {
            file: "banner.toml".to_string(),
            reason: toml_error.to_string(),
        })
        .with_suggestion(
            "Check the TOML syntax in your banner.toml file. Verify quotes, brackets, and indentation",
        )
        .with_details(
            "TOML parsing errors are usually caused by syntax issues like missing quotes or mismatched brackets",
        );
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    // Append error chain if available
    let chain: Vec<String> = error
        .chain()
        .skip(1) // Skip the root cause which is already in to_string()
        .map(std::string::ToString::to_string)
        .collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(BannerError::Other {
        message,
    })
}

/// Create appropriate [`ErrorContext`] with suggestions for specific errors
///
/// Maps each [`BannerError`] variant to an [`ErrorContext`] with tailored
/// suggestions and details. Used by [`user_friendly_error`] to provide
/// consistent, helpful error messages focused on the next step the operator
/// should take.
fn create_error_context(error: BannerError) -> ErrorContext {
    match &error {
        BannerError::InvalidSize { input } => ErrorContext::new(BannerError::InvalidSize {
            input: input.clone(),
        })
            .with_suggestion("Write sizes as <width>x<height> with positive pixel values, e.g. 'bannerforge generate 300x250 728x90'")
            .with_details("Sizes name the banner directories, so malformed values are rejected before anything is created"),

        BannerError::ManifestNotFound => ErrorContext::new(BannerError::ManifestNotFound)
            .with_suggestion("Create a banner.toml with a [project] name next to your banners/ directory, or pass --manifest-path")
            .with_details("bannerforge looks for banner.toml in the current directory and parent directories up to the filesystem root"),

        BannerError::ManifestParseError { file, reason } => ErrorContext::new(BannerError::ManifestParseError {
            file: file.clone(),
            reason: reason.clone(),
        })
            .with_suggestion(format!(
                "Check the TOML syntax in {file}. Common issues: missing quotes, unmatched brackets, invalid characters"
            ))
            .with_details(reason.clone()),

        BannerError::ReferenceNotFound { path } => ErrorContext::new(BannerError::ReferenceNotFound {
            path: path.clone(),
        })
            .with_suggestion("Create the reference banner, or point [banners] reference in banner.toml at an existing directory")
            .with_details("Every new variant is copied from the reference banner, so it must exist before generation"),

        BannerError::ReferenceFileMissing { file } => ErrorContext::new(BannerError::ReferenceFileMissing {
            file: file.clone(),
        })
            .with_suggestion(format!(
                "Restore '{file}' in the reference banner before generating variants"
            ))
            .with_details("The reference banner must carry index.html, assets/css/source.css, and assets/js/script.js"),

        BannerError::BannerNotFound { name } => ErrorContext::new(BannerError::BannerNotFound {
            name: name.clone(),
        })
            .with_suggestion("Run 'bannerforge list' to see the available banners"),

        BannerError::ReviewTreeMissing { path } => ErrorContext::new(BannerError::ReviewTreeMissing {
            path: path.clone(),
        })
            .with_suggestion("Run your build step to compile banners into the review directory, then deploy again")
            .with_details("deploy packages the compiled markup from the review tree; it never compiles banners itself"),

        BannerError::ToolNotFound { command } => ErrorContext::new(BannerError::ToolNotFound {
            command: command.clone(),
        })
            .with_suggestion(format!(
                "Install '{command}' (e.g. via 'npm install') or override [dev] command in banner.toml"
            ))
            .with_details("The dev command spawns an external build tool; it must be resolvable through PATH"),

        BannerError::PermissionDenied { operation, path } => ErrorContext::new(BannerError::PermissionDenied {
            operation: operation.clone(),
            path: path.clone(),
        })
            .with_suggestion(match cfg!(windows) {
                true => "Run as Administrator or check file permissions in File Explorer",
                false => "Use 'sudo' or check file permissions with 'ls -la'",
            })
            .with_details(format!(
                "Cannot {operation} due to insufficient permissions on {path}"
            )),

        _ => ErrorContext::new(error.clone()),
    }
}
