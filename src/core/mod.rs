//! Core types for the banner toolkit
//!
//! This module provides the foundation of the error handling system used
//! throughout the crate:
//! - **Strongly-typed errors** ([`BannerError`]) for precise error handling in code
//! - **User-friendly contexts** ([`ErrorContext`]) with actionable suggestions for CLI users
//! - **Automatic conversion** from common standard library errors
//!
//! Library code returns [`anyhow::Result`] (or typed `BannerError` where a
//! caller matches on the failure mode); only the binary entry point converts
//! errors to colored terminal output through [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust
//! use bannerforge::core::{BannerError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(BannerError::ManifestNotFound.into())
//! }
//!
//! fn handle_operation() {
//!     match example_operation() {
//!         Ok(result) => println!("Success: {}", result),
//!         Err(e) => {
//!             let friendly = user_friendly_error(e);
//!             friendly.display(); // Shows colored error with suggestions
//!         }
//!     }
//! }
//! ```

pub mod error;

pub use error::{BannerError, ErrorContext, IntoAnyhowWithContext, user_friendly_error};
