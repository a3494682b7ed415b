//! # costar-error
//!
//! Unified error handling for costar.
//!
//! ## Design
//!
//! - **ErrorKind**: what went wrong (e.g. Network, Http, ConfigInvalid)
//! - **ErrorStatus**: whether retrying can help (Permanent, Temporary, Persistent)
//! - **Error Context**: key/value pairs that locate the failure (person id, movie id, url)
//! - **Error Source**: the underlying error, wrapped rather than leaked
//!
//! ## Usage
//!
//! ```rust
//! use costar_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::Http, "unexpected status 404")
//!         .with_operation("tmdb::fetch_cast")
//!         .with_context("movie_id", "603"))
//! }
//! ```
//!
//! ## Principles
//!
//! - All fallible functions return `Result<T, costar_error::Error>`
//! - External errors are wrapped with `set_source(err)`
//! - An error is handled once; callers further up only append context

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using the costar Error
pub type Result<T> = std::result::Result<T, Error>;
