//! File lookup and not-found classification.
//!
//! Callers tell a missing file apart from other failures by error type,
//! never by message text:
//!
//! ```
//! use practic::files::{self, NotFoundExt};
//!
//! let res = files::lookup("foo");
//! assert!(res.is_not_found());
//! ```

mod error;

use std::error::Error;

pub use error::NotFoundError;

/// Look up a file by name.
///
/// There is no success path: every name is reported as missing and the
/// filesystem is never consulted.
pub fn lookup(name: &str) -> Result<(), NotFoundError> {
    tracing::debug!(file = name, "file lookup failed");
    Err(NotFoundError::new(name))
}

/// Check whether `err` itself is a [`NotFoundError`].
///
/// Other error types are never "not found", even when they carry one as
/// their `source()`.
pub fn is_not_found(err: &(dyn Error + 'static)) -> bool {
    err.is::<NotFoundError>()
}

/// Not-found classification for error-carrying values.
///
/// Values without an error (`Ok`, `None`) are never "not found".
pub trait NotFoundExt {
    fn is_not_found(&self) -> bool;
}

impl<T, E> NotFoundExt for Result<T, E>
where
    E: Error + 'static,
{
    fn is_not_found(&self) -> bool {
        match self {
            Ok(_) => false,
            Err(err) => is_not_found(err),
        }
    }
}

impl NotFoundExt for anyhow::Error {
    fn is_not_found(&self) -> bool {
        // Context added with `.context(..)` is transparent to downcasting
        self.downcast_ref::<NotFoundError>().is_some()
    }
}

impl<E: NotFoundExt> NotFoundExt for Option<E> {
    fn is_not_found(&self) -> bool {
        self.as_ref().is_some_and(|err| err.is_not_found())
    }
}
