//! Error types for the resource identity model.
//!
//! Unknown type names are ordinarily surfaced as `None` from the parse
//! functions; this error exists for callers that want `?`-style
//! propagation through [`std::str::FromStr`].

use thiserror::Error;

/// A string did not name any known resource type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown resource type `{0}`")]
pub struct ParseResourceTypeError(pub String);
