use std::fmt;

/// Route registration error
///
/// Returned by [`Router::try_register`](super::Router::try_register) when a
/// pattern is malformed or collides with a route that is already in the tree.
/// These are configuration mistakes found at startup; [`Router::register`](super::Router::register)
/// turns them into a panic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The pattern is the empty string
    EmptyPattern,
    /// The pattern does not begin with `/`
    MissingLeadingSlash {
        /// The rejected pattern
        pattern: String,
    },
    /// The pattern ends with `/` and is not the root pattern
    TrailingSlash {
        /// The rejected pattern
        pattern: String,
    },
    /// The pattern contains `//`
    EmptySegment {
        /// The rejected pattern
        pattern: String,
    },
    /// A parameter segment has no name (`:` or `:(expr)`)
    UnnamedParam {
        /// The rejected pattern
        pattern: String,
    },
    /// A regex parameter segment is not of the form `:name(expr)`
    MalformedParam {
        /// The rejected pattern
        pattern: String,
        /// The offending segment
        segment: String,
    },
    /// The expression of a regex parameter does not compile
    InvalidRegex {
        /// The rejected pattern
        pattern: String,
        /// The offending segment
        segment: String,
        /// Compiler message from the regex crate
        reason: String,
    },
    /// `*` appears before the last segment
    WildcardNotLast {
        /// The rejected pattern
        pattern: String,
    },
    /// A handler is already registered for this method and pattern
    Duplicate {
        /// HTTP method of the route
        method: String,
        /// The rejected pattern
        pattern: String,
    },
    /// A different parameter already occupies this position
    ParamConflict {
        /// The rejected pattern
        pattern: String,
        /// Segment text of the parameter already registered here
        existing: String,
        /// Segment text that was requested
        requested: String,
    },
    /// A wildcard and a parameter were both registered at one position
    WildcardConflict {
        /// The rejected pattern
        pattern: String,
    },
}

impl RouteError {
    /// The pattern that was rejected (empty for [`RouteError::EmptyPattern`])
    #[must_use]
    pub fn pattern(&self) -> &str {
        match self {
            RouteError::EmptyPattern => "",
            RouteError::MissingLeadingSlash { pattern }
            | RouteError::TrailingSlash { pattern }
            | RouteError::EmptySegment { pattern }
            | RouteError::UnnamedParam { pattern }
            | RouteError::MalformedParam { pattern, .. }
            | RouteError::InvalidRegex { pattern, .. }
            | RouteError::WildcardNotLast { pattern }
            | RouteError::Duplicate { pattern, .. }
            | RouteError::ParamConflict { pattern, .. }
            | RouteError::WildcardConflict { pattern } => pattern,
        }
    }

    /// Whether the error comes from the shape of the tree rather than the pattern text
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            RouteError::Duplicate { .. }
                | RouteError::ParamConflict { .. }
                | RouteError::WildcardConflict { .. }
        )
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::EmptyPattern => write!(f, "route pattern is an empty string"),
            RouteError::MissingLeadingSlash { pattern } => {
                write!(f, "route pattern must begin with '/': [{}]", pattern)
            }
            RouteError::TrailingSlash { pattern } => {
                write!(f, "route pattern must not end with '/': [{}]", pattern)
            }
            RouteError::EmptySegment { pattern } => write!(
                f,
                "route pattern must not contain '//' (e.g. //a/b, /a//b): [{}]",
                pattern
            ),
            RouteError::UnnamedParam { pattern } => {
                write!(f, "path parameters must have a name: [{}]", pattern)
            }
            RouteError::MalformedParam { pattern, segment } => write!(
                f,
                "regex parameter '{}' must have the form :name(expr): [{}]",
                segment, pattern
            ),
            RouteError::InvalidRegex {
                pattern,
                segment,
                reason,
            } => write!(
                f,
                "regex parameter '{}' does not compile: {}: [{}]",
                segment, reason, pattern
            ),
            RouteError::WildcardNotLast { pattern } => write!(
                f,
                "wildcard '*' is only allowed as the last segment: [{}]",
                pattern
            ),
            RouteError::Duplicate { method, pattern } => {
                write!(f, "route conflict, {} [{}] is already registered", method, pattern)
            }
            RouteError::ParamConflict {
                pattern,
                existing,
                requested,
            } => write!(
                f,
                "route conflict, parameter '{}' collides with '{}' at the same position: [{}]",
                requested, existing, pattern
            ),
            RouteError::WildcardConflict { pattern } => write!(
                f,
                "route conflict, a wildcard and a path parameter cannot share a position: [{}]",
                pattern
            ),
        }
    }
}

impl std::error::Error for RouteError {}
