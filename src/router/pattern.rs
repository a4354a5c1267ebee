//! Pattern validation and segment classification.
//!
//! A pattern is split on `/` into segments, each of which is one of:
//!
//! | Syntax        | Kind      | Matches                                   |
//! |---------------|-----------|-------------------------------------------|
//! | `users`       | static    | exactly `users`                           |
//! | `:id`         | parameter | any single segment, bound to `id`         |
//! | `:id(\d+)`    | regex     | a single segment fully matching `\d+`     |
//! | `*`           | wildcard  | the remainder of the path (≥ 1 segment)   |

use regex::Regex;

use super::error::RouteError;

/// One classified pattern segment, ready to be attached to the tree
#[derive(Debug, Clone)]
pub(crate) enum Segment<'p> {
    Static(&'p str),
    Param {
        name: &'p str,
    },
    Regex {
        raw: &'p str,
        name: &'p str,
        regex: Regex,
    },
    Wildcard,
}

impl<'p> Segment<'p> {
    /// Classify a raw pattern segment. `pattern` is only used for error context.
    pub(crate) fn parse(raw: &'p str, pattern: &str) -> Result<Self, RouteError> {
        if raw == "*" {
            return Ok(Segment::Wildcard);
        }

        let Some(param) = raw.strip_prefix(':') else {
            return Ok(Segment::Static(raw));
        };

        let Some(open) = param.find('(') else {
            if param.is_empty() {
                return Err(RouteError::UnnamedParam {
                    pattern: pattern.to_owned(),
                });
            }
            return Ok(Segment::Param { name: param });
        };

        let name = &param[..open];
        if name.is_empty() {
            return Err(RouteError::UnnamedParam {
                pattern: pattern.to_owned(),
            });
        }

        let expr = param[open + 1..]
            .strip_suffix(')')
            .filter(|expr| !expr.is_empty())
            .ok_or_else(|| RouteError::MalformedParam {
                pattern: pattern.to_owned(),
                segment: raw.to_owned(),
            })?;

        // Anchored so the whole segment has to match, not a substring of it
        let regex = Regex::new(&format!("^(?:{expr})$")).map_err(|e| RouteError::InvalidRegex {
            pattern: pattern.to_owned(),
            segment: raw.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Segment::Regex { raw, name, regex })
    }

    pub(crate) fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard)
    }
}

/// Reject patterns that cannot be registered at all
pub(crate) fn validate(pattern: &str) -> Result<(), RouteError> {
    if pattern.is_empty() {
        return Err(RouteError::EmptyPattern);
    }
    if !pattern.starts_with('/') {
        return Err(RouteError::MissingLeadingSlash {
            pattern: pattern.to_owned(),
        });
    }
    if pattern.len() > 1 && pattern.ends_with('/') {
        return Err(RouteError::TrailingSlash {
            pattern: pattern.to_owned(),
        });
    }
    if pattern.contains("//") {
        return Err(RouteError::EmptySegment {
            pattern: pattern.to_owned(),
        });
    }
    Ok(())
}

/// Validate and classify every segment of `pattern` before the tree is touched
pub(crate) fn parse(pattern: &str) -> Result<Vec<Segment<'_>>, RouteError> {
    validate(pattern)?;

    let segments = segments(pattern)
        .map(|raw| Segment::parse(raw, pattern))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(pos) = segments.iter().position(Segment::is_wildcard) {
        if pos + 1 != segments.len() {
            return Err(RouteError::WildcardNotLast {
                pattern: pattern.to_owned(),
            });
        }
    }

    Ok(segments)
}

/// Split a path into its non-empty `/`-separated segments.
///
/// ```text
/// /a/b/c -> [a, b, c]
/// /      -> []
/// /a//b/ -> [a, b]
/// ```
pub(crate) fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(raw: &str) -> &'static str {
        match Segment::parse(raw, "/test").unwrap() {
            Segment::Static(_) => "static",
            Segment::Param { .. } => "param",
            Segment::Regex { .. } => "regex",
            Segment::Wildcard => "wildcard",
        }
    }

    #[test]
    fn test_segment_kinds() {
        assert_eq!(kind("users"), "static");
        assert_eq!(kind(":id"), "param");
        assert_eq!(kind(r":id(\d+)"), "regex");
        assert_eq!(kind("*"), "wildcard");
        // only a bare star is a wildcard
        assert_eq!(kind("*.css"), "static");
        assert_eq!(kind("a:b"), "static");
    }

    #[test]
    fn test_regex_segment_is_anchored() {
        let Segment::Regex { name, regex, raw } = Segment::parse(r":id(\d+)", r"/u/:id(\d+)").unwrap()
        else {
            panic!("expected a regex segment");
        };
        assert_eq!(name, "id");
        assert_eq!(raw, r":id(\d+)");
        assert!(regex.is_match("123"));
        assert!(!regex.is_match("123abc"));
        assert!(!regex.is_match("abc123"));
    }

    #[test]
    fn test_regex_with_nested_groups() {
        let Segment::Regex { name, regex, .. } =
            Segment::parse(r":slug((foo|bar)-\d+)", r"/p/:slug((foo|bar)-\d+)").unwrap()
        else {
            panic!("expected a regex segment");
        };
        assert_eq!(name, "slug");
        assert!(regex.is_match("foo-1"));
        assert!(regex.is_match("bar-22"));
        assert!(!regex.is_match("baz-1"));
    }

    #[test]
    fn test_unnamed_params_rejected() {
        assert_eq!(
            Segment::parse(":", "/a/:").unwrap_err(),
            RouteError::UnnamedParam {
                pattern: "/a/:".into()
            }
        );
        assert!(matches!(
            Segment::parse(r":(\d+)", r"/a/:(\d+)"),
            Err(RouteError::UnnamedParam { .. })
        ));
    }

    #[test]
    fn test_malformed_regex_params_rejected() {
        assert!(matches!(
            Segment::parse(r":id(\d+", r"/a/:id(\d+"),
            Err(RouteError::MalformedParam { .. })
        ));
        assert!(matches!(
            Segment::parse(":id()", "/a/:id()"),
            Err(RouteError::MalformedParam { .. })
        ));
        assert!(matches!(
            Segment::parse(":id([a-z)", "/a/:id([a-z)"),
            Err(RouteError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(""), Err(RouteError::EmptyPattern));
        assert!(matches!(
            validate("a/b"),
            Err(RouteError::MissingLeadingSlash { .. })
        ));
        assert!(matches!(
            validate("/a/b/c/"),
            Err(RouteError::TrailingSlash { .. })
        ));
        assert!(matches!(validate("//a"), Err(RouteError::EmptySegment { .. })));
        assert!(matches!(
            validate("/a//b"),
            Err(RouteError::EmptySegment { .. })
        ));
        assert!(validate("/").is_ok());
        assert!(validate("/a/:id/*").is_ok());
    }

    #[test]
    fn test_wildcard_must_be_last() {
        assert!(parse("/static/*").is_ok());
        assert_eq!(
            parse("/static/*/x").unwrap_err(),
            RouteError::WildcardNotLast {
                pattern: "/static/*/x".into()
            }
        );
    }

    #[test]
    fn test_segments() {
        assert_eq!(segments("/a/b/c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(segments("/").count(), 0);
        assert_eq!(segments("/a//b/").collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
