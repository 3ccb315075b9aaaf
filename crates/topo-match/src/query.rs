//! Query classification.
//!
//! A query is either empty, a fuzzy text query, or, when breadcrumb mode is enabled and
//! the text contains `/`, a breadcrumb query. Breadcrumb queries keep every segment
//! except the last as an exact prefix; the trailing partial segment is what the user is
//! still typing and does not take part in matching.

use std::fmt;

use topo_tree::split_path;

/// A classified search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Nothing to search for.
    Empty,
    /// Approximate match against record text.
    Fuzzy(String),
    /// Exact, positional match on leading breadcrumb segments.
    Breadcrumb {
        /// Segments that must lead the record breadcrumb.
        prefix: Vec<String>,
        /// Trailing segment after the last `/`.
        partial: String,
    },
}

impl Query {
    /// Classifies raw input text.
    ///
    /// Surrounding whitespace is ignored. Whitespace-only input is [`Query::Empty`].
    pub fn parse(input: &str, breadcrumbs: bool) -> Self {
        let text = input.trim();
        if text.is_empty() {
            return Self::Empty;
        }

        if breadcrumbs && let Some((dir, partial)) = text.rsplit_once('/') {
            return Self::Breadcrumb {
                prefix: split_path(dir),
                partial: partial.to_string(),
            };
        }

        Self::Fuzzy(text.to_string())
    }

    /// Returns the short name of the matching mode.
    pub fn mode(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Fuzzy(_) => "fuzzy",
            Self::Breadcrumb { .. } => "breadcrumb",
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Fuzzy(text) => write!(f, "Fuzzy({text:?})"),
            Self::Breadcrumb { prefix, partial } => {
                write!(f, "Breadcrumb(prefix={prefix:?}, partial={partial:?})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crumbs(prefix: &[&str], partial: &str) -> Query {
        Query::Breadcrumb {
            prefix: prefix.iter().map(|s| (*s).to_string()).collect(),
            partial: partial.to_string(),
        }
    }

    #[test]
    fn empty_and_blank_are_empty() {
        assert_eq!(Query::parse("", true), Query::Empty);
        assert_eq!(Query::parse("   ", true), Query::Empty);
        assert_eq!(Query::parse("\t", false), Query::Empty);
    }

    #[test]
    fn plain_text_is_fuzzy() {
        assert_eq!(Query::parse(" physics ", true), Query::Fuzzy("physics".into()));
    }

    #[test]
    fn slash_switches_to_breadcrumb() {
        assert_eq!(Query::parse("science/phy", true), crumbs(&["science"], "phy"));
        assert_eq!(
            Query::parse("science/physics/qu", true),
            crumbs(&["science", "physics"], "qu")
        );
    }

    #[test]
    fn slash_is_plain_text_without_breadcrumb_mode() {
        assert_eq!(
            Query::parse("science/phy", false),
            Query::Fuzzy("science/phy".into())
        );
    }

    #[test]
    fn trailing_slash_has_empty_partial() {
        assert_eq!(Query::parse("science/", true), crumbs(&["science"], ""));
    }

    #[test]
    fn consecutive_slashes_keep_empty_segments() {
        assert_eq!(Query::parse("a//b", true), crumbs(&["a", ""], "b"));
        assert_eq!(Query::parse("/", true), crumbs(&[""], ""));
    }

    #[test]
    fn display_names_mode() {
        assert_eq!(Query::parse("a/b", true).to_string(), r#"Breadcrumb(prefix=["a"], partial="b")"#);
        assert_eq!(Query::parse("ab", true).mode(), "fuzzy");
    }
}
