//! Alias records consumed by module resolvers.

use regex_lite::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AliasError;
use crate::expand::expand_references;

/// The matching side of an alias.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "FindRepr", into = "FindRepr")]
pub enum Find {
    /// Exact literal specifier (or path prefix of one).
    Literal(String),
    /// Pattern anchored to the whole specifier.
    Pattern(Regex),
}

/// Wire form: a bare string for literals, `{"pattern": "..."}` for patterns.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum FindRepr {
    Literal(String),
    Pattern { pattern: String },
}

impl TryFrom<FindRepr> for Find {
    type Error = AliasError;

    fn try_from(repr: FindRepr) -> Result<Self, Self::Error> {
        match repr {
            FindRepr::Literal(s) => Ok(Find::Literal(s)),
            FindRepr::Pattern { pattern } => Find::pattern(&pattern),
        }
    }
}

impl From<Find> for FindRepr {
    fn from(find: Find) -> Self {
        match find {
            Find::Literal(s) => FindRepr::Literal(s),
            Find::Pattern(re) => FindRepr::Pattern {
                pattern: re.as_str().to_string(),
            },
        }
    }
}

/// Compiled program size allowed for a pattern. Mapping keys are not bounded
/// in length, so the default NFA budget of the regex engine is lifted.
const PATTERN_SIZE_LIMIT: usize = usize::MAX;

impl Find {
    /// Compile a pattern source.
    pub fn pattern(source: &str) -> Result<Self, AliasError> {
        RegexBuilder::new(source)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()
            .map(Find::Pattern)
            .map_err(|e| AliasError::InvalidPattern {
                source_text: source.to_string(),
                message: e.to_string(),
            })
    }

    /// Literal text or pattern source.
    pub fn source(&self) -> &str {
        match self {
            Find::Literal(s) => s,
            Find::Pattern(re) => re.as_str(),
        }
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Find::Pattern(_))
    }
}

impl PartialEq for Find {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Find::Literal(a), Find::Literal(b)) => a == b,
            (Find::Pattern(a), Find::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl Eq for Find {}

impl fmt::Display for Find {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Find::Literal(s) => write!(f, "{}", s),
            Find::Pattern(re) => write!(f, "/{}/", re.as_str()),
        }
    }
}

/// A find/replace rule. Earlier aliases in a list take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    pub find: Find,
    pub replacement: String,
}

impl Alias {
    pub fn literal(find: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            find: Find::Literal(find.into()),
            replacement: replacement.into(),
        }
    }

    /// Precedence weight: UTF-16 length of the literal, or of the pattern
    /// source in its delimited form where every unescaped `/` reads `\/`.
    pub fn specificity(&self) -> usize {
        match &self.find {
            Find::Literal(lit) => lit.encode_utf16().count(),
            Find::Pattern(re) => delimited_source_len(re.as_str()),
        }
    }

    /// Whether this alias applies to `specifier`.
    ///
    /// Patterns must match the whole specifier. Literals match exactly or as a
    /// leading path segment (`@` matches `@/utils` but not `@scope/pkg`).
    pub fn matches(&self, specifier: &str) -> bool {
        match &self.find {
            Find::Literal(lit) => literal_rest(lit, specifier).is_some(),
            Find::Pattern(re) => re.is_match(specifier),
        }
    }

    /// Rewrite `specifier`, or `None` when the alias does not apply.
    pub fn apply(&self, specifier: &str) -> Option<String> {
        match &self.find {
            Find::Literal(lit) => {
                let rest = literal_rest(lit, specifier)?;
                Some(format!("{}{}", self.replacement, rest))
            }
            Find::Pattern(re) => {
                let caps = re.captures(specifier)?;
                let groups: Vec<Option<&str>> =
                    caps.iter().map(|m| m.map(|m| m.as_str())).collect();
                Some(expand_references(&self.replacement, &groups))
            }
        }
    }
}

fn delimited_source_len(source: &str) -> usize {
    let mut len = 0;
    let mut escaped = false;
    for ch in source.chars() {
        len += ch.len_utf16();
        if ch == '/' && !escaped {
            len += 1;
        }
        escaped = ch == '\\' && !escaped;
    }
    len
}

/// Remainder of `specifier` after a literal alias, if the literal applies.
fn literal_rest<'a>(literal: &str, specifier: &'a str) -> Option<&'a str> {
    let rest = specifier.strip_prefix(literal)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate;

    #[test]
    fn test_literal_matches_exact_and_subpath() {
        let alias = Alias::literal("@", "/repo/src/index");
        assert!(alias.matches("@"));
        assert!(alias.matches("@/x"));
        assert!(!alias.matches("@scope/pkg"));
        assert_eq!(alias.apply("@").as_deref(), Some("/repo/src/index"));
        assert_eq!(alias.apply("@/x").as_deref(), Some("/repo/src/index/x"));
    }

    #[test]
    fn test_pattern_is_anchored() {
        let alias = translate("@/*", "/repo/src/*");
        assert!(alias.matches("@/components/Button"));
        assert!(!alias.matches("x@/components"));
        assert!(!alias.matches("@"));
    }

    #[test]
    fn test_pattern_apply_reproduces_target() {
        let alias = translate("@/*", "/repo/src/*");
        assert_eq!(
            alias.apply("@/hooks/use-chat").as_deref(),
            Some("/repo/src/hooks/use-chat")
        );

        let alias = translate("pkg-*/lib/*", "/repo/packages/*/dist/*.js");
        assert_eq!(
            alias.apply("pkg-ui/lib/button").as_deref(),
            Some("/repo/packages/ui/dist/button.js")
        );
    }

    #[test]
    fn test_specificity() {
        assert_eq!(Alias::literal("@", "/x").specificity(), 1);
        assert_eq!(Alias::literal("@/ui", "/x").specificity(), 4);
        // ^@\/(.*)$
        assert_eq!(translate("@/*", "/x/*").specificity(), 9);
        assert_eq!(translate("a/*/b/*", "/x/*/*").specificity(), 18);
    }

    #[test]
    fn test_specificity_does_not_double_escaped_slash() {
        let alias = Alias {
            find: Find::pattern(r"^lib\/(.*)$").unwrap(),
            replacement: "/x/$1".to_string(),
        };
        assert_eq!(alias.specificity(), 11);
    }

    #[test]
    fn test_specificity_orders_deeper_keys_first() {
        let shallow = translate("@/*", "/x/*");
        let deeper = translate("@/ui/*", "/x/ui/*");
        assert!(deeper.specificity() > shallow.specificity());
        // same length once escaped, so declaration order decides
        assert_eq!(
            translate("~/*", "/y/*").specificity(),
            shallow.specificity()
        );
    }

    #[test]
    fn test_serialize_literal_and_pattern() {
        let aliases = vec![
            Alias::literal("@", "/repo/src/index"),
            translate("@/*", "/repo/src/*"),
        ];
        let json = serde_json::to_value(&aliases).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                {"find": "@", "replacement": "/repo/src/index"},
                {"find": {"pattern": "^@/(.*)$"}, "replacement": "/repo/src/$1"}
            ])
        );
    }

    #[test]
    fn test_deserialize_round_trip_preserves_equality() {
        let alias = translate("~/*", "/repo/app/*");
        let json = serde_json::to_string(&alias).unwrap();
        let back: Alias = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alias);
    }

    #[test]
    fn test_deserialize_invalid_pattern() {
        let result: Result<Alias, _> =
            serde_json::from_str(r#"{"find": {"pattern": "(unclosed"}, "replacement": "/x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_literal_and_pattern_never_equal() {
        let pattern = Find::pattern("@").unwrap();
        assert_ne!(pattern, Find::Literal("@".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(translate("@/*", "/x/*").find.to_string(), "/^@/(.*)$/");
        assert_eq!(Alias::literal("@", "/x").find.to_string(), "@");
    }
}
