//! Wildcard path-mapping keys compiled into resolver aliases.
//!
//! A mapping key such as `@/*` becomes an anchored pattern (`^@/(.*)$`) and its
//! target template (`/repo/src/*`) becomes a replacement with positional
//! references (`/repo/src/$1`). Keys without a wildcard stay literal.

mod alias;
mod error;
mod expand;

pub use alias::{Alias, Find};
pub use error::AliasError;
pub use expand::expand_references;

/// Placeholder character in a mapping key or target template.
pub const WILDCARD: char = '*';

/// Capture group inserted for every wildcard of a key.
const CAPTURE_GROUP: &str = "(.*)";

/// Characters that carry meaning in a pattern and must be escaped in literal
/// key segments.
const META_CHARACTERS: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Translate one path-mapping entry into an alias.
///
/// `target_template` should already be absolute; it is used verbatim apart
/// from wildcard substitution.
///
/// If the key's pattern cannot be compiled the key is kept as a literal
/// find. Use [`try_translate`] to see that failure instead.
pub fn translate(pattern_key: &str, target_template: &str) -> Alias {
    try_translate(pattern_key, target_template)
        .unwrap_or_else(|_| Alias::literal(pattern_key, target_template))
}

/// Translate one path-mapping entry, reporting keys whose pattern does not
/// compile.
pub fn try_translate(pattern_key: &str, target_template: &str) -> Result<Alias, AliasError> {
    if !pattern_key.contains(WILDCARD) {
        return Ok(Alias::literal(pattern_key, target_template));
    }

    let segments: Vec<&str> = pattern_key.split(WILDCARD).collect();
    let wildcard_count = segments.len() - 1;

    let escaped: Vec<String> = segments.iter().map(|s| escape_literal(s)).collect();
    let source = format!("^{}$", escaped.join(CAPTURE_GROUP));

    Ok(Alias {
        find: Find::pattern(&source)?,
        replacement: build_replacement(target_template, wildcard_count),
    })
}

/// Escape pattern metacharacters so the segment only matches itself.
pub fn escape_literal(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for ch in segment.chars() {
        if META_CHARACTERS.contains(&ch) {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Replace the first `wildcard_count` wildcards of `target` with `$1`, `$2`, ...
///
/// Substitution happens one marker at a time from the left so text inserted by
/// an earlier step is never rescanned as a marker.
pub fn build_replacement(target: &str, wildcard_count: usize) -> String {
    let mut replacement = target.to_string();
    for rank in 1..=wildcard_count {
        replacement = replacement.replacen(WILDCARD, &format!("${rank}"), 1);
    }
    replacement
}
