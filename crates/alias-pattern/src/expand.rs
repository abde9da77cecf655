//! Positional reference expansion for replacement templates.

/// Expand `$n` references in `template` using `groups`.
///
/// `groups[0]` is the whole match, `groups[i]` the i-th capture. Follows the
/// usual replacement-string rules of alias consumers:
///
/// - `$$` inserts a literal `$`
/// - `$&` inserts the whole match
/// - `$nn` refers to group `nn` when that group exists, otherwise `$n`
///   followed by a literal digit
/// - a reference to a group that does not exist is copied literally
/// - a group that did not participate expands to the empty string
pub fn expand_references(template: &str, groups: &[Option<&str>]) -> String {
    let group_count = groups.len().saturating_sub(1);
    let chars: Vec<char> = template.chars().collect();
    let mut out = String::with_capacity(template.len());
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch != '$' || i + 1 >= chars.len() {
            out.push(ch);
            i += 1;
            continue;
        }

        let next = chars[i + 1];
        match next {
            '$' => {
                out.push('$');
                i += 2;
            }
            '&' => {
                out.push_str(groups.first().copied().flatten().unwrap_or(""));
                i += 2;
            }
            d if d.is_ascii_digit() => {
                let first = d.to_digit(10).unwrap_or(0) as usize;
                let two_digit = chars
                    .get(i + 2)
                    .and_then(|c| c.to_digit(10))
                    .map(|second| first * 10 + second as usize)
                    .filter(|&n| n >= 1 && n <= group_count);

                if let Some(n) = two_digit {
                    out.push_str(groups[n].unwrap_or(""));
                    i += 3;
                } else if first >= 1 && first <= group_count {
                    out.push_str(groups[first].unwrap_or(""));
                    i += 2;
                } else {
                    out.push('$');
                    i += 1;
                }
            }
            _ => {
                out.push('$');
                i += 1;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_positional_references() {
        let groups = [Some("a/b"), Some("a"), Some("b")];
        assert_eq!(expand_references("/x/$1/y/$2", &groups), "/x/a/y/b");
    }

    #[test]
    fn test_reference_followed_by_word_characters() {
        let groups = [Some("foo"), Some("foo")];
        assert_eq!(expand_references("/src/$1suffix.ts", &groups), "/src/foosuffix.ts");
    }

    #[test]
    fn test_two_digit_reference_falls_back_to_one_digit() {
        let groups = [Some("x"), Some("x")];
        assert_eq!(expand_references("$12", &groups), "x2");
    }

    #[test]
    fn test_unknown_reference_is_literal() {
        let groups = [Some("x"), Some("x")];
        assert_eq!(expand_references("/a/$3/$0/$name", &groups), "/a/$3/$0/$name");
    }

    #[test]
    fn test_dollar_escapes() {
        let groups = [Some("whole"), Some("w")];
        assert_eq!(expand_references("$$1-$&-$", &groups), "$1-whole-$");
    }

    #[test]
    fn test_unmatched_group_is_empty() {
        let groups = [Some(""), None];
        assert_eq!(expand_references("/a/$1", &groups), "/a/");
    }
}
