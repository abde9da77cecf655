//! JSON-with-comments support for configuration documents.

/// Strip `//` line comments, `/* */` block comments and trailing commas
/// while leaving string literals untouched.
pub(crate) fn strip_jsonc(input: &str) -> String {
    remove_trailing_commas(&strip_comments(input))
}

fn strip_comments(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < len {
        let ch = chars[i];

        if ch == '"' {
            i = copy_string(&chars, i, &mut out);
            continue;
        }

        if ch == '/' && i + 1 < len && chars[i + 1] == '/' {
            while i < len && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        if ch == '/' && i + 1 < len && chars[i + 1] == '*' {
            i += 2;
            while i + 1 < len && !(chars[i] == '*' && chars[i + 1] == '/') {
                i += 1;
            }
            // Unterminated block comments swallow the rest of the input.
            i = (i + 2).min(len);
            continue;
        }

        out.push(ch);
        i += 1;
    }

    out
}

fn remove_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let len = chars.len();
    let mut out = String::with_capacity(input.len());
    let mut i = 0;

    while i < len {
        let ch = chars[i];

        if ch == '"' {
            i = copy_string(&chars, i, &mut out);
            continue;
        }

        if ch == ',' {
            let next = chars[i + 1..].iter().find(|c| !c.is_whitespace());
            if matches!(next, Some('}') | Some(']')) {
                i += 1;
                continue;
            }
        }

        out.push(ch);
        i += 1;
    }

    out
}

/// Copy a string literal starting at `start` (the opening quote) into `out`,
/// returning the index just past the closing quote.
fn copy_string(chars: &[char], start: usize, out: &mut String) -> usize {
    out.push('"');
    let mut i = start + 1;
    while i < chars.len() {
        let c = chars[i];
        out.push(c);
        i += 1;
        if c == '\\' && i < chars.len() {
            out.push(chars[i]);
            i += 1;
        } else if c == '"' {
            break;
        }
    }
    i
}
