use super::token::Token;
use log::debug;

const DIRECTIVE: &str = ">>";
const FENCE: &str = "---";

/// Whether a line is a `>>` metadata line, well-formed or not.
pub fn is_directive(line: &str) -> bool {
    line.trim_start().starts_with(DIRECTIVE)
}

/// Parses a `>> key: value` line into a [`Token::Metadata`].
///
/// Returns `None` for anything that is not a well-formed directive.
pub fn parse_directive(line: &str) -> Option<Token> {
    let entry = line.trim_start().strip_prefix(DIRECTIVE)?;
    let token = parse_entry(entry);
    if token.is_none() {
        debug!("Dropping malformed metadata line: {:?}", line);
    }
    token
}

/// Splits `key: value` at the first colon. Keys must not be empty.
pub fn parse_entry(entry: &str) -> Option<Token> {
    let (key, value) = entry.split_once(':')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }

    Some(Token::Metadata {
        key: key.to_string(),
        value: value.trim().to_string(),
    })
}

/// Reads a leading `---` fenced block of `key: value` lines.
///
/// Returns the entries and the remaining body, or `None` when the document
/// does not open with a fence or the fence is never closed.
pub fn split_front_matter(text: &str) -> Option<(Vec<Token>, &str)> {
    let mut lines = text.split_inclusive('\n');
    let mut offset = 0;

    loop {
        let line = lines.next()?;
        offset += line.len();
        match line.trim() {
            "" => continue,
            FENCE => break,
            _ => return None,
        }
    }

    let mut entries = Vec::new();
    for line in lines {
        offset += line.len();
        let trimmed = line.trim();
        if trimmed == FENCE {
            return Some((entries, &text[offset..]));
        }
        if trimmed.is_empty() {
            continue;
        }
        match parse_entry(trimmed) {
            Some(token) => entries.push(token),
            None => debug!("Skipping front matter line without a key: {:?}", trimmed),
        }
    }

    debug!("Front matter is not closed, reading it as body text");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, value: &str) -> Token {
        Token::Metadata {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_directive() {
        assert!(is_directive(">> servings: 4"));
        assert!(is_directive("  >>servings: 4"));
        assert!(!is_directive("servings: 4"));
        assert_eq!(parse_directive(">> servings: 4"), Some(entry("servings", "4")));
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(
            parse_directive(">> source: https://example.com/soup"),
            Some(entry("source", "https://example.com/soup"))
        );
    }

    #[test]
    fn test_malformed_directive() {
        assert_eq!(parse_directive(">> malformed line"), None);
        assert_eq!(parse_directive(">> : no key"), None);
    }

    #[test]
    fn test_front_matter() {
        let text = "\n---\ntitle: Soup\nservings: 2\nbroken\n---\nBoil @water.\n";
        let (entries, body) = split_front_matter(text).unwrap();

        assert_eq!(entries, vec![entry("title", "Soup"), entry("servings", "2")]);
        assert_eq!(body, "Boil @water.\n");
    }

    #[test]
    fn test_no_front_matter() {
        assert!(split_front_matter("Boil @water.\n---\n").is_none());
        assert!(split_front_matter("").is_none());
    }

    #[test]
    fn test_unclosed_front_matter() {
        assert!(split_front_matter("---\ntitle: Soup\nBoil @water.").is_none());
    }
}
