use crate::model::{Cookware, Ingredient, Timer};
use log::trace;

/// A recognized piece of recipe markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Literal text, copied into the step as-is
    Text(String),
    Ingredient(Ingredient),
    Cookware(Cookware),
    Timer(Timer),
    /// A document-level `key: value` annotation
    Metadata { key: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Ingredient,
    Cookware,
    Timer,
}

impl Kind {
    fn from_introducer(c: char) -> Option<Self> {
        match c {
            '@' => Some(Kind::Ingredient),
            '#' => Some(Kind::Cookware),
            '~' => Some(Kind::Timer),
            _ => None,
        }
    }

    /// Builds the token for `name{content}`; a timer with no name and no
    /// duration has nothing to show and stays literal
    fn with_braces(self, name: &str, content: &str) -> Option<Token> {
        let name = name.trim_end();
        match self {
            Kind::Ingredient => {
                let (amount, unit) = split_quantity(content);
                Some(Token::Ingredient(Ingredient::new(name, amount, unit)))
            }
            Kind::Cookware => Some(Token::Cookware(Cookware {
                name: name.to_string(),
                quantity: non_empty(content),
            })),
            Kind::Timer => {
                let (duration, unit) = split_quantity(content);
                let name = non_empty(name);
                if name.is_none() && duration.is_none() {
                    return None;
                }
                Some(Token::Timer(Timer {
                    name,
                    duration,
                    unit,
                }))
            }
        }
    }

    /// Builds the token for a bare single word; timers have no such form
    fn bare(self, name: &str) -> Option<Token> {
        match self {
            Kind::Ingredient => Some(Token::Ingredient(Ingredient::new(name, None, None))),
            Kind::Cookware => Some(Token::Cookware(Cookware {
                name: name.to_string(),
                quantity: None,
            })),
            Kind::Timer => None,
        }
    }
}

enum Scan {
    /// A token and the number of bytes it spans after the introducer
    Token(Token, usize),
    /// The introducer is plain text
    Literal,
    /// An opening brace without a closing one; the rest of the line is text
    Unterminated,
}

/// Splits brace content at the first `%` into amount and unit.
///
/// Both halves are trimmed and empty halves become `None`. There is no escape
/// syntax: the first `%` always splits.
pub fn split_quantity(content: &str) -> (Option<String>, Option<String>) {
    match content.split_once('%') {
        Some((amount, unit)) => {
            let amount = non_empty(amount);
            let unit = amount.as_ref().and_then(|_| non_empty(unit));
            (amount, unit)
        }
        None => (non_empty(content), None),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

/// Whether the text between an introducer and `{` may be a component name.
fn is_brace_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(char::is_whitespace)
        && !name.contains(['@', '#', '~', '{', '}', '.', ',', ';', ':', '!', '?'])
}

/// Recognizes a component from the text following its introducer.
fn scan(kind: Kind, rest: &str) -> Scan {
    if let Some(open) = rest.find('{') {
        let name = &rest[..open];
        let anonymous_timer = kind == Kind::Timer && name.is_empty();
        if anonymous_timer || is_brace_name(name) {
            let body = open + 1;
            match rest[body..].find('}') {
                Some(len) => {
                    return match kind.with_braces(name, &rest[body..body + len]) {
                        Some(token) => Scan::Token(token, body + len + 1),
                        None => Scan::Literal,
                    };
                }
                // A multi-word name only counts once its brace closes
                None if name.contains(char::is_whitespace) => {}
                None => return Scan::Unterminated,
            }
        }
    }

    let len = rest
        .char_indices()
        .find(|(_, c)| !is_word_char(*c))
        .map_or(rest.len(), |(index, _)| index);
    if len == 0 {
        return Scan::Literal;
    }

    match kind.bare(&rest[..len]) {
        Some(token) => Scan::Token(token, len),
        None => Scan::Literal,
    }
}

/// Splits one line of step text into tokens in a single left-to-right pass.
///
/// Never fails: anything that is not recognized is kept as [`Token::Text`].
/// Adjacent literal characters are merged into one text token.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(c) = line[pos..].chars().next() {
        let start = pos + c.len_utf8();
        let scanned = match Kind::from_introducer(c) {
            Some(kind) => scan(kind, &line[start..]),
            None => Scan::Literal,
        };

        match scanned {
            Scan::Token(token, len) => {
                if !text.is_empty() {
                    tokens.push(Token::Text(std::mem::take(&mut text)));
                }
                tokens.push(token);
                pos = start + len;
            }
            Scan::Literal => {
                text.push(c);
                pos = start;
            }
            Scan::Unterminated => {
                trace!("Unterminated brace at byte {} of {:?}", pos, line);
                text.push_str(&line[pos..]);
                pos = line.len();
            }
        }
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Token {
        Token::Text(s.to_string())
    }

    fn ingredient(name: &str, amount: Option<&str>, unit: Option<&str>) -> Token {
        Token::Ingredient(Ingredient::new(
            name,
            amount.map(String::from),
            unit.map(String::from),
        ))
    }

    fn cookware(name: &str) -> Token {
        Token::Cookware(Cookware {
            name: name.to_string(),
            quantity: None,
        })
    }

    #[test]
    fn test_single_word_ingredient() {
        assert_eq!(
            tokenize("Add @salt."),
            vec![text("Add "), ingredient("salt", None, None), text(".")]
        );
    }

    #[test]
    fn test_multi_word_ingredient_with_amount_and_unit() {
        assert_eq!(
            tokenize("@olive oil{2%tbsp}"),
            vec![ingredient("olive oil", Some("2"), Some("tbsp"))]
        );
    }

    #[test]
    fn test_empty_braces_capture_multi_word_name() {
        assert_eq!(
            tokenize("@black pepper{} to taste"),
            vec![ingredient("black pepper", None, None), text(" to taste")]
        );
    }

    #[test]
    fn test_amount_without_unit() {
        assert_eq!(tokenize("@eggs{3}"), vec![ingredient("eggs", Some("3"), None)]);
        assert_eq!(
            tokenize("@salt{a pinch}"),
            vec![ingredient("salt", Some("a pinch"), None)]
        );
    }

    #[test]
    fn test_first_percent_splits() {
        assert_eq!(split_quantity("1%%"), (Some("1".to_string()), Some("%".to_string())));
        assert_eq!(split_quantity("%g"), (None, None));
        assert_eq!(split_quantity(" 1/2 % cup "), (Some("1/2".to_string()), Some("cup".to_string())));
        assert_eq!(split_quantity(""), (None, None));
    }

    #[test]
    fn test_single_word_stops_before_later_braces() {
        assert_eq!(
            tokenize("Add @salt, then heat the #frying pan{}."),
            vec![
                text("Add "),
                ingredient("salt", None, None),
                text(", then heat the "),
                cookware("frying pan"),
                text("."),
            ]
        );
    }

    #[test]
    fn test_cookware_quantity_is_kept_on_token() {
        assert_eq!(
            tokenize("#pot{2}"),
            vec![Token::Cookware(Cookware {
                name: "pot".to_string(),
                quantity: Some("2".to_string()),
            })]
        );
    }

    #[test]
    fn test_timers() {
        assert_eq!(
            tokenize("~{10%minutes}"),
            vec![Token::Timer(Timer {
                name: None,
                duration: Some("10".to_string()),
                unit: Some("minutes".to_string()),
            })]
        );
        assert_eq!(
            tokenize("~rest{5%min}"),
            vec![Token::Timer(Timer {
                name: Some("rest".to_string()),
                duration: Some("5".to_string()),
                unit: Some("min".to_string()),
            })]
        );
    }

    #[test]
    fn test_timer_without_braces_is_literal() {
        assert_eq!(tokenize("about ~5 minutes"), vec![text("about ~5 minutes")]);
    }

    #[test]
    fn test_unterminated_brace_degrades_rest_of_line() {
        assert_eq!(
            tokenize("Sift @flour{200 and @sugar"),
            vec![text("Sift @flour{200 and @sugar")]
        );
    }

    #[test]
    fn test_unterminated_multi_word_brace_keeps_first_word() {
        assert_eq!(
            tokenize("Add @salt and stir {gently"),
            vec![
                text("Add "),
                ingredient("salt", None, None),
                text(" and stir {gently"),
            ]
        );
        assert_eq!(
            tokenize("@olive oil{2%tb"),
            vec![ingredient("olive", None, None), text(" oil{2%tb")]
        );
    }

    #[test]
    fn test_empty_timer_is_literal() {
        assert_eq!(tokenize("~{}"), vec![text("~{}")]);
        assert_eq!(tokenize("~{%min}"), vec![text("~{%min}")]);
    }

    #[test]
    fn test_lone_introducers_are_literal() {
        assert_eq!(tokenize("@ # ~ @{2}"), vec![text("@ # ~ @{2}")]);
        assert_eq!(tokenize("Step #"), vec![text("Step #")]);
    }

    #[test]
    fn test_unicode_names() {
        assert_eq!(
            tokenize("@crème fraîche{100%g} und @Äpfel"),
            vec![
                ingredient("crème fraîche", Some("100"), Some("g")),
                text(" und "),
                ingredient("Äpfel", None, None),
            ]
        );
    }
}
