use std::borrow::Cow;

const BLOCK_OPEN: &str = "[-";
const BLOCK_CLOSE: &str = "-]";
const LINE_COMMENT: &str = "--";

/// Removes `--` line comments and `[- ... -]` block comments in one pass.
///
/// Whichever comment opens first wins, so a `[-` after `--` is part of the
/// line comment and never starts a block. `--` runs to the end of its line
/// everywhere, `>>` metadata values included. A line holding nothing but
/// comments is removed together with its line break, so it never acts as a
/// blank line between steps. A `[-` without a closing `-]` is literal text.
pub fn strip_comments(text: &str, block_comments: bool) -> Cow<'_, str> {
    let has_block = block_comments && text.contains(BLOCK_OPEN);
    if !has_block && !text.contains(LINE_COMMENT) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut line_start = 0;
    let mut pos = 0;

    while let Some(c) = text[pos..].chars().next() {
        let rest = &text[pos..];

        if rest.starts_with(LINE_COMMENT) {
            let end = rest.find('\n').map_or(text.len(), |index| pos + index);
            if out[line_start..].trim().is_empty() {
                out.truncate(line_start);
                pos = (end + 1).min(text.len());
            } else {
                pos = end;
            }
            continue;
        }

        if has_block && rest.starts_with(BLOCK_OPEN) {
            if let Some(len) = rest[BLOCK_OPEN.len()..].find(BLOCK_CLOSE) {
                pos += BLOCK_OPEN.len() + len + BLOCK_CLOSE.len();
                continue;
            }
        }

        out.push(c);
        pos += c.len_utf8();
        if c == '\n' {
            line_start = out.len();
        }
    }

    Cow::Owned(out)
}
