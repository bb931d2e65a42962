use itertools::Itertools;

/// Lines never lose more than this many leading whitespace characters, so
/// indented code blocks keep their indentation.
const MAX_DEDENT: usize = 3;

/// Tidy the indentation left behind after markers were removed.
///
/// Runs line by line over `\n`-separated text:
/// - a blank or whitespace-only line becomes empty;
/// - an indented line loses up to 3 leading whitespace characters, unless
///   its first non-whitespace character is `-`, a digit or `>`. Those lines
///   still start a list item or quote, and their indentation is nesting.
///
/// ```rust
/// # use markdown_strip::normalize_indentation;
/// let text = "  Title\n   \n  - item\n  > quote";
/// assert_eq!(normalize_indentation(text), "Title\n\n  - item\n  > quote");
/// ```
pub fn normalize_indentation(text: &str) -> String {
    text.split('\n').map(normalize_line).join("\n")
}

fn normalize_line(line: &str) -> &str {
    let Some((first_index, first_char)) = line.char_indices().find(|(_, c)| !c.is_whitespace())
    else {
        return "";
    };

    if first_index == 0 || starts_structure(first_char) {
        return line;
    }

    let dedent = line
        .char_indices()
        .nth(MAX_DEDENT)
        .map_or(first_index, |(index, _)| index.min(first_index));
    tracing::trace!(dedent, line, "normalize_line");
    &line[dedent..]
}

fn starts_structure(c: char) -> bool {
    c == '-' || c == '>' || c.is_ascii_digit()
}
