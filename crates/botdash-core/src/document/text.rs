use crate::escape::unescape_html;

/// Visible text of a markup fragment.
///
/// Tags are dropped, entities decoded and runs of whitespace collapsed to a
/// single space. Text produced by [`crate::escape::escape_html`] comes back
/// as the literal original, never as markup.
pub fn html_to_text(html: &str) -> String {
    let mut raw = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Block boundaries still separate words
                raw.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => raw.push(c),
            _ => {}
        }
    }

    unescape_html(&raw)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Visible text of a markup fragment, one entry per block element.
///
/// Closing `div` and `p` tags end a line. Blank lines are dropped.
pub fn html_to_lines(html: &str) -> Vec<String> {
    html.split("</div>")
        .flat_map(|chunk| chunk.split("</p>"))
        .map(html_to_text)
        .filter(|line| !line.is_empty())
        .collect()
}
