//! HTML escaping for text that ends up inside chart labels or the page.

/// Escape the characters that are significant in HTML text and attributes
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap `text` (already escaped) in an anchor pointing at `href`
pub fn link(href: &str, text: &str) -> String {
    format!(r#"<a href="{}">{}</a>"#, escape_html(href), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Run & Fun <5K>"), "Run &amp; Fun &lt;5K&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_link_escapes_href() {
        assert_eq!(
            link("https://x.org/?a=1&b=\"2\"", "Race"),
            r#"<a href="https://x.org/?a=1&amp;b=&quot;2&quot;">Race</a>"#
        );
    }
}
