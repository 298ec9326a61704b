//! Allowlist HTML sanitizer for third-party coin descriptions
//!
//! The remote API's description field carries raw HTML written by coin
//! teams. Rendering it untouched is an XSS vector, so only a small set of
//! formatting tags survives; everything else is escaped into plain text.

/// Tags that survive sanitization (attributes are stripped; `a` keeps a
/// re-emitted http(s) `href` only).
const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "strong", "i", "em", "u", "s", "del", "code", "pre", "p", "br", "ul", "ol", "li",
];

/// Sanitizes untrusted HTML down to the allowlisted formatting tags.
///
/// Allowed tags are re-emitted lowercase with no attributes. Anchors keep
/// their `href` only when it is an http(s) URL, and gain
/// `rel="noopener noreferrer"`. `<script>` and `<style>` elements are
/// removed together with their text. Every other tag is escaped in place.
pub fn clean_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut i = 0usize;
    // Set while inside a <script> or <style> element whose text is dropped
    let mut skip_until: Option<&'static str> = None;

    while i < input.len() {
        // Safe because i always lands on a char boundary
        let ch = input[i..].chars().next().unwrap();
        if ch == '<' {
            if let Some(rel_end) = input[i + 1..].find('>') {
                let end = i + 1 + rel_end;
                let inner = &input[i + 1..end];
                let trimmed = inner.trim();
                let is_closing = trimmed.starts_with('/');
                let name = trimmed
                    .trim_start_matches('/')
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .trim_end_matches('/')
                    .to_ascii_lowercase();

                if let Some(waiting) = skip_until {
                    if is_closing && name == waiting {
                        skip_until = None;
                    }
                    i = end + 1;
                    continue;
                }

                if name == "script" || name == "style" {
                    if !is_closing {
                        skip_until = Some(if name == "script" { "script" } else { "style" });
                    }
                    i = end + 1;
                    continue;
                }

                if !name.is_empty() && ALLOWED_TAGS.contains(&name.as_str()) {
                    if is_closing {
                        out.push_str("</");
                        out.push_str(&name);
                        out.push('>');
                    } else if name == "a" {
                        match extract_http_href(trimmed) {
                            Some(href) => {
                                out.push_str("<a href=\"");
                                out.push_str(&href);
                                out.push_str("\" rel=\"noopener noreferrer\">");
                            }
                            None => out.push_str("<a>"),
                        }
                    } else {
                        out.push('<');
                        out.push_str(&name);
                        out.push('>');
                    }
                } else {
                    // Turn e.g. <img onerror=...> into visible escaped text
                    out.push_str("&lt;");
                    out.push_str(&inner.replace('<', "&lt;"));
                    out.push('>');
                }
                i = end + 1;
            } else {
                // No closing '>' - escape the stray '<'
                out.push_str("&lt;");
                i += ch.len_utf8();
            }
        } else {
            if skip_until.is_none() {
                out.push(ch);
            }
            i += ch.len_utf8();
        }
    }

    out
}

/// Pulls an http(s) href value out of an anchor's tag body, if present.
fn extract_http_href(tag: &str) -> Option<String> {
    let lower = tag.to_ascii_lowercase();
    let pos = lower.find("href")?;
    let rest = tag[pos + 4..].trim_start().strip_prefix('=')?.trim_start();

    let quote = match rest.chars().next()? {
        q @ ('"' | '\'') => q,
        _ => return None,
    };
    let rest = &rest[1..];
    let value = &rest[..rest.find(quote)?];

    let scheme_check = value.trim().to_ascii_lowercase();
    let is_http = scheme_check.starts_with("http://") || scheme_check.starts_with("https://");
    if is_http && !value.contains(['"', '<', '>']) {
        Some(value.to_string())
    } else {
        None
    }
}
