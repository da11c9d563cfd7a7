//! Location routing for TabShell.
//!
//! Turns raw address-bar input into a [`Location`] and renders a `Location`
//! back into its canonical string. The two directions agree: classifying a
//! rendered location always yields the original location.

use crate::types::errors::NavigationError;
use crate::types::location::{InternalPage, Location};

/// Classifies trimmed user input into a navigation target.
///
/// Recognized internal schemes are `home://`, `settings://`, and
/// `search://` (with an optional `?q=` query); scheme matching is
/// ASCII-case-insensitive. Anything else passes through unchanged when it
/// already carries `http://` or `https://`, and gets `https://` prepended
/// otherwise.
///
/// # Errors
/// Returns `NavigationError::EmptyInput` when the input is empty or
/// whitespace-only; the caller should leave the address bar as it was.
pub fn classify(raw: &str) -> Result<Location, NavigationError> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(NavigationError::EmptyInput);
    }

    if input.eq_ignore_ascii_case("home://") {
        return Ok(Location::Internal(InternalPage::Home));
    }
    if input.eq_ignore_ascii_case("settings://") {
        return Ok(Location::Internal(InternalPage::Settings));
    }
    if let Some(rest) = strip_prefix_ignore_case(input, "search://") {
        return Ok(Location::Internal(InternalPage::Search(search_query(rest))));
    }

    if has_web_scheme(input) {
        return Ok(Location::External(input.to_string()));
    }
    Ok(Location::External(format!("https://{}", input)))
}

/// Renders a location as its canonical address-bar string.
pub fn render(location: &Location) -> String {
    match location {
        Location::External(url) => url.clone(),
        Location::Internal(InternalPage::Home) => "home://".to_string(),
        Location::Internal(InternalPage::Settings) => "settings://".to_string(),
        Location::Internal(InternalPage::Search(query)) => {
            if query.is_empty() {
                "search://".to_string()
            } else {
                format!("search://?q={}", encode_query(query))
            }
        }
    }
}

fn has_web_scheme(input: &str) -> bool {
    strip_prefix_ignore_case(input, "http://").is_some()
        || strip_prefix_ignore_case(input, "https://").is_some()
}

fn strip_prefix_ignore_case<'a>(input: &'a str, prefix: &str) -> Option<&'a str> {
    if input.len() < prefix.len() {
        return None;
    }
    // The prefixes are pure ASCII, so a byte match guarantees the split
    // point is a character boundary.
    if input.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes()) {
        input.get(prefix.len()..)
    } else {
        None
    }
}

/// Extracts the `q` parameter from whatever follows `search://`.
/// Missing or unparseable queries resolve to the empty string.
fn search_query(rest: &str) -> String {
    let params = rest.strip_prefix('?').unwrap_or(rest);
    for pair in params.split('&') {
        if let Some(value) = pair.strip_prefix("q=") {
            return decode_query(value);
        }
    }
    String::new()
}

/// Percent-encodes a search query for the canonical `search://?q=` form.
/// Unreserved characters (RFC 3986) pass through; everything else is
/// encoded byte-wise as `%XX`.
pub(crate) fn encode_query(query: &str) -> String {
    let mut out = String::with_capacity(query.len());
    for byte in query.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Percent-decodes a query value. Lenient: a malformed escape is kept as a
/// literal `%`, and `+` decodes to a space.
fn decode_query(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match decoded {
                    Some(byte) => {
                        out.push(byte);
                        i += 3;
                    }
                    None => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            byte => {
                out.push(byte);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
