//! SQL quoting and pattern escaping for generated statement text.

/// Quote an identifier with an explicit delimiter.
///
/// Every occurrence of the delimiter inside `text` is doubled, then the
/// whole string is wrapped in the delimiter. Applies to identifiers
/// (table, column, schema names) only, never to values.
pub fn quote_identifier(text: &str, delim: &str) -> String {
    let doubled = format!("{}{}", delim, delim);
    format!("{}{}{}", delim, text.replace(delim, &doubled), delim)
}

/// Quote an identifier with the standard `"` delimiter.
pub fn quote(text: &str) -> String {
    quote_identifier(text, "\"")
}

/// Quote a list of identifiers as one delimited string.
///
/// Each item is escaped independently, the items are joined with
/// `<delim>, <delim>`, and a single delimiter is added at each end. The
/// result is one delimited string containing commas, not a list of
/// independently delimited identifiers. Callers building a SELECT column
/// list must quote each column themselves and join with `", "` instead;
/// `QuerySpec::synthesize` does exactly that.
pub fn quote_identifier_list(items: &[String], delim: &str) -> String {
    let doubled = format!("{}{}", delim, delim);
    let escaped: Vec<String> = items
        .iter()
        .map(|item| item.replace(delim, &doubled))
        .collect();
    let joiner = format!("{}, {}", delim, delim);
    format!("{}{}{}", delim, escaped.join(&joiner), delim)
}

// Shared escaping pipeline for LIKE patterns. The replacements run in
// this exact order: the '@' pass also doubles the '@' prefixes
// introduced by the '_' and '%' passes, matching the original tool
// byte for byte.
fn escape_like(text: &str) -> String {
    text.replace('\'', "''")
        .replace('_', "@_")
        .replace('%', "@%")
        .replace('@', "@@")
}

/// Build a substring-match LIKE literal: `'%<escaped>%' ESCAPE '@'`.
pub fn like_pattern(text: &str) -> String {
    format!("'%{}%' ESCAPE '@'", escape_like(text))
}

/// Build a prefix-match LIKE literal: `'<escaped>%' ESCAPE '@'`.
pub fn starts_with_pattern(text: &str) -> String {
    format!("'{}%' ESCAPE '@'", escape_like(text))
}

/// Wrap a value as a single-quoted SQL string literal, doubling any
/// embedded single quotes.
pub fn string_literal(text: &str) -> String {
    format!("'{}'", text.replace('\'', "''"))
}

/// Best-effort inverse of [`quote`] and [`string_literal`].
///
/// Strips one layer of `"` or `'` delimiters and un-doubles interior
/// occurrences. Text that is not delimited comes back unchanged.
pub fn unquote(text: &str) -> String {
    for (delim, doubled) in [('"', "\"\""), ('\'', "''")] {
        if text.len() >= 2 && text.starts_with(delim) && text.ends_with(delim) {
            let inner = &text[1..text.len() - 1];
            return inner.replace(doubled, &delim.to_string());
        }
    }
    text.to_string()
}
