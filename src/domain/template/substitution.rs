//! Substitution engine for `$name` placeholders

use std::collections::BTreeSet;

use super::types::Parameters;

const TOKEN_MARKER: char = '$';

/// Replace `$name` tokens in `text` with the matching parameter values.
///
/// The text is scanned once from left to right. At each `$` the longest
/// parameter name that the following text starts with wins, so `$nameExtra`
/// is preferred over `$name` when both parameters are supplied. Names and
/// values are plain strings: nothing is interpreted as a pattern and a
/// substituted value is never scanned again. Tokens with no matching
/// parameter are copied verbatim.
pub fn substitute(text: &str, parameters: &Parameters) -> String {
    if text.is_empty() || parameters.is_empty() {
        return text.to_string();
    }

    // Longest first, then lexicographic, so the first prefix hit is the winner
    let mut names: Vec<(&str, &str)> = parameters
        .iter()
        .filter(|(name, _)| !name.is_empty())
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    names.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(pos) = rest.find(TOKEN_MARKER) {
        result.push_str(&rest[..pos]);
        let after_marker = &rest[pos + TOKEN_MARKER.len_utf8()..];

        match names
            .iter()
            .find(|(name, _)| after_marker.starts_with(name))
        {
            Some((name, value)) => {
                result.push_str(value);
                rest = &after_marker[name.len()..];
            }
            None => {
                result.push(TOKEN_MARKER);
                rest = after_marker;
            }
        }
    }

    result.push_str(rest);
    result
}

/// Collect the distinct `$identifier` tokens present in `text`.
///
/// An identifier is a run of ASCII alphanumerics or underscores. Used to
/// report tokens that a render left unresolved.
pub fn placeholders(text: &str) -> BTreeSet<String> {
    text.split(TOKEN_MARKER)
        .skip(1)
        .map(|segment| {
            segment
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect::<String>()
        })
        .filter(|name| !name.is_empty())
        .collect()
}
