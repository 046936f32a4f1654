// src/domain/tag/parse.rs
use std::collections::HashSet;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::tag::value_objects::{EmptyTagPolicy, TagName};

/// Split a comma separated tag list into normalized tokens.
///
/// A comma only delimits when an even number of `"` follow it, so commas
/// inside a quoted segment stay part of the token. Each token is trimmed,
/// loses one leading and one trailing quote, is lowercased and has every
/// whitespace run replaced by a hyphen. Order and duplicates are preserved;
/// empty tokens are passed through.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    match raw {
        Some(raw) if !raw.is_empty() => split_outside_quotes(raw)
            .into_iter()
            .map(normalize_token)
            .collect(),
        _ => Vec::new(),
    }
}

/// Apply `policy` to empty tokens and drop repeated names, keeping the first
/// occurrence.
pub fn canonical_tag_names<I, S>(tokens: I, policy: EmptyTagPolicy) -> DomainResult<Vec<TagName>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for token in tokens {
        let token = token.into();
        if token.is_empty() {
            match policy {
                EmptyTagPolicy::Drop => continue,
                EmptyTagPolicy::Reject => {
                    return Err(DomainError::validation("tag list contains an empty tag"));
                }
            }
        }
        let name = TagName::new(token)?;
        if seen.insert(name.clone()) {
            names.push(name);
        }
    }
    Ok(names)
}

fn split_outside_quotes(raw: &str) -> Vec<&str> {
    let mut quotes_after = raw.matches('"').count();
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in raw.char_indices() {
        match ch {
            '"' => quotes_after -= 1,
            ',' if quotes_after % 2 == 0 => {
                segments.push(&raw[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    segments.push(&raw[start..]);
    segments
}

fn normalize_token(segment: &str) -> String {
    let trimmed = segment.trim();
    let unquoted = trimmed.strip_prefix('"').unwrap_or(trimmed);
    let unquoted = unquoted.strip_suffix('"').unwrap_or(unquoted);

    let mut token = String::with_capacity(unquoted.len());
    let mut in_whitespace = false;
    for ch in unquoted.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                token.push('-');
            }
            in_whitespace = true;
        } else {
            token.push(ch);
            in_whitespace = false;
        }
    }
    token
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoted_commas_are_kept() {
        assert_eq!(
            parse_tags(Some(r#"remote, "full-time, contract", Node"#)),
            vec!["remote", "full-time,-contract", "node"]
        );
    }

    #[test]
    fn empty_or_absent_input_yields_nothing() {
        assert!(parse_tags(Some("")).is_empty());
        assert!(parse_tags(None).is_empty());
    }

    #[test]
    fn duplicates_survive_parsing() {
        assert_eq!(parse_tags(Some("Go, go, GO")), vec!["go", "go", "go"]);
    }

    #[test]
    fn inner_whitespace_becomes_single_hyphen() {
        assert_eq!(
            parse_tags(Some("Machine   Learning,\tdata\n science")),
            vec!["machine-learning", "data-science"]
        );
    }

    #[test]
    fn trailing_comma_yields_empty_token() {
        assert_eq!(parse_tags(Some("rust,")), vec!["rust", ""]);
        assert_eq!(parse_tags(Some(",rust")), vec!["", "rust"]);
    }

    #[test]
    fn only_edge_quotes_are_stripped() {
        assert_eq!(parse_tags(Some(r#"say "hi" there"#)), vec![r#"say-"hi"-there"#]);
        assert_eq!(parse_tags(Some(r#""c++""#)), vec!["c++"]);
        assert_eq!(parse_tags(Some(r#"""#)), vec![""]);
    }

    #[test]
    fn whitespace_inside_quotes_is_hyphenated_at_edges() {
        assert_eq!(parse_tags(Some(r#"" padded ""#)), vec!["-padded-"]);
    }

    #[test]
    fn unbalanced_quote_changes_delimiters() {
        // One quote ahead makes the first comma a non-delimiter.
        assert_eq!(parse_tags(Some(r#"a, b", c"#)), vec!["a,-b", "c"]);
    }

    #[test]
    fn canonical_names_drop_empties_and_duplicates() {
        let names = canonical_tag_names(parse_tags(Some("Go, go, , rust,")), EmptyTagPolicy::Drop)
            .unwrap();
        let names: Vec<_> = names.iter().map(TagName::as_str).collect();
        assert_eq!(names, vec!["go", "rust"]);
    }

    #[test]
    fn canonical_names_can_reject_empties() {
        let err = canonical_tag_names(parse_tags(Some("rust,")), EmptyTagPolicy::Reject)
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
