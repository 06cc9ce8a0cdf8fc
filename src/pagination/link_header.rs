//! Link header parser
//!
//! Decodes pagination headers of the form
//! `<uri>; rel="previous"; results="false"; cursor="0:0:1", <uri>; rel="next"; results="true"; cursor="0:100:0"`
//! into one [`LinkDescriptor`] per direction.

use super::types::{Direction, LinkDescriptor, PaginationLinks};
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex for one link parameter: `name="value"` or `name=value`
static PARAM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*([A-Za-z0-9_*-]+)\s*=\s*(?:"([^"]*)"|([^\s";]*))\s*$"#).unwrap()
});

/// Parse a pagination header, dropping malformed entries.
///
/// Never fails: a direction without a well-formed entry comes back as
/// [`LinkDescriptor::unavailable`].
pub fn parse(header: Option<&str>) -> PaginationLinks {
    let mut links = PaginationLinks::none();
    let Some(header) = header else {
        return links;
    };

    let mut seen = HashSet::new();
    for raw in split_outside(header, ',') {
        match parse_entry(raw) {
            Ok(Some((direction, descriptor))) => {
                if seen.insert(direction) {
                    *links.get_mut(direction) = descriptor;
                } else {
                    tracing::debug!("Ignoring duplicate '{}' link", direction);
                }
            }
            Ok(None) => {}
            Err(e) => tracing::debug!("Skipping link entry {:?}: {}", raw.trim(), e),
        }
    }

    links
}

/// Parse a pagination header, failing on the first malformed entry
pub fn try_parse(header: &str) -> Result<PaginationLinks> {
    let mut links = PaginationLinks::none();
    let mut seen = HashSet::new();

    for raw in split_outside(header, ',') {
        if let Some((direction, descriptor)) = parse_entry(raw)? {
            if seen.insert(direction) {
                *links.get_mut(direction) = descriptor;
            }
        }
    }

    Ok(links)
}

/// Parse one comma-separated entry.
///
/// `Ok(None)` means the entry is blank or names a relation we don't track.
fn parse_entry(raw: &str) -> Result<Option<(Direction, LinkDescriptor)>> {
    let entry = raw.trim();
    if entry.is_empty() {
        return Ok(None);
    }

    let mut segments = split_outside(entry, ';').into_iter();
    let target = segments.next().unwrap_or_default().trim();
    let href = target
        .strip_prefix('<')
        .and_then(|t| t.strip_suffix('>'))
        .ok_or_else(|| Error::malformed_header(format!("expected '<uri>', got {target:?}")))?;

    let mut rel = None;
    let mut results = None;
    let mut cursor = None;

    for segment in segments {
        if segment.trim().is_empty() {
            continue;
        }
        let caps = PARAM_REGEX
            .captures(segment)
            .ok_or_else(|| Error::malformed_header(format!("bad parameter {:?}", segment.trim())))?;
        let name = caps[1].to_ascii_lowercase();
        let value = caps
            .get(2)
            .or_else(|| caps.get(3))
            .map_or("", |m| m.as_str());

        match name.as_str() {
            "rel" => rel = Some(value),
            "results" => results = Some(value),
            "cursor" => cursor = Some(value),
            _ => {}
        }
    }

    let rel = rel.ok_or_else(|| Error::malformed_header("entry has no rel parameter"))?;
    // rel may list several space-separated relation types
    let Some(direction) = rel.split_whitespace().find_map(Direction::from_rel) else {
        return Ok(None);
    };

    let results_available = match results {
        None => true,
        Some(v) if v.eq_ignore_ascii_case("true") => true,
        Some(v) if v.eq_ignore_ascii_case("false") => false,
        Some(v) => {
            return Err(Error::malformed_header(format!(
                "results must be true or false, got {v:?}"
            )))
        }
    };

    let descriptor = LinkDescriptor {
        href: Some(href.to_string()),
        cursor: cursor.filter(|c| !c.is_empty()).map(String::from),
        results_available,
    };

    Ok(Some((direction, descriptor)))
}

/// Split on `sep` outside of `<...>` targets and quoted strings
fn split_outside(input: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_target = false;
    let mut in_quotes = false;

    for (i, ch) in input.char_indices() {
        match ch {
            '"' if !in_target => in_quotes = !in_quotes,
            '<' if !in_quotes => in_target = true,
            '>' if !in_quotes => in_target = false,
            c if c == sep && !in_target && !in_quotes => {
                parts.push(&input[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&input[start..]);

    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_outside_respects_brackets_and_quotes() {
        let parts = split_outside(r#"<a?x=1,2>; rel="next", <b>; cursor="p,q""#, ',');
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0], r#"<a?x=1,2>; rel="next""#);
        assert_eq!(parts[1].trim(), r#"<b>; cursor="p,q""#);
    }

    #[test]
    fn test_parse_entry_unknown_rel() {
        let entry = parse_entry(r#"<https://x/>; rel="first""#).unwrap();
        assert!(entry.is_none());
    }

    #[test]
    fn test_parse_entry_requires_target() {
        let err = parse_entry(r#"rel="next"; results="true""#).unwrap_err();
        assert!(matches!(err, Error::MalformedHeader { .. }));
    }

    #[test]
    fn test_parse_entry_unquoted_values() {
        let (direction, descriptor) = parse_entry("<u>; rel=next; results=TRUE; cursor=0:5:0")
            .unwrap()
            .unwrap();
        assert_eq!(direction, Direction::Next);
        assert!(descriptor.results_available);
        assert_eq!(descriptor.cursor(), Some("0:5:0"));
    }
}
