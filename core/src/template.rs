//! URL templates with `{name}` placeholders.
//!
//! # Design
//! The template is scanned once into literal and placeholder segments, so
//! discovering names and rendering never re-parse the source string.
//! Malformed braces are not an error: an unmatched `{` or an empty `{}`
//! is kept as literal text. Values are substituted verbatim, without
//! percent-encoding, so a placeholder may carry a host name or several path
//! segments at once.

use crate::error::ResourceError;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// A parsed URL template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    /// Scan `source` into literal and placeholder segments.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            match after.find(|c: char| c == '{' || c == '}') {
                Some(close) if close > 0 && after[close..].starts_with('}') => {
                    literal.push_str(&rest[..open]);
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Placeholder(after[..close].to_string()));
                    rest = &after[close + 1..];
                }
                _ => {
                    literal.push_str(&rest[..=open]);
                    rest = after;
                }
            }
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The template exactly as it was given.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder names, in order of first appearance.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Substitute every placeholder with the value `value_of` returns for it.
    ///
    /// Fails with `TemplateIncomplete` naming each placeholder that has no
    /// value; nothing is partially rendered.
    pub fn render<'v, F>(&self, value_of: F) -> Result<String, ResourceError>
    where
        F: Fn(&str) -> Option<&'v str>,
    {
        let mut url = String::with_capacity(self.source.len());
        let mut missing: Vec<String> = Vec::new();

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => url.push_str(text),
                Segment::Placeholder(name) => match value_of(name) {
                    Some(value) => url.push_str(value),
                    None if !missing.contains(name) => missing.push(name.clone()),
                    None => {}
                },
            }
        }

        if missing.is_empty() {
            Ok(url)
        } else {
            Err(ResourceError::TemplateIncomplete { missing })
        }
    }
}
