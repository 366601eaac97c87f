//! Record fragments: splitting the array body and reading/replacing fields.

use std::ops::Range;

use tracing::warn;

use super::syntax::{self, Snippet};
use crate::error::Result;

/// A top-level `key: value` property of an object literal.
///
/// Offsets are relative to the fragment text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub key: String,
    /// From the first byte of the key through the end of the value
    pub span: Range<usize>,
    pub value: Range<usize>,
    /// Decoded value, when it is a plain string literal
    pub string: Option<String>,
}

/// One object literal from the records array, with its top-level properties.
#[derive(Debug, Clone)]
pub struct Record<'a> {
    text: &'a str,
    properties: Vec<Property>,
}

impl<'a> Record<'a> {
    /// Parses the top-level properties of `text`, which should be a complete
    /// `{ ... }` literal. Anything that is not a `key: value` pair (spreads,
    /// shorthand keys, methods, computed keys) is skipped.
    pub fn parse(text: &'a str) -> Result<Self> {
        let snippet = Snippet::object(text)?;
        let source = snippet.source();
        let mut properties = Vec::new();

        if let Some(object) = snippet.expression().filter(|n| n.kind() == syntax::OBJECT) {
            let mut cursor = object.walk();
            for pair in object
                .named_children(&mut cursor)
                .filter(|n| n.kind() == syntax::PAIR)
            {
                let (Some(key), Some(value)) = (
                    pair.child_by_field_name("key"),
                    pair.child_by_field_name("value"),
                ) else {
                    continue;
                };
                let Some(name) = syntax::property_key(key, source) else {
                    continue;
                };
                properties.push(Property {
                    key: name,
                    span: snippet.range(pair),
                    value: snippet.range(value),
                    string: syntax::string_value(value, source),
                });
            }
        }

        Ok(Self { text, properties })
    }

    /// First top-level property named `key`.
    pub fn property(&self, key: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.key == key)
    }

    /// Raw source text of the value of `key`.
    pub fn raw_value(&self, key: &str) -> Option<&'a str> {
        self.property(key)
            .and_then(|p| self.text.get(p.value.clone()))
    }

    /// Decoded value of `key` when it is a plain string literal.
    pub fn string_value(&self, key: &str) -> Option<String> {
        self.property(key).and_then(|p| p.string.clone())
    }

    /// Replaces the whole `key: value` property with `replacement`.
    ///
    /// Returns `None` when the record has no such property.
    pub fn replace_property(&self, key: &str, replacement: &str) -> Option<String> {
        let prop = self.property(key)?;
        let before = self.text.get(..prop.span.start)?;
        let after = self.text.get(prop.span.end..)?;

        let mut out = String::with_capacity(self.text.len() + replacement.len());
        out.push_str(before);
        out.push_str(replacement);
        out.push_str(after);
        Some(out)
    }
}

/// Enumerates the object-literal fragments of an array body in source order.
///
/// Nesting inside a fragment may be arbitrarily deep. Comments are ignored;
/// other elements that are not object literals are skipped with a warning.
pub fn split_records(region_body: &str) -> Result<Vec<&str>> {
    let snippet = Snippet::array_body(region_body)?;
    let Some(array) = snippet.expression().filter(|n| n.kind() == syntax::ARRAY) else {
        warn!("records array body did not parse as an array");
        return Ok(Vec::new());
    };

    let mut fragments = Vec::new();
    let mut cursor = array.walk();
    for element in array.named_children(&mut cursor) {
        let Some(text) = region_body.get(snippet.range(element)) else {
            continue;
        };
        match element.kind() {
            syntax::COMMENT => {}
            syntax::OBJECT => fragments.push(text),
            kind => warn!(kind, element = text, "skipping non-object element in records array"),
        }
    }

    Ok(fragments)
}

/// Looks up `field_name: 'value'` (or `"value"`) among the fragment's
/// top-level properties.
pub fn extract_field(fragment: &str, field_name: &str) -> Result<Option<String>> {
    Ok(Record::parse(fragment)?.string_value(field_name))
}

/// Field name of the image list replaced on every kept record.
pub const IMAGES_FIELD: &str = "images";

/// Substitutes the fragment's `images` property with `new_field_text`.
///
/// A fragment without an `images` property passes through unchanged.
pub fn replace_image_field(fragment: &str, new_field_text: &str) -> Result<String> {
    Ok(Record::parse(fragment)?
        .replace_property(IMAGES_FIELD, new_field_text)
        .unwrap_or_else(|| fragment.to_string()))
}
