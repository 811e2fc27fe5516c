//! Multipart form containers
//!
//! An ordered list of named entries, each either a value or a file. The
//! transport turns it into a multipart body; here it is only normalized.

use crate::payload::Payload;
use crate::scalar::{is_likely_large_identifier, to_decimal_string};

/// A binary attachment
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    pub file_name: String,
    /// MIME type, e.g. `image/jpeg`
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FilePart {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormValue {
    Value(Payload),
    File(FilePart),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    entries: Vec<(String, FormValue)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value entry; duplicate names are kept in order
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<Payload>) -> &mut Self {
        self.entries
            .push((name.into(), FormValue::Value(value.into())));
        self
    }

    pub fn append_file(&mut self, name: impl Into<String>, file: FilePart) -> &mut Self {
        self.entries.push((name.into(), FormValue::File(file)));
        self
    }

    pub fn entries(&self) -> &[(String, FormValue)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, FormValue)> {
        self.entries
    }

    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rebuild the form for the wire
    ///
    /// Null entries are dropped. Values that look like large identifiers are
    /// replaced by their decimal string; files and all other values are kept
    /// as they are.
    pub fn encode(self) -> FormData {
        let entries = self
            .entries
            .into_iter()
            .filter_map(|(name, value)| match value {
                FormValue::Value(Payload::Null) => None,
                FormValue::Value(v) if is_likely_large_identifier(&v) => {
                    Some((name, FormValue::Value(to_decimal_string(v))))
                }
                other => Some((name, other)),
            })
            .collect();
        FormData { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigInt;

    #[test]
    fn test_encode_stringifies_large_identifiers_only() {
        let mut form = FormData::new();
        form.append("categoryId", BigInt::from(9007199254740993i64))
            .append("price", Payload::Number(12.5))
            .append("originAreaId", Payload::Number(1e17));
        let encoded = form.encode();
        assert_eq!(
            encoded.get("categoryId"),
            Some(&FormValue::Value(Payload::from("9007199254740993")))
        );
        assert_eq!(
            encoded.get("price"),
            Some(&FormValue::Value(Payload::Number(12.5)))
        );
        assert_eq!(
            encoded.get("originAreaId"),
            Some(&FormValue::Value(Payload::from("100000000000000000")))
        );
    }

    #[test]
    fn test_encode_drops_null_entries_and_keeps_order() {
        let mut form = FormData::new();
        form.append("a", "1")
            .append("skip", Payload::Null)
            .append_file("file", FilePart::new("a.png", vec![1, 2, 3]))
            .append("a", "2");
        let encoded = form.encode();
        let names: Vec<&str> = encoded.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, ["a", "file", "a"]);
    }
}
