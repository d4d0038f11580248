//! Codec for string lists persisted as JSON text columns.
//!
//! Decoding is strict: corrupted stored text surfaces as an error instead of
//! silently collapsing to an empty list. Empty text decodes as the empty list
//! so legacy rows without a value stay readable.

use crate::error::{Error, Result};

pub fn encode(items: &[String]) -> Result<String> {
    serde_json::to_string(items).map_err(Error::from)
}

pub fn decode(raw: &str) -> Result<Vec<String>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(raw)
        .map_err(|e| Error::Internal(format!("corrupted list column: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_ordered_items() {
        let items = vec!["Go".to_string(), "React".to_string(), "Docker".to_string()];
        let encoded = encode(&items).unwrap();
        assert_eq!(decode(&encoded).unwrap(), items);
    }

    #[test]
    fn empty_text_decodes_as_empty_list() {
        assert!(decode("").unwrap().is_empty());
        assert!(decode("   ").unwrap().is_empty());
    }

    #[test]
    fn corrupted_text_is_an_error() {
        assert!(decode("not json").is_err());
        assert!(decode("{\"k\":1}").is_err());
    }
}
