//! Lenient field decoders
//!
//! The backend stores form strings as-is or coerces them to numbers
//! depending on its schema, and older documents may lack fields or hold
//! nulls. Every displayed field decodes to text; nothing here fails on content.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

/// String, number, bool or null, kept as text (null becomes empty)
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Loose::deserialize(deserializer)? {
        Loose::Text(s) => s,
        Loose::Int(i) => i.to_string(),
        Loose::Float(f) => f.to_string(),
        Loose::Bool(b) => b.to_string(),
        Loose::Null => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(default, deserialize_with = "text")]
        contact: String,
        #[serde(default, deserialize_with = "text")]
        price: String,
    }

    #[test]
    fn test_keeps_strings_verbatim() {
        let s: Sample = serde_json::from_str(r#"{"contact":"0712345678","price":"150.00"}"#).unwrap();
        assert_eq!(s.contact, "0712345678");
        assert_eq!(s.price, "150.00");
    }

    #[test]
    fn test_accepts_numbers() {
        let s: Sample = serde_json::from_str(r#"{"contact":712345678,"price":99.5}"#).unwrap();
        assert_eq!(s.contact, "712345678");
        assert_eq!(s.price, "99.5");
    }

    #[test]
    fn test_null_and_missing_become_empty() {
        let s: Sample = serde_json::from_str(r#"{"price":null}"#).unwrap();
        assert_eq!(s.contact, "");
        assert_eq!(s.price, "");
    }

    #[test]
    fn test_non_numeric_price_is_kept() {
        let s: Sample = serde_json::from_str(r#"{"contact":"1","price":"cheap"}"#).unwrap();
        assert_eq!(s.price, "cheap");
    }
}
