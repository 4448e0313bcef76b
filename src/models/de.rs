//! Lenient field decoders for fullnode JSON.
//!
//! The REST API renders `u64`/`u128` as decimal strings and smaller integers
//! as JSON numbers, and `vector<u8>` as `0x`-prefixed hex. Move `String`
//! fields arrive verbatim and need no decoder.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    String(String),
}

/// Integer given either as a JSON number or a decimal string.
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u64>,
{
    let raw = match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => n,
        NumberOrString::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("`{s}` is not an unsigned integer")))?,
    };
    T::try_from(raw).map_err(|_| D::Error::custom(format!("integer {raw} out of range")))
}

/// Unsigned amount kept verbatim as a decimal string, no unit conversion.
pub fn decimal<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(s)
        }
        NumberOrString::String(s) => Err(D::Error::custom(format!(
            "`{s}` is not a decimal amount"
        ))),
    }
}

/// Identifier rendered as a string whatever its on-chain integer width.
pub fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::String(s) => Ok(s),
    }
}

/// `vector<u8>` holding UTF-8 text. Bytes that are not UTF-8 keep their hex form.
pub fn utf8_bytes<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let Some(digits) = raw.strip_prefix("0x") else {
        return Err(D::Error::custom(format!("`{raw}` is not hex-encoded bytes")));
    };
    let bytes = hex::decode(digits)
        .map_err(|err| D::Error::custom(format!("`{raw}` is not hex-encoded bytes: {err}")))?;
    Ok(String::from_utf8(bytes).unwrap_or(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(deserialize_with = "integer")]
        small: u8,
        #[serde(deserialize_with = "integer")]
        wide: u64,
        #[serde(deserialize_with = "decimal")]
        amount: String,
        #[serde(deserialize_with = "utf8_bytes")]
        name: String,
        note: String,
    }

    #[test]
    fn accepts_numbers_and_strings() {
        let record: Record = serde_json::from_value(json!({
            "small": 80,
            "wide": "1700000000",
            "amount": "500",
            "name": "0x536c656570",
            "note": "0x4142",
        }))
        .unwrap();
        assert_eq!(record.small, 80);
        assert_eq!(record.wide, 1_700_000_000);
        assert_eq!(record.amount, "500");
        assert_eq!(record.name, "Sleep");
        assert_eq!(record.note, "0x4142");
    }

    #[test]
    fn rejects_out_of_range_and_garbage() {
        let too_big = json!({"small": 300, "wide": 1, "amount": "1", "name": "0x", "note": ""});
        assert!(serde_json::from_value::<Record>(too_big).is_err());

        let bad_amount = json!({"small": 1, "wide": 1, "amount": "5.0", "name": "0x", "note": ""});
        assert!(serde_json::from_value::<Record>(bad_amount).is_err());

        let plain_bytes = json!({"small": 1, "wide": 1, "amount": "1", "name": "sleep", "note": ""});
        assert!(serde_json::from_value::<Record>(plain_bytes).is_err());
    }

    #[test]
    fn non_utf8_bytes_keep_hex_form() {
        let record: Record = serde_json::from_value(json!({
            "small": 1,
            "wide": 1,
            "amount": "1",
            "name": "0xff00",
            "note": "",
        }))
        .unwrap();
        assert_eq!(record.name, "0xff00");
    }
}
