//! Canonical payload serialization

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SigningError;

/// Canonicalize a serializable payload.
///
/// # Rules
///
/// - Mapping keys sorted byte-wise, entries rendered `key=value` joined
///   with `&`
/// - Sequences preserve order: `[a,b,c]`
/// - Scalars render as raw tokens (see the crate docs for the pinned
///   renderings)
///
/// The output is exactly the message the remote verifier recomputes, so the
/// grammar performs no quoting: a string value containing a literal `&` or
/// `=` is rendered as-is.
///
/// # Errors
///
/// Returns [`SigningError::InvalidPayloadType`] if the value cannot be
/// converted to a payload tree (non-string map keys, serializer failures).
///
/// # Example
///
/// ```rust
/// use vault_signing::canonicalize;
///
/// let value = serde_json::json!({"z": 1, "a": 2});
/// let canonical = canonicalize(&value).unwrap();
/// assert_eq!(canonical, "a=2&z=1");
/// ```
pub fn canonicalize<T: Serialize>(payload: &T) -> Result<String, SigningError> {
    let value = serde_json::to_value(payload)?;
    canonicalize_value(&value)
}

/// Canonicalize a payload already held as a `serde_json::Value`
pub fn canonicalize_value(value: &Value) -> Result<String, SigningError> {
    let mut output = String::new();
    write_canonical_value(&mut output, value)?;
    Ok(output)
}

/// Write one payload node in canonical form
fn write_canonical_value(output: &mut String, value: &Value) -> Result<(), SigningError> {
    match value {
        Value::Null => {
            output.push_str("null");
        }
        Value::Bool(b) => {
            output.push_str(if *b { "true" } else { "false" });
        }
        Value::Number(n) => {
            write_canonical_number(output, n)?;
        }
        Value::String(s) => {
            output.push_str(s);
        }
        Value::Array(seq) => {
            output.push('[');
            for (i, item) in seq.iter().enumerate() {
                if i > 0 {
                    output.push(',');
                }
                write_canonical_value(output, item)?;
            }
            output.push(']');
        }
        Value::Object(mapping) => {
            write_canonical_mapping(output, mapping)?;
        }
    }
    Ok(())
}

/// Write a mapping with sorted keys, `key=value` entries joined by `&`
fn write_canonical_mapping(
    output: &mut String,
    mapping: &Map<String, Value>,
) -> Result<(), SigningError> {
    // Sort keys byte-wise, independent of insertion order and locale
    let mut keys: Vec<&String> = mapping.keys().collect();
    keys.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));

    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            output.push('&');
        }

        output.push_str(key);
        output.push('=');

        if let Some(value) = mapping.get(*key) {
            write_canonical_value(output, value)?;
        }
    }

    Ok(())
}

/// Write a number using the pinned renderings: base-10 integers, shortest
/// round-trip `Display` for floats (never scientific notation)
fn write_canonical_number(
    output: &mut String,
    number: &serde_json::Number,
) -> Result<(), SigningError> {
    if number.is_i64() || number.is_u64() {
        output.push_str(&number.to_string());
        return Ok(());
    }

    match number.as_f64() {
        Some(f) => {
            // std Display prints the shortest round-trip digits, no exponent
            output.push_str(&f.to_string());
            Ok(())
        }
        None => Err(SigningError::InvalidPayloadType(format!(
            "unrepresentable number: {}",
            number
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sorted_keys() {
        let value = json!({"z": 1, "a": 2, "m": 3});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "a=2&m=3&z=1");
    }

    #[test]
    fn test_mapping_has_no_surrounding_delimiters() {
        let value = json!({"only": "entry"});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "only=entry");
    }

    #[test]
    fn test_nested_mappings_sorted() {
        let value = json!({
            "b": {"y": 1, "x": 2},
            "a": {"z": 3, "w": 4}
        });
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "a=w=4&z=3&b=x=2&y=1");
    }

    #[test]
    fn test_sequences_preserve_order() {
        let value = json!([3, 1, 2]);
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "[3,1,2]");
    }

    #[test]
    fn test_mapping_inside_sequence() {
        let value = json!({"items": [1, {"n": 2, "m": 1}]});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "items=[1,m=1&n=2]");
    }

    #[test]
    fn test_strings_render_raw() {
        let value = json!({"note": "hello world"});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "note=hello world");
    }

    #[test]
    fn test_boolean_tokens() {
        let value = json!({"yes": true, "no": false});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "no=false&yes=true");
    }

    #[test]
    fn test_null_token() {
        let value = json!({"empty": null});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "empty=null");
    }

    #[test]
    fn test_integers() {
        let value = json!({"negative": -42, "zero": 0, "positive": 42});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "negative=-42&positive=42&zero=0");
    }

    #[test]
    fn test_floats_never_scientific() {
        let value = json!({"rate": 0.5, "big": 1e20});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "big=100000000000000000000&rate=0.5");
    }

    #[test]
    fn test_integral_float_drops_fraction() {
        let value = json!({"r": 2.0});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "r=2");
    }

    #[test]
    fn test_empty_mapping_is_empty_string() {
        let value = json!({});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "");
    }

    #[test]
    fn test_empty_sequence() {
        let value = json!({"tags": []});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "tags=[]");
    }

    #[test]
    fn test_insertion_order_irrelevant() {
        let v1 = json!({"a": 1, "b": 2});

        let mut map = Map::new();
        map.insert("b".to_string(), json!(2));
        map.insert("a".to_string(), json!(1));
        let v2 = Value::Object(map);

        assert_eq!(
            canonicalize(&v1).unwrap(),
            canonicalize(&v2).unwrap()
        );
    }

    #[test]
    fn test_unicode_key_sorting_is_bytewise() {
        // 'a' (0x61) < 'z' (0x7a) < 'é' (0xc3 0xa9 in UTF-8)
        let value = json!({"é": 1, "a": 2, "z": 3});
        let canonical = canonicalize(&value).unwrap();
        assert_eq!(canonical, "a=2&z=3&é=1");
    }

    #[test]
    fn test_serializable_struct_accepted() {
        #[derive(serde::Serialize)]
        struct Payload {
            client_id: String,
            timestamp: i64,
        }

        let payload = Payload {
            client_id: "abc".to_string(),
            timestamp: 1000,
        };

        let canonical = canonicalize(&payload).unwrap();
        assert_eq!(canonical, "client_id=abc&timestamp=1000");
    }

    #[test]
    fn test_non_string_map_keys_rejected() {
        use std::collections::BTreeMap;

        let mut map: BTreeMap<Vec<u8>, i32> = BTreeMap::new();
        map.insert(vec![1, 2], 3);

        assert!(matches!(
            canonicalize(&map),
            Err(SigningError::InvalidPayloadType(_))
        ));
    }
}
