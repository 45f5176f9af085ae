//! Input payloads
//!
//! Reads the alias-pair payload and the function-map payload, in that order,
//! from one JSON stream:
//!
//! ```text
//! [["a", "x"], [".b", ".q"], [null, "ignored"]]
//! {"a.b.c": 1, "foo.bar": 2}
//! ```

use crate::error::InputError;
use aliasmap_path::{AliasPair, OriginalKey};
use serde_json::{Deserializer, Value};
use std::io::Read;
use tracing::{debug, trace, warn};

/// Parsed inputs, ready for expansion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payloads {
    /// Alias pairs, in payload order
    pub aliases: Vec<AliasPair>,

    /// Function-map keys, in map iteration order
    pub keys: Vec<OriginalKey>,
}

/// Read both payloads from `reader`
///
/// Content after the second payload is not read.
///
/// # Errors
/// Returns [`InputError`] if either payload is missing or malformed.
pub fn read_payloads<R: Read>(reader: R) -> Result<Payloads, InputError> {
    let mut values = Deserializer::from_reader(reader).into_iter::<Value>();

    let alias_payload = values
        .next()
        .ok_or(InputError::MissingPayload("alias pairs"))??;
    let function_map = values
        .next()
        .ok_or(InputError::MissingPayload("function map"))??;

    let payloads = Payloads {
        aliases: parse_alias_pairs(&alias_payload)?,
        keys: parse_function_map(&function_map)?,
    };
    debug!(
        aliases = payloads.aliases.len(),
        keys = payloads.keys.len(),
        "payloads parsed"
    );
    Ok(payloads)
}

/// Parse `[[pattern, replacement], ...]`
///
/// Entries whose pattern or replacement is absent or null are discarded, as
/// are entries with an empty pattern.
///
/// # Errors
/// Returns [`InputError`] if the payload or an entry is not an array, or if
/// a present element is neither a string nor null.
pub fn parse_alias_pairs(payload: &Value) -> Result<Vec<AliasPair>, InputError> {
    let entries = payload
        .as_array()
        .ok_or_else(|| InputError::AliasPayloadNotArray(json_kind(payload)))?;

    let mut aliases = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let fields = entry
            .as_array()
            .ok_or_else(|| InputError::AliasEntryNotArray {
                index,
                found: json_kind(entry),
            })?;

        let element = |position: usize| fields.get(position).filter(|value| !value.is_null());
        let (Some(pattern), Some(replacement)) = (element(0), element(1)) else {
            trace!(index, "discarding alias entry with null element");
            continue;
        };

        let pattern = expect_string(pattern, index, 0)?;
        let replacement = expect_string(replacement, index, 1)?;
        match AliasPair::new(pattern, replacement) {
            Ok(alias) => aliases.push(alias),
            Err(err) => warn!(index, %err, "discarding alias entry"),
        }
    }

    Ok(aliases)
}

/// Parse `{key: any, ...}` into original keys; values are ignored
///
/// # Errors
/// Returns [`InputError::FunctionMapNotObject`] if the payload is not an
/// object.
pub fn parse_function_map(payload: &Value) -> Result<Vec<OriginalKey>, InputError> {
    let map = payload
        .as_object()
        .ok_or_else(|| InputError::FunctionMapNotObject(json_kind(payload)))?;
    Ok(map.keys().map(|key| OriginalKey::new(key.as_str())).collect())
}

fn expect_string(value: &Value, index: usize, position: usize) -> Result<&str, InputError> {
    value.as_str().ok_or_else(|| InputError::AliasElementNotString {
        index,
        position,
        found: json_kind(value),
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn alias(pattern: &str, replacement: &str) -> AliasPair {
        AliasPair::new(pattern, replacement).unwrap()
    }

    #[test]
    fn input_reads_two_payloads() {
        let stream = r#"[["a", "x"]] {"a.b.c": null}"#;
        let payloads = read_payloads(stream.as_bytes()).unwrap();

        assert_eq!(payloads.aliases, vec![alias("a", "x")]);
        assert_eq!(payloads.keys, vec![OriginalKey::new("a.b.c")]);
    }

    #[test]
    fn input_payloads_on_separate_lines() {
        let stream = "[[\".b\", \".q\"]]\n{\"a.b\": {\"id\": 7}}\n";
        let payloads = read_payloads(stream.as_bytes()).unwrap();

        assert_eq!(payloads.aliases, vec![alias(".b", ".q")]);
        assert_eq!(payloads.keys, vec![OriginalKey::new("a.b")]);
    }

    #[test]
    fn input_missing_function_map() {
        let result = read_payloads(r#"[["a", "x"]]"#.as_bytes());
        assert!(matches!(result, Err(InputError::MissingPayload("function map"))));
    }

    #[test]
    fn input_empty_stream() {
        let result = read_payloads("".as_bytes());
        assert!(matches!(result, Err(InputError::MissingPayload("alias pairs"))));
    }

    #[test]
    fn input_invalid_json() {
        let result = read_payloads("[[\"a\", ".as_bytes());
        assert!(matches!(result, Err(InputError::Json(_))));
    }

    #[test]
    fn alias_pairs_discard_null_and_absent_elements() {
        let payload = json!([["a", "x"], [null, "y"], ["b", null], ["c"], [], ["d", "z"]]);
        let aliases = parse_alias_pairs(&payload).unwrap();

        assert_eq!(aliases, vec![alias("a", "x"), alias("d", "z")]);
    }

    #[test]
    fn alias_pairs_null_check_precedes_type_check() {
        let payload = json!([[42, null]]);
        assert!(parse_alias_pairs(&payload).unwrap().is_empty());
    }

    #[test]
    fn alias_pairs_discard_empty_pattern() {
        let payload = json!([["", "x"], ["a", ""]]);
        assert_eq!(parse_alias_pairs(&payload).unwrap(), vec![alias("a", "")]);
    }

    #[test]
    fn alias_pairs_extra_elements_ignored() {
        let payload = json!([["a", "x", "extra"]]);
        assert_eq!(parse_alias_pairs(&payload).unwrap(), vec![alias("a", "x")]);
    }

    #[test]
    fn alias_pairs_reject_non_string_element() {
        let payload = json!([["a", "x"], ["b", 3]]);
        let err = parse_alias_pairs(&payload).unwrap_err();

        assert!(matches!(
            err,
            InputError::AliasElementNotString { index: 1, position: 1, found: "number" }
        ));
    }

    #[test]
    fn alias_pairs_reject_non_array_entry() {
        let payload = json!([{"a": "x"}]);
        assert!(matches!(
            parse_alias_pairs(&payload),
            Err(InputError::AliasEntryNotArray { index: 0, found: "object" })
        ));
    }

    #[test]
    fn alias_pairs_reject_non_array_payload() {
        assert!(matches!(
            parse_alias_pairs(&json!({"a": "x"})),
            Err(InputError::AliasPayloadNotArray("object"))
        ));
    }

    #[test]
    fn function_map_keys_in_sorted_order() {
        let payload = json!({"z.a": 1, "a.b": 2, "m": 3});
        let keys = parse_function_map(&payload).unwrap();

        assert_eq!(
            keys,
            vec![OriginalKey::new("a.b"), OriginalKey::new("m"), OriginalKey::new("z.a")]
        );
    }

    #[test]
    fn function_map_rejects_array() {
        assert!(matches!(
            parse_function_map(&json!(["a.b"])),
            Err(InputError::FunctionMapNotObject("array"))
        ));
    }
}
