//! Canonical JSON re-serialization for webhook signing.
//!
//! The FaceVault server signs the canonical form of a payload, not the
//! wire bytes: object keys sorted lexicographically at every nesting
//! level, `,` and `:` separators with no surrounding whitespace, array
//! order preserved. The byte stream produced here must match the
//! server's serializer exactly or signatures will never agree.

use serde_json::Value;

/// Serializes a parsed JSON value into its canonical byte form.
pub(crate) fn canonical_json(value: &Value) -> Vec<u8> {
    let mut out = Vec::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut Vec<u8>) {
    match value {
        Value::Object(map) => {
            // Sort keys explicitly: serde_json's own map order is a
            // feature flag away from insertion order (`preserve_order`),
            // and feature unification in a host crate must not change
            // the signed bytes.
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push(b'{');
            for (i, (key, child)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_token(key, out);
                out.push(b':');
                write_value(child, out);
            }
            out.push(b'}');
        }
        Value::Array(items) => {
            out.push(b'[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(b',');
                }
                write_value(item, out);
            }
            out.push(b']');
        }
        scalar => write_token(scalar, out),
    }
}

/// Null, booleans, numbers and strings already have a single compact
/// encoding in serde_json.
fn write_token<T: serde::Serialize>(token: &T, out: &mut Vec<u8>) {
    let bytes = serde_json::to_vec(token).expect("scalar JSON tokens always serialize");
    out.extend_from_slice(&bytes);
}
