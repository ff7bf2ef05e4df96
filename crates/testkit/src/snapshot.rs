//! Canonical JSON comparison for test assertions.
//!
//! Values are serialized as pretty JSON with object keys sorted, so two
//! captures compare equal exactly when their serialized content does.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;

/// Assert that `actual` and `expected` serialize to the same canonical JSON.
///
/// On mismatch the error names the first differing line and carries both
/// documents.
pub fn assert_json_eq<A: Serialize, E: Serialize>(actual: &A, expected: &E) -> Result<()> {
    let actual = canonical_json(actual)?;
    let expected = canonical_json(expected)?;
    if actual == expected {
        return Ok(());
    }

    let line = actual
        .lines()
        .zip(expected.lines())
        .position(|(a, e)| a != e)
        .unwrap_or_else(|| actual.lines().count().min(expected.lines().count()))
        + 1;
    anyhow::bail!("JSON mismatch at line {line}\n--- expected\n{expected}\n--- actual\n{actual}")
}

/// Serialize `value` as canonical pretty JSON (sorted keys, trailing newline).
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String> {
    let mut value = serde_json::to_value(value).context("capture is not representable as JSON")?;
    sort_keys(&mut value);
    let mut out = serde_json::to_string_pretty(&value).context("canonical JSON formatting failed")?;
    out.push('\n');
    Ok(out)
}

fn sort_keys(value: &mut Value) {
    match value {
        Value::Object(map) => {
            let mut fields: Vec<(String, Value)> = std::mem::take(map).into_iter().collect();
            fields.sort_unstable_by(|(a, _), (b, _)| a.cmp(b));
            for (key, mut field) in fields {
                sort_keys(&mut field);
                map.insert(key, field);
            }
        }
        Value::Array(items) => items.iter_mut().for_each(sort_keys),
        _ => {}
    }
}
