use itertools::Itertools;
use serde::Serialize;
use serde_json::{Map, Value};

/// Renders any serializable value as an indented `key: value` tree,
/// keeping the field order of the value.
pub fn render_text<T: Serialize>(value: &T) -> serde_json::Result<String> {
    Ok(match serde_json::to_value(value)? {
        Value::Object(map) => render_object(&map, 0),
        other => render_scalar(&other),
    })
}

fn render_object(map: &Map<String, Value>, depth: usize) -> String {
    let indent = "  ".repeat(depth);

    map.iter()
        .map(|(key, value)| match value {
            Value::Object(nested) => {
                format!("{}{}:\n{}", indent, key, render_object(nested, depth + 1))
            }
            _ => format!("{}{}: {}", indent, key, render_scalar(value)),
        })
        .join("\n")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::Number(number) => number
            .as_f64()
            .map(|n| format!("{:.3}", n))
            .unwrap_or_else(|| number.to_string()),
        Value::String(text) => text.clone(),
        // Non-finite numbers serialize as null.
        Value::Null => "n/a".to_owned(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod render_text_tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_nested_groups_indented() {
        let text = render_text(&json!({
            "wind": { "speed": 12.5, "direction_from": 270.0 },
            "energy": { "trend": "stable" }
        }))
        .unwrap();

        assert_eq!(
            text,
            "wind:\n  speed: 12.500\n  direction_from: 270.000\nenergy:\n  trend: stable"
        );
    }

    #[test]
    fn renders_null_as_not_available() {
        assert_eq!(render_text(&json!({ "gust_factor": null })).unwrap(), "gust_factor: n/a");
    }

    #[test]
    fn renders_scalars_on_their_own() {
        assert_eq!(render_text(&2.5).unwrap(), "2.500");
    }
}
