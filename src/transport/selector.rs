//! Selection of nested elements from a decoded response, e.g. `data.result.data.*`.

use serde_json::Value;
use std::str::FromStr;

/// Rows of an account search.
pub const ACCOUNT_ROWS: &str = "data.result.data.*";

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid selector \"{0}\": path segments may not be empty")]
pub struct InvalidSelector(String);

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Member of an object, or index of an array.
    Key(String),
    /// Every element of an array, or every value of an object.
    Any,
}

/// A dot-separated path into a JSON document. `*` matches every child.
///
/// A path which does not exist in the document selects nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector(Vec<Segment>);

impl FromStr for Selector {
    type Err = InvalidSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split('.')
            .map(|segment| match segment {
                "" => Err(InvalidSelector(s.to_string())),
                "*" => Ok(Segment::Any),
                key => Ok(Segment::Key(key.to_string())),
            })
            .collect::<Result<_, _>>()
            .map(Selector)
    }
}

impl Selector {
    /// Rows of an account search, see [ACCOUNT_ROWS].
    pub fn account_rows() -> Self {
        Self(vec![
            Segment::Key("data".to_string()),
            Segment::Key("result".to_string()),
            Segment::Key("data".to_string()),
            Segment::Any,
        ])
    }

    /// Collect every element of `document` matched by this selector, in document order.
    pub fn select(&self, document: Value) -> Vec<Value> {
        let mut rows = Vec::new();
        collect(document, &self.0, &mut rows);
        rows
    }
}

fn collect(value: Value, segments: &[Segment], rows: &mut Vec<Value>) {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => {
            rows.push(value);
            return;
        }
    };
    match (head, value) {
        (Segment::Any, Value::Array(items)) => {
            for item in items {
                collect(item, rest, rows)
            }
        }
        (Segment::Any, Value::Object(map)) => {
            for (_, item) in map {
                collect(item, rest, rows)
            }
        }
        (Segment::Key(key), Value::Object(mut map)) => {
            if let Some(item) = map.remove(key) {
                collect(item, rest, rows)
            }
        }
        (Segment::Key(key), Value::Array(mut items)) => {
            if let Some(i) = key.parse::<usize>().ok().filter(|i| *i < items.len()) {
                collect(items.swap_remove(i), rest, rows)
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    #[test]
    fn test_account_rows_matches_constant() {
        assert_eq!(Selector::account_rows(), ACCOUNT_ROWS.parse().unwrap());
    }

    #[rstest]
    #[case("")]
    #[case("data..result")]
    #[case(".data")]
    fn test_reject_empty_segment(#[case] s: &str) {
        assert!(s.parse::<Selector>().is_err())
    }

    #[test]
    fn test_select_rows() {
        let document = json!({
            "ok": true,
            "data": {"result": {"data": [{"username": "bob"}, {"username": "alice"}]}}
        });
        let rows = Selector::account_rows().select(document);
        assert_eq!(rows, vec![json!({"username": "bob"}), json!({"username": "alice"})]);
    }

    #[test]
    fn test_wildcard_over_object_values() {
        let document = json!({"data": {"result": {"data": {"12": {"id": 12}, "7": {"id": 7}}}}});
        let rows = Selector::account_rows().select(document);
        assert_eq!(rows, vec![json!({"id": 12}), json!({"id": 7})]);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({"data": null}))]
    #[case(json!({"data": {"result": "nothing"}}))]
    #[case(json!([]))]
    #[case(json!(null))]
    fn test_missing_path_selects_nothing(#[case] document: Value) {
        assert!(Selector::account_rows().select(document).is_empty())
    }

    #[test]
    fn test_array_index() {
        let selector: Selector = "rows.1.name".parse().unwrap();
        let document = json!({"rows": [{"name": "a"}, {"name": "b"}, {"name": "c"}]});
        assert_eq!(selector.select(document), vec![json!("b")]);
    }
}
