//! Converts upstream LULC statistics payloads into a [`ThematicTable`].
//!
//! The statistics API is not consistent about what it returns. Depending on the
//! endpoint and the district it may answer with a single flat object, a GeoJSON
//! FeatureCollection, an array of flat objects, or any of those encoded as a JSON
//! string. Tables this crate has already serialized are accepted as well, so output can
//! be fed back in. [`RawShape::detect`] classifies the payload once, and all key
//! guessing goes through [`candidate_keys`].

use crate::types::{AreaThematic, AreaValues, CategoryCode, ThematicTable};
use serde_json::{Map, Value};
use tracing::{debug, warn};

pub type JsonObject = Map<String, Value>;

/// Canonical fields pulled out of a raw record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AreaId,
    Name,
    TotalArea,
}

/// Where a record came from. Features use different id and name keys than flat objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Flat,
    Feature,
}

/// Candidate keys for `field`, in priority order.
pub fn candidate_keys(field: Field, kind: RecordKind) -> &'static [&'static str] {
    match (field, kind) {
        (Field::AreaId, RecordKind::Flat) => &["district_code", "state_code", "code", "name"],
        (Field::AreaId, RecordKind::Feature) => &["district_code", "code", "id"],
        (Field::Name, RecordKind::Flat) => &["name", "NAME"],
        (Field::Name, RecordKind::Feature) => &["name", "title"],
        (Field::TotalArea, _) => &["totalarea", "TOTALAREA", "total"],
    }
}

/// The payload shapes the normalizer understands, in detection order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawShape<'a> {
    /// A serialized [`ThematicTable`]: `{"<id>": {"values": {...}, ...}}`, or `{}`.
    Table(&'a JsonObject),
    Object(&'a JsonObject),
    FeatureCollection(&'a [Value]),
    Array(&'a [Value]),
    Text(&'a str),
    Unrecognized,
}

impl<'a> RawShape<'a> {
    pub fn detect(raw: &'a Value) -> Self {
        match raw {
            Value::Object(obj) if is_table(obj) => RawShape::Table(obj),
            Value::Object(obj) => match obj.get("features") {
                Some(Value::Array(features)) => RawShape::FeatureCollection(features),
                Some(other) if is_truthy(other) => RawShape::Unrecognized,
                _ => RawShape::Object(obj),
            },
            Value::Array(items) => RawShape::Array(items),
            Value::String(text) => RawShape::Text(text),
            _ => RawShape::Unrecognized,
        }
    }
}

fn is_table(obj: &JsonObject) -> bool {
    obj.values().all(|entry| {
        entry
            .as_object()
            .and_then(|area| area.get("values"))
            .is_some_and(Value::is_object)
    })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normalizes any supported payload. Unsupported input yields an empty table.
pub fn normalize(raw: &Value) -> ThematicTable {
    let mut table = ThematicTable::new();

    match RawShape::detect(raw) {
        RawShape::Table(obj) => {
            for (id, entry) in obj {
                if let Some(entry) = entry.as_object() {
                    table.insert(id.clone(), table_entry(entry));
                }
            }
        }
        RawShape::Object(obj) => {
            let id = area_id(obj, RecordKind::Flat).unwrap_or_else(|| "area1".to_string());
            table.insert(id, build_area(obj, RecordKind::Flat));
        }
        RawShape::FeatureCollection(features) => {
            let empty = JsonObject::new();
            for (idx, feature) in features.iter().enumerate() {
                let props = feature
                    .get("properties")
                    .and_then(Value::as_object)
                    .unwrap_or(&empty);
                let id = area_id(props, RecordKind::Feature)
                    .unwrap_or_else(|| format!("area{}", idx + 1));
                table.insert(id, build_area(props, RecordKind::Feature));
            }
        }
        RawShape::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                if let Some(obj) = item.as_object() {
                    let id = area_id(obj, RecordKind::Flat)
                        .unwrap_or_else(|| format!("area{}", idx + 1));
                    table.insert(id, build_area(obj, RecordKind::Flat));
                }
            }
        }
        RawShape::Text(text) => return normalize_str(text),
        RawShape::Unrecognized => {
            warn!("No usable LULC data found in response ({})", describe(raw));
            return table;
        }
    }

    debug!("Normalized LULC response into {} area(s)", table.len());
    table
}

/// Parses `text` as JSON and normalizes it. Invalid JSON yields an empty table.
pub fn normalize_str(text: &str) -> ThematicTable {
    match serde_json::from_str::<Value>(text) {
        Ok(parsed) => normalize(&parsed),
        Err(e) => {
            warn!("Could not parse string LULC response: {}", e);
            ThematicTable::new()
        }
    }
}

fn build_area(obj: &JsonObject, kind: RecordKind) -> AreaThematic {
    AreaThematic {
        values: extract_values(obj),
        total_area: lookup(obj, candidate_keys(Field::TotalArea, kind)).map(clean_value),
        name: lookup(obj, candidate_keys(Field::Name, kind)).and_then(text_of),
    }
}

// Entries already in canonical form; values go through the same coercion as raw input.
fn table_entry(entry: &JsonObject) -> AreaThematic {
    let empty = JsonObject::new();
    let values = entry.get("values").and_then(Value::as_object).unwrap_or(&empty);
    AreaThematic {
        values: extract_values(values),
        total_area: lookup(entry, candidate_keys(Field::TotalArea, RecordKind::Flat)).map(clean_value),
        name: entry.get("name").and_then(text_of),
    }
}

/// Reads every category from `obj`, trying `L04`, `l04`, `4` and `04` in that order.
pub fn extract_values(obj: &JsonObject) -> AreaValues {
    let mut values = AreaValues::default();
    for code in CategoryCode::all() {
        let lower = code.key();
        let upper = lower.to_uppercase();
        let bare = code.number().to_string();
        let padded = format!("{:02}", code.number());
        let raw = lookup(obj, &[upper.as_str(), lower.as_str(), bare.as_str(), padded.as_str()]);
        values.set(code, raw.map_or(0.0, clean_value));
    }
    values
}

/// First non-null value among `keys`.
pub fn lookup<'a>(obj: &'a JsonObject, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| obj.get(*key))
        .find(|value| !value.is_null())
}

fn area_id(obj: &JsonObject, kind: RecordKind) -> Option<String> {
    lookup(obj, candidate_keys(Field::AreaId, kind)).map(id_text)
}

/// Renders an identifier value as a table key. Numbers keep their JSON text, except
/// that integral floats drop the fraction (`1028.0` -> `1028`).
pub fn id_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        _ => None,
    }
}

/// Coerces any JSON value into a finite number, defaulting to 0.
///
/// Strings are trimmed and their leading numeric prefix is used, so `"12.5 ha"` reads
/// as 12.5. Arrays are joined with commas before parsing. Objects and booleans are 0.
pub fn clean_value(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_leading_float(s),
        Value::Array(_) => parse_leading_float(&flatten_text(value)),
        Value::Bool(_) | Value::Object(_) => 0.0,
    }
}

fn flatten_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(flatten_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => other.to_string(),
    }
}

/// Longest numeric prefix of the trimmed text, or 0 when there is none.
pub fn parse_leading_float(text: &str) -> f64 {
    let s = text.trim();
    let bytes = s.as_bytes();
    let len = bytes.len();
    let digits_from = |mut i: usize| {
        while i < len && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if end < len && bytes[end] == b'.' {
        let frac_end = digits_from(end + 1);
        let frac_digits = frac_end - (end + 1);
        if mantissa_digits + frac_digits > 0 {
            end = frac_end;
            mantissa_digits += frac_digits;
        }
    }
    if mantissa_digits == 0 {
        return 0.0;
    }

    if end < len && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp = end + 1;
        if exp < len && (bytes[exp] == b'+' || bytes[exp] == b'-') {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end]
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .unwrap_or(0.0)
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object with non-array features",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn code(n: u8) -> CategoryCode {
        CategoryCode::new(n).unwrap()
    }

    #[test]
    fn clean_value_is_total() {
        assert_eq!(clean_value(&json!("  12.5 ")), 12.5);
        assert_eq!(clean_value(&Value::Null), 0.0);
        assert_eq!(clean_value(&json!("abc")), 0.0);
        assert_eq!(clean_value(&json!(7)), 7.0);
        assert_eq!(clean_value(&json!("")), 0.0);
        assert_eq!(clean_value(&json!("   ")), 0.0);
        assert_eq!(clean_value(&json!("12.5ha")), 12.5);
        assert_eq!(clean_value(&json!("-3")), -3.0);
        assert_eq!(clean_value(&json!(".5")), 0.5);
        assert_eq!(clean_value(&json!("1e3")), 1000.0);
        assert_eq!(clean_value(&json!("1e")), 1.0);
        assert_eq!(clean_value(&json!("1e999")), 0.0);
        assert_eq!(clean_value(&json!("-")), 0.0);
        assert_eq!(clean_value(&json!(true)), 0.0);
        assert_eq!(clean_value(&json!({"a": 1})), 0.0);
        assert_eq!(clean_value(&json!([7])), 7.0);
        assert_eq!(clean_value(&json!(["4", 2])), 4.0);
        assert_eq!(clean_value(&json!([])), 0.0);
    }

    #[test]
    fn flat_object_becomes_single_area() {
        let table = normalize(&json!({
            "district_code": "1028",
            "L01": "100",
            "L04": "50",
            "totalarea": "150"
        }));

        assert_eq!(table.len(), 1);
        let area = table.get("1028").unwrap();
        assert_eq!(area.values.get(code(1)), 100.0);
        assert_eq!(area.values.get(code(4)), 50.0);
        assert_eq!(area.values.get(code(2)), 0.0);
        assert_eq!(area.total_area, Some(150.0));
        assert_eq!(area.values.iter().count(), 24);
    }

    #[test]
    fn flat_object_id_precedence_and_default() {
        let table = normalize(&json!({"state_code": "10", "code": "x", "l02": 3}));
        assert!(table.get("10").is_some());

        let table = normalize(&json!({"district_code": null, "code": 1028, "l02": 3}));
        assert!(table.get("1028").is_some());

        let table = normalize(&json!({"l02": 3}));
        let area = table.get("area1").unwrap();
        assert_eq!(area.total_area, None);
        assert_eq!(area.total(), 3.0);
    }

    #[test]
    fn key_variants_prefer_uppercase() {
        let table = normalize(&json!({
            "code": "a",
            "L03": "9",
            "l03": "1",
            "5": 5,
            "06": "6",
            "TOTALAREA": 40,
            "NAME": "Patna"
        }));
        let area = table.get("a").unwrap();
        assert_eq!(area.values.get(code(3)), 9.0);
        assert_eq!(area.values.get(code(5)), 5.0);
        assert_eq!(area.values.get(code(6)), 6.0);
        assert_eq!(area.total_area, Some(40.0));
        assert_eq!(area.name.as_deref(), Some("Patna"));
    }

    #[test]
    fn feature_collection_yields_area_per_feature() {
        let table = normalize(&json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"code": "77", "l09": "40"}},
                {"type": "Feature", "properties": {"id": 5, "title": "North", "L01": 2}},
                {"type": "Feature", "properties": null},
                {"type": "Feature"}
            ]
        }));

        assert_eq!(table.len(), 4);
        let forest = table.get("77").unwrap();
        assert_eq!(forest.values.get(code(9)), 40.0);
        assert_eq!(forest.values.sum(), 40.0);
        assert_eq!(forest.total_area, None);
        assert_eq!(table.get("5").unwrap().name.as_deref(), Some("North"));
        assert!(table.get("area3").is_some());
        assert!(table.get("area4").is_some());
    }

    #[test]
    fn array_skips_non_objects_but_keeps_index() {
        let table = normalize(&json!([
            {"district_code": "1", "l01": 1},
            "noise",
            {"l02": 2}
        ]));
        assert_eq!(table.len(), 2);
        assert!(table.get("1").is_some());
        assert_eq!(table.get("area3").unwrap().values.get(code(2)), 2.0);
    }

    #[test]
    fn malformed_string_yields_empty_table() {
        assert!(normalize(&json!("{not json")).is_empty());
        assert!(normalize_str("{\"L01\": ").is_empty());
    }

    #[test]
    fn unrecognized_shapes_yield_empty_tables() {
        assert!(normalize(&json!(42)).is_empty());
        assert!(normalize(&Value::Null).is_empty());
        assert!(normalize(&json!(false)).is_empty());
        assert!(normalize(&json!({"features": {"bad": true}})).is_empty());
    }

    #[test]
    fn falsy_features_key_is_a_flat_object() {
        let table = normalize(&json!({"features": null, "code": "9", "l01": 1}));
        assert_eq!(table.get("9").unwrap().values.get(code(1)), 1.0);
    }

    #[test]
    fn string_path_matches_direct_path() {
        let inputs = vec![
            json!({"district_code": "1028", "L01": "100", "L04": "50", "totalarea": "150"}),
            json!({"type": "FeatureCollection", "features": [
                {"properties": {"code": "77", "l09": "40"}},
                {"properties": {"l13": 12.25}}
            ]}),
            json!([{"code": 3, "l20": "7"}, {"name": "x", "L24": 1.5}]),
        ];

        for input in inputs {
            let direct = normalize(&input);
            let encoded = Value::String(input.to_string());
            assert_eq!(normalize(&encoded), direct);
            // Doubly encoded strings unwrap one layer at a time.
            let twice = Value::String(encoded.to_string());
            assert_eq!(normalize(&twice), direct);
        }
    }

    #[test]
    fn serialized_table_normalizes_to_itself() {
        let inputs = vec![
            json!({"district_code": "1028", "L01": "100", "L04": "50", "totalarea": "150"}),
            json!({"type": "FeatureCollection", "features": [
                {"properties": {"code": "77", "l09": "40", "title": "North"}},
                {"properties": {"l13": 12.25}}
            ]}),
            json!("{not json"),
        ];

        for input in inputs {
            let table = normalize(&input);
            let text = serde_json::to_string(&table).unwrap();
            assert_eq!(normalize(&Value::String(text.clone())), table);
            assert_eq!(normalize_str(&text), table);
        }

        let table = normalize_str(r#"{"1028": {"values": {"l01": 100, "l04": "50"}, "totalarea": 150}}"#);
        let area = table.get("1028").unwrap();
        assert_eq!(area.values.get(code(1)), 100.0);
        assert_eq!(area.values.get(code(4)), 50.0);
        assert_eq!(area.total_area, Some(150.0));
    }

    #[test]
    fn integral_float_ids_drop_the_fraction() {
        assert_eq!(id_text(&json!(1028.0)), "1028");
        assert_eq!(id_text(&json!(1028)), "1028");
        assert_eq!(id_text(&json!(10.5)), "10.5");

        let table = normalize(&json!([{"code": 935.0, "l01": 1}]));
        assert!(table.get("935").is_some());
    }

    #[test]
    fn every_area_has_all_categories() {
        let table = normalize(&json!([{"l01": 1}, {"L24": 2}, {}]));
        for (_, area) in table.iter() {
            let json = serde_json::to_value(area.values).unwrap();
            assert_eq!(json.as_object().unwrap().len(), 24);
        }
    }

    #[test]
    fn has_data_requires_strictly_positive_value() {
        let table = normalize(&json!([{"l01": 0, "l02": "-4"}, {"l05": "0.01"}]));
        assert!(!table.get("area1").unwrap().values.has_data());
        assert!(table.get("area2").unwrap().values.has_data());
    }
}
