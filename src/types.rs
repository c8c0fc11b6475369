use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One of the 24 fixed LULC classes, `l01`..`l24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryCode(u8);

impl CategoryCode {
    pub const COUNT: usize = 24;

    /// Crop land, the initial selection for percentage shading.
    pub const CROP_LAND: CategoryCode = CategoryCode(4);

    pub fn new(number: u8) -> Option<Self> {
        if (1..=Self::COUNT as u8).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Zero-based position, `l01` -> 0.
    pub fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// All codes in code order.
    pub fn all() -> impl Iterator<Item = CategoryCode> {
        (1..=Self::COUNT as u8).map(CategoryCode)
    }

    /// Lowercase key as used in normalized output, e.g. `l04`.
    pub fn key(self) -> String {
        format!("l{:02}", self.0)
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "l{:02}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCategoryError(pub String);

impl fmt::Display for ParseCategoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not a LULC category code: {:?}", self.0)
    }
}

impl std::error::Error for ParseCategoryError {}

impl FromStr for CategoryCode {
    type Err = ParseCategoryError;

    /// Accepts `l04`, `L04` and bare `04` / `4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('l')
            .or_else(|| trimmed.strip_prefix('L'))
            .unwrap_or(trimmed);
        if digits.is_empty() || digits.len() > 2 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseCategoryError(s.to_string()));
        }
        digits
            .parse::<u8>()
            .ok()
            .and_then(CategoryCode::new)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

impl Serialize for CategoryCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategoryCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Per-category magnitudes for one area. Every category is always present.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct AreaValues([f64; CategoryCode::COUNT]);

impl AreaValues {
    pub fn get(&self, code: CategoryCode) -> f64 {
        self.0[code.index()]
    }

    pub fn set(&mut self, code: CategoryCode, value: f64) {
        self.0[code.index()] = value;
    }

    /// `(code, value)` pairs in code order.
    pub fn iter(&self) -> impl Iterator<Item = (CategoryCode, f64)> + '_ {
        CategoryCode::all().map(move |code| (code, self.get(code)))
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// True when at least one category is strictly positive.
    pub fn has_data(&self) -> bool {
        self.0.iter().any(|v| *v > 0.0)
    }
}

impl From<BTreeMap<String, f64>> for AreaValues {
    fn from(map: BTreeMap<String, f64>) -> Self {
        let mut values = AreaValues::default();
        for (key, value) in map {
            if let Ok(code) = key.parse::<CategoryCode>() {
                values.set(code, if value.is_finite() { value } else { 0.0 });
            }
        }
        values
    }
}

impl From<AreaValues> for BTreeMap<String, f64> {
    fn from(values: AreaValues) -> Self {
        values.iter().map(|(code, v)| (code.key(), v)).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AreaThematic {
    pub values: AreaValues,
    #[serde(rename = "totalarea", default, skip_serializing_if = "Option::is_none")]
    pub total_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl AreaThematic {
    /// Reported total, or the sum of all category values when none was reported.
    pub fn total(&self) -> f64 {
        self.total_area.unwrap_or_else(|| self.values.sum())
    }
}

/// Area id -> thematic breakdown, rebuilt on every fetch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThematicTable(BTreeMap<String, AreaThematic>);

impl ThematicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, area: AreaThematic) {
        self.0.insert(id.into(), area);
    }

    pub fn get(&self, id: &str) -> Option<&AreaThematic> {
        self.0.get(id)
    }

    /// Entry together with its stored key.
    pub fn get_entry(&self, id: &str) -> Option<(&String, &AreaThematic)> {
        self.0.get_key_value(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AreaThematic)> {
        self.0.iter()
    }

    /// The lone entry when the table holds exactly one area.
    pub fn single_entry(&self) -> Option<(&String, &AreaThematic)> {
        if self.0.len() == 1 {
            self.0.iter().next()
        } else {
            None
        }
    }

    /// Re-key a single-area table to `id`. Returns false when the table does not hold
    /// exactly one entry or already uses `id`.
    pub fn rekey_single(&mut self, id: &str) -> bool {
        let only_key = match self.single_entry() {
            Some((key, _)) if key != id => key.clone(),
            _ => return false,
        };
        if let Some(area) = self.0.remove(&only_key) {
            self.0.insert(id.to_string(), area);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_code_parses_all_spellings() {
        let expected = CategoryCode::new(4).unwrap();
        assert_eq!("l04".parse::<CategoryCode>().unwrap(), expected);
        assert_eq!("L04".parse::<CategoryCode>().unwrap(), expected);
        assert_eq!("04".parse::<CategoryCode>().unwrap(), expected);
        assert_eq!("4".parse::<CategoryCode>().unwrap(), expected);
        assert!("l25".parse::<CategoryCode>().is_err());
        assert!("l00".parse::<CategoryCode>().is_err());
        assert!("totalarea".parse::<CategoryCode>().is_err());
        assert_eq!(expected.to_string(), "l04");
    }

    #[test]
    fn area_values_serialize_with_every_key() {
        let mut values = AreaValues::default();
        values.set(CategoryCode::new(9).unwrap(), 40.0);
        let json = serde_json::to_value(values).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 24);
        assert_eq!(obj["l09"], 40.0);
        assert_eq!(obj["l24"], 0.0);

        let back: AreaValues = serde_json::from_value(json).unwrap();
        assert_eq!(back, values);
    }

    #[test]
    fn total_falls_back_to_sum() {
        let mut area = AreaThematic::default();
        area.values.set(CategoryCode::new(1).unwrap(), 10.0);
        area.values.set(CategoryCode::new(2).unwrap(), 5.0);
        assert_eq!(area.total(), 15.0);

        area.total_area = Some(100.0);
        assert_eq!(area.total(), 100.0);
    }

    #[test]
    fn rekey_single_only_touches_lone_entries() {
        let mut table = ThematicTable::new();
        table.insert("area1", AreaThematic::default());
        assert!(table.rekey_single("1028"));
        assert!(table.get("1028").is_some());
        assert!(!table.rekey_single("1028"));

        table.insert("77", AreaThematic::default());
        assert!(!table.rekey_single("1028"));
        assert_eq!(table.len(), 2);
    }
}
