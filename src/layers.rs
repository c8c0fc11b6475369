use crate::types::CategoryCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-category visibility flags driving dominant-category selection and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct VisibleLayers([bool; CategoryCode::COUNT]);

impl VisibleLayers {
    pub fn all() -> Self {
        Self([true; CategoryCode::COUNT])
    }

    pub fn none() -> Self {
        Self([false; CategoryCode::COUNT])
    }

    /// Only `codes` visible.
    pub fn only(codes: &[CategoryCode]) -> Self {
        let mut layers = Self::none();
        for code in codes {
            layers.set(*code, true);
        }
        layers
    }

    pub fn is_visible(&self, code: CategoryCode) -> bool {
        self.0[code.index()]
    }

    pub fn set(&mut self, code: CategoryCode, visible: bool) {
        self.0[code.index()] = visible;
    }

    pub fn any_visible(&self) -> bool {
        self.0.iter().any(|v| *v)
    }

    /// Hides everything if anything is visible, otherwise shows everything.
    pub fn toggle_all(&mut self) {
        let next = !self.any_visible();
        self.0 = [next; CategoryCode::COUNT];
    }

    pub fn visible_codes(&self) -> impl Iterator<Item = CategoryCode> + '_ {
        CategoryCode::all().filter(move |code| self.is_visible(*code))
    }
}

impl Default for VisibleLayers {
    fn default() -> Self {
        Self::all()
    }
}

// Codes missing from the map stay visible.
impl From<BTreeMap<String, bool>> for VisibleLayers {
    fn from(map: BTreeMap<String, bool>) -> Self {
        let mut layers = Self::all();
        for (key, visible) in map {
            if let Ok(code) = key.parse::<CategoryCode>() {
                layers.set(code, visible);
            }
        }
        layers
    }
}

impl From<VisibleLayers> for BTreeMap<String, bool> {
    fn from(layers: VisibleLayers) -> Self {
        CategoryCode::all()
            .map(|code| (code.key(), layers.is_visible(code)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(n: u8) -> CategoryCode {
        CategoryCode::new(n).unwrap()
    }

    #[test]
    fn toggle_all_flips_between_states() {
        let mut layers = VisibleLayers::all();
        layers.set(code(3), false);
        layers.toggle_all();
        assert!(!layers.any_visible());
        layers.toggle_all();
        assert_eq!(layers, VisibleLayers::all());
    }

    #[test]
    fn only_limits_visible_codes() {
        let layers = VisibleLayers::only(&[code(4), code(9)]);
        let visible: Vec<_> = layers.visible_codes().collect();
        assert_eq!(visible, vec![code(4), code(9)]);
    }

    #[test]
    fn deserializes_partial_maps() {
        let layers: VisibleLayers = serde_json::from_str(r#"{"l01": false, "L24": false}"#).unwrap();
        assert!(!layers.is_visible(code(1)));
        assert!(!layers.is_visible(code(24)));
        assert!(layers.is_visible(code(2)));
    }
}
