//! Parameter storage.
//!
//! The codecs read and write parameters by key through [`ParamStore`].
//! [`Patch`] is the in-memory implementation used by the CLI and the tests;
//! an editor can implement the trait over its own model instead.

use std::collections::{BTreeMap, HashMap};

use log::debug;

use super::layout::{fx_param_range, Kind, FX_TYPES, LAYOUT};

/// Keys the control protocol knows about that have no home in the patch
/// image. `osc3mode` only exists because the synth documentation lists it.
pub const CONTROL_ONLY: [(&str, i32, i32); 2] = [("allosccent", -50, 50), ("osc3mode", 0, 1)];

pub trait ParamStore {
    fn value(&self, key: &str) -> Option<i32>;
    fn set_value(&mut self, key: &str, value: i32);
    fn text(&self, key: &str) -> Option<&str>;
    fn set_text(&mut self, key: &str, text: &str);
}

/// Legal range of a numeric key, or `None` for text and unknown keys.
pub fn range(key: &str) -> Option<(i32, i32)> {
    if let Some(f) = LAYOUT.field(key) {
        return (!f.kind.is_text()).then_some((f.min, f.max));
    }
    if let Some((_, min, max)) = CONTROL_ONLY.iter().find(|(k, _, _)| *k == key) {
        return Some((*min, *max));
    }
    let (fx_type, param) = parse_fx_param(key)?;
    fx_param_range(fx_type, param)
}

/// Splits `prefx3param2` / `postfx3param2` into `(3, 2)`.
pub fn parse_fx_param(key: &str) -> Option<(i32, usize)> {
    let rest = key
        .strip_prefix("prefx")
        .or_else(|| key.strip_prefix("postfx"))?;
    let (fx_type, param) = rest.split_once("param")?;
    Some((fx_type.parse().ok()?, param.parse().ok()?))
}

/// Maximum length of a text field.
pub fn text_len(key: &str) -> Option<usize> {
    match LAYOUT.field(key)?.kind {
        Kind::Text(n) => Some(n),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Patch {
    values: HashMap<String, i32>,
    text: HashMap<String, String>,
}

impl Patch {
    /// An empty patch. Keys read back as `None` until set.
    pub fn new() -> Self {
        Self::default()
    }

    /// A patch with every known key at its lowest legal value (or zero when
    /// zero is legal), named "Init".
    pub fn init() -> Self {
        let mut p = Patch::new();
        let mut add = |key: &str, min: i32, max: i32| {
            p.values.insert(key.to_string(), 0.clamp(min, max));
        };
        for f in LAYOUT.fields.iter().filter(|f| !f.kind.is_text()) {
            add(&f.key, f.min, f.max);
        }
        for (key, min, max) in CONTROL_ONLY {
            add(key, min, max);
        }
        for fx in &LAYOUT.fx {
            for fx_type in 1..FX_TYPES {
                for param in 1..=5 {
                    if let Some((min, max)) = fx_param_range(fx_type, param) {
                        add(&fx.param_key(fx_type, param), min, max);
                    }
                }
            }
        }
        for f in LAYOUT.fields.iter().filter(|f| f.kind.is_text()) {
            p.text.insert(f.key.clone(), String::new());
        }
        p.set_text("name", "Init");
        p
    }

    pub fn len(&self) -> usize {
        self.values.len() + self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.text.is_empty()
    }

    /// All numeric values in key order.
    pub fn values(&self) -> BTreeMap<&str, i32> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v)).collect()
    }

    /// All text values in key order.
    pub fn texts(&self) -> BTreeMap<&str, &str> {
        self.text
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }
}

impl ParamStore for Patch {
    fn value(&self, key: &str) -> Option<i32> {
        self.values.get(key).copied()
    }

    /// Stores `value` clamped to the key's range. Unknown keys are dropped.
    fn set_value(&mut self, key: &str, value: i32) {
        match range(key) {
            Some((min, max)) => {
                if value < min || value > max {
                    debug!("clamping {key} = {value} into {min}..={max}");
                }
                self.values.insert(key.to_string(), value.clamp(min, max));
            }
            None => debug!("ignoring unknown parameter {key}"),
        }
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(|s| s.as_str())
    }

    /// Stores printable ASCII only, truncated to the field length.
    fn set_text(&mut self, key: &str, text: &str) {
        match text_len(key) {
            Some(n) => {
                // The synth pads names with spaces, so trailing spaces
                // are never kept.
                let clean: String = text
                    .chars()
                    .map(|c| if c.is_ascii_graphic() || c == ' ' { c } else { ' ' })
                    .take(n)
                    .collect();
                self.text.insert(key.to_string(), clean.trim_end().to_string());
            }
            None => debug!("ignoring unknown text parameter {key}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_are_clamped() {
        let mut p = Patch::new();
        p.set_value("osc1semi", -99);
        assert_eq!(p.value("osc1semi"), Some(-36));
        p.set_value("arpswing", 0);
        assert_eq!(p.value("arpswing"), Some(50));
        p.set_value("nonsense", 3);
        assert_eq!(p.value("nonsense"), None);
    }

    #[test]
    fn fx_param_keys_have_ranges() {
        assert_eq!(parse_fx_param("prefx3param2"), Some((3, 2)));
        assert_eq!(parse_fx_param("postfx9param5"), Some((9, 5)));
        assert_eq!(parse_fx_param("prefxtype"), None);
        assert_eq!(range("postfx8param1"), Some((51, 1020)));
        assert_eq!(range("prefx0param1"), None);
    }

    #[test]
    fn text_is_trimmed_to_field() {
        let mut p = Patch::new();
        p.set_text("macro1name", "Cutoff Sweep");
        assert_eq!(p.text("macro1name"), Some("Cutoff S"));
        p.set_text("name", "Tab\there");
        assert_eq!(p.text("name"), Some("Tab here"));
        p.set_text("name", "Pad   ");
        assert_eq!(p.text("name"), Some("Pad"));
        p.set_text("macro2name", "Wide    Open");
        assert_eq!(p.text("macro2name"), Some("Wide"));
    }

    #[test]
    fn init_patch_is_at_minimum() {
        let p = Patch::init();
        assert_eq!(p.text("name"), Some("Init"));
        assert_eq!(p.value("voicedensity"), Some(1));
        assert_eq!(p.value("osc2cent"), Some(0));
        assert_eq!(p.value("lfo3steps"), Some(2));
        assert_eq!(p.value("prefx7param4"), Some(16));
        assert_eq!(p.value("allosccent"), Some(0));
    }
}
