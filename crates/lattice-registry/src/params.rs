//! Construction parameters passed to component factories.

use std::collections::HashMap;

use lattice_reactive::Observable;

/// A single named parameter value.
#[derive(Debug, Clone)]
pub enum ParamValue {
    /// Plain text: `name="Person 1"`
    Text(String),
    /// Numeric literal: `interval=70`
    Number(f64),
    /// Boolean (presence): `disabled`
    Flag(bool),
    /// An externally owned observable handed into the component, which the
    /// component may write back to: `value=chosenValue`
    Value(Observable<String>),
}

impl ParamValue {
    /// Get as text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParamValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            ParamValue::Flag(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&Observable<String>> {
        match self {
            ParamValue::Value(v) => Some(v),
            _ => None,
        }
    }
}

/// Named parameters for one component instantiation.
#[derive(Debug, Clone, Default)]
pub struct Params {
    values: HashMap<String, ParamValue>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), ParamValue::Text(value.into()));
        self
    }

    pub fn with_number(mut self, key: impl Into<String>, value: f64) -> Self {
        self.values.insert(key.into(), ParamValue::Number(value));
        self
    }

    pub fn with_flag(mut self, key: impl Into<String>, value: bool) -> Self {
        self.values.insert(key.into(), ParamValue::Flag(value));
        self
    }

    pub fn with_value(mut self, key: impl Into<String>, value: Observable<String>) -> Self {
        self.values.insert(key.into(), ParamValue::Value(value));
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.values.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ParamValue::as_text)
    }

    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ParamValue::as_number)
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(ParamValue::as_flag)
    }

    /// Clone out the observable handle under `key`, if present.
    pub fn value(&self, key: &str) -> Option<Observable<String>> {
        self.get(key).and_then(ParamValue::as_value).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn typed_getters_match_their_variant() {
        let params = Params::new()
            .with_text("lib", "core")
            .with_number("interval", 70.0)
            .with_flag("disabled", true);

        assert_eq!(params.text("lib"), Some("core"));
        assert_eq!(params.number("interval"), Some(70.0));
        assert_eq!(params.flag("disabled"), Some(true));

        // Wrong-type access yields None, not a panic.
        assert_eq!(params.text("interval"), None);
        assert_eq!(params.number("lib"), None);
    }

    #[test]
    fn value_params_alias_the_caller_observable() {
        let chosen = Observable::new(String::new());
        let params = Params::new().with_value("value", chosen.clone());

        let handle = params.value("value").unwrap();
        handle.set("like".to_string());

        assert_eq!(chosen.get(), "like");
    }

    #[test]
    fn missing_keys_yield_none() {
        let params = Params::new();
        assert!(params.get("value").is_none());
        assert!(params.value("value").is_none());
    }
}
