use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::encoder::JsEncoder;

/// Ordered key/value storage backing [`Value::Object`].
///
/// `IndexMap` is used so rendered objects keep the exact order in which the
/// producing configuration type inserted its members.
pub type ValueMap = IndexMap<String, Value>;

/// Language-neutral intermediate representation of a configuration value.
///
/// Every option record reduces itself to a `Value` before rendering; the
/// encoder only ever sees this closed set of variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Bool(bool),
    /// Data text, rendered as a single-quoted JavaScript string literal.
    String(String),
    /// JavaScript source emitted verbatim (callbacks, arrow functions).
    RawCode(String),
    Null,
    Array(Vec<Value>),
    Object(ValueMap),
}

impl Value {
    /// Wraps caller-asserted JavaScript source. No validation is performed.
    #[must_use]
    pub fn raw(code: impl Into<String>) -> Self {
        Self::RawCode(code.into())
    }

    /// Builds a text value using the content-sniffing heuristic: text that
    /// starts with `function` or contains `=>` becomes [`Value::RawCode`].
    ///
    /// A legitimate data string such as `"function keys"` is misclassified by
    /// this rule. Typed options never route through it; callback fields take
    /// [`JsCode`] instead.
    #[must_use]
    pub fn infer_text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.starts_with("function") || text.contains("=>") {
            Self::RawCode(text)
        } else {
            Self::String(text)
        }
    }

    #[must_use]
    pub fn object() -> ObjectBuilder {
        ObjectBuilder::new()
    }

    #[must_use]
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }

    /// Converts any serde-serializable value through `serde_json`.
    ///
    /// Values that cannot be represented (for example maps with non-string
    /// keys) degrade to [`Value::Null`] instead of failing.
    pub fn from_serialize<T>(value: &T) -> Self
    where
        T: Serialize + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => Self::from(json),
            Err(err) => {
                warn!(error = %err, "value is not representable, rendering null");
                Self::Null
            }
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&ValueMap> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Looks up a member when `self` is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Renders this value as a JavaScript expression with the default encoder.
    #[must_use]
    pub fn to_js(&self) -> String {
        JsEncoder::default().encode(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_js())
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_f64().map_or(Self::Null, Self::Number),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

macro_rules! impl_number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_number_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<JsCode> for Value {
    fn from(value: JsCode) -> Self {
        Self::RawCode(value.0)
    }
}

impl From<ValueMap> for Value {
    fn from(value: ValueMap) -> Self {
        Self::Object(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Self::array(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// JavaScript source supplied for a callback-typed option.
///
/// This is the explicit "code, not data" marker at the API surface; it always
/// renders unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JsCode(String);

impl JsCode {
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for JsCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for JsCode {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Conversion of a configuration record into a [`Value`] tree.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl ToValue for JsCode {
    fn to_value(&self) -> Value {
        Value::RawCode(self.0.clone())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! impl_number_to_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }
        )*
    };
}

impl_number_to_value!(f64, f32, i32, i64, u32, u64, usize);

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

/// Incremental builder for [`Value::Object`].
///
/// Absent optional fields are skipped entirely rather than stored as `null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectBuilder {
    entries: ValueMap,
}

impl ObjectBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry. Re-inserting a key replaces the value in place.
    #[must_use]
    pub fn field<T>(mut self, key: &str, value: &T) -> Self
    where
        T: ToValue + ?Sized,
    {
        self.entries.insert(key.to_owned(), value.to_value());
        self
    }

    /// Inserts an already-built value.
    #[must_use]
    pub fn value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.entries.insert(key.to_owned(), value.into());
        self
    }

    /// Inserts the entry only when `value` is present.
    #[must_use]
    pub fn optional<T: ToValue>(self, key: &str, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Inserts the entry only when the sequence is present and non-empty.
    #[must_use]
    pub fn non_empty<T: ToValue>(self, key: &str, values: Option<&Vec<T>>) -> Self {
        match values {
            Some(values) if !values.is_empty() => self.field(key, values),
            _ => self,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn build(self) -> Value {
        Value::Object(self.entries)
    }

    #[must_use]
    pub fn into_map(self) -> ValueMap {
        self.entries
    }
}

impl From<ValueMap> for ObjectBuilder {
    fn from(entries: ValueMap) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_text_detects_function_prefix_and_arrow() {
        assert_eq!(
            Value::infer_text("function(v){return v}"),
            Value::RawCode("function(v){return v}".into())
        );
        assert_eq!(
            Value::infer_text("(v) => v * 2"),
            Value::RawCode("(v) => v * 2".into())
        );
        assert_eq!(Value::infer_text("hello"), Value::String("hello".into()));
    }

    #[test]
    fn optional_entries_are_omitted() {
        let order: Option<i32> = None;
        let value = Value::object()
            .field("label", "Sales")
            .optional("order", order.as_ref())
            .build();
        let map = value.as_object().expect("object");
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("order"));
    }

    #[test]
    fn json_conversion_preserves_member_order() {
        let json = serde_json::json!({"zeta": 1, "alpha": [true, null], "mid": "x"});
        let value = Value::from(json);
        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
