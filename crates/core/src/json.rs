//! # Json - A Closed Data Tree and its Writer Capability
//!
//! [`Json`] is a sum type over four variants:
//!
//! ```text
//!   Json ::= Null
//!          | Text(JsText)
//!          | Number(JsNumber)
//!          | Object(JsObject)      -- String → Json, unique keys, ordered
//! ```
//!
//! Values enter the tree through a [`JsonWriter`] capability and leave it
//! through *narrowing*: asserting which variant a node holds. Narrowing is an
//! exhaustive match that returns [`JsonError::TypeMismatch`] when the
//! assertion is wrong; it never hands back a degraded value.
//!
//! ```rust
//! use capability_core::json::{to_json, JsObject, JsText, StringWriter};
//!
//! let node = to_json("Saeed", &StringWriter);
//! assert_eq!(node.narrow::<JsText>().unwrap().get(), "Saeed");
//! assert!(node.narrow::<JsObject>().is_err());
//! ```
//!
//! Object lookup follows the same rule: a missing key is
//! [`JsonError::KeyNotFound`], never a default.
//!
//! There is deliberately no text encoding here; the tree is in-memory only.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::JsonError;

// ============================================================================
// Variants
// ============================================================================

/// The tag of a [`Json`] node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Text,
    Number,
    Object,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Text => "text",
            JsonKind::Number => "number",
            JsonKind::Object => "object",
        };
        write!(f, "{}", name)
    }
}

/// The absence marker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct JsNull;

/// A text leaf.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsText(String);

impl JsText {
    /// Create a text leaf.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The text.
    pub fn get(&self) -> &str {
        &self.0
    }

    /// Take the text.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// A numeric leaf (double precision).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct JsNumber(f64);

impl JsNumber {
    /// Create a numeric leaf.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// The number.
    pub fn get(&self) -> f64 {
        self.0
    }
}

/// A mapping from unique string keys to nodes, iterated in key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject(BTreeMap<String, Json>);

impl JsObject {
    /// Create an empty object.
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add an entry. A repeated key replaces the earlier value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Json>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Look up a key.
    ///
    /// Returns `KeyNotFound` for an absent key.
    pub fn get(&self, key: &str) -> Result<&Json, JsonError> {
        self.0.get(key).ok_or_else(|| {
            tracing::debug!(key, available = self.0.len(), "object lookup missed");
            JsonError::KeyNotFound {
                key: key.to_string(),
            }
        })
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the object has no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Json)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, Json)> for JsObject {
    fn from_iter<I: IntoIterator<Item = (K, Json)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

// ============================================================================
// Tree
// ============================================================================

/// A node of the data tree. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub enum Json {
    Null,
    Text(JsText),
    Number(JsNumber),
    Object(JsObject),
}

/// A variant that [`Json::narrow`] can project onto.
pub trait JsonVariant: Sized {
    /// The tag this variant corresponds to.
    const KIND: JsonKind;

    /// Borrow the variant, or `None` if the node holds another one.
    fn project(json: &Json) -> Option<&Self>;

    /// Take the variant, or give the node back unchanged.
    fn project_owned(json: Json) -> Result<Self, Json>;
}

impl JsonVariant for JsNull {
    const KIND: JsonKind = JsonKind::Null;

    fn project(json: &Json) -> Option<&Self> {
        match json {
            Json::Null => Some(&JsNull),
            _ => None,
        }
    }

    fn project_owned(json: Json) -> Result<Self, Json> {
        match json {
            Json::Null => Ok(JsNull),
            other => Err(other),
        }
    }
}

impl JsonVariant for JsText {
    const KIND: JsonKind = JsonKind::Text;

    fn project(json: &Json) -> Option<&Self> {
        match json {
            Json::Text(text) => Some(text),
            _ => None,
        }
    }

    fn project_owned(json: Json) -> Result<Self, Json> {
        match json {
            Json::Text(text) => Ok(text),
            other => Err(other),
        }
    }
}

impl JsonVariant for JsNumber {
    const KIND: JsonKind = JsonKind::Number;

    fn project(json: &Json) -> Option<&Self> {
        match json {
            Json::Number(number) => Some(number),
            _ => None,
        }
    }

    fn project_owned(json: Json) -> Result<Self, Json> {
        match json {
            Json::Number(number) => Ok(number),
            other => Err(other),
        }
    }
}

impl JsonVariant for JsObject {
    const KIND: JsonKind = JsonKind::Object;

    fn project(json: &Json) -> Option<&Self> {
        match json {
            Json::Object(object) => Some(object),
            _ => None,
        }
    }

    fn project_owned(json: Json) -> Result<Self, Json> {
        match json {
            Json::Object(object) => Ok(object),
            other => Err(other),
        }
    }
}

impl Json {
    /// The variant tag of this node.
    pub fn kind(&self) -> JsonKind {
        match self {
            Json::Null => JsonKind::Null,
            Json::Text(_) => JsonKind::Text,
            Json::Number(_) => JsonKind::Number,
            Json::Object(_) => JsonKind::Object,
        }
    }

    /// Assert this node holds variant `V` and borrow it.
    pub fn narrow<V: JsonVariant>(&self) -> Result<&V, JsonError> {
        V::project(self).ok_or_else(|| mismatch(V::KIND, self.kind()))
    }

    /// Assert this node holds variant `V` and take it.
    pub fn into_variant<V: JsonVariant>(self) -> Result<V, JsonError> {
        V::project_owned(self).map_err(|node| mismatch(V::KIND, node.kind()))
    }

    /// Narrow to text and borrow the string.
    pub fn as_text(&self) -> Result<&str, JsonError> {
        self.narrow::<JsText>().map(JsText::get)
    }

    /// Narrow to a number and read it.
    pub fn as_number(&self) -> Result<f64, JsonError> {
        self.narrow::<JsNumber>().map(JsNumber::get)
    }

    /// Narrow to an object.
    pub fn as_object(&self) -> Result<&JsObject, JsonError> {
        self.narrow::<JsObject>()
    }

    /// Whether this node is `Null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }
}

fn mismatch(expected: JsonKind, found: JsonKind) -> JsonError {
    tracing::debug!(%expected, %found, "narrowing failed");
    JsonError::TypeMismatch { expected, found }
}

impl From<JsNull> for Json {
    fn from(_: JsNull) -> Self {
        Json::Null
    }
}

impl From<JsText> for Json {
    fn from(text: JsText) -> Self {
        Json::Text(text)
    }
}

impl From<JsNumber> for Json {
    fn from(number: JsNumber) -> Self {
        Json::Number(number)
    }
}

impl From<JsObject> for Json {
    fn from(object: JsObject) -> Self {
        Json::Object(object)
    }
}

impl From<&str> for Json {
    fn from(value: &str) -> Self {
        Json::Text(JsText::new(value))
    }
}

impl From<String> for Json {
    fn from(value: String) -> Self {
        Json::Text(JsText(value))
    }
}

impl From<f64> for Json {
    fn from(value: f64) -> Self {
        Json::Number(JsNumber(value))
    }
}

// ============================================================================
// Writer Capability
// ============================================================================

/// A capability mapping `T` into the data tree. Pure and total.
pub trait JsonWriter<T: ?Sized> {
    fn write(&self, value: &T) -> Json;
}

impl<T: ?Sized, W: JsonWriter<T> + ?Sized> JsonWriter<T> for &W {
    fn write(&self, value: &T) -> Json {
        (**self).write(value)
    }
}

/// Write `value` with `writer`.
pub fn to_json<T: ?Sized, W: JsonWriter<T> + ?Sized>(value: &T, writer: &W) -> Json {
    writer.write(value)
}

/// Strings become text leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringWriter;

impl JsonWriter<String> for StringWriter {
    fn write(&self, value: &String) -> Json {
        Json::from(value.as_str())
    }
}

impl JsonWriter<str> for StringWriter {
    fn write(&self, value: &str) -> Json {
        Json::from(value)
    }
}

/// Doubles become number leaves.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberWriter;

impl JsonWriter<f64> for NumberWriter {
    fn write(&self, value: &f64) -> Json {
        Json::from(*value)
    }
}

/// `None` becomes `Null`; `Some` goes through the inner writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionWriter<W>(pub W);

impl<T, W: JsonWriter<T>> JsonWriter<Option<T>> for OptionWriter<W> {
    fn write(&self, value: &Option<T>) -> Json {
        match value {
            Some(inner) => self.0.write(inner),
            None => Json::Null,
        }
    }
}

/// A writer from any `Fn(&T) -> Json`.
#[derive(Clone, Copy)]
pub struct FnWriter<F>(pub F);

impl<T: ?Sized, F: Fn(&T) -> Json> JsonWriter<T> for FnWriter<F> {
    fn write(&self, value: &T) -> Json {
        (self.0)(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_writer_produces_text() {
        let node = to_json(&"hello".to_string(), &StringWriter);
        assert_eq!(node.kind(), JsonKind::Text);
        assert_eq!(node.as_text().unwrap(), "hello");
    }

    #[test]
    fn test_number_writer_produces_number() {
        let node = to_json(&2.5, &NumberWriter);
        assert_eq!(node.as_number().unwrap(), 2.5);
    }

    #[test]
    fn test_option_writer() {
        let writer = OptionWriter(NumberWriter);
        assert!(to_json(&None, &writer).is_null());
        assert_eq!(to_json(&Some(1.0), &writer), Json::from(1.0));
    }

    #[test]
    fn test_narrow_to_matching_variant() {
        let node = Json::from("x");
        let text: &JsText = node.narrow().unwrap();
        assert_eq!(text.get(), "x");

        assert!(Json::Null.narrow::<JsNull>().is_ok());
        assert_eq!(Json::from(3.0).narrow::<JsNumber>().unwrap().get(), 3.0);
    }

    #[test]
    fn test_narrow_text_to_object_fails() {
        let node = Json::from("not an object");
        let err = node.narrow::<JsObject>().unwrap_err();
        assert_eq!(
            err,
            JsonError::TypeMismatch {
                expected: JsonKind::Object,
                found: JsonKind::Text,
            }
        );
    }

    #[test]
    fn test_narrow_every_mismatch() {
        let nodes = vec![
            Json::Null,
            Json::from("t"),
            Json::from(1.0),
            Json::Object(JsObject::new()),
        ];
        for node in &nodes {
            let hits = [
                node.narrow::<JsNull>().is_ok(),
                node.narrow::<JsText>().is_ok(),
                node.narrow::<JsNumber>().is_ok(),
                node.narrow::<JsObject>().is_ok(),
            ];
            // exactly one projection succeeds
            assert_eq!(hits.iter().filter(|h| **h).count(), 1, "{:?}", node);
        }
    }

    #[test]
    fn test_into_variant() {
        let object = Json::from(JsObject::new().with("k", "v"));
        let owned: JsObject = object.into_variant().unwrap();
        assert_eq!(owned.len(), 1);

        let err = Json::Null.into_variant::<JsText>().unwrap_err();
        assert!(matches!(
            err,
            JsonError::TypeMismatch {
                expected: JsonKind::Text,
                found: JsonKind::Null,
            }
        ));
    }

    #[test]
    fn test_object_get_and_missing_key() {
        let object = JsObject::new().with("name", "Saeed").with("age", 40.0);
        assert_eq!(object.get("name").unwrap().as_text().unwrap(), "Saeed");
        assert_eq!(object.get("age").unwrap().as_number().unwrap(), 40.0);

        assert_eq!(
            object.get("email"),
            Err(JsonError::KeyNotFound {
                key: "email".to_string()
            })
        );
        assert!(!object.contains_key("email"));
    }

    #[test]
    fn test_object_keys_are_unique_and_ordered() {
        let object = JsObject::new()
            .with("b", "first")
            .with("a", Json::Null)
            .with("b", "second");

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("b").unwrap().as_text().unwrap(), "second");
    }

    #[test]
    fn test_object_from_iterator() {
        let object: JsObject = vec![("x", Json::from(1.0)), ("y", Json::from(2.0))]
            .into_iter()
            .collect();
        assert_eq!(object.len(), 2);
        assert!(!object.is_empty());
        assert_eq!(
            object.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["x", "y"]
        );
    }

    #[test]
    fn test_fn_writer() {
        let writer = FnWriter(|pair: &(String, f64)| {
            Json::from(
                JsObject::new()
                    .with("label", pair.0.as_str())
                    .with("value", pair.1),
            )
        });
        let node = to_json(&("half".to_string(), 0.5), &writer);
        let object = node.as_object().unwrap();
        assert_eq!(object.get("label").unwrap().as_text().unwrap(), "half");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(JsonKind::Object.to_string(), "object");
        let err = Json::Null.narrow::<JsObject>().unwrap_err();
        assert_eq!(err.to_string(), "Type mismatch: expected object, found null");
    }
}
