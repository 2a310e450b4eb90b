//! Conversion between graphs and `serde_json` documents.
//!
//! Building a graph from JSON always yields a tree with fresh nodes. Going
//! the other way follows the rules of `JSON.stringify`: key order is kept,
//! accessors are read through their getters, `undefined` object members are
//! skipped, and holes, `undefined` elements and non-finite numbers become
//! `null`.

use serde_json::{Map, Number, Value as Json};
use thiserror::Error;

use crate::array::ArrayRef;
use crate::identity::NodeId;
use crate::object::ObjectRef;
use crate::pointer::format_pointer;
use crate::value::Value;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("converting circular structure to JSON at \"{pointer}\"")]
    Cycle { pointer: String },
    #[error("cannot convert {class_name} at \"{pointer}\" to JSON")]
    Opaque { class_name: String, pointer: String },
}

impl From<&Json> for Value {
    fn from(json: &Json) -> Self {
        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Value::String(s.clone()),
            Json::Array(arr) => Value::Array(arr.iter().map(Value::from).collect()),
            Json::Object(map) => {
                let obj = ObjectRef::new();
                for (key, val) in map {
                    obj.set(key.clone(), Value::from(val));
                }
                Value::Object(obj)
            }
        }
    }
}

impl Value {
    /// Builds a fresh tree from a JSON document.
    ///
    /// # Example
    ///
    /// ```
    /// use object_graph::Value;
    /// use serde_json::json;
    ///
    /// let value = Value::from_json(&json!({"b": 1, "a": [true, null]}));
    /// assert_eq!(value.as_object().unwrap().keys(), vec!["b", "a"]);
    /// ```
    pub fn from_json(json: &Json) -> Value {
        Value::from(json)
    }

    /// Renders the value as JSON.
    ///
    /// # Errors
    ///
    /// - [`ConversionError::Cycle`] if a node contains itself.
    /// - [`ConversionError::Opaque`] if an opaque value is reached.
    pub fn to_json(&self) -> Result<Json, ConversionError> {
        let mut encoder = Encoder::default();
        Ok(encoder.encode(self)?.unwrap_or(Json::Null))
    }
}

#[derive(Default)]
struct Encoder {
    /// Nodes on the current path, for cycle detection.
    ancestors: Vec<NodeId>,
    path: Vec<String>,
}

impl Encoder {
    /// `Ok(None)` stands for "no JSON representation" (`undefined`).
    fn encode(&mut self, value: &Value) -> Result<Option<Json>, ConversionError> {
        let json = match value {
            Value::Undefined => return Ok(None),
            Value::Null => Json::Null,
            Value::Bool(b) => Json::Bool(*b),
            Value::Number(n) => encode_number(*n),
            Value::String(s) => Json::String(s.clone()),
            Value::Object(obj) => self.enter(obj.id(), |enc| enc.encode_object(obj))?,
            Value::Array(arr) => self.enter(arr.id(), |enc| enc.encode_array(arr))?,
            Value::Opaque(opaque) => {
                return Err(ConversionError::Opaque {
                    class_name: opaque.class_name().to_string(),
                    pointer: format_pointer(&self.path),
                })
            }
        };
        Ok(Some(json))
    }

    fn enter<F>(&mut self, id: NodeId, body: F) -> Result<Json, ConversionError>
    where
        F: FnOnce(&mut Self) -> Result<Json, ConversionError>,
    {
        if self.ancestors.contains(&id) {
            return Err(ConversionError::Cycle {
                pointer: format_pointer(&self.path),
            });
        }
        self.ancestors.push(id);
        let result = body(self);
        self.ancestors.pop();
        result
    }

    fn encode_object(&mut self, obj: &ObjectRef) -> Result<Json, ConversionError> {
        let mut map = Map::new();
        for (key, descriptor) in obj.enumerable_entries() {
            let value = descriptor.read();
            self.path.push(key.clone());
            let encoded = self.encode(&value);
            self.path.pop();
            if let Some(json) = encoded? {
                map.insert(key, json);
            }
        }
        Ok(Json::Object(map))
    }

    fn encode_array(&mut self, arr: &ArrayRef) -> Result<Json, ConversionError> {
        let slots = arr.slots();
        let mut out = Vec::with_capacity(slots.len());
        for (index, slot) in slots.iter().enumerate() {
            let json = match slot {
                Some(value) => {
                    self.path.push(index.to_string());
                    let encoded = self.encode(value);
                    self.path.pop();
                    encoded?.unwrap_or(Json::Null)
                }
                None => Json::Null,
            };
            out.push(json);
        }
        Ok(Json::Array(out))
    }
}

/// Integral numbers within the exactly representable range are written
/// as integers, so `1` survives a round trip as `1` rather than `1.0`.
fn encode_number(n: f64) -> Json {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        return Json::from(n as i64);
    }
    Number::from_f64(n).map_or(Json::Null, Json::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::AccessorDescriptor;
    use crate::value::Opaque;
    use serde_json::json;

    #[test]
    fn test_roundtrip_keeps_key_order() {
        let doc = json!({"z": 1, "a": {"y": [1, "two", null, false]}, "m": "s"});
        let json = Value::from_json(&doc).to_json().unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(json, doc);
    }

    #[test]
    fn test_holes_and_undefined() {
        let arr = ArrayRef::from_slots(vec![None, Some(Value::Undefined), Some(Value::from(1))]);
        assert_eq!(Value::from(arr).to_json().unwrap(), json!([null, null, 1]));

        let obj = ObjectRef::new();
        obj.set("gone", Value::Undefined);
        obj.set("kept", 1);
        assert_eq!(Value::from(obj).to_json().unwrap(), json!({"kept": 1}));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(Value::from(f64::INFINITY).to_json().unwrap(), Json::Null);
        assert_eq!(Value::from(f64::NAN).to_json().unwrap(), Json::Null);
        assert_eq!(Value::from(3).to_json().unwrap(), json!(3));
        assert_eq!(Value::from(-2.5).to_json().unwrap(), json!(-2.5));
    }

    #[test]
    fn test_accessor_is_read() {
        let obj = ObjectRef::new();
        obj.define_property("computed", AccessorDescriptor::new().getter(|| Value::from(42)));
        assert_eq!(Value::from(obj).to_json().unwrap(), json!({"computed": 42}));
    }

    #[test]
    fn test_cycle_is_rejected() {
        let obj = ObjectRef::new();
        let inner = ObjectRef::new();
        obj.set("inner", inner.clone());
        inner.set("back", obj.clone());
        let err = Value::from(obj.clone()).to_json().unwrap_err();
        assert_eq!(
            err,
            ConversionError::Cycle {
                pointer: "/inner/back".to_string()
            }
        );
        obj.clear();
    }

    #[test]
    fn test_shared_node_is_not_a_cycle() {
        let shared: ObjectRef = [("v", 1)].into_iter().collect();
        let obj = ObjectRef::new();
        obj.set("left", shared.clone());
        obj.set("right", shared);
        assert_eq!(
            Value::from(obj).to_json().unwrap(),
            json!({"left": {"v": 1}, "right": {"v": 1}})
        );
    }

    #[test]
    fn test_opaque_is_rejected() {
        let obj = ObjectRef::new();
        obj.set("when", Opaque::new("Date", 0_i64));
        let err = Value::from(obj).to_json().unwrap_err();
        assert_eq!(
            err,
            ConversionError::Opaque {
                class_name: "Date".to_string(),
                pointer: "/when".to_string()
            }
        );
    }
}
