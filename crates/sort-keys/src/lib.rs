//! sort-keys - sort the keys of an object graph
//!
//! [`sort_keys`] returns a copy of a plain object or array whose object keys
//! are reordered by a comparator. Everything else about the input is kept:
//! property descriptors (accessors are copied, never invoked), array holes
//! and lengths, the identity of opaque values, and the aliasing of shared
//! nodes, cycles included.
//!
//! # Example
//!
//! ```
//! use object_graph::Value;
//! use serde_json::json;
//! use sort_keys::{sort_keys, Options};
//!
//! let input = Value::from_json(&json!({"c": {"z": 0, "y": 0}, "a": 0, "b": [{"d": 0, "c": 0}]}));
//!
//! let shallow = sort_keys(&input, &Options::default()).unwrap();
//! assert_eq!(shallow.as_object().unwrap().keys(), vec!["a", "b", "c"]);
//!
//! let deep = sort_keys(&input, &Options::new().deep(true)).unwrap();
//! let c = deep.as_object().unwrap().get("c");
//! assert_eq!(c.as_object().unwrap().keys(), vec!["y", "z"]);
//! ```

pub mod compare;
pub mod context;
pub mod error;
pub mod options;
mod policy;
mod rebuild;

pub use compare::default_compare;
pub use context::Context;
pub use error::SortKeysError;
pub use options::{CompareFn, DeepPolicy, IgnorePolicy, Options, Predicate, SortConfig};

use object_graph::Value;
use tracing::debug;

use rebuild::Rebuilder;

/// Sorts the keys of `input`.
///
/// Keys excluded by `options.ignore_keys` keep their relative order and come
/// first; the remaining keys follow, stably sorted by `options.compare`.
/// With `options.deep`, nested plain objects and arrays are processed the
/// same way. The result is always a new node, even when nothing moves.
///
/// # Errors
///
/// [`SortKeysError::InvalidInput`] if `input` is neither a plain object nor
/// an array. Nothing is traversed in that case.
pub fn sort_keys(input: &Value, options: &Options) -> Result<Value, SortKeysError> {
    let mut rebuilder = Rebuilder::new(options);
    match input {
        Value::Object(obj) => {
            debug!(root = "object", keys = obj.keys().len(), ?options, "sorting keys");
            Ok(rebuilder.rebuild_object(obj, &[], 0))
        }
        Value::Array(arr) => {
            debug!(root = "array", len = arr.len(), ?options, "sorting keys");
            Ok(rebuilder.rebuild_array(arr, &[], 0))
        }
        other => Err(SortKeysError::InvalidInput {
            found: other.type_name().to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_graph::{ArrayRef, ObjectRef, Opaque};

    #[test]
    fn test_rejects_non_traversable_input() {
        let inputs = vec![
            (Value::Undefined, "undefined"),
            (Value::Null, "null"),
            (Value::from(true), "boolean"),
            (Value::from(1), "number"),
            (Value::from("str"), "string"),
            (Value::from(Opaque::new("Map", ())), "Map"),
        ];
        for (input, found) in inputs {
            assert_eq!(
                sort_keys(&input, &Options::default()).unwrap_err(),
                SortKeysError::InvalidInput {
                    found: found.to_string()
                }
            );
        }
    }

    #[test]
    fn test_error_message() {
        let err = sort_keys(&Value::Null, &Options::default()).unwrap_err();
        assert_eq!(err.to_string(), "Expected a plain object or array, got null");
    }

    #[test]
    fn test_invalid_input_never_calls_policies() {
        let options = Options::new()
            .deep_when(|_| panic!("deep policy called"))
            .ignore_when(|_| panic!("ignore policy called"));
        assert!(sort_keys(&Value::from(1), &options).is_err());
    }

    #[test]
    fn test_accepts_objects_and_arrays() {
        assert!(sort_keys(&Value::from(ObjectRef::new()), &Options::default()).is_ok());
        assert!(sort_keys(&Value::from(ArrayRef::new()), &Options::default()).is_ok());
    }
}
