//! object-graph - a shared, identity-preserving value model
//!
//! This crate models the values of a dynamically typed host: primitives,
//! plain objects with full property descriptors, sparse arrays, and opaque
//! non-plain values. Objects and arrays are shared handles, so a graph can
//! alias nodes and contain cycles, and reference identity is observable
//! through [`NodeId`].
//!
//! # Example
//!
//! ```
//! use object_graph::{ArrayRef, DataDescriptor, ObjectRef, Value};
//!
//! let obj = ObjectRef::new();
//! obj.set("b", 1);
//! obj.define_property("a", DataDescriptor::new("fixed").writable(false));
//! obj.set("list", ArrayRef::with_length(2));
//! obj.set("self", obj.clone());
//!
//! assert_eq!(obj.keys(), vec!["b", "a", "list", "self"]);
//! assert!(obj.get("self").strict_equals(&Value::from(obj.clone())));
//! obj.clear();
//! ```

pub mod array;
pub mod descriptor;
pub mod equal;
pub mod identity;
pub mod json;
pub mod object;
pub mod pointer;
pub mod value;

pub use array::ArrayRef;
pub use descriptor::{AccessorDescriptor, DataDescriptor, Getter, PropertyDescriptor, Setter};
pub use equal::deep_equal;
pub use identity::NodeId;
pub use json::ConversionError;
pub use object::ObjectRef;
pub use value::{Opaque, Value};
