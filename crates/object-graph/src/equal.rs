use std::collections::HashSet;
use std::rc::Rc;

use crate::array::ArrayRef;
use crate::descriptor::PropertyDescriptor;
use crate::identity::NodeId;
use crate::object::ObjectRef;
use crate::value::Value;

/// Performs a structural equality check between two graphs.
///
/// Objects must list the same enumerable keys in the same order, with the
/// same descriptor kind and attribute flags. Data properties compare their
/// values recursively; accessors compare their getter and setter handles by
/// reference and are never invoked. Arrays must agree on length, on hole
/// positions and on named properties. Opaque values compare by reference.
/// `NaN` equals `NaN`.
///
/// Cycles are handled by assuming a pair of nodes equal while it is being
/// compared, so two isomorphic cyclic graphs are equal.
///
/// # Examples
///
/// ```
/// use object_graph::{deep_equal, Value};
/// use serde_json::json;
///
/// let a = Value::from_json(&json!({"foo": [1, 2, 3]}));
/// let b = Value::from_json(&json!({"foo": [1, 2, 3]}));
/// let c = Value::from_json(&json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    Comparison::default().values(a, b)
}

#[derive(Default)]
struct Comparison {
    assumed: HashSet<(NodeId, NodeId)>,
}

impl Comparison {
    fn values(&mut self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Opaque(a), Value::Opaque(b)) => Rc::ptr_eq(a, b),
            (Value::Object(a), Value::Object(b)) => {
                self.assume(a.id(), b.id()) || self.objects(a, b)
            }
            (Value::Array(a), Value::Array(b)) => {
                self.assume(a.id(), b.id()) || self.arrays(a, b)
            }
            _ => false,
        }
    }

    /// Returns true if the pair is already under comparison.
    fn assume(&mut self, a: NodeId, b: NodeId) -> bool {
        a == b || !self.assumed.insert((a, b))
    }

    fn objects(&mut self, a: &ObjectRef, b: &ObjectRef) -> bool {
        let entries_a = a.enumerable_entries();
        let entries_b = b.enumerable_entries();
        if entries_a.len() != entries_b.len() {
            return false;
        }
        for ((key_a, desc_a), (key_b, desc_b)) in entries_a.iter().zip(entries_b.iter()) {
            if key_a != key_b || !self.descriptors(desc_a, desc_b) {
                return false;
            }
        }
        true
    }

    fn descriptors(&mut self, a: &PropertyDescriptor, b: &PropertyDescriptor) -> bool {
        match (a, b) {
            (PropertyDescriptor::Data(a), PropertyDescriptor::Data(b)) => {
                a.writable == b.writable
                    && a.enumerable == b.enumerable
                    && a.configurable == b.configurable
                    && self.values(&a.value, &b.value)
            }
            (PropertyDescriptor::Accessor(a), PropertyDescriptor::Accessor(b)) => {
                a.enumerable == b.enumerable
                    && a.configurable == b.configurable
                    && same_fn(&a.get, &b.get)
                    && same_fn(&a.set, &b.set)
            }
            _ => false,
        }
    }

    fn arrays(&mut self, a: &ArrayRef, b: &ArrayRef) -> bool {
        let slots_a = a.slots();
        let slots_b = b.slots();
        if slots_a.len() != slots_b.len() {
            return false;
        }
        for (slot_a, slot_b) in slots_a.iter().zip(slots_b.iter()) {
            let equal = match (slot_a, slot_b) {
                (None, None) => true,
                (Some(a), Some(b)) => self.values(a, b),
                _ => false,
            };
            if !equal {
                return false;
            }
        }
        let named_a = a.named_keys();
        if named_a != b.named_keys() {
            return false;
        }
        named_a.iter().all(|key| match (a.get_named(key), b.get_named(key)) {
            (Some(va), Some(vb)) => self.values(&va, &vb),
            _ => false,
        })
    }
}

fn same_fn<T: ?Sized>(a: &Option<Rc<T>>, b: &Option<Rc<T>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{AccessorDescriptor, DataDescriptor};
    use serde_json::json;

    #[test]
    fn test_primitives() {
        assert!(deep_equal(&Value::from(1), &Value::from(1.0)));
        assert!(deep_equal(&Value::from(f64::NAN), &Value::from(f64::NAN)));
        assert!(!deep_equal(&Value::Null, &Value::Undefined));
        assert!(!deep_equal(&Value::from("1"), &Value::from(1)));
    }

    #[test]
    fn test_key_order_matters() {
        let a = Value::from_json(&json!({"a": 1, "b": 2}));
        let b = Value::from_json(&json!({"b": 2, "a": 1}));
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_flags_matter() {
        let a = ObjectRef::new();
        a.define_property("k", DataDescriptor::new(1).writable(false));
        let b = ObjectRef::new();
        b.set("k", 1);
        assert!(!deep_equal(&Value::from(a), &Value::from(b)));
    }

    #[test]
    fn test_accessors_compare_by_handle() {
        let shared = AccessorDescriptor::new().getter(|| Value::from(1));
        let a = ObjectRef::new();
        a.define_property("k", shared.clone());
        let b = ObjectRef::new();
        b.define_property("k", shared);
        let c = ObjectRef::new();
        c.define_property("k", AccessorDescriptor::new().getter(|| Value::from(1)));
        assert!(deep_equal(&Value::from(a.clone()), &Value::from(b)));
        assert!(!deep_equal(&Value::from(a), &Value::from(c)));
    }

    #[test]
    fn test_holes_matter() {
        let a = ArrayRef::from_slots(vec![None, Some(Value::from(1))]);
        let b = ArrayRef::from_slots(vec![Some(Value::Undefined), Some(Value::from(1))]);
        assert!(!deep_equal(&Value::from(a.clone()), &Value::from(b)));
        let c = ArrayRef::from_slots(vec![None, Some(Value::from(1))]);
        assert!(deep_equal(&Value::from(a), &Value::from(c)));
    }

    #[test]
    fn test_cyclic_graphs() {
        let a = ObjectRef::new();
        a.set("x", 1);
        a.set("self", a.clone());
        let b = ObjectRef::new();
        b.set("x", 1);
        b.set("self", b.clone());
        assert!(deep_equal(&Value::from(a.clone()), &Value::from(b.clone())));

        b.set("x", 2);
        assert!(!deep_equal(&Value::from(a.clone()), &Value::from(b.clone())));
        a.clear();
        b.clear();
    }
}
