//! Plain objects.
//!
//! An [`ObjectRef`] is a shared handle to an insertion-ordered table of own
//! string-keyed properties. Cloning the handle aliases the object.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::descriptor::{DataDescriptor, PropertyDescriptor};
use crate::identity::NodeId;
use crate::value::Value;

/// The property table of a plain object.
#[derive(Debug, Default)]
pub struct Object {
    properties: IndexMap<String, PropertyDescriptor>,
}

/// Shared handle to a plain object.
#[derive(Clone, Default)]
pub struct ObjectRef(Rc<RefCell<Object>>);

impl ObjectRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> NodeId {
        NodeId::of(&self.0)
    }

    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Defines (or redefines) an own property. A redefined key keeps its
    /// position in the key order.
    pub fn define_property(&self, key: impl Into<String>, descriptor: impl Into<PropertyDescriptor>) {
        self.0
            .borrow_mut()
            .properties
            .insert(key.into(), descriptor.into());
    }

    /// Assigns `value` to `key` the way `obj[key] = value` does: a writable
    /// data property is updated in place, a read-only one is left alone, an
    /// accessor routes the value to its setter and a missing key is appended
    /// as a plain data property.
    pub fn set(&self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        let mut inner = self.0.borrow_mut();
        let setter = match inner.properties.get_mut(&key) {
            Some(PropertyDescriptor::Data(data)) => {
                if data.writable {
                    data.value = value;
                }
                return;
            }
            Some(PropertyDescriptor::Accessor(accessor)) => accessor.set.clone(),
            None => {
                inner
                    .properties
                    .insert(key, DataDescriptor::new(value).into());
                return;
            }
        };
        drop(inner);
        if let Some(set) = setter {
            set(value);
        }
    }

    /// Reads `key` the way `obj[key]` does, invoking a getter if the
    /// property is an accessor. Missing keys read as `Undefined`.
    pub fn get(&self, key: &str) -> Value {
        match self.get_own_property_descriptor(key) {
            Some(descriptor) => descriptor.read(),
            None => Value::Undefined,
        }
    }

    pub fn get_own_property_descriptor(&self, key: &str) -> Option<PropertyDescriptor> {
        self.0.borrow().properties.get(key).cloned()
    }

    pub fn has_own_property(&self, key: &str) -> bool {
        self.0.borrow().properties.contains_key(key)
    }

    /// Removes a configurable own property, preserving the order of the
    /// remaining keys. Returns false if the property is non-configurable.
    pub fn delete(&self, key: &str) -> bool {
        let mut inner = self.0.borrow_mut();
        match inner.properties.get(key) {
            Some(descriptor) if !descriptor.is_configurable() => false,
            Some(_) => {
                inner.properties.shift_remove(key);
                true
            }
            None => true,
        }
    }

    /// Own enumerable string keys in insertion order.
    pub fn keys(&self) -> Vec<String> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|(_, descriptor)| descriptor.is_enumerable())
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Snapshot of the own enumerable properties with their descriptors.
    ///
    /// The snapshot holds no borrow of the object, so callers may run
    /// arbitrary code (including code that touches this object) while
    /// walking it.
    pub fn enumerable_entries(&self) -> Vec<(String, PropertyDescriptor)> {
        self.0
            .borrow()
            .properties
            .iter()
            .filter(|(_, descriptor)| descriptor.is_enumerable())
            .map(|(key, descriptor)| (key.clone(), descriptor.clone()))
            .collect()
    }

    /// Number of own properties, enumerable or not.
    pub fn len(&self) -> usize {
        self.0.borrow().properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().properties.is_empty()
    }

    /// Drops every property. This is how a cyclic graph is broken so its
    /// nodes can be freed.
    pub fn clear(&self) {
        self.0.borrow_mut().properties.clear();
    }
}

impl<K, V> FromIterator<(K, V)> for ObjectRef
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let obj = ObjectRef::new();
        for (key, value) in iter {
            obj.set(key, value);
        }
        obj
    }
}

impl fmt::Debug for ObjectRef {
    // Values are left out: printing them could loop on a cyclic graph.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("id", &self.id())
            .field("keys", &self.keys())
            .finish()
    }
}
