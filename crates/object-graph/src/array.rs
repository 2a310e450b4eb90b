//! Arrays.
//!
//! Slots are `Option<Value>`: `None` is a hole, an index with no own
//! property, which is distinct from a slot holding `Undefined`. The length
//! is the slot count, so trailing holes are representable.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::identity::NodeId;
use crate::value::Value;

#[derive(Debug, Default)]
pub struct Array {
    slots: Vec<Option<Value>>,
    /// Non-index properties attached to the array instance.
    named: IndexMap<String, Value>,
}

/// Shared handle to an array.
#[derive(Clone, Default)]
pub struct ArrayRef(Rc<RefCell<Array>>);

impl ArrayRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// An array of `len` holes.
    pub fn with_length(len: usize) -> Self {
        let arr = ArrayRef::new();
        arr.set_len(len);
        arr
    }

    /// Builds an array from slots directly, holes included.
    pub fn from_slots(slots: Vec<Option<Value>>) -> Self {
        ArrayRef(Rc::new(RefCell::new(Array {
            slots,
            named: IndexMap::new(),
        })))
    }

    pub fn id(&self) -> NodeId {
        NodeId::of(&self.0)
    }

    pub fn ptr_eq(&self, other: &ArrayRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub fn len(&self) -> usize {
        self.0.borrow().slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().slots.is_empty()
    }

    /// Truncates or extends the array; new slots are holes.
    pub fn set_len(&self, len: usize) {
        self.0.borrow_mut().slots.resize(len, None);
    }

    /// The element at `index`, `None` for a hole or an index past the end.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().slots.get(index).cloned().flatten()
    }

    pub fn is_hole(&self, index: usize) -> bool {
        matches!(self.0.borrow().slots.get(index), Some(None))
    }

    /// Stores `value` at `index`, growing the array with holes if needed.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut inner = self.0.borrow_mut();
        if index >= inner.slots.len() {
            inner.slots.resize(index + 1, None);
        }
        inner.slots[index] = Some(value.into());
    }

    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().slots.push(Some(value.into()));
    }

    /// Turns `index` into a hole without changing the length.
    pub fn delete(&self, index: usize) {
        if let Some(slot) = self.0.borrow_mut().slots.get_mut(index) {
            *slot = None;
        }
    }

    /// Snapshot of all slots, holding no borrow of the array.
    pub fn slots(&self) -> Vec<Option<Value>> {
        self.0.borrow().slots.clone()
    }

    /// Attaches a non-index property to the array instance.
    pub fn set_named(&self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.borrow_mut().named.insert(key.into(), value.into());
    }

    pub fn get_named(&self, key: &str) -> Option<Value> {
        self.0.borrow().named.get(key).cloned()
    }

    pub fn named_keys(&self) -> Vec<String> {
        self.0.borrow().named.keys().cloned().collect()
    }

    /// Drops every slot and named property.
    pub fn clear(&self) {
        let mut inner = self.0.borrow_mut();
        inner.slots.clear();
        inner.named.clear();
    }
}

impl<V: Into<Value>> FromIterator<V> for ArrayRef {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        ArrayRef::from_slots(iter.into_iter().map(|v| Some(v.into())).collect())
    }
}

impl fmt::Debug for ArrayRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayRef")
            .field("id", &self.id())
            .field("len", &self.len())
            .finish()
    }
}
