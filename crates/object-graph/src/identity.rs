use std::fmt;
use std::rc::Rc;

/// Reference identity of a shared node.
///
/// Two handles have the same `NodeId` iff they point at the same allocation.
/// An id is only meaningful while the node is alive; callers that key a
/// table by `NodeId` must keep the nodes alive for the table's lifetime.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    pub fn of<T: ?Sized>(rc: &Rc<T>) -> Self {
        NodeId(Rc::as_ptr(rc) as *const () as usize)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({:#x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_allocation_same_id() {
        let a = Rc::new(1);
        let b = a.clone();
        let c = Rc::new(1);
        assert_eq!(NodeId::of(&a), NodeId::of(&b));
        assert_ne!(NodeId::of(&a), NodeId::of(&c));
    }
}
