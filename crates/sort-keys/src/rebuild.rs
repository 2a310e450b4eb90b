//! Traversal and rebuild of the input graph.
//!
//! Every traversed input node maps to exactly one output node. The mapping
//! is recorded before any child is visited, so a child that refers back to
//! a node under construction resolves to the partially built output node.

use std::cmp::Ordering;
use std::collections::HashMap;

use object_graph::pointer::format_pointer;
use object_graph::{ArrayRef, NodeId, ObjectRef, PropertyDescriptor, Value};
use tracing::trace;

use crate::compare::default_compare;
use crate::context::Context;
use crate::options::Options;
use crate::policy::PolicyEvaluator;

struct Entry {
    key: String,
    descriptor: PropertyDescriptor,
    context: Context,
}

pub(crate) struct Rebuilder<'a> {
    policy: PolicyEvaluator<'a>,
    compare: &'a dyn Fn(&str, &str) -> Ordering,
    /// Input node identity -> (input node, output node). The input handle is
    /// held so its address cannot be reused while the table is alive.
    memo: HashMap<NodeId, (Value, Value)>,
}

impl<'a> Rebuilder<'a> {
    pub fn new(options: &'a Options) -> Self {
        let compare: &'a dyn Fn(&str, &str) -> Ordering = match &options.compare {
            Some(compare) => compare.as_ref(),
            None => &default_compare,
        };
        Self {
            policy: PolicyEvaluator::new(options),
            compare,
            memo: HashMap::new(),
        }
    }

    pub fn rebuild_object(&mut self, node: &ObjectRef, path: &[String], depth: usize) -> Value {
        if let Some(output) = self.lookup(node.id(), path) {
            return output;
        }

        // The root alone gets a context of its own; a `true` verdict keeps
        // all of its keys in their original order.
        let ignore_all = path.is_empty()
            && self
                .policy
                .should_ignore(&Context::root(Value::Object(node.clone())));

        let mut ignored = Vec::new();
        let mut sortable = Vec::new();
        for (key, descriptor) in node.enumerable_entries() {
            let value = descriptor.data_value().cloned().unwrap_or_default();
            let context = Context::child(path, &key, value, depth);
            let entry = Entry {
                key,
                descriptor,
                context,
            };
            if ignore_all || self.policy.should_ignore(&entry.context) {
                ignored.push(entry);
            } else {
                sortable.push(entry);
            }
        }
        let compare = self.compare;
        sortable.sort_by(|a, b| compare(&a.key, &b.key));

        let output = ObjectRef::new();
        self.register(Value::Object(node.clone()), Value::Object(output.clone()));
        trace!(
            pointer = %format_pointer(path),
            depth,
            ignored = ignored.len(),
            sorted = sortable.len(),
            "rebuilding object"
        );

        for entry in ignored.into_iter().chain(sortable) {
            let descriptor = match entry.descriptor {
                PropertyDescriptor::Accessor(accessor) => PropertyDescriptor::Accessor(accessor),
                PropertyDescriptor::Data(mut data) => {
                    data.value = self.process(&entry.context, depth);
                    PropertyDescriptor::Data(data)
                }
            };
            output.define_property(entry.key, descriptor);
        }
        Value::Object(output)
    }

    /// Element order is kept; holes stay holes and named properties of the
    /// input array are not carried over.
    pub fn rebuild_array(&mut self, node: &ArrayRef, path: &[String], depth: usize) -> Value {
        if let Some(output) = self.lookup(node.id(), path) {
            return output;
        }

        let slots = node.slots();
        let output = ArrayRef::with_length(slots.len());
        self.register(Value::Array(node.clone()), Value::Array(output.clone()));
        trace!(pointer = %format_pointer(path), depth, len = slots.len(), "rebuilding array");

        for (index, slot) in slots.into_iter().enumerate() {
            let Some(value) = slot else {
                continue;
            };
            let context = Context::child(path, &index.to_string(), value, depth);
            output.set(index, self.process(&context, depth));
        }
        Value::Array(output)
    }

    /// Output value for the data property or element described by
    /// `context`. Only plain objects and arrays are candidates for descent;
    /// everything else is passed through by reference.
    fn process(&mut self, context: &Context, depth: usize) -> Value {
        match &context.value {
            Value::Object(obj) if self.policy.should_sort_deep(context) => {
                self.rebuild_object(obj, &context.path, depth + 1)
            }
            Value::Array(arr) if self.policy.should_sort_deep(context) => {
                self.rebuild_array(arr, &context.path, depth + 1)
            }
            other => other.clone(),
        }
    }

    fn lookup(&self, id: NodeId, path: &[String]) -> Option<Value> {
        let (_, output) = self.memo.get(&id)?;
        trace!(pointer = %format_pointer(path), "reusing rebuilt node");
        Some(output.clone())
    }

    fn register(&mut self, input: Value, output: Value) {
        if let Some(id) = input.node_id() {
            self.memo.insert(id, (input, output));
        }
    }
}
