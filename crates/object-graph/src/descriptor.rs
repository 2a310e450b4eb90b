//! Property descriptors.
//!
//! A property is either a data property (a stored [`Value`]) or an accessor
//! property (a getter/setter pair). Both carry the `enumerable` and
//! `configurable` attributes; only data properties carry `writable`.

use std::fmt;
use std::rc::Rc;

use crate::value::Value;

/// Getter of an accessor property.
pub type Getter = Rc<dyn Fn() -> Value>;

/// Setter of an accessor property.
pub type Setter = Rc<dyn Fn(Value)>;

/// A data property: value plus attribute flags.
#[derive(Debug, Clone)]
pub struct DataDescriptor {
    pub value: Value,
    pub writable: bool,
    pub enumerable: bool,
    pub configurable: bool,
}

impl DataDescriptor {
    /// A writable, enumerable, configurable data property, which is what a
    /// plain assignment creates.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            writable: true,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn writable(mut self, writable: bool) -> Self {
        self.writable = writable;
        self
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }
}

/// An accessor property. Copying an accessor copies the function handles;
/// the getter is not invoked.
#[derive(Clone)]
pub struct AccessorDescriptor {
    pub get: Option<Getter>,
    pub set: Option<Setter>,
    pub enumerable: bool,
    pub configurable: bool,
}

impl AccessorDescriptor {
    /// An enumerable, configurable accessor with neither getter nor setter.
    pub fn new() -> Self {
        Self {
            get: None,
            set: None,
            enumerable: true,
            configurable: true,
        }
    }

    pub fn getter(mut self, get: impl Fn() -> Value + 'static) -> Self {
        self.get = Some(Rc::new(get));
        self
    }

    pub fn setter(mut self, set: impl Fn(Value) + 'static) -> Self {
        self.set = Some(Rc::new(set));
        self
    }

    pub fn enumerable(mut self, enumerable: bool) -> Self {
        self.enumerable = enumerable;
        self
    }

    pub fn configurable(mut self, configurable: bool) -> Self {
        self.configurable = configurable;
        self
    }

    /// Invokes the getter, yielding `Undefined` when there is none.
    pub fn read(&self) -> Value {
        match &self.get {
            Some(get) => get(),
            None => Value::Undefined,
        }
    }
}

impl Default for AccessorDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for AccessorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessorDescriptor")
            .field("get", &self.get.as_ref().map(|_| "[Function]"))
            .field("set", &self.set.as_ref().map(|_| "[Function]"))
            .field("enumerable", &self.enumerable)
            .field("configurable", &self.configurable)
            .finish()
    }
}

/// Full metadata record of an own property.
#[derive(Debug, Clone)]
pub enum PropertyDescriptor {
    Data(DataDescriptor),
    Accessor(AccessorDescriptor),
}

impl PropertyDescriptor {
    pub fn is_enumerable(&self) -> bool {
        match self {
            PropertyDescriptor::Data(data) => data.enumerable,
            PropertyDescriptor::Accessor(accessor) => accessor.enumerable,
        }
    }

    pub fn is_configurable(&self) -> bool {
        match self {
            PropertyDescriptor::Data(data) => data.configurable,
            PropertyDescriptor::Accessor(accessor) => accessor.configurable,
        }
    }

    pub fn is_accessor(&self) -> bool {
        matches!(self, PropertyDescriptor::Accessor(_))
    }

    /// The stored value of a data property; `None` for accessors.
    pub fn data_value(&self) -> Option<&Value> {
        match self {
            PropertyDescriptor::Data(data) => Some(&data.value),
            PropertyDescriptor::Accessor(_) => None,
        }
    }

    /// Reads the property the way a member access would: the stored value,
    /// or the result of calling the getter.
    pub fn read(&self) -> Value {
        match self {
            PropertyDescriptor::Data(data) => data.value.clone(),
            PropertyDescriptor::Accessor(accessor) => accessor.read(),
        }
    }
}

impl From<DataDescriptor> for PropertyDescriptor {
    fn from(data: DataDescriptor) -> Self {
        PropertyDescriptor::Data(data)
    }
}

impl From<AccessorDescriptor> for PropertyDescriptor {
    fn from(accessor: AccessorDescriptor) -> Self {
        PropertyDescriptor::Accessor(accessor)
    }
}
