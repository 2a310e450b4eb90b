//! Sorting options.
//!
//! [`Options`] carries everything a call needs, callables included.
//! [`SortConfig`] is its declarative subset, for options that come from a
//! config file or another serialized source.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::context::Context;

/// Key comparator.
pub type CompareFn = Rc<dyn Fn(&str, &str) -> Ordering>;

/// Context-driven decision.
pub type Predicate = Rc<dyn Fn(&Context) -> bool>;

/// Whether to descend into a nested object or array.
#[derive(Clone)]
pub enum DeepPolicy {
    Constant(bool),
    Predicate(Predicate),
}

impl Default for DeepPolicy {
    fn default() -> Self {
        DeepPolicy::Constant(false)
    }
}

impl From<bool> for DeepPolicy {
    fn from(deep: bool) -> Self {
        DeepPolicy::Constant(deep)
    }
}

impl fmt::Debug for DeepPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeepPolicy::Constant(deep) => write!(f, "Constant({deep})"),
            DeepPolicy::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

/// Which keys to leave out of their object's sort.
#[derive(Clone, Default)]
pub enum IgnorePolicy {
    #[default]
    Never,
    Keys(Vec<String>),
    Predicate(Predicate),
}

impl fmt::Debug for IgnorePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IgnorePolicy::Never => f.write_str("Never"),
            IgnorePolicy::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            IgnorePolicy::Predicate(_) => f.write_str("Predicate"),
        }
    }
}

/// Options for [`sort_keys`](crate::sort_keys).
///
/// # Example
///
/// ```
/// use sort_keys::Options;
///
/// let options = Options::new()
///     .compare(|a, b| b.cmp(a))
///     .deep(true)
///     .ignore_keys(["id"]);
/// assert!(options.compare.is_some());
/// ```
#[derive(Clone, Default)]
pub struct Options {
    /// Comparator for keys that take part in sorting. `None` selects
    /// [`default_compare`](crate::default_compare).
    pub compare: Option<CompareFn>,
    pub deep: DeepPolicy,
    pub ignore_keys: IgnorePolicy,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(mut self, compare: impl Fn(&str, &str) -> Ordering + 'static) -> Self {
        self.compare = Some(Rc::new(compare));
        self
    }

    pub fn deep(mut self, deep: bool) -> Self {
        self.deep = DeepPolicy::Constant(deep);
        self
    }

    /// Descend only where `predicate` says so.
    pub fn deep_when(mut self, predicate: impl Fn(&Context) -> bool + 'static) -> Self {
        self.deep = DeepPolicy::Predicate(Rc::new(predicate));
        self
    }

    pub fn ignore_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_keys = IgnorePolicy::Keys(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Leave a key out of its object's sort when `predicate` says so.
    pub fn ignore_when(mut self, predicate: impl Fn(&Context) -> bool + 'static) -> Self {
        self.ignore_keys = IgnorePolicy::Predicate(Rc::new(predicate));
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("compare", &self.compare.as_ref().map(|_| "custom"))
            .field("deep", &self.deep)
            .field("ignore_keys", &self.ignore_keys)
            .finish()
    }
}

/// Declarative sort options.
///
/// Field names follow the camelCase convention of JSON configs:
///
/// ```
/// use sort_keys::{Options, SortConfig};
///
/// let config: SortConfig = serde_json::from_str(r#"{"deep": true, "ignoreKeys": ["x"]}"#).unwrap();
/// let options = Options::from(config);
/// # let _ = options;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SortConfig {
    pub deep: bool,
    pub ignore_keys: Vec<String>,
}

impl From<SortConfig> for Options {
    fn from(config: SortConfig) -> Self {
        let ignore_keys = if config.ignore_keys.is_empty() {
            IgnorePolicy::Never
        } else {
            IgnorePolicy::Keys(config.ignore_keys)
        };
        Options {
            compare: None,
            deep: DeepPolicy::Constant(config.deep),
            ignore_keys,
        }
    }
}
