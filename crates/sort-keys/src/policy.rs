use crate::context::Context;
use crate::options::{DeepPolicy, IgnorePolicy, Options};

/// Resolves the `deep` and `ignore_keys` options into per-key decisions.
///
/// Decisions are not cached: every call consults the policy afresh.
pub(crate) struct PolicyEvaluator<'a> {
    deep: &'a DeepPolicy,
    ignore: &'a IgnorePolicy,
}

impl<'a> PolicyEvaluator<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self {
            deep: &options.deep,
            ignore: &options.ignore_keys,
        }
    }

    pub fn should_sort_deep(&self, context: &Context) -> bool {
        match self.deep {
            DeepPolicy::Constant(deep) => *deep,
            DeepPolicy::Predicate(predicate) => predicate(context),
        }
    }

    pub fn should_ignore(&self, context: &Context) -> bool {
        match self.ignore {
            IgnorePolicy::Never => false,
            IgnorePolicy::Keys(keys) => match &context.key {
                Some(key) => keys.iter().any(|ignored| ignored == key),
                None => false,
            },
            IgnorePolicy::Predicate(predicate) => predicate(context),
        }
    }
}
