//! Instance introspection
//!
//! Pure extraction of one instance's declared props, reactive state and
//! computed values from the raw bags the inspect script serializes. State
//! extraction filters out every key that is also a declared prop name or a
//! vuex getter name; props and computed values are retrievable through
//! their own operations and are not "own" state.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Raw bags of one Vue instance
///
/// `props`, `data` and `computed` hold current values keyed by name;
/// `prop_names` lists the declared prop keys (`_props` or `$options.props`)
/// used by the state filter; `store_getters` lists the vuex getter keys and
/// is `None` when the instance has no vuex option. The getter exclusion is
/// deliberately narrow: it only applies when that option is present, so a
/// state key that merely shares a name with some other store's getter is
/// still surfaced.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstanceSnapshot {
    #[serde(default)]
    pub props: Map<String, Value>,
    #[serde(default)]
    pub data: Map<String, Value>,
    #[serde(default)]
    pub computed: Map<String, Value>,
    #[serde(default)]
    pub prop_names: Vec<String>,
    #[serde(default)]
    pub store_getters: Option<Vec<String>>,
}

impl InstanceSnapshot {
    /// The full declared-props mapping
    pub fn prop_map(&self) -> &Map<String, Value> {
        &self.props
    }

    /// The internal reactive-state mapping, with prop and getter keys
    /// excluded
    pub fn state_map(&self) -> Map<String, Value> {
        self.data
            .iter()
            .filter(|(key, _)| !self.prop_names.iter().any(|name| name == *key))
            .filter(|(key, _)| match &self.store_getters {
                Some(getters) => !getters.iter().any(|name| name == *key),
                None => true,
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// The full declared-computed mapping
    pub fn computed_map(&self) -> &Map<String, Value> {
        &self.computed
    }

    /// Current value of one declared prop
    pub fn prop(&self, name: &str) -> Option<Value> {
        self.prop_map().get(name).cloned()
    }

    /// Current value of one reactive-state entry
    pub fn state(&self, name: &str) -> Option<Value> {
        self.state_map().get(name).cloned()
    }

    /// Current value of one computed property
    pub fn computed(&self, name: &str) -> Option<Value> {
        self.computed_map().get(name).cloned()
    }
}
