use indexmap::IndexMap;

use crate::core::OptionValue;
use crate::error::{ChartError, ChartResult};

/// Ordered field map used as update payloads and node storage.
pub type OptionFields = IndexMap<String, OptionValue>;

/// Builds an [`OptionFields`] map from loosely typed pairs.
#[must_use]
pub fn option_fields<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> OptionFields
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    pairs
        .into_iter()
        .map(|(key, value)| (key.into(), value.into()))
        .collect()
}

/// How a node exports its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NodeLayout {
    /// Exported as an object keyed by field name.
    #[default]
    Fields,
    /// Exported as an array of field values in insertion order.
    Sequence,
}

/// A named, mutable bag of configuration fields.
///
/// Field names are unique; insertion order is kept so that serialized
/// output is deterministic.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigNode {
    name: String,
    layout: NodeLayout,
    fields: OptionFields,
}

impl ConfigNode {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layout: NodeLayout::Fields,
            fields: OptionFields::new(),
        }
    }

    /// Creates a node exported as an array of `values`.
    #[must_use]
    pub fn sequence<V: Into<OptionValue>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        let fields = values
            .into_iter()
            .enumerate()
            .map(|(index, value)| (index.to_string(), value.into()))
            .collect();
        Self {
            name: name.into(),
            layout: NodeLayout::Sequence,
            fields,
        }
    }

    #[must_use]
    pub fn from_fields(name: impl Into<String>, fields: OptionFields) -> Self {
        Self {
            name: name.into(),
            layout: NodeLayout::Fields,
            fields,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn layout(&self) -> NodeLayout {
        self.layout
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.fields.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut OptionValue> {
        self.fields.get_mut(key)
    }

    /// Sets a field, returning the previous value if any.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        self.fields.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.fields.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn values(&self) -> impl Iterator<Item = &OptionValue> {
        self.fields.values()
    }

    #[must_use]
    pub fn fields(&self) -> &OptionFields {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> OptionFields {
        self.fields
    }

    #[must_use]
    pub fn child(&self, key: &str) -> Option<&ConfigNode> {
        self.fields.get(key).and_then(OptionValue::as_node)
    }

    pub fn child_mut(&mut self, key: &str) -> Option<&mut ConfigNode> {
        self.fields.get_mut(key).and_then(OptionValue::as_node_mut)
    }

    /// Returns the child node at `key`, creating an empty one when the field
    /// is missing or holds a non-node value.
    pub fn ensure_child(&mut self, key: &str) -> ChartResult<&mut ConfigNode> {
        let slot = self.fields.entry(key.to_owned()).or_default();
        if slot.as_node().is_none() {
            *slot = OptionValue::Node(ConfigNode::new(key));
        }
        slot.as_node_mut().ok_or_else(|| {
            ChartError::InvalidData(format!("field `{key}` could not hold a child node"))
        })
    }

    /// Iterates the fields holding nested nodes.
    pub fn child_nodes_mut(&mut self) -> impl Iterator<Item = (&str, &mut ConfigNode)> {
        self.fields.iter_mut().filter_map(|(key, value)| {
            value.as_node_mut().map(|node| (key.as_str(), node))
        })
    }
}
