use tracing::trace;

use crate::core::{ConfigNode, NodeLayout, OptionFields, OptionValue, SectionKind, SectionTree};
use crate::error::{ChartError, ChartResult};

/// How an update payload is applied to its target node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Field-wise update; nested mappings are flattened one level into
    /// underscore-joined sibling fields.
    #[default]
    Merge,
    /// Wholesale replacement of the target's field set.
    Force,
}

impl MergeMode {
    #[must_use]
    pub fn from_force_flag(force: bool) -> Self {
        if force { Self::Force } else { Self::Merge }
    }
}

/// Applies partial or forced updates to nodes and section trees.
pub struct MergeEngine;

impl MergeEngine {
    /// Updates `node` with `fields`, in order.
    ///
    /// Unknown field names are accepted here; key validation belongs to the
    /// series options registry.
    ///
    /// A merge into a sequence node (several y axes, say) is applied to each
    /// of its node elements. An empty sequence takes the fields as a plain
    /// object. A sequence of plain values (the color palette) has no keyed
    /// slot to merge into and fails with [`ChartError::InvalidData`].
    pub fn update(node: &mut ConfigNode, fields: OptionFields, mode: MergeMode) -> ChartResult<()> {
        match mode {
            MergeMode::Merge => {
                let flattened = flatten_fields(fields);
                trace!(node = node.name(), fields = flattened.len(), "merge update");
                match node.layout() {
                    NodeLayout::Fields => merge_into(node, flattened),
                    NodeLayout::Sequence if node.is_empty() => {
                        *node = ConfigNode::from_fields(node.name().to_owned(), flattened);
                    }
                    NodeLayout::Sequence => {
                        if node.values().any(|value| !is_field_node(value)) {
                            return Err(ChartError::InvalidData(format!(
                                "`{}` holds plain values; keyed fields cannot be merged into it",
                                node.name()
                            )));
                        }
                        for element in node.child_nodes_mut().map(|(_, element)| element) {
                            merge_into(element, flattened.clone());
                        }
                    }
                }
            }
            MergeMode::Force => {
                trace!(node = node.name(), fields = fields.len(), "force update");
                *node = ConfigNode::from_fields(node.name().to_owned(), fields);
            }
        }
        Ok(())
    }

    /// Updates one top-level section of a tree.
    pub fn update_section<S: SectionKind>(
        tree: &mut SectionTree<S>,
        section: S,
        fields: OptionFields,
        mode: MergeMode,
    ) -> ChartResult<()> {
        Self::update(tree.section_mut(section), fields, mode)
    }

    /// Replaces one top-level section with a caller-built node.
    pub fn replace_section<S: SectionKind>(tree: &mut SectionTree<S>, section: S, node: ConfigNode) {
        trace!(section = section.as_str(), fields = node.len(), "replace section");
        tree.replace_section(section, node);
    }
}

fn merge_into(node: &mut ConfigNode, fields: OptionFields) {
    for (key, value) in fields {
        node.set(key, value);
    }
}

fn is_field_node(value: &OptionValue) -> bool {
    value
        .as_node()
        .is_some_and(|node| node.layout() == NodeLayout::Fields)
}

/// Flattens nested mappings one level: `{line: {color: red}}` becomes
/// `{line_color: red}`. Sequence nodes and other values pass through
/// untouched.
#[must_use]
pub fn flatten_fields(fields: OptionFields) -> OptionFields {
    let mut flattened = OptionFields::with_capacity(fields.len());
    for (key, value) in fields {
        match value {
            OptionValue::Node(node) if node.layout() == NodeLayout::Fields => {
                for (inner_key, inner_value) in node.into_fields() {
                    flattened.insert(format!("{key}_{inner_key}"), inner_value);
                }
            }
            other => {
                flattened.insert(key, other);
            }
        }
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::option_fields;

    #[test]
    fn flatten_only_descends_one_level() {
        let mut inner = ConfigNode::new("marker");
        inner.set("states", ConfigNode::from_fields("states", option_fields([("hover", true)])));
        inner.set("enabled", false);
        let fields = option_fields([("marker", OptionValue::from(inner)), ("color", "red".into())]);

        let flattened = flatten_fields(fields);
        let keys: Vec<_> = flattened.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["marker_states", "marker_enabled", "color"]);
        assert!(flattened["marker_states"].as_node().is_some());
    }

    #[test]
    fn sequence_values_are_not_flattened() {
        let categories = ConfigNode::sequence("categories", ["a", "b"]);
        let fields = option_fields([("categories", OptionValue::from(categories.clone()))]);

        let flattened = flatten_fields(fields);
        let keys: Vec<_> = flattened.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["categories"]);
        assert_eq!(flattened["categories"].as_node(), Some(&categories));
    }

    #[test]
    fn merge_into_node_sequence_updates_every_element() {
        let axes = [true, false].map(|opposite| {
            OptionValue::from(ConfigNode::from_fields("axis", option_fields([("opposite", opposite)])))
        });
        let mut node = ConfigNode::sequence("yAxis", axes);

        MergeEngine::update(&mut node, option_fields([("min", 0)]), MergeMode::Merge)
            .expect("merge into axes");

        assert_eq!(node.layout(), NodeLayout::Sequence);
        assert_eq!(node.len(), 2);
        for axis in node.values() {
            let axis = axis.as_node().expect("axis node");
            assert_eq!(axis.get("min"), Some(&OptionValue::Integer(0)));
        }
    }

    #[test]
    fn merge_into_plain_value_sequence_is_rejected() {
        let mut palette = ConfigNode::sequence("colors", ["#111", "#222"]);
        let err = MergeEngine::update(&mut palette, option_fields([("min", 0)]), MergeMode::Merge)
            .expect_err("palette has no keyed slots");
        assert!(matches!(err, ChartError::InvalidData(_)));
        assert_eq!(palette.len(), 2);
    }

    #[test]
    fn empty_nested_mapping_contributes_no_fields() {
        let fields = option_fields([("events", OptionValue::from(ConfigNode::new("events")))]);
        assert!(flatten_fields(fields).is_empty());
    }
}
