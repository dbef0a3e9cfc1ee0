use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::trace;
use uuid::Uuid;

use crate::core::{
    ConfigNode, DataPoint, DateLiteral, LiteralValue, NodeLayout, OptionValue, SectionKind,
    SectionTree, SeriesDescriptor,
};
use crate::error::{ChartError, ChartResult};

/// Root handed to [`AugmentedEncoder::serialize`].
///
/// Every serializable entity is tagged explicitly; the encoder switches on the
/// tag instead of inspecting concrete types.
#[derive(Debug, Clone, Copy)]
pub enum EncodeNode<'a> {
    Tree(&'a crate::core::ConfigTree),
    Globals(&'a crate::core::GlobalTree),
    SeriesList(&'a [SeriesDescriptor]),
    Series(&'a SeriesDescriptor),
    Node(&'a ConfigNode),
    Value(&'a OptionValue),
}

/// Length of a placeholder: a v4 uuid in simple (hex) form.
const PLACEHOLDER_LEN: usize = 32;

/// Two-pass serializer producing JSON-shaped text with unquoted literals.
///
/// Pass 1 builds valid JSON in which each literal is a quoted, single-use
/// placeholder. Pass 2 walks the JSON string tokens once, left to right,
/// swapping every placeholder token for the literal's raw text. The
/// replacement table lives only for one `serialize` call.
#[derive(Debug, Default)]
pub struct AugmentedEncoder {
    /// Placeholder to raw literal text.
    replacements: HashMap<String, String>,
}

impl AugmentedEncoder {
    pub fn serialize(root: EncodeNode<'_>) -> ChartResult<String> {
        let mut encoder = Self::default();
        let structural = encoder.encode_root(root)?;
        let text = serde_json::to_string(&structural)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))?;
        trace!(
            placeholders = encoder.replacements.len(),
            structural_len = text.len(),
            "structural pass complete"
        );
        substitute_placeholders(&text, &encoder.replacements)
    }

    fn encode_root(&mut self, root: EncodeNode<'_>) -> ChartResult<Value> {
        match root {
            EncodeNode::Tree(tree) => self.encode_tree(tree),
            EncodeNode::Globals(tree) => self.encode_tree(tree),
            EncodeNode::SeriesList(series) => series
                .iter()
                .map(|entry| self.encode_series(entry))
                .collect::<ChartResult<Vec<_>>>()
                .map(Value::Array),
            EncodeNode::Series(series) => self.encode_series(series),
            EncodeNode::Node(node) => self.encode_node(node),
            EncodeNode::Value(value) => self.encode_value(value),
        }
    }

    fn encode_tree<S: SectionKind>(&mut self, tree: &SectionTree<S>) -> ChartResult<Value> {
        let mut map = Map::new();
        for (section, node) in tree.iter() {
            map.insert(section.as_str().to_owned(), self.encode_node(node)?);
        }
        Ok(Value::Object(map))
    }

    fn encode_node(&mut self, node: &ConfigNode) -> ChartResult<Value> {
        match node.layout() {
            NodeLayout::Fields => {
                let mut map = Map::new();
                for (key, value) in node.iter() {
                    map.insert(key.to_owned(), self.encode_value(value)?);
                }
                Ok(Value::Object(map))
            }
            NodeLayout::Sequence => node
                .values()
                .map(|value| self.encode_value(value))
                .collect::<ChartResult<Vec<_>>>()
                .map(Value::Array),
        }
    }

    fn encode_series(&mut self, series: &SeriesDescriptor) -> ChartResult<Value> {
        let mut map = Map::new();
        map.insert(
            "type".to_owned(),
            Value::String(series.series_type.as_str().to_owned()),
        );
        map.insert("name".to_owned(), Value::String(series.name.clone()));
        let data = series
            .data
            .iter()
            .map(|point| self.encode_data_point(point))
            .collect::<ChartResult<Vec<_>>>()?;
        map.insert("data".to_owned(), Value::Array(data));
        for (key, value) in series.options.iter() {
            map.insert(key.to_owned(), self.encode_value(value)?);
        }
        Ok(Value::Object(map))
    }

    fn encode_data_point(&mut self, point: &DataPoint) -> ChartResult<Value> {
        match point {
            DataPoint::Value(value) => self.encode_value(value),
            DataPoint::Pair(x, y) => Ok(Value::Array(vec![
                self.encode_value(x)?,
                self.encode_value(y)?,
            ])),
            DataPoint::Point(node) => self.encode_node(node),
        }
    }

    fn encode_value(&mut self, value: &OptionValue) -> ChartResult<Value> {
        match value {
            OptionValue::DateTime(time) => {
                self.register(&LiteralValue::Date(DateLiteral::from_datetime_with_millis(*time)))
            }
            OptionValue::Literal(literal) => self.register(literal),
            OptionValue::Node(node) => self.encode_node(node),
            OptionValue::Array(items) => items
                .iter()
                .map(|item| self.encode_value(item))
                .collect::<ChartResult<Vec<_>>>()
                .map(Value::Array),
            OptionValue::Null => Ok(Value::Null),
            OptionValue::Bool(flag) => Ok(Value::Bool(*flag)),
            OptionValue::Integer(number) => Ok(Value::from(*number)),
            OptionValue::Float(number) => Ok(Value::from(*number)),
            OptionValue::String(text) => Ok(Value::String(text.clone())),
        }
    }

    fn register(&mut self, literal: &LiteralValue) -> ChartResult<Value> {
        let text = literal.to_script()?;
        let placeholder = self.fresh_placeholder();
        self.replacements.insert(placeholder.clone(), text);
        Ok(Value::String(placeholder))
    }

    fn fresh_placeholder(&self) -> String {
        loop {
            let candidate = Uuid::new_v4().simple().to_string();
            if !self.replacements.contains_key(&candidate) {
                return candidate;
            }
        }
    }
}

/// Replaces each quoted placeholder token in `text` with its literal text.
///
/// Every placeholder must occur exactly once, as a whole string token;
/// a placeholder that is missing, repeated, or embedded in other string
/// content is a [`ChartError::PlaceholderCollision`].
fn substitute_placeholders(
    text: &str,
    replacements: &HashMap<String, String>,
) -> ChartResult<String> {
    if replacements.is_empty() {
        return Ok(text.to_owned());
    }
    let extra: usize = replacements.values().map(String::len).sum();
    let mut out = String::with_capacity(text.len() + extra);
    let mut hits: HashMap<&str, usize> = HashMap::with_capacity(replacements.len());
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find('"') {
        let open = cursor + offset;
        let close = closing_quote(text, open)?;
        let content = &text[open + 1..close];
        out.push_str(&text[cursor..open]);
        match replacements.get_key_value(content) {
            Some((placeholder, literal)) => {
                let count = hits.entry(placeholder.as_str()).or_default();
                *count += 1;
                if *count > 1 {
                    return Err(collision(placeholder));
                }
                out.push_str(literal);
            }
            None => {
                if let Some(placeholder) = embedded_placeholder(content, replacements) {
                    return Err(collision(placeholder));
                }
                out.push_str(&text[open..=close]);
            }
        }
        cursor = close + 1;
    }
    out.push_str(&text[cursor..]);

    if let Some(missing) = replacements
        .keys()
        .find(|placeholder| !hits.contains_key(placeholder.as_str()))
    {
        return Err(collision(missing));
    }
    Ok(out)
}

/// Byte index of the quote closing the JSON string opened at `open`.
fn closing_quote(text: &str, open: usize) -> ChartResult<usize> {
    let bytes = text.as_bytes();
    let mut index = open + 1;
    while index < bytes.len() {
        match bytes[index] {
            b'\\' => index += 2,
            b'"' => return Ok(index),
            _ => index += 1,
        }
    }
    Err(ChartError::InvalidData(
        "unterminated string in structural output".to_owned(),
    ))
}

/// Finds a registered placeholder inside longer string content.
fn embedded_placeholder<'a>(
    content: &str,
    replacements: &'a HashMap<String, String>,
) -> Option<&'a str> {
    let bytes = content.as_bytes();
    let mut run_start = 0;
    for index in 0..=bytes.len() {
        let is_hex = bytes
            .get(index)
            .is_some_and(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(b));
        if is_hex {
            continue;
        }
        if index - run_start >= PLACEHOLDER_LEN {
            for window in run_start..=index - PLACEHOLDER_LEN {
                let candidate = &content[window..window + PLACEHOLDER_LEN];
                if let Some((placeholder, _)) = replacements.get_key_value(candidate) {
                    return Some(placeholder.as_str());
                }
            }
        }
        run_start = index + 1;
    }
    None
}

fn collision(placeholder: &str) -> ChartError {
    ChartError::PlaceholderCollision {
        placeholder: placeholder.to_owned(),
    }
}
