pub mod literal;
pub mod merge;
pub mod node;
pub mod series;
pub mod tree;
pub mod value;

pub use literal::{DATE_CONSTRUCTOR, DateLiteral, Formatter, LiteralValue, ScriptObject};
pub use merge::{MergeEngine, MergeMode, flatten_fields};
pub use node::{ConfigNode, NodeLayout, OptionFields, option_fields};
pub use series::{DataPoint, SeriesDescriptor, SeriesTemplate, SeriesType};
pub use tree::{ConfigTree, GlobalSection, GlobalTree, Section, SectionKind, SectionTree};
pub use value::OptionValue;
