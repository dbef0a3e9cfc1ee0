mod encoder;
mod null_renderer;
mod payload;

pub use encoder::{AugmentedEncoder, EncodeNode};
pub use null_renderer::NullRenderer;
pub use payload::{ChartPayload, DEFAULT_CSS_SOURCES, DEFAULT_JS_SOURCES};

use crate::error::ChartResult;

/// Contract implemented by the page-assembly collaborator.
///
/// Implementations receive fully serialized documents plus container and
/// asset details and return final markup. They never see the option tree.
pub trait PageRenderer {
    fn render(&mut self, payload: &ChartPayload) -> ChartResult<String>;
}
