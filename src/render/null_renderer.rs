use crate::error::ChartResult;
use crate::render::{ChartPayload, PageRenderer};

/// Page renderer used by tests and headless usage.
///
/// It still validates the payload and keeps the last one it received, so
/// tests can inspect exactly what a real template backend would get.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_payload: Option<ChartPayload>,
}

impl PageRenderer for NullRenderer {
    fn render(&mut self, payload: &ChartPayload) -> ChartResult<String> {
        payload.validate()?;
        self.render_count += 1;
        self.last_payload = Some(payload.clone());
        Ok(String::new())
    }
}
