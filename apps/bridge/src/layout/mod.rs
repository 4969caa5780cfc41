// Report layout: Helvetica metrics, A4 page geometry and greedy word wrap.
// Pure functions; the PDF writer in `render` consumes their output.

pub mod font_metrics;
pub mod wrap;

pub use font_metrics::{default_page_config, PageConfig};
pub use wrap::wrap_text;
