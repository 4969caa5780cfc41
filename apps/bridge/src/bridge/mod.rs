// Career bridge: session input -> prompt -> one generation call -> report + PDF.
// All generation calls go through llm_client via the ReportGenerator seam.

pub mod builder;
pub mod generator;
pub mod handlers;
pub mod page;
pub mod pipeline;
pub mod prompts;
pub mod session;
