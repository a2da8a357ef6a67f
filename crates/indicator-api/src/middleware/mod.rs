//! API 서버용 HTTP middleware.

mod metrics;
mod timeout;

pub use metrics::metrics_layer;
pub use timeout::{timeout_error_body, TIMEOUT_MESSAGE};
