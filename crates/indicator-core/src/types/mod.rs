//! API 전반에서 사용되는 공통 타입.

mod indicator;
mod ticker;

pub use indicator::*;
pub use ticker::*;
