pub mod apply_flow;
pub mod job_ctx;

pub use apply_flow::{ApplyFlow, ProcessResult};
pub use job_ctx::JobCtx;
