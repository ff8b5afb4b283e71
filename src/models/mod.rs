pub mod job;

pub use job::{JobRecord, DESCRIPTION_LIMIT};
