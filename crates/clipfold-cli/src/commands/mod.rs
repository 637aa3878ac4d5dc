//! Command handlers grouped by concern.

pub(crate) mod move_batch;
pub(crate) mod scan;
pub(crate) mod thumbs;
