pub mod cache;
pub mod dispatch;
pub mod failures;
pub mod laws;
pub mod numeric;
pub mod raw_bytes;
pub mod structural;
