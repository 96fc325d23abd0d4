pub mod cache;
pub mod comparator;
pub mod dispatch;
pub mod engine;
pub mod facade;
pub mod hash;
pub mod numeric;
pub mod strategy;
pub mod structural;
