pub mod export;
pub mod packages;
pub mod study;
