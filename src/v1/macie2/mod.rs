pub mod account;
pub mod bucket;
pub mod common;
pub mod filter;
pub mod finding;
pub mod identifier;
pub mod identity;
pub mod job;
pub mod operations;
pub mod sdk;
pub mod session;
pub mod tag;
pub mod usage;
