pub mod config;
pub mod error;
pub mod macie2;
pub mod operation;
pub mod wire;
