pub mod config;
pub mod dispatcher;
pub mod error;
pub mod stdio;
pub mod tools;
