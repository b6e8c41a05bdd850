pub mod bulk;
pub mod error;
pub mod service;
pub mod situation;
