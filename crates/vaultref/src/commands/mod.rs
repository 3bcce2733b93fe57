//! Command implementations

pub mod extract;
pub mod resolve;
pub mod scan;
pub mod version;
