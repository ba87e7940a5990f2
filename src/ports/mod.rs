//! Port traits at the I/O and randomness seams.

pub mod catalog_port;
pub mod config_port;
pub mod random_port;
pub mod report_port;
