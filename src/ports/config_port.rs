//! Configuration access port trait.
//!
//! Typed getters fall back to `default` when a key is absent or unparsable;
//! `config_validation` is responsible for rejecting bad values up front.

pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
    fn get_int(&self, section: &str, key: &str, default: i64) -> i64;
    fn get_double(&self, section: &str, key: &str, default: f64) -> f64;
}
