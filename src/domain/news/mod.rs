//! News catalog and the price shocks headlines trigger.

pub mod catalog;
pub mod effect;
pub mod impact;

pub use catalog::{default_catalog, NewsCatalog, NewsItem};
pub use effect::Effect;
