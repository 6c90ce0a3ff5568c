pub mod filter;
pub mod member;
pub mod vocation;

pub use filter::{FilterChoice, FilterSelection, distinct_ranks};
pub use member::*;
pub use vocation::{VocationFamily, background_for_vocation};
