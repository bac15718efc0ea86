pub mod runner;

pub use runner::{RunPolicy, Runner};
