pub mod catalog;
pub mod probe;
pub mod report;
pub mod resolver;
