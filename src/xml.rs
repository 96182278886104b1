//! XML element module

pub mod attribute;
pub mod model;
pub mod parser;
pub mod query;

pub use attribute::{Attribute, OptionalAttribute};
pub use model::Node;
pub use parser::Parser;
pub use query::Selector;
