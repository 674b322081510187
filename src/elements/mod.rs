//! Domain entities: nodes, elements and support conditions

mod element;
mod node;
mod support;

pub use element::Element;
pub use node::Node;
pub use support::{Support, SupportLocation};
