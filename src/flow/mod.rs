//! Flow derivation: monetary rounding/rendering and the edge builder.
pub mod amount;
pub mod builder;

pub use amount::{format_amount, round8, AMOUNT_EPSILON};
pub use builder::{FlowBuilder, FlowEdge};
