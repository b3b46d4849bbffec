//! Chart-graph assembly: node/link contract types, dedup, and coloring.
pub mod assemble;
pub mod palette;

pub use assemble::{assemble, SankeyGraph, SankeyLink, SankeyNode};
pub use palette::{COLOR_PALETTE, RESOURCE_POOL_COLOR};
