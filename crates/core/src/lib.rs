#![forbid(unsafe_code)]

pub mod grid;
pub mod grid_view;

pub use grid::{NormalMap, RangeImage, VertexMap};
pub use grid_view::{RangeView, VertexView};
