pub mod scan_line;
pub mod edge_list;
pub mod polygon_list;

pub use crate::picture::{Color, Picture};
