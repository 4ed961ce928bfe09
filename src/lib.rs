#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod attribute;
mod buffer;
mod debug;
mod error;
mod index;
mod mesh;
mod view;

pub use attribute::*;
pub use buffer::*;
pub use debug::*;
pub use error::*;
pub use index::*;
pub use mesh::*;
pub use view::*;
