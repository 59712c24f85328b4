pub mod buffer;
pub mod primitives;
pub mod tessellate;

pub use buffer::{Mesh, VERTEX_STRIDE, Vertex};
pub use tessellate::tessellate;
