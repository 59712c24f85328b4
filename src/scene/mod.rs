//! 3D scene composition for the flower and apple tree variants

pub mod apple_tree;
pub mod flower;
pub mod fruit;
pub mod graph;

pub use apple_tree::{TreeParams, build_apple_tree_scene};
pub use flower::build_flower_scene;
pub use fruit::{FruitLayout, sample_fruit_positions};
pub use graph::{Geometry, Material, NodeKind, SceneNode, Transform};
