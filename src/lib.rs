//! Binary space partition dungeon generator.
//!
//! The map is split recursively into leaf regions, one room is inscribed in
//! every terminal leaf, and sibling subtrees are joined bottom-up with
//! straight or L-shaped corridors. The result is a plain [`Dungeon`] value
//! that a renderer can draw however it likes; [`TileGrid`] rasterizes it
//! into wall and floor tiles.
//!
//! ```
//! use bsp_dungeon::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig::default().with_seed(7);
//! let dungeon = generate(50, 50, &config).unwrap();
//! assert!(dungeon.is_connected());
//! ```

pub mod bsp;
pub mod config;
pub mod constants;
pub mod context;
pub mod corridor;
pub mod dungeon;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod random;
pub mod tile;

pub use bsp::{BspTree, Region, SplitAxis};
pub use config::GeneratorConfig;
pub use corridor::{Connection, Corridor, Elbow};
pub use dungeon::{Dungeon, DungeonGenerator, Room, RoomId};
pub use error::{DungeonError, Result};
pub use geometry::Rect;
pub use grid::TileGrid;
pub use tile::TileType;

/// Generate a dungeon for a `map_width` x `map_height` map.
pub fn generate(map_width: i32, map_height: i32, config: &GeneratorConfig) -> Result<Dungeon> {
    DungeonGenerator::generate(map_width, map_height, config)
}
