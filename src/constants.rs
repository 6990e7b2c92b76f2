//! Generator constants organized by category.
//!
//! Centralizing magic numbers makes tuning easier and documents intent.

// =============================================================================
// PARTITIONING
// =============================================================================

/// Minimum size of a BSP leaf on either axis
pub const DUNGEON_MIN_LEAF_SIZE: i32 = 13;
/// Leaves larger than this on either axis are always split
pub const DUNGEON_MAX_LEAF_SIZE: i32 = 25;
/// Chance that a leaf within the size limit splits anyway
pub const DUNGEON_SPLIT_PROBABILITY: f64 = 0.25;
/// Aspect ratio (as numerator/denominator) that forces the split axis
pub const DUNGEON_ASPECT_NUM: i32 = 5;
pub const DUNGEON_ASPECT_DEN: i32 = 4;

// =============================================================================
// ROOMS
// =============================================================================

/// Smallest room that still has an interior tile for corridor endpoints
pub const DUNGEON_MIN_CONNECTABLE_ROOM: i32 = 3;
/// Default minimum room size; the smallest size config validation accepts
pub const DUNGEON_MIN_ROOM_SIZE: i32 = DUNGEON_MIN_CONNECTABLE_ROOM;
/// Margin around rooms within their leaf
pub const DUNGEON_ROOM_MARGIN: i32 = 1;

// =============================================================================
// MAP
// =============================================================================

/// Largest accepted map side; keeps area and aspect arithmetic within `i32`
pub const DUNGEON_MAX_MAP_SIZE: i32 = 16_384;
