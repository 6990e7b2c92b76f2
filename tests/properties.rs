//! Property tests over random seeds and map sizes.

use bsp_dungeon::{generate, BspTree, DungeonGenerator, GeneratorConfig, Rect, TileGrid};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (5i32..=16, 0i32..=20, 3i32..=6, 0.0f64..=1.0, any::<u64>()).prop_filter_map(
        "room must fit in leaf",
        |(min_leaf, extra, min_room, split_probability, seed)| {
            (min_room + 2 <= min_leaf).then(|| GeneratorConfig {
                min_leaf_size: min_leaf,
                max_leaf_size: min_leaf + extra,
                min_room_size: min_room,
                split_probability,
                seed: Some(seed),
            })
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// No two rooms touch, even at the edges.
    #[test]
    fn prop_rooms_never_intersect(
        config in config_strategy(),
        width in 16i32..120,
        height in 16i32..120,
    ) {
        let dungeon = generate(width, height, &config).unwrap();
        for (i, a) in dungeon.rooms.iter().enumerate() {
            for b in &dungeon.rooms[i + 1..] {
                prop_assert!(!a.rect.intersects(&b.rect), "{:?} vs {:?}", a, b);
            }
        }
    }

    /// Each room sits inside its leaf with a margin, and the leaves cover the
    /// map without overlap.
    #[test]
    fn prop_rooms_inset_in_leaves(
        config in config_strategy(),
        width in 16i32..120,
        height in 16i32..120,
    ) {
        let dungeon = generate(width, height, &config).unwrap();
        let mut leaf_area = 0;
        for room in &dungeon.rooms {
            prop_assert!(room.leaf.contains_with_margin(&room.rect, 1));
            prop_assert!(room.rect.width >= config.min_room_size);
            prop_assert!(room.rect.height >= config.min_room_size);
            leaf_area += room.leaf.area();
        }
        prop_assert_eq!(leaf_area, width * height);
    }

    /// Split children tile their parent and respect the leaf floor.
    #[test]
    fn prop_children_tile_parent(
        config in config_strategy(),
        width in 16i32..120,
        height in 16i32..120,
    ) {
        let mut rng = StdRng::seed_from_u64(config.seed.unwrap_or_default());
        let mut ctx = bsp_dungeon::context::GenContext::new(&config, &mut rng);
        let tree = BspTree::build(Rect::new(0, 0, width, height), &mut ctx);
        for region in tree.root().walk() {
            if let Some((a, b)) = region.children() {
                let (a, b, p) = (a.bounds(), b.bounds(), region.bounds());
                prop_assert_eq!(a.area() + b.area(), p.area());
                prop_assert!(p.contains_with_margin(&a, 0) && p.contains_with_margin(&b, 0));
                prop_assert!(!Rect::new(a.x, a.y, a.width - 1, a.height - 1)
                    .intersects(&Rect::new(b.x, b.y, b.width - 1, b.height - 1)));
                for child in [a, b] {
                    prop_assert!(child.width >= config.min_leaf_size);
                    prop_assert!(child.height >= config.min_leaf_size);
                }
            }
        }
        // Every split removes at least min_leaf_size from one axis
        let bound = (width / config.min_leaf_size + height / config.min_leaf_size) as usize + 1;
        prop_assert!(tree.depth() <= bound);
    }

    /// Rooms form one connected graph, both by connection ids and by tiles.
    #[test]
    fn prop_dungeon_connected(
        config in config_strategy(),
        width in 16i32..120,
        height in 16i32..120,
    ) {
        let dungeon = generate(width, height, &config).unwrap();
        prop_assert!(dungeon.is_connected());
        prop_assert_eq!(dungeon.connections.len(), dungeon.rooms.len() - 1);
        prop_assert_eq!(TileGrid::from_dungeon(&dungeon).floor_regions(), 1);
    }

    /// Corridor segments are one tile thick.
    #[test]
    fn prop_corridors_one_tile_thick(
        config in config_strategy(),
        width in 16i32..120,
        height in 16i32..120,
    ) {
        let dungeon = generate(width, height, &config).unwrap();
        for conn in &dungeon.connections {
            prop_assert!(!conn.segments.is_empty() && conn.segments.len() <= 2);
            for segment in &conn.segments {
                prop_assert!(segment.rect.width == 1 || segment.rect.height == 1);
            }
        }
    }

    /// Same seed, same output.
    #[test]
    fn prop_deterministic(seed in any::<u64>(), width in 16i32..100, height in 16i32..100) {
        let config = GeneratorConfig::default();
        let a = DungeonGenerator::generate_with_rng(width, height, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        let b = DungeonGenerator::generate_with_rng(width, height, &config, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}

#[test]
fn scenario_fifty_by_fifty() {
    let config = GeneratorConfig {
        min_leaf_size: 13,
        max_leaf_size: 25,
        min_room_size: 7,
        ..Default::default()
    };
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut ctx = bsp_dungeon::context::GenContext::new(&config, &mut rng);
        let mut tree = BspTree::build(Rect::new(0, 0, 50, 50), &mut ctx);
        let rooms = tree.place_rooms(&mut ctx);
        assert!(tree.depth() >= 2);
        assert_eq!(rooms.len(), tree.leaf_count());
    }
}

#[test]
fn scenario_small_map_single_room() {
    let config = GeneratorConfig::default().with_seed(77);
    let dungeon = generate(16, 16, &config).unwrap();
    assert_eq!(dungeon.rooms.len(), 1);
    let room = dungeon.rooms[0].rect;
    assert!(room.x >= 1 && room.y >= 1 && room.x2() <= 15 && room.y2() <= 15);
}
