use crate::bsp::BspTree;
use crate::config::GeneratorConfig;
use crate::context::GenContext;
use crate::corridor::{self, Connection, Corridor};
use crate::error::Result;
use crate::geometry::Rect;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Index of a room in [`Dungeon::rooms`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RoomId(pub usize);

/// A room carved inside one terminal leaf
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub rect: Rect,
    /// Bounds of the leaf that owns this room
    pub leaf: Rect,
}

/// Result of dungeon generation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    pub width: i32,
    pub height: i32,
    /// Rooms in depth-first leaf order
    pub rooms: Vec<Room>,
    /// One connection per internal tree node, in post-order
    pub connections: Vec<Connection>,
}

impl Dungeon {
    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(id.0)
    }

    /// Every corridor segment, in connection order
    pub fn corridors(&self) -> impl Iterator<Item = &Corridor> {
        self.connections.iter().flat_map(|c| c.segments.iter())
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// True if every room can reach every other through connections.
    pub fn is_connected(&self) -> bool {
        let mut parent: Vec<usize> = (0..self.rooms.len()).collect();

        fn find(parent: &mut [usize], mut i: usize) -> usize {
            while parent[i] != i {
                parent[i] = parent[parent[i]];
                i = parent[i];
            }
            i
        }

        for conn in &self.connections {
            let a = find(&mut parent, conn.from.0);
            let b = find(&mut parent, conn.to.0);
            parent[a] = b;
        }

        let mut roots = (0..self.rooms.len()).map(|i| find(&mut parent, i));
        match roots.next() {
            Some(first) => roots.all(|r| r == first),
            None => true,
        }
    }

    /// Serialize the dungeon for a renderer or tooling
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub struct DungeonGenerator;

impl DungeonGenerator {
    /// Generate a dungeon. Uses the config's seed when set, otherwise a
    /// fresh seed from the thread RNG.
    pub fn generate(map_width: i32, map_height: i32, config: &GeneratorConfig) -> Result<Dungeon> {
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);
        tracing::debug!(seed, map_width, map_height, "generating dungeon");
        Self::generate_with_rng(map_width, map_height, config, &mut rng)
    }

    /// Generate a dungeon drawing every random decision from `rng`.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        map_width: i32,
        map_height: i32,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Dungeon> {
        puffin::profile_function!();
        config.validate(map_width, map_height)?;

        let mut ctx = GenContext::new(config, rng);

        // Create the root BSP node covering the entire map and split it
        let mut tree = BspTree::build(Rect::new(0, 0, map_width, map_height), &mut ctx);

        // Create rooms in each leaf
        let rooms = tree.place_rooms(&mut ctx);

        // Connect sibling subtrees bottom-up
        let mut connections = Vec::new();
        {
            puffin::profile_scope!("connect_rooms");
            corridor::connect_tree(tree.root(), &rooms, &mut ctx, &mut connections);
        }
        tracing::debug!(
            rooms = rooms.len(),
            connections = connections.len(),
            "dungeon generated"
        );

        Ok(Dungeon {
            width: map_width,
            height: map_height,
            rooms,
            connections,
        })
    }
}
