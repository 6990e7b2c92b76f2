use crate::dungeon::Dungeon;
use crate::geometry::Rect;
use crate::tile::TileType;
use std::collections::VecDeque;
use std::fmt;

/// Tile raster of a generated dungeon: rooms and corridors carved as floor
/// into solid wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileType>,
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![TileType::Wall; width * height],
        }
    }

    pub fn from_dungeon(dungeon: &Dungeon) -> Self {
        puffin::profile_function!();
        let mut grid = Self::new(dungeon.width.max(0) as usize, dungeon.height.max(0) as usize);
        for room in &dungeon.rooms {
            grid.carve(&room.rect);
        }
        for corridor in dungeon.corridors() {
            grid.carve(&corridor.rect);
        }
        grid
    }

    fn get_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<TileType> {
        self.get_index(x, y).map(|idx| self.tiles[idx])
    }

    pub fn set(&mut self, x: i32, y: i32, tile: TileType) {
        if let Some(idx) = self.get_index(x, y) {
            self.tiles[idx] = tile;
        }
    }

    fn carve(&mut self, rect: &Rect) {
        for (x, y) in rect.tiles() {
            self.set(x, y, TileType::Floor);
        }
    }

    pub fn floor_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_walkable()).count()
    }

    /// Number of 4-connected groups of floor tiles
    pub fn floor_regions(&self) -> usize {
        let mut seen = vec![false; self.tiles.len()];
        let mut regions = 0;
        let mut queue = VecDeque::new();

        for start in 0..self.tiles.len() {
            if seen[start] || !self.tiles[start].is_walkable() {
                continue;
            }
            regions += 1;
            seen[start] = true;
            queue.push_back(start);

            while let Some(idx) = queue.pop_front() {
                let x = (idx % self.width) as i32;
                let y = (idx / self.width) as i32;
                for (nx, ny) in [(x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)] {
                    let Some(n) = self.get_index(nx, ny) else { continue };
                    if !seen[n] && self.tiles[n].is_walkable() {
                        seen[n] = true;
                        queue.push_back(n);
                    }
                }
            }
        }

        regions
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.width.max(1)) {
            let line: String = row.iter().map(TileType::glyph).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
