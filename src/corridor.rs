//! Corridor synthesis: joins sibling subtrees of the partition tree with
//! straight or L-shaped 1-tile-wide paths.

use crate::bsp::Region;
use crate::context::GenContext;
use crate::dungeon::{Room, RoomId};
use crate::geometry::Rect;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A straight 1-tile-thick corridor segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Corridor {
    pub rect: Rect,
}

impl Corridor {
    pub fn is_horizontal(&self) -> bool {
        self.rect.height == 1
    }

    /// Number of tiles along the corridor
    pub fn length(&self) -> i32 {
        self.rect.width.max(self.rect.height)
    }
}

/// The corridor path laid for one internal tree node, tagged with the two
/// rooms it joins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub from: RoomId,
    pub to: RoomId,
    pub segments: Vec<Corridor>,
}

/// Which right-angle route an L-shaped path takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Elbow {
    /// Run along the start point's row, then turn onto the end point's column
    OnStartRow,
    /// Run along the start point's column, then turn onto the end point's row
    OnEndRow,
}

/// A leg covers `|delta|` tiles from `anchor` toward `target` along one axis,
/// stopping one tile short of `target`. `target` is always a room's interior
/// point, so the tile before it is still that room's floor.
fn leg(anchor: (i32, i32), target: (i32, i32)) -> Option<Corridor> {
    let (ax, ay) = anchor;
    let (tx, ty) = target;
    let rect = if ay == ty {
        let dx = tx - ax;
        if dx == 0 {
            return None;
        }
        let x = if dx > 0 { ax } else { tx + 1 };
        Rect::new(x, ay, dx.abs(), 1)
    } else {
        debug_assert_eq!(ax, tx, "leg must be axis-aligned");
        let dy = ty - ay;
        let y = if dy > 0 { ay } else { ty + 1 };
        Rect::new(ax, y, 1, dy.abs())
    };
    Some(Corridor { rect })
}

/// Segments joining `start` to `end`. Aligned points get a single straight
/// segment; otherwise two perpendicular legs meeting at the elbow.
pub fn corridor_path(start: (i32, i32), end: (i32, i32), elbow: Elbow) -> Vec<Corridor> {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;

    if dx == 0 || dy == 0 {
        return leg(start, end).into_iter().collect();
    }

    let corner = match elbow {
        Elbow::OnStartRow => (end.0, start.1),
        Elbow::OnEndRow => (start.0, end.1),
    };
    [leg(corner, start), leg(corner, end)]
        .into_iter()
        .flatten()
        .collect()
}

/// Random tile at least one tile in from every wall of `room`
fn interior_point<R: Rng + ?Sized>(room: &Rect, ctx: &mut GenContext<'_, R>) -> (i32, i32) {
    let x = ctx.dice.range(room.x + 1, room.x2() - 2);
    let y = ctx.dice.range(room.y + 1, room.y2() - 2);
    (x, y)
}

/// Lay a corridor between random interior points of two rooms.
pub fn connect<R: Rng + ?Sized>(a: &Room, b: &Room, ctx: &mut GenContext<'_, R>) -> Connection {
    let start = interior_point(&a.rect, ctx);
    let end = interior_point(&b.rect, ctx);

    let bends = start.0 != end.0 && start.1 != end.1;
    let elbow = if bends && ctx.dice.coin() {
        Elbow::OnEndRow
    } else {
        Elbow::OnStartRow
    };

    let segments = corridor_path(start, end, elbow);
    tracing::trace!(
        from = a.id.0,
        to = b.id.0,
        ?start,
        ?end,
        segments = segments.len(),
        "connected rooms"
    );
    Connection {
        from: a.id,
        to: b.id,
        segments,
    }
}

/// Room standing in for a whole subtree. Internal nodes pick between their
/// children's representatives with a coin flip.
pub fn representative_room<R: Rng + ?Sized>(
    region: &Region,
    ctx: &mut GenContext<'_, R>,
) -> Option<RoomId> {
    let Some((left, right)) = region.children() else {
        return region.room();
    };

    let left_room = representative_room(left, ctx);
    let right_room = representative_room(right, ctx);
    match (left_room, right_room) {
        (Some(l), Some(r)) => Some(if ctx.dice.coin() { l } else { r }),
        (l, r) => l.or(r),
    }
}

/// Connect rooms by traversing the BSP tree and linking sibling subtrees.
/// Children are fully connected before their parent joins them.
pub fn connect_tree<R: Rng + ?Sized>(
    region: &Region,
    rooms: &[Room],
    ctx: &mut GenContext<'_, R>,
    out: &mut Vec<Connection>,
) {
    let Some((left, right)) = region.children() else {
        return;
    };

    connect_tree(left, rooms, ctx, out);
    connect_tree(right, rooms, ctx, out);

    if let (Some(l), Some(r)) = (representative_room(left, ctx), representative_room(right, ctx)) {
        out.push(connect(&rooms[l.0], &rooms[r.0], ctx));
    }
}
