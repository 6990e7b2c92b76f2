//! Binary space partition of the map into leaf regions, and room placement
//! inside the terminal leaves.

use crate::constants::*;
use crate::context::GenContext;
use crate::dungeon::{Room, RoomId};
use crate::geometry::Rect;
use rand::Rng;

/// Which dimension of a region a split divides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplitAxis {
    /// Divide the width: children sit side by side
    Width,
    /// Divide the height: children are stacked
    Height,
}

impl SplitAxis {
    /// Axis forced by the region's aspect ratio, if it is lopsided enough.
    /// A region at least 1.25x wider than tall must be divided across its
    /// width, and vice versa.
    pub fn forced_by(bounds: &Rect) -> Option<Self> {
        let (w, h) = (i64::from(bounds.width), i64::from(bounds.height));
        let (num, den) = (i64::from(DUNGEON_ASPECT_NUM), i64::from(DUNGEON_ASPECT_DEN));
        if w > h && w * den >= h * num {
            Some(SplitAxis::Width)
        } else if h > w && h * den >= w * num {
            Some(SplitAxis::Height)
        } else {
            None
        }
    }

    fn extent(self, bounds: &Rect) -> i32 {
        match self {
            SplitAxis::Width => bounds.width,
            SplitAxis::Height => bounds.height,
        }
    }

    /// Cut `bounds` at `offset` along this axis into two rectangles that
    /// exactly tile it.
    fn divide(self, bounds: &Rect, offset: i32) -> (Rect, Rect) {
        match self {
            SplitAxis::Width => (
                Rect::new(bounds.x, bounds.y, offset, bounds.height),
                Rect::new(bounds.x + offset, bounds.y, bounds.width - offset, bounds.height),
            ),
            SplitAxis::Height => (
                Rect::new(bounds.x, bounds.y, bounds.width, offset),
                Rect::new(bounds.x, bounds.y + offset, bounds.width, bounds.height - offset),
            ),
        }
    }
}

/// A node in the BSP tree. Either terminal (may hold a room) or internal
/// (owns exactly two children, never a room).
#[derive(Debug)]
pub struct Region {
    bounds: Rect,
    children: Option<Box<(Region, Region)>>,
    room: Option<RoomId>,
}

impl Region {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            children: None,
            room: None,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn room(&self) -> Option<RoomId> {
        self.room
    }

    pub fn is_terminal(&self) -> bool {
        self.children.is_none()
    }

    pub fn children(&self) -> Option<(&Region, &Region)> {
        self.children.as_deref().map(|(left, right)| (left, right))
    }

    fn is_oversized(&self, max_leaf_size: i32) -> bool {
        self.bounds.width > max_leaf_size || self.bounds.height > max_leaf_size
    }

    /// Try to divide this region in two. Returns false (and stays terminal)
    /// if it already has children or a cut would leave a child below
    /// `min_leaf_size`.
    pub fn split<R: Rng + ?Sized>(&mut self, ctx: &mut GenContext<'_, R>) -> bool {
        if self.children.is_some() {
            return false;
        }

        // The coin is always drawn, even when the aspect ratio overrides it
        let coin_axis = if ctx.dice.coin() {
            SplitAxis::Height
        } else {
            SplitAxis::Width
        };
        let axis = SplitAxis::forced_by(&self.bounds).unwrap_or(coin_axis);

        let min_leaf = ctx.config.min_leaf_size;
        let max_child_size = axis.extent(&self.bounds) - min_leaf;
        if max_child_size <= min_leaf {
            return false;
        }

        let offset = ctx.dice.range(min_leaf, max_child_size);
        let (first, second) = axis.divide(&self.bounds, offset);
        self.children = Some(Box::new((Region::new(first), Region::new(second))));
        true
    }

    /// One scan over the terminal regions that exist right now. Children
    /// created during the scan wait for the next pass.
    fn split_pass<R: Rng + ?Sized>(&mut self, ctx: &mut GenContext<'_, R>) -> usize {
        match self.children.as_deref_mut() {
            Some((left, right)) => left.split_pass(ctx) + right.split_pass(ctx),
            None => {
                let wants_split = self.is_oversized(ctx.config.max_leaf_size)
                    || ctx.dice.chance(ctx.config.split_probability);
                usize::from(wants_split && self.split(ctx))
            }
        }
    }

    /// Depth-first: internal nodes recurse, terminal nodes get one room.
    fn place_rooms<R: Rng + ?Sized>(
        &mut self,
        ctx: &mut GenContext<'_, R>,
        rooms: &mut Vec<Room>,
    ) {
        if let Some((left, right)) = self.children.as_deref_mut() {
            left.place_rooms(ctx, rooms);
            right.place_rooms(ctx, rooms);
            return;
        }

        let leaf = self.bounds;
        let min_room = ctx.config.min_room_size;
        let margin = DUNGEON_ROOM_MARGIN;

        let width = ctx.dice.range(min_room, leaf.width - margin * 2);
        let height = ctx.dice.range(min_room, leaf.height - margin * 2);
        let x = leaf.x + ctx.dice.range(margin, leaf.width - width - margin);
        let y = leaf.y + ctx.dice.range(margin, leaf.height - height - margin);

        let id = RoomId(rooms.len());
        let room = Room {
            id,
            rect: Rect::new(x, y, width, height),
            leaf,
        };
        tracing::trace!(room = id.0, ?room.rect, "created room");
        rooms.push(room);
        self.room = Some(id);
    }

    /// Number of levels below and including this node
    pub fn depth(&self) -> usize {
        match self.children() {
            Some((left, right)) => 1 + left.depth().max(right.depth()),
            None => 1,
        }
    }

    /// Terminal regions in depth-first order, left before right
    pub fn terminals(&self) -> Vec<&Region> {
        let mut out = Vec::new();
        self.collect_terminals(&mut out);
        out
    }

    fn collect_terminals<'s>(&'s self, out: &mut Vec<&'s Region>) {
        match self.children() {
            Some((left, right)) => {
                left.collect_terminals(out);
                right.collect_terminals(out);
            }
            None => out.push(self),
        }
    }

    /// Every region in the subtree, parents before children
    pub fn walk(&self) -> Vec<&Region> {
        let mut out = vec![self];
        let mut i = 0;
        while i < out.len() {
            let node = out[i];
            if let Some((left, right)) = node.children() {
                out.push(left);
                out.push(right);
            }
            i += 1;
        }
        out
    }
}

/// The partition tree for a whole map.
#[derive(Debug)]
pub struct BspTree {
    root: Region,
}

impl BspTree {
    /// Split the map into leaves, repeating full scans until a scan splits
    /// nothing.
    pub fn build<R: Rng + ?Sized>(bounds: Rect, ctx: &mut GenContext<'_, R>) -> Self {
        puffin::profile_function!();
        let mut root = Region::new(bounds);
        let mut passes = 0;
        loop {
            passes += 1;
            if root.split_pass(ctx) == 0 {
                break;
            }
        }
        let tree = Self { root };
        tracing::debug!(
            passes,
            leaves = tree.root.terminals().len(),
            depth = tree.root.depth(),
            "partitioned map"
        );
        tree
    }

    /// Inscribe one room in every terminal leaf. Room ids follow
    /// depth-first leaf order.
    pub fn place_rooms<R: Rng + ?Sized>(&mut self, ctx: &mut GenContext<'_, R>) -> Vec<Room> {
        puffin::profile_function!();
        let mut rooms = Vec::new();
        self.root.place_rooms(ctx, &mut rooms);
        tracing::debug!(rooms = rooms.len(), "placed rooms");
        rooms
    }

    pub fn root(&self) -> &Region {
        &self.root
    }

    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    pub fn leaf_count(&self) -> usize {
        self.root.terminals().len()
    }
}
