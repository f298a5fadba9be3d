//! Integer block coordinates

use crate::core::types::{DVec3, IVec3};

/// Coordinates are packable up to this magnitude on each axis (21 bits signed).
const PACK_LIMIT: i32 = 1 << 20;

/// Position of one cell in the world grid.
///
/// Ordering is lexicographic (x, then y, then z) so collections of
/// positions can be iterated and sorted deterministically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// Create a new block position
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Position offset by the given deltas
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// The 6 axis-aligned neighbor positions
    pub fn neighbors(self) -> [BlockPos; 6] {
        [
            self.offset(1, 0, 0),
            self.offset(-1, 0, 0),
            self.offset(0, 1, 0),
            self.offset(0, -1, 0),
            self.offset(0, 0, 1),
            self.offset(0, 0, -1),
        ]
    }

    /// Center point of the cell in world space
    pub fn center(self) -> DVec3 {
        DVec3::new(
            self.x as f64 + 0.5,
            self.y as f64 + 0.5,
            self.z as f64 + 0.5,
        )
    }

    /// Euclidean distance between cell centers
    pub fn distance_to(self, other: BlockPos) -> f64 {
        self.center().distance(other.center())
    }

    /// Pack into a single 64-bit key (21 bits per axis) for use in
    /// hash sets on the flood-fill hot path.
    pub fn packed(self) -> u64 {
        debug_assert!(
            self.x.abs() < PACK_LIMIT && self.y.abs() < PACK_LIMIT && self.z.abs() < PACK_LIMIT,
            "position out of packable range: {:?}",
            self
        );
        let x = (self.x as i64 + PACK_LIMIT as i64) as u64 & 0x1fffff;
        let y = (self.y as i64 + PACK_LIMIT as i64) as u64 & 0x1fffff;
        let z = (self.z as i64 + PACK_LIMIT as i64) as u64 & 0x1fffff;
        (x << 42) | (y << 21) | z
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<BlockPos> for IVec3 {
    fn from(p: BlockPos) -> Self {
        IVec3::new(p.x, p.y, p.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors() {
        let p = BlockPos::new(1, 2, 3);
        let neighbors = p.neighbors();
        assert_eq!(neighbors.len(), 6);
        for n in neighbors {
            let d = (n.x - p.x).abs() + (n.y - p.y).abs() + (n.z - p.z).abs();
            assert_eq!(d, 1);
        }
    }

    #[test]
    fn test_lexicographic_order() {
        let mut positions = vec![
            BlockPos::new(1, 0, 0),
            BlockPos::new(0, 1, 5),
            BlockPos::new(0, 1, 2),
            BlockPos::new(0, 0, 9),
        ];
        positions.sort();
        assert_eq!(positions[0], BlockPos::new(0, 0, 9));
        assert_eq!(positions[1], BlockPos::new(0, 1, 2));
        assert_eq!(positions[2], BlockPos::new(0, 1, 5));
        assert_eq!(positions[3], BlockPos::new(1, 0, 0));
    }

    #[test]
    fn test_packed_unique() {
        let a = BlockPos::new(-5, 0, 17);
        let b = BlockPos::new(-5, 17, 0);
        let c = BlockPos::new(17, -5, 0);
        assert_ne!(a.packed(), b.packed());
        assert_ne!(a.packed(), c.packed());
        assert_ne!(b.packed(), c.packed());
        assert_eq!(a.packed(), BlockPos::new(-5, 0, 17).packed());
    }

    #[test]
    fn test_distance_to() {
        let a = BlockPos::new(0, 0, 0);
        let b = BlockPos::new(3, 4, 0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-9);
    }
}
