//! Inclusive integer bounding box limiting the search space of one scan

use super::pos::BlockPos;

/// Axis-aligned inclusive bounding box over block positions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl Bounds {
    /// Smallest box containing all anchors, expanded outward on every
    /// face by `padding`.
    ///
    /// # Panics
    /// Panics if `anchors` is empty. Callers must always include at
    /// least the controller position.
    pub fn from_anchors(anchors: &[BlockPos], padding: i32) -> Self {
        assert!(!anchors.is_empty(), "Bounds::from_anchors requires at least one anchor");

        let mut b = Self {
            min_x: i32::MAX,
            max_x: i32::MIN,
            min_y: i32::MAX,
            max_y: i32::MIN,
            min_z: i32::MAX,
            max_z: i32::MIN,
        };

        for p in anchors {
            b.min_x = b.min_x.min(p.x);
            b.max_x = b.max_x.max(p.x);
            b.min_y = b.min_y.min(p.y);
            b.max_y = b.max_y.max(p.y);
            b.min_z = b.min_z.min(p.z);
            b.max_z = b.max_z.max(p.z);
        }

        b.min_x -= padding;
        b.max_x += padding;
        b.min_y -= padding;
        b.max_y += padding;
        b.min_z -= padding;
        b.max_z += padding;

        b
    }

    /// Clamp oversized spans by re-centering the offending axis on
    /// `center` with half-width `max_xz / 2` (or `max_y / 2` for Y).
    ///
    /// Caps worst-case flood-fill volume no matter how far apart the
    /// raw anchors are.
    pub fn clamp_to_max_size(mut self, center: BlockPos, max_xz: i32, max_y: i32) -> Self {
        if self.span_x() > max_xz {
            let half = max_xz / 2;
            self.min_x = center.x - half;
            self.max_x = center.x + (max_xz - 1 - half);
        }
        if self.span_z() > max_xz {
            let half = max_xz / 2;
            self.min_z = center.z - half;
            self.max_z = center.z + (max_xz - 1 - half);
        }
        if self.span_y() > max_y {
            let half = max_y / 2;
            self.min_y = center.y - half;
            self.max_y = center.y + (max_y - 1 - half);
        }
        self
    }

    /// Whether `pos` lies inside the box (inclusive on all faces)
    pub fn contains(&self, pos: BlockPos) -> bool {
        pos.x >= self.min_x && pos.x <= self.max_x
            && pos.y >= self.min_y && pos.y <= self.max_y
            && pos.z >= self.min_z && pos.z <= self.max_z
    }

    /// Number of cells along X
    pub fn span_x(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Number of cells along Y
    pub fn span_y(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Number of cells along Z
    pub fn span_z(&self) -> i32 {
        self.max_z - self.min_z + 1
    }

    /// Total cell count
    pub fn volume(&self) -> u64 {
        self.span_x() as u64 * self.span_y() as u64 * self.span_z() as u64
    }
}
