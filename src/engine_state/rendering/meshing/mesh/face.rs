use cgmath::{Point3, Vector3};

use crate::engine_state::voxels::block::{block_side::BlockSide, block_type::BlockType};

/// Represents a single merged quad on the surface of the solid cells.
///
/// The four corners are lattice points in chunk coordinates, listed counter-clockwise as
/// seen from the side the normal points to. A face produced by the greedy mesher covers a
/// `width x height` rectangle of unit faces that all share one block type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    /// Corners in counter-clockwise order around the normal
    pub corners: [Point3<i32>; 4],
    /// The block type every covered unit face shares
    pub block_type: BlockType,
    /// Which side of the solid cells this face shows
    pub block_side: BlockSide,
}

impl Face {
    /// Builds a face on the plane `sweep_axis = plane`, spanning `width` cells along the
    /// next axis and `height` cells along the one after it, starting at `origin`.
    ///
    /// # Arguments
    /// * `sweep_axis` - Axis the face is perpendicular to (0 = X, 1 = Y, 2 = Z)
    /// * `origin` - Lowest corner of the rectangle (its sweep component is the plane)
    /// * `width`, `height` - Extent along the two in-plane axes, in cyclic order
    /// * `back_face` - The solid cell lies ahead of the plane, so the face looks backward
    pub fn new(
        sweep_axis: usize,
        origin: Point3<i32>,
        width: i32,
        height: i32,
        block_type: BlockType,
        back_face: bool,
    ) -> Self {
        let u = (sweep_axis + 1) % 3;
        let v = (sweep_axis + 2) % 3;
        let mut du = Vector3::new(0, 0, 0);
        let mut dv = Vector3::new(0, 0, 0);
        du[u] = width;
        dv[v] = height;

        // u x v is +sweep_axis, so this order winds counter-clockwise around +sweep_axis.
        let corners = if back_face {
            [origin, origin + dv, origin + du + dv, origin + du]
        } else {
            [origin, origin + du, origin + du + dv, origin + dv]
        };

        Face {
            corners,
            block_type,
            block_side: BlockSide::from_axis(sweep_axis, !back_face),
        }
    }

    /// Outward unit normal.
    pub fn normal(&self) -> Vector3<i32> {
        self.block_side.normal()
    }

    /// Number of unit faces this quad covers.
    pub fn area(&self) -> i32 {
        let edge_a = self.corners[1] - self.corners[0];
        let edge_b = self.corners[3] - self.corners[0];
        let len = |edge: Vector3<i32>| edge.x.abs() + edge.y.abs() + edge.z.abs();
        len(edge_a) * len(edge_b)
    }

    /// Lowest corner along every axis.
    pub fn min_corner(&self) -> Point3<i32> {
        self.corners.iter().skip(1).fold(self.corners[0], |acc, c| {
            Point3::new(acc.x.min(c.x), acc.y.min(c.y), acc.z.min(c.z))
        })
    }

    /// Highest corner along every axis.
    pub fn max_corner(&self) -> Point3<i32> {
        self.corners.iter().skip(1).fold(self.corners[0], |acc, c| {
            Point3::new(acc.x.max(c.x), acc.y.max(c.y), acc.z.max(c.z))
        })
    }
}
