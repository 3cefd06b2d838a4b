//! # Voxel Raycasting
//!
//! Finds the first solid cell a ray enters inside a single chunk, using integer grid
//! traversal (Amanatidis and Woo). The ray is expressed in chunk-local coordinates: cell
//! `(x, y, z)` occupies `[x, x + 1) × [y, y + 1) × [z, z + 1)`.
//!
//! ## Hit normals
//!
//! The reported normal points back along the axis the ray crossed to enter the hit cell,
//! so `position + normal` is the empty cell the ray came from. When the origin cell itself
//! is solid there is no previous step, and the axis the direction is most aligned with is
//! used instead (ties prefer X, then Y).

use cgmath::{Point3, Vector3};

use super::{block::block_side::BlockSide, chunk::Chunk};

/// A ray in chunk-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Point3<f32>,
    /// Direction of travel. Need not be normalized; distances are measured in units of
    /// its length.
    pub direction: Vector3<f32>,
    /// Parametric distance after which the traversal gives up
    pub max_distance: f32,
}

impl Ray {
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>, max_distance: f32) -> Self {
        Ray {
            origin,
            direction,
            max_distance,
        }
    }

    /// The point at parametric distance `t` along the ray.
    pub fn at(&self, t: f32) -> Point3<f32> {
        self.origin + self.direction * t
    }
}

/// The first solid cell a ray entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RayHit {
    /// Coordinates of the struck cell
    pub position: Point3<i32>,
    /// Unit normal of the face the ray entered through
    pub normal: Vector3<i32>,
}

impl RayHit {
    /// The face of the struck cell the ray entered through.
    pub fn side(&self) -> BlockSide {
        // Normals are always axis-aligned units, so the mapping cannot fail.
        BlockSide::from_normal(self.normal).unwrap_or(BlockSide::TOP)
    }

    /// The cell on the near side of the struck face, where a placed block would go.
    pub fn adjacent(&self) -> Point3<i32> {
        self.position + self.normal
    }
}

/// Grid traversal over a single chunk.
///
/// # Examples
///
/// ```
/// use cgmath::{Point3, Vector3};
/// use voxel_core::{BlockType, Chunk, Ray, VoxelRaycaster};
///
/// let mut chunk = Chunk::new(5, 5, 5);
/// chunk.at_mut(2, 2, 2).block_type = BlockType::STONE;
///
/// let ray = Ray::new(Point3::new(2.5, 2.5, 10.0), Vector3::new(0.0, 0.0, -1.0), 20.0);
/// let hit = VoxelRaycaster::cast(&chunk, &ray).unwrap();
/// assert_eq!(hit.position, Point3::new(2, 2, 2));
/// assert_eq!(hit.normal, Vector3::new(0, 0, 1));
/// ```
pub struct VoxelRaycaster;

impl VoxelRaycaster {
    /// Walks the ray cell by cell and returns the first in-bounds solid cell.
    ///
    /// # Returns
    /// `None` if the ray travels `max_distance` without entering a solid cell, leaves the
    /// chunk for good, or has a non-finite origin or direction.
    pub fn cast(chunk: &Chunk, ray: &Ray) -> Option<RayHit> {
        let origin = [ray.origin.x, ray.origin.y, ray.origin.z];
        let direction = [ray.direction.x, ray.direction.y, ray.direction.z];
        if origin.iter().chain(direction.iter()).any(|c| !c.is_finite()) {
            return None;
        }

        let size = chunk.size().map(|s| s as i32);
        let mut cell = origin.map(|c| c.floor() as i32);
        let mut step = [0i32; 3];
        let mut t_delta = [f32::INFINITY; 3];
        let mut t_max = [f32::INFINITY; 3];

        for axis in 0..3 {
            let d = direction[axis];
            if d == 0.0 {
                continue;
            }
            step[axis] = if d > 0.0 { 1 } else { -1 };
            t_delta[axis] = (1.0 / d).abs();
            let boundary = if d > 0.0 {
                origin[axis].floor() + 1.0
            } else {
                origin[axis].floor()
            };
            t_max[axis] = ((boundary - origin[axis]) / d).max(0.0);
        }

        let mut last_axis: Option<usize> = None;
        let mut t = 0.0;

        while t < ray.max_distance {
            let mut inside = true;
            for axis in 0..3 {
                if cell[axis] < 0 {
                    if step[axis] <= 0 {
                        return None;
                    }
                    inside = false;
                } else if cell[axis] >= size[axis] {
                    if step[axis] >= 0 {
                        return None;
                    }
                    inside = false;
                }
            }

            if inside && chunk.is_solid_at(cell[0], cell[1], cell[2]) {
                let axis = last_axis.unwrap_or_else(|| dominant_axis(direction));
                let mut normal = Vector3::new(0, 0, 0);
                normal[axis] = if direction[axis] > 0.0 { -1 } else { 1 };
                return Some(RayHit {
                    position: Point3::new(cell[0], cell[1], cell[2]),
                    normal,
                });
            }

            let axis = if t_max[0] < t_max[1] && t_max[0] < t_max[2] {
                0
            } else if t_max[1] < t_max[2] {
                1
            } else {
                2
            };
            if step[axis] == 0 {
                // Only reachable with a zero direction: the origin cell was the only one.
                return None;
            }
            t = t_max[axis];
            t_max[axis] += t_delta[axis];
            cell[axis] += step[axis];
            last_axis = Some(axis);
        }

        None
    }
}

/// Axis the direction is most aligned with. Ties prefer X, then Y.
fn dominant_axis(direction: [f32; 3]) -> usize {
    let [x, y, z] = direction.map(f32::abs);
    if x >= y && x >= z {
        0
    } else if y >= z {
        1
    } else {
        2
    }
}
