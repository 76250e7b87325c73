use glam::Vec3;

/// Axis-aligned bounding box accumulated from a stream of points.
///
/// Starts out empty; `union` grows it one point at a time. The final box is
/// independent of the order points are fed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// An empty box that contains no points.
    pub fn new() -> Self {
        Aabb {
            min: Vec3::splat(f32::INFINITY),
            max: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Expand the box to include `point`.
    pub fn union(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// True if no point has been unioned yet.
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Minimum corner. Meaningless while the box is empty.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner. Meaningless while the box is empty.
    pub fn max(&self) -> Vec3 {
        self.max
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Aabb::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    #[test]
    fn starts_empty() {
        let aabb = Aabb::new();
        assert!(aabb.is_empty());
    }

    #[test]
    fn single_point_is_degenerate_box() {
        let mut aabb = Aabb::new();
        aabb.union(vec3(1.0, 2.0, 3.0));
        assert!(!aabb.is_empty());
        assert_eq!(aabb.min(), vec3(1.0, 2.0, 3.0));
        assert_eq!(aabb.max(), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn union_is_order_independent() {
        let points = [
            vec3(-4.0, 2.0, 0.0),
            vec3(7.0, -1.0, 3.0),
            vec3(0.0, 0.0, -2.0),
            vec3(1.5, 9.0, 1.0),
        ];

        let mut forward = Aabb::new();
        for p in points {
            forward.union(p);
        }
        let mut backward = Aabb::new();
        for p in points.iter().rev() {
            backward.union(*p);
        }

        assert_eq!(forward, backward);
        assert_eq!(forward.min(), vec3(-4.0, -1.0, -2.0));
        assert_eq!(forward.max(), vec3(7.0, 9.0, 3.0));
    }
}
