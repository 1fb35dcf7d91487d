use rangeimage_core::{RangeImage, VertexMap};

/// Spherical projection of a 3D point cloud onto a range image grid.
///
/// Points are mapped by azimuth (yaw) to columns and by elevation (pitch)
/// to rows.  The defaults match a 64-beam spinning LiDAR with a vertical
/// field of view of +3 to -25 degrees, projected to a 1024x64 image.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalProjection {
    pub width: usize,
    pub height: usize,
    /// Upper vertical field-of-view bound, degrees.
    pub fov_up_deg: f32,
    /// Lower vertical field-of-view bound, degrees (typically negative).
    pub fov_down_deg: f32,
    /// Points at or beyond this distance are dropped.
    pub max_range: f32,
}

impl Default for SphericalProjection {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 64,
            fov_up_deg: 3.0,
            fov_down_deg: -25.0,
            max_range: 50.0,
        }
    }
}

impl SphericalProjection {
    pub fn new(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Project an interleaved xyz point buffer to a range image and the
    /// co-indexed vertex map.
    ///
    /// Points at the origin or beyond `max_range` are dropped.  Where
    /// several points fall on the same pixel the nearest one wins.  Pixels
    /// no point falls on keep depth `0.0`, the "no return" sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `points.len()` is not a multiple of 3.
    pub fn project(&self, points: &[f32]) -> (RangeImage, VertexMap) {
        assert_eq!(
            points.len() % 3,
            0,
            "interleaved xyz input must have a multiple of 3 floats"
        );

        let fov_up = self.fov_up_deg.to_radians();
        let fov_down = self.fov_down_deg.to_radians();
        let fov = fov_up.abs() + fov_down.abs();

        struct Projected {
            depth: f32,
            point: [f32; 3],
            px: usize,
            py: usize,
        }

        let mut projected: Vec<Projected> = Vec::with_capacity(points.len() / 3);
        for chunk in points.chunks_exact(3) {
            let p = [chunk[0], chunk[1], chunk[2]];
            let depth = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
            if !(depth > 0.0 && depth < self.max_range) {
                continue;
            }

            let yaw = -p[1].atan2(p[0]);
            let pitch = (p[2] / depth).asin();

            let proj_x = 0.5 * (yaw / std::f32::consts::PI + 1.0) * self.width as f32;
            let proj_y = (1.0 - (pitch + fov_down.abs()) / fov) * self.height as f32;

            let px = (proj_x.floor() as isize).clamp(0, self.width as isize - 1) as usize;
            let py = (proj_y.floor() as isize).clamp(0, self.height as isize - 1) as usize;

            projected.push(Projected {
                depth,
                point: p,
                px,
                py,
            });
        }

        // Write in decreasing depth order so the nearest return ends up
        // owning each pixel.
        projected.sort_unstable_by(|a, b| b.depth.total_cmp(&a.depth));

        let mut range = RangeImage::empty(self.width, self.height);
        let mut vertices = VertexMap::zeros(self.width, self.height);
        for p in &projected {
            range.set_depth(p.py, p.px, p.depth);
            vertices.set_point(p.py, p.px, p.point);
        }

        (range, vertices)
    }
}
