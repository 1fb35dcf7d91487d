/// A dense range image: one depth value per pixel, row-major, shape `(H, W)`.
///
/// A depth value that is not strictly positive (including NaN) means "no
/// valid return" at that pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeImage {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl RangeImage {
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            data.len(),
            width * height,
            "range image must have width * height depths"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// A range image with every pixel marked "no return".
    pub fn empty(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self, y: usize, x: usize) -> f32 {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        self.data[y * self.width + x]
    }

    pub fn set_depth(&mut self, y: usize, x: usize, depth: f32) {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        self.data[y * self.width + x] = depth;
    }

    /// Whether the pixel holds a valid measurement (`depth > 0`).
    pub fn is_valid(&self, y: usize, x: usize) -> bool {
        self.depth(y, x) > 0.0
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// A dense per-pixel 3D point buffer, row-major, shape `(H, W, 3)`.
///
/// Co-indexed with a [`RangeImage`]: `point(y, x)` is only meaningful where
/// the co-located depth is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct VertexMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl VertexMap {
    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            data.len(),
            width * height * 3,
            "vertex map must have width * height * 3 floats"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn zeros(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0.0; width * height * 3],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn point(&self, y: usize, x: usize) -> [f32; 3] {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        let base = (y * self.width + x) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    pub fn set_point(&mut self, y: usize, x: usize, point: [f32; 3]) {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        let base = (y * self.width + x) * 3;
        self.data[base..base + 3].copy_from_slice(&point);
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }
}

/// A dense per-pixel unit-normal buffer, row-major, shape `(H, W, 3)`.
///
/// Each pixel is either a unit vector or the exact zero vector, the sentinel
/// for "no normal could be estimated here".
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl NormalMap {
    /// A fully zero-initialized normal map.
    pub fn zeros(width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            data: vec![0.0; width * height * 3],
        }
    }

    pub fn from_vec(data: Vec<f32>, width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            data.len(),
            width * height * 3,
            "normal map must have width * height * 3 floats"
        );
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn normal(&self, y: usize, x: usize) -> [f32; 3] {
        assert!(y < self.height && x < self.width, "pixel out of bounds");
        let base = (y * self.width + x) * 3;
        [self.data[base], self.data[base + 1], self.data[base + 2]]
    }

    /// Whether a normal was estimated at this pixel (non-zero sentinel).
    pub fn is_set(&self, y: usize, x: usize) -> bool {
        self.normal(y, x) != [0.0, 0.0, 0.0]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn iter_normals(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.data.chunks_exact(3).map(|c| [c[0], c[1], c[2]])
    }
}
