/// Borrowed view over a caller-owned row-major depth buffer of shape `(H, W)`.
#[derive(Debug, Clone, Copy)]
pub struct RangeView<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
}

impl<'a> RangeView<'a> {
    pub fn new(data: &'a [f32], width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            data.len(),
            width * height,
            "range view source must have width * height depths"
        );
        Self {
            data,
            width,
            height,
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

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}

/// Borrowed view over a caller-owned interleaved xyz buffer of shape `(H, W, 3)`.
#[derive(Debug, Clone, Copy)]
pub struct VertexView<'a> {
    data: &'a [f32],
    width: usize,
    height: usize,
}

impl<'a> VertexView<'a> {
    pub fn new(data: &'a [f32], width: usize, height: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        assert_eq!(
            data.len(),
            width * height * 3,
            "vertex view source must have width * height * 3 floats"
        );
        Self {
            data,
            width,
            height,
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

    pub fn as_slice(&self) -> &'a [f32] {
        self.data
    }
}
