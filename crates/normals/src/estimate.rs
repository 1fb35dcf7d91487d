use rangeimage_core::{NormalMap, RangeImage, RangeView, VertexMap, VertexView};
use rayon::prelude::*;

/// Estimate per-pixel surface normals from a range image and its vertex map.
///
/// For each pixel with a valid depth, two tangent vectors are formed toward
/// the wrapped right neighbor and the pixel below, and their cross product
/// gives the surface normal.  The horizontal axis is treated as cylindrical
/// (the last column's right neighbor is column zero); rows do not wrap, so
/// the last row never receives a normal.
///
/// Pixels where a normal cannot be estimated (missing depth at the pixel or
/// either neighbor, or degenerate geometry) hold the exact zero vector.  All
/// other pixels hold a unit vector.  The output never contains NaN or Inf.
///
/// The computation is parallelized across image rows using rayon; each row
/// of the output is written by exactly one worker, so results are identical
/// for any thread count.
///
/// # Panics
///
/// Panics if `range` and `vertices` do not share the same dimensions.
pub fn estimate_normals(range: &RangeImage, vertices: &VertexMap) -> NormalMap {
    assert_eq!(
        (range.width(), range.height()),
        (vertices.width(), vertices.height()),
        "range image and vertex map must share dimensions"
    );

    let mut normals = NormalMap::zeros(range.width(), range.height());
    fill_normals(
        range.as_slice(),
        vertices.as_slice(),
        range.width(),
        range.height(),
        normals.as_mut_slice(),
    );
    normals
}

/// Same as [`estimate_normals`] but over caller-owned raw buffers.
///
/// `depth` is a row-major `height * width` buffer, `vertices` a row-major
/// interleaved `height * width * 3` buffer.  Returns an interleaved
/// `height * width * 3` normal buffer.
///
/// # Panics
///
/// Panics if the buffer lengths are inconsistent with `width` and `height`,
/// or if either dimension is zero.
pub fn estimate_normals_from_slices(
    depth: &[f32],
    vertices: &[f32],
    width: usize,
    height: usize,
) -> Vec<f32> {
    let range = RangeView::new(depth, width, height);
    let verts = VertexView::new(vertices, width, height);

    let mut out = vec![0.0; width * height * 3];
    fill_normals(range.as_slice(), verts.as_slice(), width, height, &mut out);
    out
}

/// Core kernel over flat row-major buffers.
///
/// `out` must be zero-initialized; only pixels that get a normal are written.
fn fill_normals(depth: &[f32], vertex: &[f32], width: usize, height: usize, out: &mut [f32]) {
    // The last row has no row below it to form the vertical tangent, so it
    // is excluded from the pass and keeps its zeros.
    out.par_chunks_mut(width * 3)
        .enumerate()
        .take(height.saturating_sub(1))
        .for_each(|(y, out_row)| {
            for x in 0..width {
                if !valid(depth[y * width + x]) {
                    continue;
                }

                let xu = wrap(x as isize + 1, width);
                if !valid(depth[y * width + xu]) {
                    continue;
                }

                if !valid(depth[(y + 1) * width + x]) {
                    continue;
                }

                let p = point_at(vertex, width, y, x);
                let u = point_at(vertex, width, y, xu);
                let v = point_at(vertex, width, y + 1, x);

                let t_u = sub(u, p);
                let t_v = sub(v, p);
                let lu = length(t_u);
                let lv = length(t_v);
                // A neighbor coincident with the center yields a zero-length
                // tangent; dividing would leak NaN past the cross norm check.
                if !valid(lu) || !valid(lv) {
                    continue;
                }

                let t_u = [t_u[0] / lu, t_u[1] / lu, t_u[2] / lu];
                let t_v = [t_v[0] / lv, t_v[1] / lv, t_v[2] / lv];

                // Component order fixes the orientation convention for the
                // whole field; changing it flips every normal.
                let cross = [
                    t_u[2] * t_v[1] - t_u[1] * t_v[2],
                    t_u[0] * t_v[2] - t_u[2] * t_v[0],
                    t_u[1] * t_v[0] - t_u[0] * t_v[1],
                ];

                let norm = length(cross);
                if norm > 0.0 {
                    let base = x * 3;
                    out_row[base] = cross[0] / norm;
                    out_row[base + 1] = cross[1] / norm;
                    out_row[base + 2] = cross[2] / norm;
                }
            }
        });
}

/// Wrap an index one step past either end of a cyclic axis of size `dim`.
///
/// Used only for the column (azimuth) axis; rows are bounded by the loop
/// range and never wrap.
fn wrap(i: isize, dim: usize) -> usize {
    let dim = dim as isize;
    let mut value = i;
    if value >= dim {
        value -= dim;
    }
    if value < 0 {
        value += dim;
    }
    value as usize
}

/// Strictly-positive check that also rejects NaN.
#[inline]
fn valid(value: f32) -> bool {
    value > 0.0
}

#[inline]
fn point_at(vertex: &[f32], width: usize, y: usize, x: usize) -> [f32; 3] {
    let base = (y * width + x) * 3;
    [vertex[base], vertex[base + 1], vertex[base + 2]]
}

#[inline]
fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn length(v: [f32; 3]) -> f32 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}
