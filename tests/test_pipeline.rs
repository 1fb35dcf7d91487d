use rangeimage_normals::estimate_normals;
use rangeimage_projection::SphericalProjection;

/// End-to-end pipeline: synthetic scan → spherical projection → normal map.
///
/// The scan samples a sphere of radius 10 centered on the sensor, one point
/// per pixel center, so every pixel of the projected image receives exactly
/// one return.  The surface normal of a sphere seen from its center is
/// radial, which gives a strong analytic ground truth for the whole field.
#[test]
fn pipeline_sphere_scan_gives_radial_normals() {
    let w = 128;
    let h = 16;
    let radius = 10.0f32;

    let proj = SphericalProjection::new(w, h);
    let fov_up = proj.fov_up_deg.to_radians();
    let fov_down = proj.fov_down_deg.to_radians();
    let fov = fov_up.abs() + fov_down.abs();

    // One point per pixel center, inverted through the projection equations.
    let mut points = Vec::with_capacity(w * h * 3);
    for iy in 0..h {
        for ix in 0..w {
            let yaw = ((ix as f32 + 0.5) / w as f32 * 2.0 - 1.0) * std::f32::consts::PI;
            let pitch = (1.0 - (iy as f32 + 0.5) / h as f32) * fov - fov_down.abs();
            let theta = -yaw;
            points.push(radius * pitch.cos() * theta.cos());
            points.push(radius * pitch.cos() * theta.sin());
            points.push(radius * pitch.sin());
        }
    }

    let (range, vertices) = proj.project(&points);

    // Every pixel got its own return.
    for y in 0..h {
        for x in 0..w {
            assert!(
                range.is_valid(y, x),
                "pixel ({}, {}) has no return",
                y,
                x
            );
            assert!((range.depth(y, x) - radius).abs() < 1e-3);
        }
    }

    let normals = estimate_normals(&range, &vertices);

    for y in 0..h {
        for x in 0..w {
            let n = normals.normal(y, x);
            if y == h - 1 {
                assert_eq!(n, [0.0, 0.0, 0.0], "last row must stay zero");
                continue;
            }

            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!(
                (len - 1.0).abs() < 1e-4,
                "pixel ({}, {}): normal {:?} is not unit",
                y,
                x,
                n
            );

            // Radial ground truth: normal parallel to the vertex direction.
            let p = vertices.point(y, x);
            let dot = (n[0] * p[0] + n[1] * p[1] + n[2] * p[2]) / radius;
            assert!(
                dot.abs() > 0.99,
                "pixel ({}, {}): normal {:?} is not radial (dot {})",
                y,
                x,
                n,
                dot
            );
        }
    }
}

/// Dropping every return in one image row punches a matching hole in the
/// normal map: the row itself and the row above (which lost its below
/// neighbor) go zero.
#[test]
fn pipeline_missing_row_propagates_to_normals() {
    let w = 64;
    let h = 8;

    // Flat grid built directly, no projection needed.
    let mut depths = vec![1.0f32; w * h];
    let mut verts = vec![0.0f32; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let base = (y * w + x) * 3;
            verts[base] = x as f32 * 0.1;
            verts[base + 1] = y as f32 * 0.1;
            verts[base + 2] = 0.0;
        }
    }

    let hole = 4;
    for x in 0..w {
        depths[hole * w + x] = 0.0;
    }

    let out = rangeimage_normals::estimate_normals_from_slices(&depths, &verts, w, h);
    for x in 0..w {
        for y in [hole - 1, hole] {
            let base = (y * w + x) * 3;
            assert_eq!(&out[base..base + 3], &[0.0f32; 3][..]);
        }
        // The row below the hole is unaffected.
        let base = ((hole + 1) * w + x) * 3;
        let n = &out[base..base + 3];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        assert!((len - 1.0).abs() < 1e-4);
    }
}
