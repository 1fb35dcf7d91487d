#![forbid(unsafe_code)]

//! Range-image surface normal estimation.
//!
//! A LiDAR scan projected to a spherical range image carries, per pixel, a
//! depth and a 3D vertex.  This workspace estimates a unit surface normal
//! for every pixel from its wrapped right neighbor and the pixel below,
//! treating the image as cylindrically continuous in azimuth.

pub use rangeimage_core::{NormalMap, RangeImage, RangeView, VertexMap, VertexView};
pub use rangeimage_normals::{estimate_normals, estimate_normals_from_slices};
pub use rangeimage_projection::SphericalProjection;
