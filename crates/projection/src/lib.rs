#![forbid(unsafe_code)]

pub mod spherical;

pub use spherical::SphericalProjection;
