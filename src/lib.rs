//! chromewarp renders layered chrome-style text and bends it along curves.
//!
//! Text arrives as vector glyph outlines. The crate styles it into two raster layers, deforms
//! those layers with a per-column warp engine, re-synthesizes the color gradient over the bent
//! silhouette and returns one straight-alpha RGBA8 image.
//!
//! # Pipeline overview
//!
//! 1. **Style**: `GlyphRun -> StyledLayers` (grayscale body: extrude, face, bevel; fx: strokes, glow)
//! 2. **Warp**: bottom-weighted, full parabolic or bottom-only parabolic, all layers sharing one
//!    [`WarpGeometry`] derived from the body's alpha bounds
//! 3. **Reproject**: the vertical gradient is rebuilt over the *warped* bounds and multiplied into
//!    the body inside its own silhouette; the fx layer goes on top untinted
//! 4. **Place**: centered on the output canvas at the supersample scale, then Lanczos-downsampled
//!
//! The `arc` curve mode skips the raster warp entirely: [`render_arc`] rotates each glyph onto a
//! circle and shades the finished word through one world-space silhouette mask.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No shared state**: every operation reads its inputs and returns a freshly owned buffer.
//! - **Clamp, don't reject**: configuration values are clamped or defaulted, never refused.
//! - **Single-threaded**: cost is `O(width x height)` per layer and grows with the square of the
//!   supersample factor.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod arc;
mod config;
mod foundation;
mod gradient;
mod raster;
mod render;
mod style;
mod warp;

pub use arc::engine::{apply_world_shading, render_arc};
pub use arc::layout::ArcLayout;
pub use config::{
    ColorConfig, CurveMode, CurveScope, CurveStrategy, GlyphData, RenderConfig, RenderJob,
    ResolvedConfig,
};
pub use foundation::core::{Affine, BezPath, Bounds, Canvas, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{ChromeError, ChromeResult};
pub use gradient::reproject::reproject_gradient;
pub use gradient::spec::{GradientSpec, GradientStop, VerticalGradient};
pub use raster::blend::BlendMode;
pub use raster::bounds::{BoundsMode, content_bounds, detect_bounds, estimate_background};
pub use raster::buffer::RasterBuffer;
pub use raster::mask::{FillGenerator, apply_masked_fill, masked_fill_layer};
pub use raster::supersample::{MAX_SUPERSAMPLE, Supersampler};
pub use render::pipeline::{render_job, render_text};
pub use style::glyph::{Glyph, GlyphRun, PlacedGlyph};
pub use style::layers::{GlyphStyle, Palette, StyledLayers, compose_layers};
pub use warp::geometry::{WarpFill, WarpGeometry};
pub use warp::params::{FOLD_SAFETY, WarpDirection, WarpMode, WarpParams};
pub use warp::{warp, warp_flattened};
