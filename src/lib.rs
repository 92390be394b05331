//! # glyph-morph
//!
//! Animated morphing between digit and symbol glyphs drawn as cubic Bézier
//! curves.
//!
//! This crate provides platform-agnostic data structures and logic for:
//! - A fixed table of glyph outlines (digits, blank, minus) as control points
//! - Blending two outlines by a progress fraction
//! - Turning control points into a move-to plus cubic-to path
//! - Driving transitions from a host timer and stroking onto any surface
//!
//! ## Features
//!
//! - `serde` - Enable serialization/deserialization for data structures
//! - `toml` - Load [`ViewConfig`] from TOML
//! - `kurbo` - Convert paths into `kurbo::BezPath`
//! - `web` - Enable web/WASM canvas rendering support
//!
//! ## Example
//!
//! ```rust
//! use glyph_morph::{GlyphView, RecordingSink, Symbol, ViewConfig};
//!
//! let mut view = GlyphView::new(ViewConfig::default());
//! view.seed(Symbol::Digit(3))?;
//! view.continue_transition(Symbol::Digit(4))?;
//!
//! // Call from your timer every `view.interval_ms()` milliseconds
//! while view.advance()? {
//!     let mut sink = RecordingSink::default();
//!     view.render(&mut sink, 120.0, 120.0)?;
//! }
//! # Ok::<(), glyph_morph::MorphError>(())
//! ```

mod animation;
mod color;
mod config;
mod data;
mod error;
mod glyph;
mod interpolate;
pub mod render;
mod sizing;
mod view;

pub use animation::{DriverStep, Timeline, TimelineState, TransitionDriver};
pub use color::{parse_color, Rgb};
pub use config::ViewConfig;
pub use data::{ControlPointSet, Point};
pub use error::{MorphError, Result};
pub use glyph::{GlyphTable, Symbol, POINTS_PER_GLYPH};
pub use interpolate::{interpolate, Easing};
pub use render::{build_path, GlyphPath, PathCommand, PathSink, RecordingSink, StrokeStyle};
pub use sizing::{GlyphSizing, Padding};
pub use view::{AnimationState, GlyphView, TransitionHandle, ViewPhase};

#[cfg(feature = "web")]
pub use render::web::render_to_canvas;
