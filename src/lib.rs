//! Layout resolution and draw-batch optimization for in-game overlay UIs.
//!
//! An overlay is described every frame as an [`Element`] tree. Resolving it against the
//! available size produces a [`Renderable`](renderable::Renderable) tree in whole pixels,
//! which is flattened into render commands, turned into meshes by the embedding
//! application, merged into as few texture-coherent batches as possible and uploaded into
//! vertex buffers that are reused from frame to frame.
//!
//! ```
//! use ply_overlay::prelude::*;
//!
//! let hud = Element::list(
//!     TopToBottom,
//!     2,
//!     [
//!         Element::text("Score: 12").color(0xFFFF55u32),
//!         Element::sprite(Sprite::Crosshair).center(),
//!     ],
//! );
//! let layout = hud.resolve(Vec2i::new(320, 240), &GlyphTable::monospace(5), &TranslationTable::new());
//! assert_eq!(layout.children.len(), 2);
//! ```

pub mod actions;
pub mod align;
pub mod batching;
pub mod color;
pub mod config;
pub mod elements;
pub mod engine;
pub mod errors;
pub mod frame_cache;
pub mod id;
pub mod layout;
pub mod math;
pub mod mesh;
pub mod message;
pub mod prelude;
pub mod render_commands;
pub mod renderable;
pub mod renderer;
pub mod sprites;
pub mod text;

pub use color::Color;
pub use elements::Element;
pub use errors::{Error, Result};
