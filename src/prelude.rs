//! The overlay prelude: a single import for building and drawing overlays.
//!
//! ```rust
//! use ply_overlay::prelude::*;
//! ```

// Core types
pub use crate::elements::Element;
pub use crate::renderable::{Content, Renderable};
pub use crate::renderer::{DisplayScaleProvider, FixedScale, Frame, GuiUniforms, MacroquadDisplayScale, Overlay};
pub use crate::config::{LayoutConfig, OverlayConfig};
pub use crate::errors::Error;
pub use crate::color::Color;
pub use crate::math::{BoundingBox, Vec2i};

// Clicks
pub use crate::actions::{ActionRegistry, ClickHandler};
pub use crate::id::ActionId;

// Text and messages
pub use crate::text::{FontMetrics, GlyphTable, WrappedLine};
pub use crate::message::{Locale, Message, TranslationTable};

// Sprites
pub use crate::sprites::{GuiTextureSlot, Sprite, SpriteDescriptor};

// Rendering
pub use crate::mesh::{ArrayTexture, ElementMesh, GuiMeshBuilder, MeshBuilder, Vertex};
pub use crate::frame_cache::{BufferAllocator, DrawBatch, FrameCache, QuadBufferAllocator};
pub use crate::render_commands::{RenderCommand, RenderCommandConfig};

// Alignment, globbed
pub use crate::align::AlignX::{self, *};
pub use crate::align::AlignY::{self, *};
pub use crate::align::Constraints;

// LayoutDirection, globbed
pub use crate::layout::LayoutDirection::{self, *};

// Edges and expansion, types only, NOT globbed
pub use crate::layout::{Edge, EdgeSet, Expand, Padding};
