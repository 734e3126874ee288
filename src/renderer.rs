//! The per-frame driver tying layout, meshing, batching and buffer reuse together.

use macroquad::math::{Mat3, Vec2, Vec3};
use macroquad::prelude::warn;

use crate::{
    actions::ClickHandler,
    batching::optimize_meshes,
    config::OverlayConfig,
    elements::Element,
    errors::Result,
    frame_cache::{BufferAllocator, DrawBatch, FrameCache},
    math::Vec2i,
    mesh::MeshBuilder,
    message::Locale,
    renderable::Renderable,
    text::FontMetrics,
};

/// Reports how many physical pixels the display uses per logical pixel.
pub trait DisplayScaleProvider {
    fn current_scale(&self) -> f32;
}

/// A display scale that never changes. Useful for tests and offscreen rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedScale(pub f32);

impl DisplayScaleProvider for FixedScale {
    fn current_scale(&self) -> f32 {
        self.0
    }
}

/// The scale factor of the macroquad window's display.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacroquadDisplayScale;

impl DisplayScaleProvider for MacroquadDisplayScale {
    fn current_scale(&self) -> f32 {
        macroquad::miniquad::window::dpi_scale()
    }
}

/// Uniforms of the GUI shader.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GuiUniforms {
    /// Column-major matrix taking drawable pixels to normalized device coordinates.
    pub screen_space_to_normalized: [[f32; 3]; 3],
    /// Layout pixels to drawable pixels.
    pub scale: f32,
}

impl GuiUniforms {
    pub fn new(drawable_size: Vec2, scale: f32) -> Self {
        let transformation = Mat3::from_cols(
            Vec3::new(2.0 / drawable_size.x, 0.0, 0.0),
            Vec3::new(0.0, -2.0 / drawable_size.y, 0.0),
            Vec3::new(-1.0, 1.0, 1.0),
        );
        Self {
            screen_space_to_normalized: transformation.to_cols_array_2d(),
            scale,
        }
    }

    pub fn transformation(&self) -> Mat3 {
        Mat3::from_cols_array_2d(&self.screen_space_to_normalized)
    }
}

/// Everything needed to draw one frame of the overlay and answer clicks on it.
#[derive(Debug)]
pub struct Frame<B> {
    pub uniforms: GuiUniforms,
    /// Draw calls in order, back to front.
    pub batches: Vec<DrawBatch<B>>,
    /// The resolved layout, in layout pixels.
    pub layout: Renderable,
}

impl<B> Frame<B> {
    /// Delivers a click at `position` in drawable pixels. Returns whether anything consumed it.
    pub fn handle_click(&self, position: Vec2, handler: &mut dyn ClickHandler) -> bool {
        let scale = self.uniforms.scale;
        let point = Vec2i::new((position.x / scale) as i32, (position.y / scale) as i32);
        self.layout.hit_test(point, handler)
    }
}

/// Draws an element tree every frame, keeping vertex buffers alive between frames.
pub struct Overlay<A: BufferAllocator> {
    config: OverlayConfig,
    display_scale: Box<dyn DisplayScaleProvider>,
    allocator: A,
    cache: FrameCache<A::Buffer>,
}

impl<A: BufferAllocator> Overlay<A> {
    pub fn new(config: OverlayConfig, display_scale: impl DisplayScaleProvider + 'static, allocator: A) -> Self {
        Self {
            config,
            display_scale: Box::new(display_scale),
            allocator,
            cache: FrameCache::new(),
        }
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut OverlayConfig {
        &mut self.config
    }

    /// Layout pixels to drawable pixels: the GUI scale times the display scale.
    pub fn scale(&self) -> f32 {
        let scale = self.config.gui_scale * self.display_scale.current_scale();
        if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            warn!("Invalid GUI scale {}, falling back to 1", scale);
            1.0
        }
    }

    /// Lays out `root` for a drawable of `drawable_size` pixels and uploads its geometry.
    pub fn frame(
        &mut self,
        root: &Element,
        drawable_size: Vec2,
        font: &dyn FontMetrics,
        locale: &dyn Locale,
        mesh_builder: &mut dyn MeshBuilder,
    ) -> Result<Frame<A::Buffer>> {
        let scale = self.scale();
        let available = Vec2i::new(
            (drawable_size.x / scale) as i32,
            (drawable_size.y / scale) as i32,
        );

        let layout = root.resolve_with(available, font, locale, &self.config.layout);
        let meshes = mesh_builder.build_meshes(&layout.render_commands())?;
        let batches = optimize_meshes(meshes)?;
        let batches = self.cache.prepare(&batches, &mut self.allocator)?;

        Ok(Frame {
            uniforms: GuiUniforms::new(drawable_size, scale),
            batches,
            layout,
        })
    }

    /// Releases every cached buffer. The next frame allocates from scratch.
    pub fn clear_cache(&mut self) {
        self.cache.clear(&mut self.allocator);
    }
}

impl<A: BufferAllocator> Drop for Overlay<A> {
    fn drop(&mut self) {
        self.clear_cache();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::id::ActionId;
    use crate::layout::LayoutDirection;
    use crate::mesh::ElementMesh;
    use crate::message::TranslationTable;
    use crate::render_commands::{RenderCommand, RenderCommandConfig};
    use crate::text::GlyphTable;

    #[derive(Default)]
    struct CountingAllocator {
        allocations: usize,
    }

    impl BufferAllocator for CountingAllocator {
        type Buffer = usize;

        fn allocate(&mut self, _size: usize) -> Result<usize> {
            self.allocations += 1;
            Ok(self.allocations)
        }

        fn write(&mut self, _buffer: &usize, _bytes: &[u8], _offset: usize) -> Result<()> {
            Ok(())
        }
    }

    /// Draws every command as an untextured quad.
    struct QuadBuilder;

    impl MeshBuilder for QuadBuilder {
        fn build_meshes(&mut self, commands: &[RenderCommand]) -> Result<Vec<ElementMesh>> {
            Ok(commands
                .iter()
                .map(|command| {
                    let color = match &command.config {
                        RenderCommandConfig::Background(background) => background.color,
                        _ => Color::WHITE,
                    };
                    ElementMesh::quad(
                        command.bounding_box.position(),
                        command.bounding_box.size(),
                        ([0.0; 2], [0.0; 2]),
                        color,
                        0,
                    )
                })
                .collect())
        }
    }

    fn hud() -> Element {
        Element::list(
            LayoutDirection::LeftToRight,
            4,
            [
                Element::item(1).on_click("slot"),
                Element::item(2).padding(2).background(0x80000000u32),
            ],
        )
        .position_in_parent(10, 10)
    }

    #[test]
    fn uniforms_map_corners_to_clip_space() {
        let uniforms = GuiUniforms::new(Vec2::new(512.0, 256.0), 2.0);
        let transformation = uniforms.transformation();
        let top_left = transformation * Vec3::new(0.0, 0.0, 1.0);
        let bottom_right = transformation * Vec3::new(512.0, 256.0, 1.0);
        assert_eq!((top_left.x, top_left.y), (-1.0, 1.0));
        assert_eq!((bottom_right.x, bottom_right.y), (1.0, -1.0));
    }

    #[test]
    fn scale_combines_gui_and_display_scale() {
        let overlay = Overlay::new(OverlayConfig::default(), FixedScale(1.5), CountingAllocator::default());
        assert_eq!(overlay.scale(), 3.0);

        let overlay = Overlay::new(OverlayConfig::default(), FixedScale(0.0), CountingAllocator::default());
        assert_eq!(overlay.scale(), 1.0);
    }

    #[test]
    fn frames_reuse_buffers_and_answer_clicks() {
        let mut overlay = Overlay::new(OverlayConfig::default(), FixedScale(1.0), CountingAllocator::default());
        let font = GlyphTable::monospace(5);
        let locale = TranslationTable::new();

        let frame = overlay
            .frame(&hud(), Vec2::new(400.0, 300.0), &font, &locale, &mut QuadBuilder)
            .unwrap();
        // All quads are textureless and none overlap a different texture.
        assert_eq!(frame.batches.len(), 1);
        assert_eq!(frame.batches[0].vertex_count, 18);
        assert_eq!(frame.uniforms.scale, 2.0);

        let mut clicked = Vec::new();
        // Layout pixel (15, 15) is inside the first item.
        assert!(frame.handle_click(Vec2::new(30.0, 30.0), &mut |id: ActionId| clicked.push(id)));
        assert!(!frame.handle_click(Vec2::new(2.0, 2.0), &mut |id: ActionId| clicked.push(id)));
        assert_eq!(clicked, vec![ActionId::new("slot")]);

        overlay
            .frame(&hud(), Vec2::new(400.0, 300.0), &font, &locale, &mut QuadBuilder)
            .unwrap();
        assert_eq!(overlay.allocator.allocations, 1);
    }
}
