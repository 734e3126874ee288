//! GPU-ready geometry for resolved elements.

use std::rc::Rc;

use crate::{
    color::Color,
    errors::{Error, Result},
    math::{BoundingBox, Vec2i},
    render_commands::{RenderCommand, RenderCommandConfig},
};

/// Batch key used for meshes drawn without a texture.
pub const TEXTURELESS: &str = "textureless";

/// A single GUI vertex, laid out exactly as the vertex shader reads it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in unscaled layout pixels, relative to the owning mesh.
    pub position: [f32; 2],
    pub uv: [f32; 2],
    /// Normalized RGBA tint.
    pub tint: [f32; 4],
    /// Layer of the array texture to sample. Ignored by textureless meshes.
    pub texture_index: u32,
}

/// A layered texture meshes sample from. Meshes share it through an [`Rc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayTexture {
    /// Identity used to decide which meshes can be drawn together.
    pub label: Option<String>,
    /// Size of every layer in texels.
    pub size: Vec2i,
    pub layer_count: u32,
}

impl ArrayTexture {
    pub fn new(label: impl Into<String>, size: Vec2i, layer_count: u32) -> Self {
        Self {
            label: Some(label.into()),
            size,
            layer_count,
        }
    }
}

/// Geometry for one element, or for several merged into one batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementMesh {
    pub vertices: Vec<Vertex>,
    /// Offset added to every vertex when drawn.
    pub position: Vec2i,
    /// Extent of the geometry from `position`, used for overlap tests.
    pub size: Vec2i,
    pub array_texture: Option<Rc<ArrayTexture>>,
}

impl ElementMesh {
    /// An axis aligned quad covering `size` pixels, made of two triangles.
    ///
    /// `uv` is the texture rectangle as (min, max) in normalized coordinates.
    pub fn quad(
        position: Vec2i,
        size: Vec2i,
        uv: ([f32; 2], [f32; 2]),
        tint: Color,
        texture_index: u32,
    ) -> Self {
        let (width, height) = (size.x as f32, size.y as f32);
        let (min, max) = uv;
        let tint = tint.to_normalized();
        let vertex = |x: f32, y: f32, u: f32, v: f32| Vertex {
            position: [x, y],
            uv: [u, v],
            tint,
            texture_index,
        };
        let top_left = vertex(0.0, 0.0, min[0], min[1]);
        let top_right = vertex(width, 0.0, max[0], min[1]);
        let bottom_left = vertex(0.0, height, min[0], max[1]);
        let bottom_right = vertex(width, height, max[0], max[1]);

        Self {
            vertices: vec![top_left, top_right, bottom_left, top_right, bottom_right, bottom_left],
            position,
            size,
            array_texture: None,
        }
    }

    /// Makes the mesh sample from `texture`.
    pub fn with_texture(mut self, texture: Rc<ArrayTexture>) -> Self {
        self.array_texture = Some(texture);
        self
    }

    /// The key meshes are batched by.
    pub fn texture_identity(&self) -> Result<&str> {
        match &self.array_texture {
            Some(texture) => texture.label.as_deref().ok_or(Error::TextureMissingLabel),
            None => Ok(TEXTURELESS),
        }
    }

    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_position_size(self.position, self.size)
    }

    /// Moves the mesh to `origin` without moving its geometry: vertices are shifted by the
    /// old position and the size is measured from `origin` instead.
    pub fn rebase(&mut self, origin: Vec2i) {
        let shift = self.position - origin;
        if shift == Vec2i::ZERO {
            return;
        }

        let (x, y) = (shift.x as f32, shift.y as f32);
        for vertex in &mut self.vertices {
            vertex.position[0] += x;
            vertex.position[1] += y;
        }
        self.size += shift;
        self.position = origin;
    }

    /// Appends `other`'s geometry. Both meshes are rebased onto the top left corner of their
    /// combined box, which becomes the new box.
    pub fn combine(&mut self, mut other: ElementMesh) {
        let min = self.position.min(other.position);
        let max = (self.position + self.size).max(other.position + other.size);
        self.rebase(min);
        other.rebase(min);
        self.vertices.append(&mut other.vertices);
        self.size = max - min;
    }

    /// Bytes needed to hold every vertex.
    pub fn required_vertex_buffer_size(&self) -> usize {
        self.vertices.len() * std::mem::size_of::<Vertex>()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Turns render commands into meshes. Implemented by the embedding application, which owns
/// fonts, item models and textures.
pub trait MeshBuilder {
    fn build_meshes(&mut self, commands: &[RenderCommand]) -> Result<Vec<ElementMesh>>;
}

/// Builds quads for backgrounds and GUI sprites. Text and items need glyph and item atlases
/// this builder doesn't have, so `fallback` handles those when present.
pub struct GuiMeshBuilder<'a> {
    /// The array texture holding every [`GuiTextureSlot`](crate::sprites::GuiTextureSlot).
    pub gui_texture: Rc<ArrayTexture>,
    pub fallback: Option<&'a mut dyn MeshBuilder>,
}

impl<'a> GuiMeshBuilder<'a> {
    pub fn new(gui_texture: Rc<ArrayTexture>) -> Self {
        Self {
            gui_texture,
            fallback: None,
        }
    }

    pub fn fallback(mut self, builder: &'a mut dyn MeshBuilder) -> Self {
        self.fallback = Some(builder);
        self
    }
}

impl MeshBuilder for GuiMeshBuilder<'_> {
    fn build_meshes(&mut self, commands: &[RenderCommand]) -> Result<Vec<ElementMesh>> {
        let texture_size = self.gui_texture.size;
        let mut meshes = Vec::with_capacity(commands.len());
        for command in commands {
            let position = command.bounding_box.position();
            let size = command.bounding_box.size();
            match &command.config {
                RenderCommandConfig::Background(background) => {
                    meshes.push(ElementMesh::quad(
                        position,
                        size,
                        ([0.0, 0.0], [0.0, 0.0]),
                        background.color,
                        0,
                    ));
                }
                RenderCommandConfig::Sprite(descriptor) => {
                    let texel = |value: i32, extent: i32| value as f32 / extent as f32;
                    let min = [
                        texel(descriptor.position.x, texture_size.x),
                        texel(descriptor.position.y, texture_size.y),
                    ];
                    let max = [
                        texel(descriptor.position.x + descriptor.size.x, texture_size.x),
                        texel(descriptor.position.y + descriptor.size.y, texture_size.y),
                    ];
                    meshes.push(
                        ElementMesh::quad(position, size, (min, max), Color::WHITE, descriptor.slot.layer())
                            .with_texture(Rc::clone(&self.gui_texture)),
                    );
                }
                RenderCommandConfig::Text(_) | RenderCommandConfig::Item(_) => {
                    if let Some(fallback) = self.fallback.as_deref_mut() {
                        meshes.extend(fallback.build_meshes(std::slice::from_ref(command))?);
                    }
                }
            }
        }
        Ok(meshes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprites::Sprite;

    fn quad(x: i32, y: i32, width: i32, height: i32) -> ElementMesh {
        ElementMesh::quad(
            Vec2i::new(x, y),
            Vec2i::new(width, height),
            ([0.0, 0.0], [1.0, 1.0]),
            Color::WHITE,
            0,
        )
    }

    #[test]
    fn rebase_keeps_geometry_in_place() {
        let mut mesh = quad(3, 4, 10, 5);
        mesh.rebase(Vec2i::ZERO);
        assert_eq!(mesh.position, Vec2i::ZERO);
        assert_eq!(mesh.size, Vec2i::new(13, 9));
        assert_eq!(mesh.vertices[0].position, [3.0, 4.0]);
        assert_eq!(mesh.vertices[4].position, [13.0, 9.0]);
    }

    #[test]
    fn combine_covers_negative_positions() {
        let mut mesh = quad(-5, 0, 10, 10);
        mesh.combine(quad(20, 3, 4, 4));
        assert_eq!(mesh.bounding_box(), BoundingBox::new(-5, 0, 29, 10));
        // Vertices are relative to the combined box's corner.
        assert_eq!(mesh.vertices[0].position, [0.0, 0.0]);
        assert_eq!(mesh.vertices[6].position, [25.0, 3.0]);
        assert!(mesh.bounding_box().intersects(&BoundingBox::new(-4, 2, 2, 2)));
    }

    #[test]
    fn texture_identity() {
        let quad = || ElementMesh::quad(Vec2i::ZERO, Vec2i::new(1, 1), ([0.0; 2], [1.0; 2]), Color::WHITE, 0);
        assert_eq!(quad().texture_identity().unwrap(), TEXTURELESS);

        let labelled = Rc::new(ArrayTexture::new("gui", Vec2i::new(256, 256), 4));
        assert_eq!(quad().with_texture(labelled).texture_identity().unwrap(), "gui");

        let unlabelled = Rc::new(ArrayTexture {
            label: None,
            size: Vec2i::new(256, 256),
            layer_count: 1,
        });
        assert!(matches!(
            quad().with_texture(unlabelled).texture_identity(),
            Err(Error::TextureMissingLabel)
        ));
    }

    #[test]
    fn vertex_bytes_match_required_size() {
        let mesh = ElementMesh::quad(Vec2i::ZERO, Vec2i::new(2, 2), ([0.0; 2], [1.0; 2]), Color::WHITE, 1);
        assert_eq!(std::mem::size_of::<Vertex>(), 36);
        assert_eq!(mesh.vertex_bytes().len(), mesh.required_vertex_buffer_size());
        assert_eq!(mesh.required_vertex_buffer_size(), 6 * 36);
    }

    struct CountingBuilder(usize);

    impl MeshBuilder for CountingBuilder {
        fn build_meshes(&mut self, commands: &[RenderCommand]) -> Result<Vec<ElementMesh>> {
            self.0 += commands.len();
            Ok(Vec::new())
        }
    }

    #[test]
    fn gui_builder_maps_sprites_into_the_gui_texture() {
        let texture = Rc::new(ArrayTexture::new("gui", Vec2i::new(256, 256), 4));
        let commands = vec![
            RenderCommand {
                bounding_box: BoundingBox::new(5, 5, 182, 22),
                config: RenderCommandConfig::Sprite(Sprite::Hotbar.descriptor()),
                id: 0,
            },
            RenderCommand {
                bounding_box: BoundingBox::new(0, 0, 4, 4),
                config: RenderCommandConfig::Item(crate::render_commands::Item { id: 1 }),
                id: 1,
            },
        ];
        let mut fallback = CountingBuilder(0);
        let meshes = GuiMeshBuilder::new(texture)
            .fallback(&mut fallback)
            .build_meshes(&commands)
            .unwrap();
        assert_eq!(meshes.len(), 1);
        assert_eq!(meshes[0].position, Vec2i::new(5, 5));
        assert_eq!(meshes[0].vertices[4].uv, [182.0 / 256.0, 22.0 / 256.0]);
        assert_eq!(meshes[0].texture_identity().unwrap(), "gui");
        assert_eq!(fallback.0, 1);
    }

    struct MissingAtlas;

    impl MeshBuilder for MissingAtlas {
        fn build_meshes(&mut self, _commands: &[RenderCommand]) -> Result<Vec<ElementMesh>> {
            Err(Error::MeshBuilder("glyph atlas not loaded".to_owned()))
        }
    }

    #[test]
    fn fallback_failures_abort_the_frame() {
        let texture = Rc::new(ArrayTexture::new("gui", Vec2i::new(256, 256), 4));
        let commands = vec![RenderCommand {
            bounding_box: BoundingBox::new(0, 0, 10, 9),
            config: RenderCommandConfig::Text(crate::render_commands::Text {
                lines: Vec::new(),
                hanging_indent: 4,
                color: Color::WHITE,
            }),
            id: 0,
        }];
        let mut fallback = MissingAtlas;
        let result = GuiMeshBuilder::new(texture)
            .fallback(&mut fallback)
            .build_meshes(&commands);
        assert!(matches!(result, Err(Error::MeshBuilder(message)) if message == "glyph atlas not loaded"));
    }
}
