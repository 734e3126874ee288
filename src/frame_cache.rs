//! Reusing vertex buffers from one frame to the next.

use std::rc::Rc;

use macroquad::miniquad::{BufferId, BufferSource, BufferType, BufferUsage};
use macroquad::prelude::{debug, get_internal_gl};

use crate::{
    errors::{Error, Result},
    mesh::{ArrayTexture, ElementMesh},
};

/// Hands out GPU buffers and fills them.
pub trait BufferAllocator {
    type Buffer: Clone;

    /// Creates a buffer that can hold at least `size` bytes.
    fn allocate(&mut self, size: usize) -> Result<Self::Buffer>;

    /// Copies `bytes` into `buffer` starting at `offset`.
    fn write(&mut self, buffer: &Self::Buffer, bytes: &[u8], offset: usize) -> Result<()>;

    /// Called once the cache no longer references `buffer`.
    fn release(&mut self, _buffer: Self::Buffer) {}
}

/// One optimized batch ready to be drawn.
#[derive(Debug, Clone)]
pub struct DrawBatch<B> {
    pub buffer: B,
    pub vertex_count: usize,
    pub array_texture: Option<Rc<ArrayTexture>>,
}

#[derive(Debug)]
struct CachedBuffer<B> {
    buffer: B,
    capacity: usize,
}

/// Vertex buffers of the previous frame, indexed by batch position.
///
/// Batch *i* of a frame reuses the buffer batch *i* used last frame when it is big enough,
/// whatever that batch drew. Indices are only meaningful within one frame, so a buffer may
/// be handed to an unrelated batch; its old contents are always overwritten first.
#[derive(Debug)]
pub struct FrameCache<B> {
    entries: Vec<CachedBuffer<B>>,
}

impl<B> Default for FrameCache<B> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<B: Clone> FrameCache<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of buffers kept from the previous frame.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Uploads every batch, reusing last frame's buffers where they are big enough.
    /// Buffers this frame no longer needs are released.
    pub fn prepare<A>(&mut self, batches: &[ElementMesh], allocator: &mut A) -> Result<Vec<DrawBatch<B>>>
    where
        A: BufferAllocator<Buffer = B>,
    {
        let mut previous = std::mem::take(&mut self.entries).into_iter();
        let mut current = Vec::with_capacity(batches.len());
        let mut draws = Vec::with_capacity(batches.len());

        for (index, batch) in batches.iter().enumerate() {
            let required = batch.required_vertex_buffer_size();
            let entry = match previous.next() {
                Some(entry) if entry.capacity >= required => Ok(entry),
                Some(entry) => {
                    debug!(
                        "Reallocating GUI vertex buffer {}: {} -> {} bytes",
                        index, entry.capacity, required
                    );
                    allocator.release(entry.buffer);
                    Self::allocate(allocator, required)
                }
                None => Self::allocate(allocator, required),
            };
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    self.entries = current.into_iter().chain(previous).collect();
                    return Err(error);
                }
            };

            if let Err(error) = allocator.write(&entry.buffer, batch.vertex_bytes(), 0) {
                current.push(entry);
                self.entries = current.into_iter().chain(previous).collect();
                return Err(error);
            }

            draws.push(DrawBatch {
                buffer: entry.buffer.clone(),
                vertex_count: batch.vertices.len(),
                array_texture: batch.array_texture.clone(),
            });
            current.push(entry);
        }

        for stale in previous {
            allocator.release(stale.buffer);
        }
        self.entries = current;
        Ok(draws)
    }

    /// Releases every cached buffer.
    pub fn clear<A>(&mut self, allocator: &mut A)
    where
        A: BufferAllocator<Buffer = B>,
    {
        for entry in self.entries.drain(..) {
            allocator.release(entry.buffer);
        }
    }

    fn allocate<A>(allocator: &mut A, capacity: usize) -> Result<CachedBuffer<B>>
    where
        A: BufferAllocator<Buffer = B>,
    {
        Ok(CachedBuffer {
            buffer: allocator.allocate(capacity)?,
            capacity,
        })
    }
}

/// A miniquad vertex buffer and the number of bytes it was created with.
#[derive(Debug, Clone, Copy)]
pub struct QuadBuffer {
    pub id: BufferId,
    pub capacity: usize,
}

/// Allocates stream vertex buffers on macroquad's rendering context.
///
/// Must only be used on the main thread while the macroquad window is running.
#[derive(Debug, Default)]
pub struct QuadBufferAllocator;

impl BufferAllocator for QuadBufferAllocator {
    type Buffer = QuadBuffer;

    fn allocate(&mut self, size: usize) -> Result<QuadBuffer> {
        let gl = unsafe { get_internal_gl() };
        // Zero sized buffers are not portable.
        let capacity = size.max(1);
        let id = gl.quad_context.new_buffer(
            BufferType::VertexBuffer,
            BufferUsage::Stream,
            BufferSource::empty::<u8>(capacity),
        );
        Ok(QuadBuffer { id, capacity })
    }

    fn write(&mut self, buffer: &QuadBuffer, bytes: &[u8], offset: usize) -> Result<()> {
        if offset != 0 {
            return Err(Error::UnsupportedWriteOffset(offset));
        }
        if bytes.len() > buffer.capacity {
            return Err(Error::BufferWriteOutOfRange {
                offset,
                len: bytes.len(),
                capacity: buffer.capacity,
            });
        }
        if bytes.is_empty() {
            return Ok(());
        }
        let gl = unsafe { get_internal_gl() };
        gl.quad_context.buffer_update(buffer.id, BufferSource::slice(bytes));
        Ok(())
    }

    fn release(&mut self, buffer: QuadBuffer) {
        let gl = unsafe { get_internal_gl() };
        gl.quad_context.delete_buffer(buffer.id);
    }
}
