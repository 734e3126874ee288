use thiserror::Error;

/// Errors surfaced by the overlay pipeline.
///
/// Layout itself never fails; these come from batching, buffer management and the
/// collaborators plugged into a frame.
#[derive(Debug, Error)]
pub enum Error {
    /// An array texture was handed to the batch optimizer without the label that identifies
    /// it. This is a bug in whoever built the mesh, not a data problem.
    #[error("array texture is missing its identity label")]
    TextureMissingLabel,
    /// A write would run past the end of the buffer it targets.
    #[error("write of {len} bytes at offset {offset} exceeds buffer capacity {capacity}")]
    BufferWriteOutOfRange {
        offset: usize,
        len: usize,
        capacity: usize,
    },
    /// The allocator only supports whole-buffer writes starting at zero.
    #[error("buffer writes at offset {0} are not supported by this allocator")]
    UnsupportedWriteOffset(usize),
    /// The embedding application's mesh builder gave up on this frame. Custom
    /// [`MeshBuilder`](crate::mesh::MeshBuilder) implementations return this when their
    /// glyph or item atlases can't produce geometry.
    #[error("mesh builder failed: {0}")]
    MeshBuilder(String),
    /// The overlay configuration could not be parsed.
    #[cfg(feature = "config-json")]
    #[error("invalid overlay config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
