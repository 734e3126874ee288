//! Merging element meshes into as few draw batches as possible.

use rustc_hash::FxHashMap;

use crate::{errors::Result, math::BoundingBox, mesh::ElementMesh};

/// Greedily merges meshes that share a texture while keeping the result identical to
/// drawing `meshes` one by one in order.
///
/// Each texture has at most one open batch. An incoming mesh joins its texture's open batch
/// unless any batch created after that one overlaps it, in which case merging would pull it underneath that
/// batch; the texture then starts a new batch on top instead.
///
/// Fails with [`TextureMissingLabel`](crate::errors::Error::TextureMissingLabel) if any
/// mesh's array texture has no label.
pub fn optimize_meshes(meshes: Vec<ElementMesh>) -> Result<Vec<ElementMesh>> {
    let mut texture_to_index: FxHashMap<String, usize> = FxHashMap::default();
    // The boxes of the meshes merged into each batch.
    let mut boxes: Vec<Vec<BoundingBox>> = Vec::new();
    let mut batches: Vec<ElementMesh> = Vec::with_capacity(meshes.len());

    for mesh in meshes {
        let texture = mesh.texture_identity()?.to_owned();
        let bounding_box = mesh.bounding_box();

        if let Some(&index) = texture_to_index.get(&texture) {
            // Every batch created after this one is drawn on top of it, including batches
            // that no longer accept meshes.
            let blocked = (index + 1..batches.len()).any(|layer| {
                bounding_box.intersects(&batches[layer].bounding_box())
                    && boxes[layer].iter().any(|other| bounding_box.intersects(other))
            });
            if blocked {
                texture_to_index.remove(&texture);
            }
        }

        match texture_to_index.get(&texture) {
            Some(&index) => {
                batches[index].combine(mesh);
                boxes[index].push(bounding_box);
            }
            None => {
                texture_to_index.insert(texture, batches.len());
                batches.push(mesh);
                boxes.push(vec![bounding_box]);
            }
        }
    }

    Ok(batches)
}
