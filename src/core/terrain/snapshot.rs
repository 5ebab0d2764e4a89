//=========================================================================
// Terrain Snapshot
//=========================================================================
//
// Immutable capture of one terrain's splat-map (alpha-map) metadata.
//
// Alpha-map layout is row-major with the texture layer innermost:
//   index(x, y, layer) = (y * width + x) * texture_count + layer
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::host::TerrainId;

//=== PhysicMaterial ======================================================

/// Surface material of a terrain collider.
#[derive(Debug, Clone, PartialEq)]
pub struct PhysicMaterial {
    pub name: String,
    pub dynamic_friction: f32,
    pub static_friction: f32,
    pub bounciness: f32,
}

//=== TerrainData =========================================================

/// Engine-owned terrain data exposing its alpha-map.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainData {
    alphamap_width: usize,
    alphamap_height: usize,
    alphamaps: Vec<f32>,
}

impl TerrainData {
    /// Wraps an alpha-map buffer of `width * height * layers` weights.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match the dimensions.
    pub fn new(alphamap_width: usize, alphamap_height: usize, alphamaps: Vec<f32>) -> Self {
        let cells = alphamap_width * alphamap_height;
        assert!(
            (cells == 0 && alphamaps.is_empty()) || (cells > 0 && alphamaps.len() % cells == 0),
            "Alpha-map buffer of {} weights does not fit {}x{}",
            alphamaps.len(),
            alphamap_width,
            alphamap_height
        );
        Self {
            alphamap_width,
            alphamap_height,
            alphamaps,
        }
    }

    pub fn alphamap_width(&self) -> usize {
        self.alphamap_width
    }

    pub fn alphamap_height(&self) -> usize {
        self.alphamap_height
    }

    pub fn alphamaps(&self) -> &[f32] {
        &self.alphamaps
    }
}

//=== TerrainHandle =======================================================

/// A terrain as enumerated from the host scene.
#[derive(Debug, Clone)]
pub struct TerrainHandle {
    pub id: TerrainId,
    pub name: String,
    /// `None` while the engine has not loaded the terrain's data.
    pub data: Option<Arc<TerrainData>>,
    pub collider_material: Option<PhysicMaterial>,
}

//=== TerrainSnapshot =====================================================

#[derive(Debug, Clone)]
pub struct TerrainSnapshot {
    pub terrain: TerrainId,
    pub data: Option<Arc<TerrainData>>,
    pub collider_material: Option<PhysicMaterial>,
    pub alphamap_width: usize,
    pub alphamap_height: usize,
    pub splatmap: Vec<f32>,
    pub texture_count: usize,
}

impl TerrainSnapshot {
    /// Captures `handle`. A terrain without data yields an empty snapshot.
    pub fn capture(handle: &TerrainHandle) -> Self {
        let (width, height, splatmap) = match &handle.data {
            Some(data) => (
                data.alphamap_width(),
                data.alphamap_height(),
                data.alphamaps().to_vec(),
            ),
            None => (0, 0, Vec::new()),
        };

        let cells = width * height;
        let texture_count = if cells == 0 { 0 } else { splatmap.len() / cells };

        Self {
            terrain: handle.id,
            data: handle.data.clone(),
            collider_material: handle.collider_material.clone(),
            alphamap_width: width,
            alphamap_height: height,
            splatmap,
            texture_count,
        }
    }

    /// Texture weights of alpha-map cell `(x, y)`.
    pub fn weights_at(&self, x: usize, y: usize) -> Option<&[f32]> {
        if x >= self.alphamap_width || y >= self.alphamap_height {
            return None;
        }
        let start = (y * self.alphamap_width + x) * self.texture_count;
        self.splatmap.get(start..start + self.texture_count)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(data: Option<TerrainData>) -> TerrainHandle {
        TerrainHandle {
            id: TerrainId(1),
            name: "Valley".into(),
            data: data.map(Arc::new),
            collider_material: None,
        }
    }

    #[test]
    fn test_texture_count_is_buffer_over_cells() {
        // 2x2 cells, 3 layers
        let data = TerrainData::new(2, 2, vec![0.0; 12]);
        let snapshot = TerrainSnapshot::capture(&handle(Some(data)));

        assert_eq!(snapshot.alphamap_width, 2);
        assert_eq!(snapshot.alphamap_height, 2);
        assert_eq!(snapshot.texture_count, 3);
        assert_eq!(snapshot.splatmap.len(), 12);
    }

    #[test]
    fn test_missing_data_yields_empty_snapshot() {
        let snapshot = TerrainSnapshot::capture(&handle(None));
        assert!(snapshot.data.is_none());
        assert_eq!(snapshot.texture_count, 0);
        assert_eq!(snapshot.weights_at(0, 0), None);
    }

    #[test]
    fn test_weights_at_reads_one_cell() {
        let weights = vec![
            1.0, 0.0, // (0, 0)
            0.0, 1.0, // (1, 0)
            0.5, 0.5, // (0, 1)
            0.2, 0.8, // (1, 1)
        ];
        let snapshot = TerrainSnapshot::capture(&handle(Some(TerrainData::new(2, 2, weights))));

        assert_eq!(snapshot.weights_at(1, 0), Some(&[0.0, 1.0][..]));
        assert_eq!(snapshot.weights_at(1, 1), Some(&[0.2, 0.8][..]));
        assert_eq!(snapshot.weights_at(2, 0), None);
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_mismatched_buffer_panics() {
        TerrainData::new(2, 2, vec![0.0; 5]);
    }
}
