//! Spatial indexing for planar point sets.
//!
//! ```text
//! spatial/
//! ├── mod.rs          # Exports only
//! └── kdtree.rs       # kiddo-backed KD-tree with radius queries
//! ```

mod kdtree;

pub use kdtree::SpatialIndex;
