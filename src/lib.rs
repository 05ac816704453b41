//! Embeddable region quadtree for 2D point containment and range queries.
//!
//! ## Features
//! - **Bounded fan-out**: leaves split into four quadrants once they exceed a
//!   per-node capacity, down to a configurable maximum depth
//! - **Identity removal**: entries are removed by payload identity, located
//!   through the point they were inserted at
//! - **Pruned range queries**: subtrees outside the query rectangle are skipped
//! - **C interface**: the crate builds as a `cdylib` exposing a handle-based API
//!
//! The tree only grows: emptied leaves are kept and never merged back.
//!
//! ```rust
//! use spatio_quadtree::{QuadTree, Rect};
//!
//! let mut tree = QuadTree::with_bounds(0.0, 0.0, 100.0, 100.0, 4, 2)?;
//! tree.insert(10.0, 10.0, 1u32)?;
//! tree.insert(80.0, 20.0, 2u32)?;
//!
//! let found = tree.query(&Rect::new(0.0, 0.0, 50.0, 50.0));
//! assert_eq!(found.len(), 1);
//!
//! assert_eq!(tree.remove_payload(10.0, 10.0, &1), 1);
//! assert_eq!(tree.len(), 1);
//! # Ok::<(), spatio_quadtree::QuadTreeError>(())
//! ```

pub mod builder;
pub mod config;
pub mod error;
pub mod ffi;
pub mod geometry;
pub mod payload;
pub mod quadtree;

pub use builder::QuadTreeBuilder;
pub use config::Config;
pub use error::{QuadTreeError, Result};
pub use geometry::{Point, Rect};
pub use payload::PayloadRef;
pub use quadtree::{Iter, QUADRANTS, QuadTree, Quadrant, TreeStats};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {
    pub use crate::{
        Config, PayloadRef, Point, QuadTree, QuadTreeBuilder, QuadTreeError, Rect, Result,
    };
}
