//! # Catalog Graph
//!
//! Message relationship graph for event-driven architecture catalogs.
//!
//! ## Features
//!
//! - **Node normalization** - raw message records become uniform, style-resolved nodes
//! - **Visual classification** - deterministic category → color/icon mapping
//! - **Edge derivation** - producer/consumer lists become directed, role-tagged edges
//! - **Build diagnostics** - invalid records and dangling references are
//!   collected in aggregate, never fatal to a batch
//!
//! ## Architecture
//!
//! ```text
//! MessageRecord[]
//!     │
//!     ├──> Node Normalizer (per-record validation)
//!     │      ├─ Resolve label (override → badge → category default)
//!     │      ├─ Resolve color/icon (override → palette)
//!     │      └─ Cache producer/consumer/owner counts
//!     │
//!     ├──> Edge Builder
//!     │      ├─ producer → message (produces)
//!     │      ├─ message → consumer (consumes)
//!     │      └─ Drop and tally dangling references
//!     │
//!     └──> Catalog Graph (petgraph)
//!            ├─ Nodes: normalized messages, in record order
//!            └─ Edges: produces / consumes, in emission order
//! ```
//!
//! The graph is immutable after a build; query and render layers share the
//! snapshot freely without locking.

mod builder;
mod error;
mod graph;
mod normalize;
mod style;
mod types;

pub use builder::{
    build_edges, BuildReport, CatalogBuild, CatalogBuilder, DanglingTally, SkippedRecord,
};
pub use error::{GraphError, Result};
pub use normalize::normalize;
pub use style::{StyleDescriptor, StylePalette};
pub use types::{
    CatalogGraph, EdgeRole, LabelSize, MessageEdge, MessageNode, LABEL_SIZE_THRESHOLD,
};
