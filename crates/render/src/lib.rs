//! # Catalog Render
//!
//! Boundary adapter between the graph engine and the rendering layer.
//!
//! Classified nodes are projected into strongly-typed [`RenderDescriptor`]
//! values, the only place presentation concerns (font sizing, handle
//! placement, detail modes) live. The rendering collaborator consumes the
//! descriptors as-is; nothing here filters, counts, or orders.

mod adapter;
mod descriptor;

pub use adapter::{font_size, to_renderable};
pub use descriptor::{HandlePosition, HandleSpec, RenderDescriptor, RenderMode};
