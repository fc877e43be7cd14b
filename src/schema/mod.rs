//! Schema-definition structures consumed by the declaration renderers.

pub mod column;

pub use column::{ColumnSpec, DeclarationOptions, ObjectPolicy};
