//! Mathgen Constant Tables
//!
//! Fixed data the generation passes iterate over. Nothing here has behavior
//! beyond lookups and the shape algebra the passes expand.
//!
//! # Modules
//!
//! - [`aliases`]: component naming groups sharing storage
//! - [`types`]: element type descriptors
//! - [`operators`]: operator symbol lists, roles, and the chained-operator delimiter
//! - [`shapes`]: dimensions, entities, multiply shapes, resize fills
//! - [`factories`]: matrix factory methods and their minimal shapes

pub mod aliases;
pub mod factories;
pub mod operators;
pub mod shapes;
pub mod types;

pub use aliases::{field, fields, FIELD_ALIASES};
pub use factories::{Availability, Factory, FactoryKind, FACTORIES};
pub use operators::{OpRole, CUSTOM_OPS, CUSTOM_OP_DELIM};
pub use shapes::{dims, mat_shapes, Entity, Fill, MulShape, Operand, Path, MAX_DIM, MIN_DIM};
pub use types::{TypeDesc, TypeKind, TYPES};
