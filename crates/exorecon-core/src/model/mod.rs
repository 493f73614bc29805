pub mod entity;
pub mod field_set;
pub mod origin;

pub use entity::{Entity, EntityKind, HostRef, Planet, Star};
pub use field_set::{FieldSet, FieldValue, NOT_AVAILABLE};
pub use origin::Origin;
