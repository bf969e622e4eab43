//! Value types for resource identity:
//! - Type tags and the tag/name codec
//! - Packed 32-bit identifiers
//! - Qualified names (owning and borrowing)
//! - Composite (name, configuration) keys

pub mod id;
pub mod key;
pub mod name;
pub mod ty;

pub use id::ResourceId;
pub use key::{ResourceKey, ResourceKeyRef};
pub use name::{ResourceName, ResourceNameRef};
pub use ty::{
    parse_resource_named_type, ResourceNamedType, ResourceNamedTypeRef, ResourceType,
};
