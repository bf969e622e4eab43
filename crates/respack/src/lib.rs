//! Identity model for entries in a resource packaging catalog.
//!
//! Every resource in the catalog is addressed two ways: by a qualified
//! name (package, type, entry) and by a packed 32-bit identifier. This
//! crate provides the closed taxonomy of resource types, the codec
//! between type tags and their canonical textual names, and the value
//! types (with both owning and borrowing variants) used to render and
//! order resources.
//!
//! # Basic usage
//!
//! ```
//! use respack::{ResourceId, ResourceName, ResourceType};
//!
//! let ty = ResourceType::parse("drawable.2").unwrap();
//! assert_eq!(ty, ResourceType::Drawable2);
//! assert_eq!(ty.name(), "drawable.2");
//!
//! let name = ResourceName::new("com.app", ResourceType::String, "app_name");
//! assert_eq!(name.to_string(), "com.app:string/app_name");
//!
//! assert_eq!(ResourceId::new(0x7f010001).to_string(), "0x7f010001");
//! ```

pub mod error;
pub mod model;

pub use error::ParseResourceTypeError;
pub use model::{
    parse_resource_named_type, ResourceId, ResourceKey, ResourceKeyRef, ResourceName,
    ResourceNameRef, ResourceNamedType, ResourceNamedTypeRef, ResourceType,
};
