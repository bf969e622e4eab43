//! Packed 32-bit resource identifiers.

use std::fmt;

/// A packed resource identifier.
///
/// The bit layout is `0xPPTTEEEE`: one byte of package id, one byte of
/// type id, two bytes of entry id. The layout is carried opaquely;
/// this crate only defines the accessors and the textual rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub fn new(id: u32) -> Self {
        ResourceId(id)
    }

    /// Packs (package, type, entry) into an identifier.
    pub fn from_parts(package_id: u8, type_id: u8, entry_id: u16) -> Self {
        ResourceId(u32::from(package_id) << 24 | u32::from(type_id) << 16 | u32::from(entry_id))
    }

    /// The raw packed value.
    pub fn id(self) -> u32 {
        self.0
    }

    pub fn package_id(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_id(self) -> u16 {
        self.0 as u16
    }

    /// Whether both the package and type fields are assigned.
    pub fn is_valid(self) -> bool {
        self.package_id() != 0 && self.type_id() != 0
    }
}

impl From<u32> for ResourceId {
    fn from(id: u32) -> Self {
        ResourceId(id)
    }
}

impl From<ResourceId> for u32 {
    fn from(id: ResourceId) -> Self {
        id.0
    }
}

impl fmt::Display for ResourceId {
    /// Renders as `0x` plus 8 zero-padded lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
