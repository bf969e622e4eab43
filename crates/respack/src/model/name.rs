//! Qualified resource names.
//!
//! A resource is addressed by (package, type, entry). The owning
//! [`ResourceName`] is safe to store; [`ResourceNameRef`] borrows its
//! text and must not be retained past the data it points into.

use std::fmt;

use crate::model::ty::ResourceType;

/// An owning qualified name. An empty package means the name is local
/// to the compilation unit being built.
///
/// Field order defines the total order: package, then type tag, then
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceName {
    pub package: String,
    pub ty: ResourceType,
    pub entry: String,
}

/// Borrowing variant of [`ResourceName`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceNameRef<'a> {
    pub package: &'a str,
    pub ty: ResourceType,
    pub entry: &'a str,
}

impl ResourceName {
    pub fn new(package: impl Into<String>, ty: ResourceType, entry: impl Into<String>) -> Self {
        ResourceName {
            package: package.into(),
            ty,
            entry: entry.into(),
        }
    }

    pub fn as_ref(&self) -> ResourceNameRef<'_> {
        ResourceNameRef {
            package: &self.package,
            ty: self.ty,
            entry: &self.entry,
        }
    }
}

impl<'a> ResourceNameRef<'a> {
    pub fn new(package: &'a str, ty: ResourceType, entry: &'a str) -> Self {
        ResourceNameRef { package, ty, entry }
    }

    /// Copies the borrowed text into an owning name.
    pub fn to_resource_name(self) -> ResourceName {
        ResourceName {
            package: self.package.to_string(),
            ty: self.ty,
            entry: self.entry.to_string(),
        }
    }
}

impl<'a> From<&'a ResourceName> for ResourceNameRef<'a> {
    fn from(name: &'a ResourceName) -> Self {
        name.as_ref()
    }
}

impl fmt::Display for ResourceNameRef<'_> {
    /// `"package:type/entry"`, or `"type/entry"` when the package is
    /// empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.package.is_empty() {
            write!(f, "{}:", self.package)?;
        }
        write!(f, "{}/{}", self.ty, self.entry)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.as_ref().fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_with_package() {
        let name = ResourceName::new("com.app", ResourceType::String, "app_name");
        assert_eq!(name.to_string(), "com.app:string/app_name");
    }

    #[test]
    fn test_display_without_package() {
        let name = ResourceName::new("", ResourceType::Layout, "main");
        assert_eq!(name.to_string(), "layout/main");
    }

    #[test]
    fn test_display_extended_bucket() {
        let name = ResourceNameRef::new("android", ResourceType::Drawable2, "icon");
        assert_eq!(name.to_string(), "android:drawable.2/icon");
    }

    #[test]
    fn test_ref_matches_owned() {
        let owned = ResourceName::new("pkg", ResourceType::Attr, "color");
        let borrowed = ResourceNameRef::from(&owned);
        assert_eq!(borrowed.to_string(), owned.to_string());
        assert_eq!(borrowed.to_resource_name(), owned);
    }

    #[test]
    fn test_ordering_package_then_type_then_entry() {
        let a = ResourceName::new("a", ResourceType::String, "x");
        let b = ResourceName::new("a", ResourceType::String, "y");
        let c = ResourceName::new("a", ResourceType::Style, "a");
        let d = ResourceName::new("b", ResourceType::Anim, "a");
        assert!(a < b);
        // Type dominates entry.
        assert!(b < c);
        // Package dominates type.
        assert!(c < d);
    }
}
