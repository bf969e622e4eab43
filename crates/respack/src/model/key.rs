//! Composite lookup keys for sorted resource containers.
//!
//! A key pairs a qualified name with a configuration descriptor. The
//! configuration type `C` is supplied by the caller; the only
//! requirement here is a strict total order (`Ord`), which makes the
//! key itself safe as a `BTreeMap`/`BTreeSet` key. Names compare
//! first; configurations break ties.

use crate::model::name::{ResourceName, ResourceNameRef};

/// An owning (name, configuration) key.
///
/// Field order defines the total order: name, then configuration.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKey<C> {
    pub name: ResourceName,
    pub config: C,
}

/// Borrowing variant of [`ResourceKey`]; valid only for the lifetime
/// of the name text and configuration it points into.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceKeyRef<'a, C> {
    pub name: ResourceNameRef<'a>,
    pub config: &'a C,
}

impl<C> ResourceKey<C> {
    pub fn new(name: ResourceName, config: C) -> Self {
        ResourceKey { name, config }
    }

    pub fn as_ref(&self) -> ResourceKeyRef<'_, C> {
        ResourceKeyRef {
            name: self.name.as_ref(),
            config: &self.config,
        }
    }
}

impl<'a, C> ResourceKeyRef<'a, C> {
    pub fn new(name: ResourceNameRef<'a>, config: &'a C) -> Self {
        ResourceKeyRef { name, config }
    }

    /// Copies the borrowed name and configuration into an owning key.
    pub fn to_key(self) -> ResourceKey<C>
    where
        C: Clone,
    {
        ResourceKey {
            name: self.name.to_resource_name(),
            config: self.config.clone(),
        }
    }
}

// Hand-written so the ref variant stays Copy/Clone regardless of `C`.
impl<C> Clone for ResourceKeyRef<'_, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for ResourceKeyRef<'_, C> {}

impl<'a, C> From<&'a ResourceKey<C>> for ResourceKeyRef<'a, C> {
    fn from(key: &'a ResourceKey<C>) -> Self {
        key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::model::ty::ResourceType;

    // Stand-in for the external configuration descriptor; any Ord
    // type works.
    type Config = u32;

    fn key(package: &str, ty: ResourceType, entry: &str, config: Config) -> ResourceKey<Config> {
        ResourceKey::new(ResourceName::new(package, ty, entry), config)
    }

    #[test]
    fn test_config_breaks_name_ties() {
        let k1 = key("a", ResourceType::String, "x", 1);
        let k2 = key("a", ResourceType::String, "x", 2);
        assert!(k1 < k2);
        assert!(k1 == key("a", ResourceType::String, "x", 1));
    }

    #[test]
    fn test_name_dominates_config() {
        let k1 = key("a", ResourceType::String, "x", 9999);
        let k3 = key("a", ResourceType::String, "y", 0);
        assert!(k1 < k3);
    }

    #[test]
    fn test_ref_ordering_matches_owned() {
        let k1 = key("a", ResourceType::Layout, "main", 3);
        let k2 = key("a", ResourceType::Layout, "main", 7);
        assert_eq!(k1.as_ref() < k2.as_ref(), k1 < k2);
        assert_eq!(k1.as_ref().to_key(), k1);
    }

    #[test]
    fn test_btree_map_iteration_order() {
        let mut map = BTreeMap::new();
        map.insert(key("b", ResourceType::Anim, "a", 0), 0);
        map.insert(key("a", ResourceType::String, "x", 2), 1);
        map.insert(key("a", ResourceType::String, "x", 1), 2);
        map.insert(key("a", ResourceType::Style, "a", 0), 3);

        let values: Vec<_> = map.values().copied().collect();
        // Name order (package, type, entry) first, then config.
        assert_eq!(values, vec![2, 1, 3, 0]);
    }
}
