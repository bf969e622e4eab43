//! The resource type taxonomy and its name codec.
//!
//! [`ResourceType`] is a closed tag set. Each tag has exactly one
//! canonical textual name, rendered by [`ResourceType::name`] and
//! parsed back by [`ResourceType::parse`]. The parse table is built
//! from [`ResourceType::ALL`] and `name()` itself, so the two codec
//! directions cannot drift apart.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseResourceTypeError;

/// A resource category tag.
///
/// Declaration order is significant: it defines the type component of
/// the total order on qualified names. The trailing variants are
/// non-standard secondary buckets that alias a base category with a
/// numeric suffix (canonical names like `"drawable.2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ResourceType {
    Anim,
    Animator,
    Array,
    Attr,
    /// Attribute hidden from the public symbol surface.
    AttrPrivate,
    Bool,
    Color,
    ConfigVarying,
    Dimen,
    Drawable,
    Font,
    Fraction,
    Id,
    Integer,
    Interpolator,
    Layout,
    Macro,
    Menu,
    Mipmap,
    Navigation,
    Plurals,
    Raw,
    String,
    Style,
    Styleable,
    Transition,
    Xml,

    // Non-standard secondary buckets.
    Dimen2,
    Drawable2,
    Drawable3,
    Drawable4,
    Drawable5,
    Drawable6,
    Layout2,
    Raw2,
    Style2,
}

impl ResourceType {
    /// Every tag, in declaration order.
    ///
    /// Adding a variant means adding it here and to [`name`], and the
    /// exhaustive match in `name` plus the array length keep the codec
    /// table in lockstep.
    ///
    /// [`name`]: ResourceType::name
    pub const ALL: [ResourceType; 36] = [
        ResourceType::Anim,
        ResourceType::Animator,
        ResourceType::Array,
        ResourceType::Attr,
        ResourceType::AttrPrivate,
        ResourceType::Bool,
        ResourceType::Color,
        ResourceType::ConfigVarying,
        ResourceType::Dimen,
        ResourceType::Drawable,
        ResourceType::Font,
        ResourceType::Fraction,
        ResourceType::Id,
        ResourceType::Integer,
        ResourceType::Interpolator,
        ResourceType::Layout,
        ResourceType::Macro,
        ResourceType::Menu,
        ResourceType::Mipmap,
        ResourceType::Navigation,
        ResourceType::Plurals,
        ResourceType::Raw,
        ResourceType::String,
        ResourceType::Style,
        ResourceType::Styleable,
        ResourceType::Transition,
        ResourceType::Xml,
        ResourceType::Dimen2,
        ResourceType::Drawable2,
        ResourceType::Drawable3,
        ResourceType::Drawable4,
        ResourceType::Drawable5,
        ResourceType::Drawable6,
        ResourceType::Layout2,
        ResourceType::Raw2,
        ResourceType::Style2,
    ];

    /// Returns the canonical name for this tag.
    ///
    /// Total: every tag has exactly one non-empty name. The match is
    /// exhaustive, so a tag without a rendering cannot compile.
    pub fn name(self) -> &'static str {
        match self {
            ResourceType::Anim => "anim",
            ResourceType::Animator => "animator",
            ResourceType::Array => "array",
            ResourceType::Attr => "attr",
            ResourceType::AttrPrivate => "^attr-private",
            ResourceType::Bool => "bool",
            ResourceType::Color => "color",
            ResourceType::ConfigVarying => "configVarying",
            ResourceType::Dimen => "dimen",
            ResourceType::Drawable => "drawable",
            ResourceType::Font => "font",
            ResourceType::Fraction => "fraction",
            ResourceType::Id => "id",
            ResourceType::Integer => "integer",
            ResourceType::Interpolator => "interpolator",
            ResourceType::Layout => "layout",
            ResourceType::Macro => "macro",
            ResourceType::Menu => "menu",
            ResourceType::Mipmap => "mipmap",
            ResourceType::Navigation => "navigation",
            ResourceType::Plurals => "plurals",
            ResourceType::Raw => "raw",
            ResourceType::String => "string",
            ResourceType::Style => "style",
            ResourceType::Styleable => "styleable",
            ResourceType::Transition => "transition",
            ResourceType::Xml => "xml",
            ResourceType::Dimen2 => "dimen.2",
            ResourceType::Drawable2 => "drawable.2",
            ResourceType::Drawable3 => "drawable.3",
            ResourceType::Drawable4 => "drawable.4",
            ResourceType::Drawable5 => "drawable.5",
            ResourceType::Drawable6 => "drawable.6",
            ResourceType::Layout2 => "layout.2",
            ResourceType::Raw2 => "raw.2",
            ResourceType::Style2 => "style.2",
        }
    }

    /// Looks up a tag by name.
    ///
    /// Exact, case-sensitive match against the canonical names (which
    /// include the secondary-bucket spellings and `^attr-private`).
    /// Returns `None` for anything else; unknown names are not an
    /// error, callers decide how to fall back.
    pub fn parse(s: &str) -> Option<ResourceType> {
        TYPE_BY_NAME.get(s).copied()
    }

    /// Pairs this tag with its canonical name.
    pub fn with_default_name(self) -> ResourceNamedTypeRef<'static> {
        ResourceNamedTypeRef::new(self.name(), self)
    }
}

lazy_static::lazy_static! {
    /// Process-wide name→tag table, built once on first use and never
    /// mutated afterward.
    static ref TYPE_BY_NAME: HashMap<&'static str, ResourceType> =
        ResourceType::ALL.iter().map(|&t| (t.name(), t)).collect();
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResourceType {
    type Err = ParseResourceTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceType::parse(s).ok_or_else(|| ParseResourceTypeError(s.to_string()))
    }
}

/// A resource type together with the spelling that represents it,
/// borrowing the text.
///
/// The spelling is usually the canonical name but may be any accepted
/// alias. Valid only as long as the borrowed text; use
/// [`to_owned`](ResourceNamedTypeRef::to_owned) to store it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceNamedTypeRef<'a> {
    pub name: &'a str,
    pub ty: ResourceType,
}

/// Owning variant of [`ResourceNamedTypeRef`], safe to store and
/// return.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceNamedType {
    pub name: String,
    pub ty: ResourceType,
}

impl<'a> ResourceNamedTypeRef<'a> {
    pub fn new(name: &'a str, ty: ResourceType) -> Self {
        ResourceNamedTypeRef { name, ty }
    }

    /// Copies the spelling into an owning value.
    pub fn to_owned(self) -> ResourceNamedType {
        ResourceNamedType {
            name: self.name.to_string(),
            ty: self.ty,
        }
    }
}

impl ResourceNamedType {
    pub fn new(name: impl Into<String>, ty: ResourceType) -> Self {
        ResourceNamedType {
            name: name.into(),
            ty,
        }
    }

    pub fn as_ref(&self) -> ResourceNamedTypeRef<'_> {
        ResourceNamedTypeRef::new(&self.name, self.ty)
    }
}

impl<'a> From<&'a ResourceNamedType> for ResourceNamedTypeRef<'a> {
    fn from(named: &'a ResourceNamedType) -> Self {
        named.as_ref()
    }
}

impl fmt::Display for ResourceNamedTypeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ResourceNamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Resolves `s` as a type name, pairing the input text with the tag it
/// names.
///
/// The whole string must match an entry in the name table; a dotted
/// suffix is not split off (spellings like `"drawable.2"` are table
/// entries in their own right). Returns `None` when nothing matches.
pub fn parse_resource_named_type(s: &str) -> Option<ResourceNamedTypeRef<'_>> {
    let ty = ResourceType::parse(s)?;
    Some(ResourceNamedTypeRef::new(s, ty))
}
