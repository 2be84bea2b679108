// src/build/descriptor.rs

use std::fmt;

/// Locator for a component type.
///
/// Five fields, any of which may be the wildcard `*`:
/// `group:type:kind:name:version`, e.g.
/// `mom:message-queue:kafka:orders:1.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Descriptor {
    group: String,
    component_type: String,
    kind: String,
    name: String,
    version: String,
}

const WILDCARD: &str = "*";

impl Descriptor {
    pub fn new(
        group: impl Into<String>,
        component_type: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            component_type: component_type.into(),
            kind: kind.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// True when every field is equal or a wildcard on either side.
    pub fn matches(&self, other: &Descriptor) -> bool {
        // ---
        fn field(a: &str, b: &str) -> bool {
            a == WILDCARD || b == WILDCARD || a == b
        }

        field(&self.group, &other.group)
            && field(&self.component_type, &other.component_type)
            && field(&self.kind, &other.kind)
            && field(&self.name, &other.name)
            && field(&self.version, &other.version)
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.group, self.component_type, self.kind, self.name, self.version
        )
    }
}
