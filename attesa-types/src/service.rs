//! Service identity and request-addressing types.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Typed key identifying an API service surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceKey(pub &'static str);

impl ServiceKey {
    /// Construct a new typed service key from a static name.
    ///
    /// Service names follow the dotted convention of the underlying API,
    /// e.g. `"compute.globalOperations"` or `"compute.instances"`.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<ServiceKey> for &'static str {
    fn from(k: ServiceKey) -> Self {
        k.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Scope qualifier of an operation or resource.
///
/// Zonal and regional objects must be addressed through their scope; global
/// objects carry none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Scope {
    /// No scope qualifier.
    #[default]
    Global,
    /// Scoped to a zone, by short zone name (e.g. `"us-east1-b"`).
    Zone(String),
    /// Scoped to a region, by short region name (e.g. `"us-east1"`).
    Region(String),
}

/// Addressing bundle for one outgoing request.
///
/// Names the service to call, the tenant project, the scope qualifier, and
/// the short name of the object to get.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallTarget {
    /// Service that answers the request.
    pub service: ServiceKey,
    /// Caller/tenant project identifier.
    pub project: String,
    /// Zone/region qualifier carried over from the operation.
    pub scope: Scope,
    /// Short name of the object being fetched.
    pub name: String,
}
