//! Binding descriptor: which addon to look for.

use serde::{Deserialize, Serialize};

use crate::error::{ResolveError, ResolveResult};

/// Describes the native binding a package wants to load.
///
/// Deserializes from the same shape packages keep in their binding options
/// file:
///
/// ```json
/// { "name": "foo", "napi_versions": [8, 6, 3] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDescriptor {
    /// Addon name, used for both local build outputs and prebuild names.
    pub name: String,
    /// Node-API versions in preference order.
    ///
    /// Declaring any version selects Node-API mode. The resolver probes them
    /// in exactly this order and never reorders them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub napi_versions: Option<Vec<u32>>,
}

impl BindingDescriptor {
    /// Descriptor for a Node-API binding.
    pub fn napi(name: impl Into<String>, versions: impl IntoIterator<Item = u32>) -> Self {
        Self {
            name: name.into(),
            napi_versions: Some(versions.into_iter().collect()),
        }
    }

    /// Descriptor without a Node-API declaration.
    pub fn legacy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            napi_versions: None,
        }
    }

    /// True when a non-empty list of Node-API versions is declared.
    pub fn is_napi(&self) -> bool {
        self.napi_versions.as_ref().is_some_and(|v| !v.is_empty())
    }

    /// Reject descriptors whose name is missing or blank.
    pub(crate) fn validate(&self) -> ResolveResult<()> {
        if self.name.trim().is_empty() {
            return Err(ResolveError::invalid_argument(
                "binding name cannot be empty",
            ));
        }
        Ok(())
    }
}
