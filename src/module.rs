//! Data model shared by the collector and the renderer.

use serde::{Deserialize, Deserializer, Serialize};

/// A single `required_providers` entry.
///
/// Fields are kept verbatim; neither the source address nor the version
/// constraint is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Provider {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub version: String,
}

/// Everything needed to render one module.
///
/// Serialized as-is into the template context, so the field names here are
/// the variable names available to the templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    pub module_name: String,
    pub description: String,
    pub terraform_version: String,
    pub providers: Vec<Provider>,
}

/// Deserializes an explicit `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
