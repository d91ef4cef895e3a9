use serde::Deserialize;

/// User record returned by the directory API.
///
/// Everything beyond `id` is optional and modeled as such; absence is
/// handled explicitly when the display identity is derived.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryProfile {
    pub id: String,

    #[serde(default)]
    pub username: Option<String>,

    /// Display name preferred over `username` when present.
    #[serde(default)]
    pub global_name: Option<String>,

    /// Avatar hash; an `a_` prefix marks an animated avatar.
    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub discriminator: Option<String>,
}
