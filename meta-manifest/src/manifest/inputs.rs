use serde::Deserialize;

/// Headers to scan and how to treat the ones that are missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputsConfig {
    /// What to do when a configured header does not exist
    #[serde(default)]
    pub on_missing: MissingInputPolicy,

    /// Header paths relative to the engine root, processed in order
    #[serde(default)]
    pub files: Vec<String>,
}

/// Policy for configured headers that do not exist on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingInputPolicy {
    /// Report the header and continue with the next one
    #[default]
    Skip,
    /// Report the header and stop the run
    Abort,
}
