use serde::{Deserialize, Serialize};

/// Text form of a config document.
pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, String>;
    fn deserialize(&self, content: &str) -> Result<TConfig, String>;
}

/// YAML via `serde_yaml_ng`. Stateless.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlConfigSerializer;

impl YamlConfigSerializer {
    pub fn new() -> Self {
        Self
    }
}

fn describe_error(action: &str, error: serde_yaml_ng::Error) -> String {
    match error.location() {
        Some(location) => format!(
            "Failed to {} config at line {}, column {}: {}",
            action,
            location.line(),
            location.column(),
            error
        ),
        None => format!("Failed to {} config: {}", action, error),
    }
}

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, String> {
        serde_yaml_ng::to_string(config).map_err(|e| describe_error("serialize", e))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, String> {
        serde_yaml_ng::from_str(content).map_err(|e| describe_error("deserialize", e))
    }
}
