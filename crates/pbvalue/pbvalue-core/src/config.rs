//! Codec configuration.

use serde::{Deserialize, Serialize};

/// Nesting limit applied by [`CodecConfig::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables shared by every codec call made through one [`crate::Codec`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Deepest composite nesting accepted. The root sits at depth 0 and each
    /// struct field or list element is one deeper than its parent. `None`
    /// disables the check.
    pub max_depth: Option<usize>,
}

impl CodecConfig {
    pub fn unbounded() -> Self {
        Self { max_depth: None }
    }

    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, CodecConfig::default());
    }

    #[test]
    fn null_limit_disables_depth_check() {
        let cfg: CodecConfig = serde_json::from_str(r#"{ "max_depth": null }"#).unwrap();
        assert_eq!(cfg, CodecConfig::unbounded());
    }
}
