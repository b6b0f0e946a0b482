use serde::{Deserialize, Serialize};

/// Byte order agreed between the producing and consuming side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WireOrder {
    #[default]
    Little,
    Big,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub byte_order: WireOrder,
}

impl CodecConfig {
    pub fn new(byte_order: WireOrder) -> Self {
        Self { byte_order }
    }
}

#[cfg(test)]
mod tests {
    use super::{CodecConfig, WireOrder};

    #[test]
    fn default_is_little() {
        assert_eq!(CodecConfig::default().byte_order, WireOrder::Little);
    }

    #[test]
    fn from_json() {
        let config: CodecConfig = serde_json::from_str(r#"{"byte_order":"big"}"#).unwrap();
        assert_eq!(config, CodecConfig::new(WireOrder::Big));

        let config: CodecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, CodecConfig::default());
    }
}
