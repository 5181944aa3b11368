use canary_core::env::{parse_or, process_env, string_or};

/// Which of the two historical deployments of this service to mimic.
///
/// The original repository shipped two near-duplicate copies of the server;
/// rather than guessing a canonical one, both behaviors are kept behind a
/// runtime switch with the feature-complete one as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// `/ready` route, health timestamp, version suffix on `/`; default port 3000.
    #[default]
    Full,
    /// Bare health and greeting, no `/ready`; default port 8000.
    Minimal,
}

impl Variant {
    fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => Self::Minimal,
            _ => Self::Full,
        }
    }

    /// Port used when `PORT` is unset.
    pub fn default_port(self) -> u16 {
        match self {
            Self::Full => 3000,
            Self::Minimal => 8000,
        }
    }
}

/// Canary service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct CanaryConfig {
    /// Behavior variant. Env var: `VARIANT` ("full" | "minimal").
    pub variant: Variant,
    /// TCP port to listen on. Env var: `PORT`; default depends on the variant.
    pub port: u16,
    /// Version string echoed by `GET /` under [`Variant::Full`].
    /// Env var: `VERSION`, default "1.0.0".
    pub version: String,
}

impl CanaryConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(process_env)
    }

    /// Build the config from an injected lookup. Unset, empty, or unparseable
    /// values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let variant = Variant::from_name(&string_or(&lookup, "VARIANT", "full"));
        Self {
            variant,
            port: parse_or(&lookup, "PORT", variant.default_port()),
            version: string_or(&lookup, "VERSION", "1.0.0"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_full_variant_on_port_3000() {
        let config = CanaryConfig::from_lookup(|_| None);
        assert_eq!(config.variant, Variant::Full);
        assert_eq!(config.port, 3000);
        assert_eq!(config.version, "1.0.0");
    }

    #[test]
    fn minimal_variant_defaults_to_port_8000() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "VARIANT" => Some("minimal".to_string()),
            _ => None,
        });
        assert_eq!(config.variant, Variant::Minimal);
        assert_eq!(config.port, 8000);
    }

    #[test]
    fn port_env_overrides_the_variant_default() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "VARIANT" => Some("minimal".to_string()),
            "PORT" => Some("5000".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn unparseable_port_falls_back_to_the_default() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "PORT" => Some("eight thousand".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn unrecognized_variant_falls_back_to_full() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "VARIANT" => Some("staging".to_string()),
            _ => None,
        });
        assert_eq!(config.variant, Variant::Full);
    }

    #[test]
    fn variant_name_is_case_insensitive() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "VARIANT" => Some("MINIMAL".to_string()),
            _ => None,
        });
        assert_eq!(config.variant, Variant::Minimal);
    }

    #[test]
    fn version_env_is_echoed_verbatim() {
        let config = CanaryConfig::from_lookup(|name| match name {
            "VERSION" => Some("2.3.4-rc1".to_string()),
            _ => None,
        });
        assert_eq!(config.version, "2.3.4-rc1");
    }
}
