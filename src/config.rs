//! Minimizer configuration
//!
//! Controls how clauses and final expressions are rendered and how many
//! variables a problem may declare. Loaded from YAML; every field has a
//! default so an empty document is a valid configuration.

use crate::error::{Error, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Hard ceiling on the number of variables. Above this the domain and the
/// coverage table stop being small enough to enumerate.
pub const MAX_SUPPORTED_VARIABLES: usize = 16;

/// Default variable cap, matching the usual 1-6 letter input.
pub const DEFAULT_MAX_VARIABLES: usize = 6;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Rendering of clauses and expressions
    #[serde(default)]
    pub render: RenderConfig,

    /// Input limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Rendering conventions for POS clauses and outcomes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RenderConfig {
    /// Suffix marking a complemented literal (e.g. `A'`)
    #[serde(default = "default_complement_mark")]
    pub complement_mark: String,

    /// Separator between literals inside a sum clause
    #[serde(default = "default_sum_separator")]
    pub sum_separator: String,

    /// Separator between clauses of the product
    #[serde(default = "default_product_separator")]
    pub product_separator: String,

    /// Rendering of a clause with no literals (all positions wildcard)
    #[serde(default = "default_empty_clause")]
    pub empty_clause: String,

    /// Final expression when every input is a minterm
    #[serde(default = "default_tautology")]
    pub tautology: String,

    /// Final expression when no implicant was selected
    #[serde(default = "default_no_implicants")]
    pub no_implicants: String,
}

fn default_complement_mark() -> String {
    "'".to_string()
}

fn default_sum_separator() -> String {
    " + ".to_string()
}

fn default_product_separator() -> String {
    " · ".to_string()
}

fn default_empty_clause() -> String {
    "(0)".to_string()
}

fn default_tautology() -> String {
    "1".to_string()
}

fn default_no_implicants() -> String {
    "No essential prime implicants".to_string()
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            complement_mark: default_complement_mark(),
            sum_separator: default_sum_separator(),
            product_separator: default_product_separator(),
            empty_clause: default_empty_clause(),
            tautology: default_tautology(),
            no_implicants: default_no_implicants(),
        }
    }
}

/// Limits applied when validating a problem
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LimitsConfig {
    /// Maximum number of variables accepted
    #[serde(default = "default_max_variables")]
    pub max_variables: usize,
}

fn default_max_variables() -> usize {
    DEFAULT_MAX_VARIABLES
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
        }
    }
}

impl Config {
    /// Parse a configuration from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_norway::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(Error::Io)?;
        Self::from_yaml(&content).map_err(|e| match e {
            Error::Yaml(e) => Error::Config(format!("Failed to parse {}: {}", path.display(), e)),
            other => other,
        })
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_norway::to_string(self)?)
    }

    /// Check limits and rendering conventions
    pub fn validate(&self) -> Result<()> {
        let max = self.limits.max_variables;
        if max == 0 || max > MAX_SUPPORTED_VARIABLES {
            return Err(Error::Config(format!(
                "limits.max_variables must be between 1 and {}, got {}",
                MAX_SUPPORTED_VARIABLES, max
            )));
        }
        self.render.validate()
    }
}

impl RenderConfig {
    /// Check that rendered clauses read back unambiguously and that the
    /// three outcomes stay textually distinct.
    ///
    /// An expression is either `empty_clause` on its own or a product of
    /// parenthesised clauses, so the tautology and no-implicant markers
    /// must not start with `(` and must differ from `empty_clause`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("complement_mark", &self.complement_mark),
            ("sum_separator", &self.sum_separator),
            ("product_separator", &self.product_separator),
            ("empty_clause", &self.empty_clause),
            ("tautology", &self.tautology),
            ("no_implicants", &self.no_implicants),
        ] {
            if value.trim().is_empty() {
                return Err(Error::Config(format!("render.{} must not be blank", name)));
            }
        }

        if self.complement_mark.chars().any(char::is_alphabetic) {
            return Err(Error::Config(format!(
                "render.complement_mark '{}' must not contain letters",
                self.complement_mark
            )));
        }
        if self.sum_separator.contains(self.complement_mark.trim()) {
            return Err(Error::Config(format!(
                "render.sum_separator '{}' must not contain the complement mark",
                self.sum_separator
            )));
        }
        if self.empty_clause.chars().any(char::is_alphabetic) {
            return Err(Error::Config(format!(
                "render.empty_clause '{}' must not contain letters",
                self.empty_clause
            )));
        }

        for (name, marker) in [("tautology", &self.tautology), ("no_implicants", &self.no_implicants)] {
            if marker.trim_start().starts_with('(') {
                return Err(Error::Config(format!(
                    "render.{} '{}' must not start with '(': it would read as a clause",
                    name, marker
                )));
            }
            if *marker == self.empty_clause {
                return Err(Error::Config(format!(
                    "render.{} and render.empty_clause are both '{}'",
                    name, marker
                )));
            }
        }
        if self.tautology == self.no_implicants {
            return Err(Error::Config(format!(
                "render.tautology and render.no_implicants are both '{}'",
                self.tautology
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = Config::from_yaml("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.render.product_separator, " · ");
        assert_eq!(config.limits.max_variables, 6);
    }

    #[test]
    fn test_partial_override() {
        let yaml = r#"
render:
  product_separator: " * "
limits:
  max_variables: 8
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.render.product_separator, " * ");
        assert_eq!(config.render.complement_mark, "'");
        assert_eq!(config.limits.max_variables, 8);
    }

    #[test]
    fn test_rejects_unsupported_limit() {
        let err = Config::from_yaml("limits:\n  max_variables: 40\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        let err = Config::from_yaml("limits:\n  max_variables: 0\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_rejects_indistinct_outcomes() {
        for yaml in [
            "render:\n  empty_clause: \"1\"\n",
            "render:\n  tautology: \"same\"\n  no_implicants: \"same\"\n",
            "render:\n  no_implicants: \"(0)\"\n",
            "render:\n  tautology: \"(A)\"\n",
        ] {
            let err = Config::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, Error::Config(_)), "accepted {:?}", yaml);
        }
    }

    #[test]
    fn test_rejects_empty_complement_mark() {
        let err = Config::from_yaml("render:\n  complement_mark: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("complement_mark"));

        let err = Config::from_yaml("render:\n  complement_mark: \"N\"\n").unwrap_err();
        assert!(err.to_string().contains("complement_mark"));
    }

    #[test]
    fn test_rejects_blank_separators() {
        let err = Config::from_yaml("render:\n  sum_separator: \"   \"\n").unwrap_err();
        assert!(err.to_string().contains("sum_separator"));

        let err = Config::from_yaml("render:\n  product_separator: \"\"\n").unwrap_err();
        assert!(err.to_string().contains("product_separator"));

        let err = Config::from_yaml("render:\n  complement_mark: \"+\"\n").unwrap_err();
        assert!(err.to_string().contains("sum_separator"));
    }

    #[test]
    fn test_accepts_custom_markers() {
        let yaml = r#"
render:
  complement_mark: "~"
  sum_separator: " | "
  empty_clause: "0"
  tautology: "TRUE"
  no_implicants: "NONE"
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.render.empty_clause, "0");
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("qmc.yaml");
        std::fs::write(&path, "render:\n  complement_mark: \"~\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.render.complement_mark, "~");
    }

    #[test]
    fn test_load_reports_path_on_bad_yaml() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "render: [unclosed").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));
    }
}
