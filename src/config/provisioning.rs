use crate::domain::model::{DataSource, SignedInUser};
use crate::utils::error::{AdapterError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_unique, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Datasources and users declared in a provisioning file.
///
/// ```toml
/// [[datasources]]
/// id = 1
/// uid = "prod-db"
/// name = "prod-db"
/// url = "http://db:5432"
/// json_data = { tlsMode = "verify-full" }
/// secure_json_data = { password = "${DB_PASSWORD}" }
///
/// [[users]]
/// login = "alice"
/// org_role = "Admin"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ProvisioningConfig {
    #[serde(default)]
    pub datasources: Vec<DataSource>,
    #[serde(default)]
    pub users: Vec<SignedInUser>,
}

impl ProvisioningConfig {
    /// Loads and parses a provisioning file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading provisioning file {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(AdapterError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses provisioning TOML, then expands `${VAR}` placeholders in string values.
    ///
    /// Substitution happens on parsed values, so environment values are taken
    /// verbatim and never reinterpreted as TOML.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(content).map_err(Self::parse_error)?;

        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdapterError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;
        for (key, value) in table.iter_mut() {
            Self::resolve_value(value, key, &re)?;
        }

        let config: Self = toml::Value::Table(table)
            .try_into()
            .map_err(Self::parse_error)?;

        tracing::debug!(
            "Parsed {} datasources and {} users",
            config.datasources.len(),
            config.users.len()
        );
        Ok(config)
    }

    fn parse_error(e: toml::de::Error) -> AdapterError {
        AdapterError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        }
    }

    /// Expands placeholders in every string below `value` and rejects `nan`/`inf`,
    /// which have no JSON representation.
    fn resolve_value(value: &mut toml::Value, path: &str, re: &Regex) -> Result<()> {
        match value {
            toml::Value::String(s) if re.is_match(s) => {
                let substituted = re.replace_all(s, |caps: &regex::Captures| {
                    let var_name = &caps[1];
                    std::env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!("Environment variable {} is not set, leaving placeholder", var_name);
                        format!("${{{}}}", var_name)
                    })
                });
                *s = substituted.into_owned();
            }
            toml::Value::Float(f) if !f.is_finite() => {
                return Err(AdapterError::InvalidConfigValueError {
                    field: path.to_string(),
                    value: f.to_string(),
                    reason: "Non-finite numbers cannot be represented in JSON".to_string(),
                });
            }
            toml::Value::Array(items) => {
                for (index, item) in items.iter_mut().enumerate() {
                    Self::resolve_value(item, &format!("{}[{}]", path, index), re)?;
                }
            }
            toml::Value::Table(table) => {
                for (key, item) in table.iter_mut() {
                    Self::resolve_value(item, &format!("{}.{}", path, key), re)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    pub fn find_user(&self, login: &str) -> Option<&SignedInUser> {
        self.users.iter().find(|user| user.login == login)
    }

    pub fn validate_config(&self) -> Result<()> {
        for (index, ds) in self.datasources.iter().enumerate() {
            validate_non_empty_string(&format!("datasources[{}].name", index), &ds.name)?;
            validate_non_empty_string(&format!("datasources[{}].uid", index), &ds.uid)?;
        }
        validate_unique("datasources.id", self.datasources.iter().map(|ds| &ds.id))?;
        validate_unique("datasources.uid", self.datasources.iter().map(|ds| &ds.uid))?;

        for (index, user) in self.users.iter().enumerate() {
            validate_non_empty_string(&format!("users[{}].login", index), &user.login)?;
        }
        validate_unique("users.login", self.users.iter().map(|user| &user.login))?;

        Ok(())
    }
}

impl Validate for ProvisioningConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
