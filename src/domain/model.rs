use crate::utils::error::{AdapterError, Result};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// A configured data source as stored by the datasource registry.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataSource {
    pub id: i64,
    #[serde(default)]
    pub org_id: i64,
    pub uid: String,
    pub name: String,
    #[serde(default)]
    pub r#type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub database: String,
    #[serde(default)]
    pub basic_auth: bool,
    #[serde(default)]
    pub basic_auth_user: String,
    pub json_data: Option<serde_json::Value>,
    /// Secret material. Only a `SecretDecryptor` should look at this.
    #[serde(default)]
    pub secure_json_data: HashMap<String, String>,
    #[serde(default = "Utc::now")]
    pub updated: DateTime<Utc>,
}

/// Connection settings handed to a plugin for one data source.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSettings {
    pub id: i64,
    pub uid: String,
    pub name: String,
    pub url: String,
    pub user: String,
    pub database: String,
    pub basic_auth_enabled: bool,
    pub basic_auth_user: String,
    /// Serialized `json_data` of the source record, empty when it had none.
    #[serde(serialize_with = "serialize_raw_json")]
    pub json_data: Vec<u8>,
    pub decrypted_secure_json_data: HashMap<String, String>,
    pub updated: DateTime<Utc>,
}

impl InstanceSettings {
    /// Decodes the raw JSON options into a plugin-specific type.
    ///
    /// Returns `Ok(None)` when the data source had no JSON options.
    pub fn decode_json_data<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        if self.json_data.is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_slice(&self.json_data)?))
    }
}

fn serialize_raw_json<S: Serializer>(
    bytes: &[u8],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    if bytes.is_empty() {
        return serializer.serialize_none();
    }
    let value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(serde::ser::Error::custom)?;
    value.serialize(serializer)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleType {
    Viewer,
    Editor,
    Admin,
}

impl RoleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::Viewer => "Viewer",
            RoleType::Editor => "Editor",
            RoleType::Admin => "Admin",
        }
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleType {
    type Err = AdapterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Viewer" => Ok(RoleType::Viewer),
            "Editor" => Ok(RoleType::Editor),
            "Admin" => Ok(RoleType::Admin),
            other => Err(AdapterError::InvalidConfigValueError {
                field: "org_role".to_string(),
                value: other.to_string(),
                reason: "Unknown organization role".to_string(),
            }),
        }
    }
}

/// The authenticated identity behind the current request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedInUser {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub org_id: i64,
    pub login: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub org_role: RoleType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginUser {
    pub login: String,
    pub name: String,
    pub email: String,
    pub role: String,
}
