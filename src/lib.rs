pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::instance_settings::{convert_all, model_to_instance_settings};
pub use adapters::user::backend_user_from_signed_in_user;
pub use config::provisioning::ProvisioningConfig;
pub use config::secrets::ProvisionedSecrets;
pub use domain::model::{DataSource, InstanceSettings, PluginUser, RoleType, SignedInUser};
pub use domain::ports::SecretDecryptor;
pub use utils::error::{AdapterError, Result};
