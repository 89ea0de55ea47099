use crate::domain::model::DataSource;
use crate::domain::ports::SecretDecryptor;
use std::collections::HashMap;

/// Decryptor for provisioned datasources.
///
/// Provisioning files hold secure values in plaintext (after `${VAR}`
/// substitution), so decrypting is a copy of `secure_json_data`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProvisionedSecrets;

impl SecretDecryptor for ProvisionedSecrets {
    fn decrypt(&self, ds: &DataSource) -> HashMap<String, String> {
        ds.secure_json_data.clone()
    }
}
