use crate::domain::model::{DataSource, InstanceSettings};
use crate::domain::ports::SecretDecryptor;
use crate::utils::error::Result;

/// Converts a data source record into the instance settings a plugin receives.
///
/// `json_data` is re-encoded to bytes and left empty when the record has none.
/// The decryptor is called once and its result is stored as-is.
pub fn model_to_instance_settings<D>(ds: &DataSource, decryptor: &D) -> Result<InstanceSettings>
where
    D: SecretDecryptor + ?Sized,
{
    let json_data = match &ds.json_data {
        Some(value) => serde_json::to_vec(value)?,
        None => Vec::new(),
    };

    Ok(InstanceSettings {
        id: ds.id,
        uid: ds.uid.clone(),
        name: ds.name.clone(),
        url: ds.url.clone(),
        user: ds.user.clone(),
        database: ds.database.clone(),
        basic_auth_enabled: ds.basic_auth,
        basic_auth_user: ds.basic_auth_user.clone(),
        json_data,
        decrypted_secure_json_data: decryptor.decrypt(ds),
        updated: ds.updated,
    })
}

/// Converts every data source, stopping at the first failure.
pub fn convert_all<D>(datasources: &[DataSource], decryptor: &D) -> Result<Vec<InstanceSettings>>
where
    D: SecretDecryptor + ?Sized,
{
    datasources
        .iter()
        .map(|ds| model_to_instance_settings(ds, decryptor))
        .collect()
}
