use crate::domain::model::DataSource;
use std::collections::HashMap;

/// Resolves the secure JSON fields of a data source into plaintext.
///
/// Any `Fn(&DataSource) -> HashMap<String, String>` is a decryptor, so
/// callers can inject a closure instead of a dedicated type.
pub trait SecretDecryptor {
    fn decrypt(&self, ds: &DataSource) -> HashMap<String, String>;
}

impl<F> SecretDecryptor for F
where
    F: Fn(&DataSource) -> HashMap<String, String>,
{
    fn decrypt(&self, ds: &DataSource) -> HashMap<String, String> {
        self(ds)
    }
}
