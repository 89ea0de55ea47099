use anyhow::Result;
use chrono::{DateTime, Utc};
use plugin_adapters::{
    backend_user_from_signed_in_user, model_to_instance_settings, DataSource, RoleType,
    SignedInUser,
};
use serde_json::json;
use std::collections::HashMap;

fn prod_db() -> DataSource {
    DataSource {
        id: 1,
        org_id: 1,
        uid: "prod-db-uid".to_string(),
        name: "prod-db".to_string(),
        r#type: "postgres".to_string(),
        url: "http://db:5432".to_string(),
        user: String::new(),
        database: String::new(),
        basic_auth: false,
        basic_auth_user: String::new(),
        json_data: Some(json!({"tlsMode": "verify-full"})),
        secure_json_data: HashMap::new(),
        updated: DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap(),
    }
}

#[test]
fn test_prod_db_instance_settings() -> Result<()> {
    let decrypt = |_ds: &DataSource| {
        HashMap::from([("password".to_string(), "secret123".to_string())])
    };

    let settings = model_to_instance_settings(&prod_db(), &decrypt)?;

    assert_eq!(settings.id, 1);
    assert_eq!(settings.name, "prod-db");
    assert_eq!(settings.url, "http://db:5432");
    assert_eq!(settings.json_data, br#"{"tlsMode":"verify-full"}"#);
    assert_eq!(settings.decrypted_secure_json_data["password"], "secret123");
    assert_eq!(settings.decrypted_secure_json_data.len(), 1);
    Ok(())
}

#[test]
fn test_instance_settings_as_plugin_json() -> Result<()> {
    let settings = model_to_instance_settings(&prod_db(), &|_ds: &DataSource| HashMap::<String, String>::new())?;
    let value = serde_json::to_value(&settings)?;

    assert_eq!(value["uid"], "prod-db-uid");
    assert_eq!(value["jsonData"]["tlsMode"], "verify-full");
    assert_eq!(value["updated"], "2023-11-14T22:13:20Z");
    Ok(())
}

#[test]
fn test_alice_plugin_user() {
    let alice = SignedInUser {
        user_id: 1,
        org_id: 1,
        login: "alice".to_string(),
        name: "Alice A".to_string(),
        email: "a@x.com".to_string(),
        org_role: RoleType::Admin,
    };

    let user = backend_user_from_signed_in_user(Some(&alice)).unwrap();

    assert_eq!(user.login, "alice");
    assert_eq!(user.name, "Alice A");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.role, "Admin");
}

#[test]
fn test_absent_user_stays_absent() {
    assert!(backend_user_from_signed_in_user(None).is_none());
}
