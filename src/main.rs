use clap::Parser;
use plugin_adapters::utils::{logger, validation::Validate};
use plugin_adapters::{
    backend_user_from_signed_in_user, convert_all, AdapterError, CliConfig, ProvisionedSecrets,
    ProvisioningConfig,
};
use serde::Serialize;

#[derive(Serialize)]
struct Output {
    datasources: Vec<plugin_adapters::InstanceSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<Option<plugin_adapters::PluginUser>>,
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting plugin-adapters CLI");
    tracing::debug!("CLI config: {:?}", config);

    let provisioning = match config
        .validate()
        .and_then(|_| ProvisioningConfig::from_file(&config.config))
        .and_then(|provisioning| provisioning.validate().map(|_| provisioning))
    {
        Ok(provisioning) => provisioning,
        Err(e) => exit_with(&e, 1),
    };

    let datasources = match convert_all(&provisioning.datasources, &ProvisionedSecrets) {
        Ok(settings) => settings,
        Err(e) => exit_with(&e, 2),
    };
    tracing::info!("Converted {} datasources", datasources.len());

    // --user given: emit the converted user, or null when the login is unknown
    let user = config.user.as_deref().map(|login| {
        let found = provisioning.find_user(login);
        if found.is_none() {
            tracing::warn!("No provisioned user with login {}", login);
        }
        backend_user_from_signed_in_user(found)
    });

    let output = Output { datasources, user };
    let rendered = if config.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", rendered);

    Ok(())
}

fn exit_with(e: &AdapterError, code: i32) -> ! {
    tracing::error!("❌ {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(code);
}
