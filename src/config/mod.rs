pub mod provisioning;
pub mod secrets;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "plugin-adapters")]
#[command(about = "Render provisioned datasources and users in the shape plugins receive")]
pub struct CliConfig {
    #[arg(long, default_value = "./provisioning.toml")]
    pub config: String,

    #[arg(long, help = "Also convert the user with this login")]
    pub user: Option<String>,

    #[arg(long, help = "Pretty-print the JSON output")]
    pub pretty: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("config", &self.config)?;
        validate_file_extension("config", &self.config, &["toml"])
    }
}
