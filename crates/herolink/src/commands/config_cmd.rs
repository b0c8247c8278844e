//! Config inspection commands. These never touch the camera.

use crate::cli::{ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(cmd: &ConfigCommand, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        ConfigCommand::Path => {
            println!("{}", config::config_path().display());
            Ok(())
        }
        ConfigCommand::Show => {
            let resolved = config::resolve(global)?;
            println!("resolved configuration");
            output::row("model", &resolved.model.to_string());
            output::row("host", &resolved.host);
            output::row("ssid", &resolved.ssid);
            output::row("password", "<redacted>");
            output::row(
                "mac",
                &resolved
                    .mac
                    .map_or_else(|| "unset".to_string(), |mac| mac.to_string()),
            );
            output::row(
                "timeout",
                &format!("{}s", resolved.request_timeout.as_secs()),
            );
            output::row("device name", &resolved.device_name);
            Ok(())
        }
    }
}
