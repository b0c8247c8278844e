//! Session commands: status display and pairing confirmation.

use herolink_api::{CameraClient, ConnectionState};

use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub fn status(client: &CameraClient) -> Result<(), CliError> {
    let config = client.config();

    println!("camera");
    output::row("model", &config.model.to_string());
    let generation = config
        .model
        .generation()
        .map_or_else(|| "unsupported".to_string(), |g| format!("{g:?}").to_lowercase());
    output::row("dialect", &generation);
    output::row("host", &config.host);
    output::row(
        "power",
        match client.is_on() {
            Some(true) => "on",
            Some(false) => "off",
            None => "unknown",
        },
    );

    println!("session");
    output::row(
        "state",
        match client.connection_state() {
            ConnectionState::Connected => "connected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Disconnected => "disconnected",
        },
    );
    if let Some(info) = client.link_info() {
        output::row("ssid", &info.ssid);
        if let Some(ip) = info.ip {
            output::row("ip", &ip.to_string());
        }
        if let Some(rssi) = info.rssi_dbm {
            output::row("rssi", &format!("{rssi} dBm"));
        }
    }
    Ok(())
}

pub async fn pair(client: &mut CameraClient) -> Result<(), CliError> {
    client.confirm_pairing().await.map_err(|e| lift(client, e))?;
    output::accepted("pairing confirmed");
    Ok(())
}
