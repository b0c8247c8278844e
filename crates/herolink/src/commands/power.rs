//! Power and shutter commands.

use herolink_api::{CameraClient, Generation};

use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub async fn on(client: &mut CameraClient) -> Result<(), CliError> {
    client.turn_on().await.map_err(|e| lift(client, e))?;
    if client.model().generation() == Some(Generation::Modern) {
        // Wake-on-lan is fire and forget; the camera needs a moment to boot.
        output::note("wake packet sent, give the camera a few seconds");
    }
    output::accepted("camera on");
    Ok(())
}

pub async fn off(client: &mut CameraClient) -> Result<(), CliError> {
    client.turn_off().await.map_err(|e| lift(client, e))?;
    output::accepted("camera off");
    Ok(())
}

pub async fn shoot(client: &mut CameraClient) -> Result<(), CliError> {
    client.shoot().await.map_err(|e| lift(client, e))?;
    output::accepted("shutter pressed");
    Ok(())
}

pub async fn stop(client: &mut CameraClient) -> Result<(), CliError> {
    client.stop_shoot().await.map_err(|e| lift(client, e))?;
    output::accepted("shutter released");
    Ok(())
}
