//! Capture mode and orientation.

use herolink_api::{CameraClient, CameraMode, Orientation};

use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub async fn mode(client: &mut CameraClient, mode: CameraMode) -> Result<(), CliError> {
    client.set_mode(mode).await.map_err(|e| lift(client, e))?;
    output::accepted(&format!("mode set to {mode}"));
    Ok(())
}

pub async fn orientation(
    client: &mut CameraClient,
    orientation: Orientation,
) -> Result<(), CliError> {
    client
        .set_orientation(orientation)
        .await
        .map_err(|e| lift(client, e))?;
    output::accepted(&format!("orientation set to {orientation}"));
    Ok(())
}
