//! Photo settings commands.

use herolink_api::CameraClient;

use crate::cli::PhotoCommand;
use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &mut CameraClient, cmd: PhotoCommand) -> Result<(), CliError> {
    match cmd {
        PhotoCommand::Resolution { resolution } => {
            client
                .set_photo_resolution(resolution)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("photo resolution set to {resolution}"));
        }
        PhotoCommand::Timelapse { secs } => {
            client
                .set_time_lapse_interval(secs)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("timelapse interval set to {secs}s"));
        }
        PhotoCommand::Burst { count } => {
            client
                .set_continuous_shot(count)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("continuous shot set to {count} frames"));
        }
    }
    Ok(())
}
