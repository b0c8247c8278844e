//! Video settings commands.

use herolink_api::CameraClient;

use crate::cli::VideoCommand;
use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub async fn handle(client: &mut CameraClient, cmd: VideoCommand) -> Result<(), CliError> {
    match cmd {
        VideoCommand::Resolution { resolution } => {
            client
                .set_video_resolution(resolution)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("video resolution set to {resolution}"));
        }
        VideoCommand::Fov { fov } => {
            client
                .set_video_fov(fov)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("field of view set to {fov}"));
        }
        VideoCommand::Framerate { rate } => {
            client
                .set_frame_rate(rate)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("frame rate set to {rate} fps"));
        }
        VideoCommand::Standard { standard } => {
            client
                .set_video_standard(standard)
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted(&format!("video standard set to {standard}"));
        }
    }
    Ok(())
}
