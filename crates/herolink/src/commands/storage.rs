//! Locate and SD card commands.

use herolink_api::CameraClient;

use crate::cli::{DeleteTarget, GlobalOpts, Switch};
use crate::commands::lift;
use crate::error::CliError;
use crate::output;

pub async fn locate(client: &mut CameraClient, switch: Switch) -> Result<(), CliError> {
    match switch {
        Switch::On => {
            client
                .localization_on()
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted("locate beep on");
        }
        Switch::Off => {
            client
                .localization_off()
                .await
                .map_err(|e| lift(client, e))?;
            output::accepted("locate beep off");
        }
    }
    Ok(())
}

pub async fn delete(
    client: &mut CameraClient,
    target: DeleteTarget,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match target {
        DeleteTarget::Last => {
            client.delete_last().await.map_err(|e| lift(client, e))?;
            output::accepted("deleted the last file");
        }
        DeleteTarget::All => {
            // Wiping the card is the one command that cannot be undone.
            if !global.yes {
                return Err(CliError::DeleteAllNeedsConfirmation);
            }
            client.delete_all().await.map_err(|e| lift(client, e))?;
            output::accepted("deleted all files");
        }
    }
    Ok(())
}
