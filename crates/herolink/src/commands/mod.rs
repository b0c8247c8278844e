//! Command dispatch: bridges CLI args onto `CameraClient` operations.

pub mod config_cmd;
pub mod photo;
pub mod power;
pub mod session;
pub mod settings;
pub mod storage;
pub mod video;

use herolink_api::CameraClient;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a camera-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    client: &mut CameraClient,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Status => session::status(client),
        Command::Pair => session::pair(client).await,
        Command::On => power::on(client).await,
        Command::Off => power::off(client).await,
        Command::Shoot => power::shoot(client).await,
        Command::Stop => power::stop(client).await,
        Command::Mode { mode } => settings::mode(client, mode).await,
        Command::Orientation { orientation } => {
            settings::orientation(client, orientation).await
        }
        Command::Video(args) => video::handle(client, args).await,
        Command::Photo(args) => photo::handle(client, args).await,
        Command::Locate { switch } => storage::locate(client, switch).await,
        Command::Delete { target } => storage::delete(client, target, global).await,
        // Config and Completions are handled before a client exists
        Command::Config(_) | Command::Completions { .. } => unreachable!(),
    }
}

/// Shorthand: lift an api error with the client's host for diagnostics.
pub(crate) fn lift(client: &CameraClient, err: herolink_api::Error) -> CliError {
    CliError::from_api(err, &client.config().host)
}
