// WiFi association capability
//
// The client needs three things from the link layer: associate with the
// camera's AP, tear the association down, and report link status. How that
// happens is platform-specific and out of scope here -- on hosted targets
// the OS usually owns the radio, so the default implementation simply
// assumes the host has already joined the AP.

use std::future::Future;
use std::net::IpAddr;

use secrecy::SecretString;

/// Link-layer association status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkStatus {
    /// Association has not been attempted or is still settling.
    Idle,
    /// The link is up.
    Connected,
    /// The last association attempt failed.
    Failed,
}

/// Diagnostic snapshot of the link, for status output.
#[derive(Debug, Clone)]
pub struct LinkInfo {
    pub ssid: String,
    pub ip: Option<IpAddr>,
    pub rssi_dbm: Option<i32>,
}

/// Capability to manage the WiFi association with the camera's AP.
///
/// `associate` blocks until the attempt resolves one way or the other;
/// the client wraps it in its connect timeout.
pub trait WifiLink {
    fn associate(
        &mut self,
        ssid: &str,
        password: &SecretString,
    ) -> impl Future<Output = LinkStatus> + Send;

    fn disconnect(&mut self) -> impl Future<Output = ()> + Send;

    fn status(&self) -> LinkStatus;

    /// Diagnostic link details, if the implementation can provide them.
    fn info(&self) -> Option<LinkInfo> {
        None
    }
}

/// A link that is managed outside this process.
///
/// Reports the association as already up and treats `associate`/`disconnect`
/// as no-ops. This is the right implementation when the host OS joined the
/// camera's AP before the client started (the common desktop case).
#[derive(Debug, Clone, Default)]
pub struct PreAssociatedLink {
    ssid: Option<String>,
}

impl WifiLink for PreAssociatedLink {
    async fn associate(&mut self, ssid: &str, _password: &SecretString) -> LinkStatus {
        self.ssid = Some(ssid.to_string());
        LinkStatus::Connected
    }

    async fn disconnect(&mut self) {}

    fn status(&self) -> LinkStatus {
        LinkStatus::Connected
    }

    fn info(&self) -> Option<LinkInfo> {
        self.ssid.as_ref().map(|ssid| LinkInfo {
            ssid: ssid.clone(),
            ip: None,
            rssi_dbm: None,
        })
    }
}
