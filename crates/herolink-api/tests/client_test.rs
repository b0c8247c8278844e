#![allow(clippy::unwrap_used)]
// Integration tests for `CameraClient` over a real HTTP transport, using
// wiremock as the camera. The legacy dialect's `p=%01` tokens are literal
// bytes on the wire, so query assertions compare the raw query string
// instead of wiremock's percent-decoding matchers.

use std::time::Duration;

use secrecy::SecretString;
use wiremock::matchers::{method, path};
use wiremock::{Match, Mock, MockServer, Request, ResponseTemplate};

use herolink_api::{
    CameraClient, CameraConfig, CameraModel, ConnectionState, Error, VideoResolution,
};

// ── Helpers ─────────────────────────────────────────────────────────

/// Matches the *raw* (undecoded) query string of a request.
struct RawQuery(&'static str);

impl Match for RawQuery {
    fn matches(&self, request: &Request) -> bool {
        request.url.query() == Some(self.0)
    }
}

fn camera_config(model: CameraModel, host: String) -> CameraConfig {
    CameraConfig {
        model,
        ssid: "GP12345678".into(),
        password: SecretString::from("opensesame".to_string()),
        host,
        request_timeout: Duration::from_secs(2),
        ..CameraConfig::default()
    }
}

async fn connected_client(server: &MockServer, model: CameraModel) -> CameraClient {
    let host = server.address().to_string();
    let mut client = CameraClient::new(camera_config(model, host)).unwrap();
    client.begin().await.unwrap();
    client
}

// ── Wire shapes ─────────────────────────────────────────────────────

#[tokio::test]
async fn legacy_shoot_sends_password_and_hex_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/camera/SH"))
        .and(RawQuery("t=opensesame&p=%01"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = connected_client(&server, CameraModel::Hero3).await;
    client.shoot().await.unwrap();
}

#[tokio::test]
async fn modern_shoot_sends_decimal_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gp/gpControl/command/shutter"))
        .and(RawQuery("p=1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = connected_client(&server, CameraModel::Hero5).await;
    client.shoot().await.unwrap();
}

#[tokio::test]
async fn modern_4k_is_a_path_segment_setting() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gp/gpControl/setting/2/1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let mut client = connected_client(&server, CameraModel::Hero5).await;
    client
        .set_video_resolution(VideoResolution::R4k)
        .await
        .unwrap();
}

// ── Validation happens before I/O ───────────────────────────────────

#[tokio::test]
async fn invalid_options_never_reach_the_camera() {
    let server = MockServer::start().await;

    // 4K does not exist in the legacy table; 7 s is not a timelapse interval.
    let mut client = connected_client(&server, CameraModel::Hero3).await;
    assert!(matches!(
        client.set_video_resolution(VideoResolution::R4k).await,
        Err(Error::InvalidOption { .. })
    ));
    assert!(matches!(
        client.set_time_lapse_interval(7.0).await,
        Err(Error::InvalidOption { .. })
    ));

    assert!(server.received_requests().await.unwrap().is_empty());
}

// ── Status classification ───────────────────────────────────────────

#[tokio::test]
async fn status_codes_map_to_outcomes() {
    for (status, expect_auth, expect_failed, expect_unknown) in [
        (403u16, true, false, false),
        (410, false, true, false),
        (999, false, false, true),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let mut client = connected_client(&server, CameraModel::Hero5).await;
        let result = client.shoot().await;

        match result {
            Err(Error::AuthRejected) => assert!(expect_auth, "403 mapping, got {status}"),
            Err(Error::CommandFailed) => assert!(expect_failed, "410 mapping, got {status}"),
            Err(Error::UnknownStatus { status: got }) => {
                assert!(expect_unknown, "unknown mapping");
                assert_eq!(got, status);
            }
            other => panic!("unexpected outcome for {status}: {other:?}"),
        }
    }
}

#[tokio::test]
async fn accepted_is_plain_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let mut client = connected_client(&server, CameraModel::Hero5).await;
    client.shoot().await.unwrap();
}

// ── Link loss ───────────────────────────────────────────────────────

#[tokio::test]
async fn unreachable_camera_drops_the_session() {
    // Nothing listens on port 1.
    let mut client =
        CameraClient::new(camera_config(CameraModel::Hero5, "127.0.0.1:1".into())).unwrap();
    client.begin().await.unwrap();

    let result = client.shoot().await;
    assert!(matches!(result, Err(Error::NotConnected)), "{result:?}");
    assert_eq!(client.connection_state(), ConnectionState::Disconnected);
}
