#![allow(clippy::unwrap_used)]
// Integration tests for `DaemonClient` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json_string, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hotspotctl_api::{DaemonClient, Error, FreqBand, HotspotConfig, WpaVersion};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, DaemonClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = DaemonClient::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

fn sample_config() -> HotspotConfig {
    HotspotConfig {
        wifi_interface: "wlan0".into(),
        internet_interface: Some("eth0".into()),
        ssid: "TestNet".into(),
        password: "hunter2hunter2".into(),
        channel: "6".into(),
        gateway: "192.168.12.1".into(),
        ..HotspotConfig::default()
    }
}

// ── Status ──────────────────────────────────────────────────────────

#[tokio::test]
async fn test_status_running() {
    let (server, client) = setup().await;

    let body = json!({
        "status": {
            "isRunning": true,
            "uptime": 125,
            "config": {
                "wifiInterface": "wlan0",
                "ssid": "TestNet",
                "freqBand": "5",
                "wpaVersion": "3",
                "channel": "36"
            },
            "logs": [
                { "message": "wlan0: AP-STA-CONNECTED aa:bb:cc:dd:ee:ff" }
            ]
        },
        "clientCount": 1,
        "clients": [
            { "mac": "aa:bb:cc:dd:ee:ff", "hostname": "phone", "ip": "192.168.12.23", "signal": -48 }
        ],
        "wifiStats": { "txBytes": 1024, "rxBytes": 2048 },
        "internetStats": { "txBytes": 512, "rxBytes": 4096 }
    });

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let status = client.status().await.unwrap();

    assert!(status.status.is_running);
    assert_eq!(status.status.uptime, 125);
    assert_eq!(status.client_count, 1);
    assert_eq!(status.clients[0].mac, "aa:bb:cc:dd:ee:ff");
    assert_eq!(status.clients[0].signal, Some(-48));
    assert_eq!(status.wifi_stats.tx_bytes, 1024);
    assert_eq!(status.internet_stats.rx_bytes, 4096);

    let config = status.status.config.unwrap();
    assert_eq!(config.freq_band, FreqBand::Band5);
    assert_eq!(config.wpa_version, WpaVersion::Wpa3);
    assert_eq!(config.channel, "36");
    assert_eq!(status.status.logs.len(), 1);
}

#[tokio::test]
async fn test_status_not_running_minimal_body() {
    let (server, client) = setup().await;

    // A stopped daemon reports only the status stanza.
    let body = json!({ "status": { "isRunning": false, "uptime": 0, "config": {} } });

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let status = client.status().await.unwrap();
    assert!(!status.status.is_running);
    assert!(status.clients.is_empty());
    assert_eq!(status.wifi_stats.tx_bytes, 0);
}

// ── Start ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_start_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "hostapd_pid": 4242,
            "dnsmasq_pid": 4243,
            "config_file": "/tmp/hostapd.conf"
        })))
        .mount(&server)
        .await;

    let receipt = client.start(&sample_config()).await.unwrap();
    assert_eq!(receipt.hostapd_pid, Some(4242));
    assert_eq!(receipt.dnsmasq_pid, Some(4243));
    assert_eq!(receipt.config_file.as_deref(), Some("/tmp/hostapd.conf"));
}

#[tokio::test]
async fn test_start_success_legacy_pid_field() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/start"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "pid": 999 })),
        )
        .mount(&server)
        .await;

    let receipt = client.start(&sample_config()).await.unwrap();
    assert_eq!(receipt.hostapd_pid, Some(999));
    assert_eq!(receipt.dnsmasq_pid, None);
}

#[tokio::test]
async fn test_start_rejected_with_detail_list() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "hostapd failed to start",
            "details": ["wlan0: could not configure driver mode", "nl80211: deinit failed"]
        })))
        .mount(&server)
        .await;

    let err = client.start(&sample_config()).await.unwrap_err();
    match err {
        Error::Rejected { message, details } => {
            assert_eq!(message, "hostapd failed to start");
            assert_eq!(details.len(), 2);
            assert_eq!(details[1], "nl80211: deinit failed");
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_start_rejected_with_detail_string() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/start"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Hotspot is already running",
            "details": "stop the current session first"
        })))
        .mount(&server)
        .await;

    let err = client.start(&sample_config()).await.unwrap_err();
    match err {
        Error::Rejected { message, details } => {
            assert_eq!(message, "Hotspot is already running");
            assert_eq!(details, vec!["stop the current session first".to_owned()]);
        }
        other => panic!("expected Rejected, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_start_omits_internet_interface_when_unset() {
    let (server, client) = setup().await;

    let mut config = sample_config();
    config.internet_interface = None;
    config.no_internet = true;

    let expected = serde_json::to_string(&config).unwrap();
    assert!(!expected.contains("internetInterface"));

    Mock::given(method("POST"))
        .and(path("/api/start"))
        .and(body_json_string(&expected))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "success": true, "pid": 1 })),
        )
        .mount(&server)
        .await;

    client.start(&config).await.unwrap();
}

// ── Stop ────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_stop_success() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    client.stop().await.unwrap();
}

#[tokio::test]
async fn test_stop_rejected() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/stop"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Hotspot is not running"
        })))
        .mount(&server)
        .await;

    let err = client.stop().await.unwrap_err();
    assert!(
        matches!(err, Error::Rejected { ref message, .. } if message == "Hotspot is not running"),
        "unexpected error: {err:?}"
    );
}

// ── Interfaces / configs ────────────────────────────────────────────

#[tokio::test]
async fn test_interfaces() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "interfaces": [
                { "name": "wlan0", "isWireless": true, "supportsAP": true, "type": "wifi", "isup": true },
                { "name": "eth0", "isWireless": false, "supportsAP": false, "type": "ethernet", "isup": true }
            ]
        })))
        .mount(&server)
        .await;

    let interfaces = client.interfaces().await.unwrap();
    assert_eq!(interfaces.len(), 2);
    assert!(interfaces[0].is_wireless);
    assert!(interfaces[0].supports_ap);
    assert_eq!(interfaces[1].kind, "ethernet");
}

#[tokio::test]
async fn test_last_config_absent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/last-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert!(client.last_config().await.unwrap().is_none());
}

#[tokio::test]
async fn test_hostapd_config_present() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/hostapd-config"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "config": "interface=wlan0\nssid=TestNet\n"
        })))
        .mount(&server)
        .await;

    let text = client.hostapd_config().await.unwrap().unwrap();
    assert!(text.starts_with("interface=wlan0"));
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn test_server_error_extracts_message() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/interfaces"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "error": "psutil unavailable" })),
        )
        .mount(&server)
        .await;

    let err = client.interfaces().await.unwrap_err();
    match err {
        Error::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "psutil unavailable");
        }
        other => panic!("expected Status, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_deserialization_error_keeps_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
        .mount(&server)
        .await;

    let err = client.status().await.unwrap_err();
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("gateway timeout")),
        other => panic!("expected Deserialization, got: {other:?}"),
    }
}
