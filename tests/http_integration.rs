// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP round-trip using wiremock.

use std::time::Duration;

use tascli::command::{CommandRequest, Mnemonic};
use tascli::protocol::{HttpConfig, Method, Protocol};
use tascli::{Config, Error, Invocation, OutputFormat, Target, TransportError, UsageError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn host(server: &MockServer) -> String {
    server.address().to_string()
}

fn device_config(server: &MockServer) -> Config {
    Config::from_yaml(&format!("devices:\n  lamp: \"{}\"\n", host(server))).unwrap()
}

async fn run(server: &MockServer, cmd: Option<&str>, custom: Option<&str>, format: OutputFormat)
-> tascli::Result<String> {
    let config = device_config(server);
    let invocation = Invocation::from_parts(cmd, custom, None, Some("lamp"), format, &config)?;
    invocation.run(&config).await
}

fn timers_body() -> serde_json::Value {
    let mut body = serde_json::Map::new();
    body.insert("Timers".into(), "ON".into());
    for i in 1..=16 {
        body.insert(
            format!("Timer{i}"),
            serde_json::json!({
                "Enable": u8::from(i == 1),
                "Mode": 0,
                "Time": if i == 1 { "06:30" } else { "00:00" },
                "Window": 0,
                "Days": "0111110",
                "Repeat": 1,
                "Output": 1,
                "Action": 1
            }),
        );
    }
    serde_json::Value::Object(body)
}

// ============================================================================
// Transport
// ============================================================================

mod transport {
    use super::*;

    #[tokio::test]
    async fn get_returns_body_and_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/cm"))
            .and(query_param("cmnd", "Power On"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"POWER":"ON"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(host(&mock_server)).into_client().unwrap();
        let response = client.send(&Mnemonic::On.device_command()).await;

        assert!(response.is_ok());
        assert_eq!(response.status(), Some(200));
        assert_eq!(response.body(), br#"{"POWER":"ON"}"#);
    }

    #[tokio::test]
    async fn post_method_is_configurable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(query_param("cmnd", "Timers"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(host(&mock_server))
            .with_method(Method::Post)
            .into_client()
            .unwrap();
        let response = client.send(&Mnemonic::Timers.device_command()).await;
        assert!(response.is_ok());
    }

    #[tokio::test]
    async fn non_200_keeps_body_but_is_not_ok() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(host(&mock_server)).into_client().unwrap();
        let response = client.send(&Mnemonic::Status.device_command()).await;

        assert!(!response.is_ok());
        assert_eq!(response.status(), Some(500));
        assert_eq!(response.body(), b"oops");
        assert!(matches!(
            response.into_body(),
            Err(TransportError::Status { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn timeout_is_a_failed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"POWER":"ON"}"#)
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(host(&mock_server))
            .with_timeout(Duration::from_millis(200))
            .into_client()
            .unwrap();
        let response = client.send(&Mnemonic::On.device_command()).await;

        assert!(!response.is_ok());
        assert_eq!(response.status(), None);
        assert!(matches!(response.into_body(), Err(TransportError::Http(_))));
    }

    #[tokio::test]
    async fn connection_refused_is_a_failed_response() {
        let client = HttpConfig::new("127.0.0.1:1").into_client().unwrap();
        let response = client.send(&Mnemonic::On.device_command()).await;

        assert!(!response.is_ok());
        assert!(matches!(response.into_body(), Err(TransportError::Http(_))));
    }
}

// ============================================================================
// Full invocation
// ============================================================================

mod invocation {
    use super::*;

    #[tokio::test]
    async fn power_on() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Power On"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "POWER": "ON"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, Some("on"), None, OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(rendered, "lamp:ON");
    }

    #[tokio::test]
    async fn power_off_as_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Power Off"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "POWER": "OFF"
            })))
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, Some("off"), None, OutputFormat::Json)
            .await
            .unwrap();
        assert_eq!(rendered, "{\n\t\"POWER\": \"OFF\"\n}");
    }

    #[tokio::test]
    async fn status_classification() {
        for (power, expected) in [(1, "lamp:ON"), (0, "lamp:OFF"), (2, "lamp:UNKNOWN")] {
            let mock_server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(query_param("cmnd", "Status0"))
                .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                    "Status": {"Module": 1, "DeviceName": "Plug", "Power": power},
                    "StatusFWR": {"Version": "12.5.0(tasmota)"}
                })))
                .mount(&mock_server)
                .await;

            let rendered = run(&mock_server, Some("status"), None, OutputFormat::Text)
                .await
                .unwrap();
            assert_eq!(rendered, expected);
        }
    }

    #[tokio::test]
    async fn statusall_is_json_and_stable() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Status0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Status": {"Module": 1, "DeviceName": "Plug", "Power": 1, "NewField": true},
                "StatusNET": {"Hostname": "plug", "IPAddress": "192.168.1.20"},
                "StatusSNS": {"Time": "2024-01-01T00:00:00", "Switch1": "ON"},
                "StatusXYZ": {"Ignored": 1}
            })))
            .mount(&mock_server)
            .await;

        let first = run(&mock_server, Some("statusall"), None, OutputFormat::Text)
            .await
            .unwrap();
        let second = run(&mock_server, Some("statusall"), None, OutputFormat::Json)
            .await
            .unwrap();

        assert_eq!(first, second);
        assert!(first.contains("\t\t\"DeviceName\": \"Plug\""));
        assert!(first.contains("\"IPAddress\": \"192.168.1.20\""));
        assert!(!first.contains("NewField"));
        assert!(!first.contains("StatusXYZ"));
    }

    #[tokio::test]
    async fn timers_table_has_sixteen_rows() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Timers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(timers_body()))
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, Some("timers"), None, OutputFormat::Text)
            .await
            .unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("----"));
        for (i, line) in lines[2..18].iter().enumerate() {
            let name = line.split_whitespace().next().unwrap();
            assert_eq!(name, format!("Timer{}", i + 1));
        }
        assert!(lines[2].contains("06:30"));
        assert!(lines[19].starts_with("Further details available here:"));
    }

    #[tokio::test]
    async fn timers_with_omitted_fields() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Timers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Timers": "OFF",
                "Timer1": {"Enable": 1},
                "Timer7": {}
            })))
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, Some("timers"), None, OutputFormat::Text)
            .await
            .unwrap();
        let rows: Vec<&str> = rendered
            .lines()
            .filter(|line| line.starts_with("Timer"))
            .collect();
        assert_eq!(rows.len(), 16);
    }

    #[tokio::test]
    async fn timers_as_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Timers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(timers_body()))
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, Some("timers"), None, OutputFormat::Json)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["Timer1"]["Time"], "06:30");
        assert_eq!(value.as_object().unwrap().len(), 17);
    }

    #[tokio::test]
    async fn custom_command_is_encoded_and_reindented() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Backlog Power On; Dimmer 20"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"POWER":"ON","Dimmer":20}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let rendered = run(
            &mock_server,
            None,
            Some("Backlog Power On; Dimmer 20"),
            OutputFormat::Text,
        )
        .await
        .unwrap();
        assert_eq!(rendered, "{\n\t\"POWER\": \"ON\",\n\t\"Dimmer\": 20\n}");
    }

    #[tokio::test]
    async fn custom_command_keeps_number_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmnd", "Status 8"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"StatusSNS":{"ENERGY":{"Current":0.100,"Factor":1e2,"Big":18446744073709551616}}}"#,
            ))
            .mount(&mock_server)
            .await;

        let rendered = run(&mock_server, None, Some("Status 8"), OutputFormat::Text)
            .await
            .unwrap();
        assert_eq!(
            rendered,
            "{\n\t\"StatusSNS\": {\n\t\t\"ENERGY\": {\n\t\t\t\"Current\": 0.100,\n\t\t\t\"Factor\": 1e2,\n\t\t\t\"Big\": 18446744073709551616\n\t\t}\n\t}\n}"
        );
    }

    #[tokio::test]
    async fn status_with_unreadable_power_is_unknown() {
        for power in ["1.5", "0.9", "\"abc\"", "true"] {
            let mock_server = MockServer::start().await;

            Mock::given(method("GET"))
                .and(query_param("cmnd", "Status0"))
                .respond_with(
                    ResponseTemplate::new(200)
                        .set_body_string(format!(r#"{{"Status":{{"Power":{power}}}}}"#)),
                )
                .mount(&mock_server)
                .await;

            let rendered = run(&mock_server, Some("status"), None, OutputFormat::Text)
                .await
                .unwrap();
            assert_eq!(rendered, "lamp:UNKNOWN", "power {power}");
        }
    }

    #[tokio::test]
    async fn custom_command_with_malformed_json_is_decode_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>Tasmota</html>"))
            .mount(&mock_server)
            .await;

        let err = run(&mock_server, None, Some("Status 8"), OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn non_200_is_transport_error() {
        for status in [404, 500] {
            let mock_server = MockServer::start().await;

            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(status).set_body_string(r#"{"POWER":"ON"}"#))
                .mount(&mock_server)
                .await;

            let err = run(&mock_server, Some("on"), None, OutputFormat::Text)
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Transport(TransportError::Status { status: s, .. }) if s == status
            ));
        }
    }

    #[tokio::test]
    async fn usage_errors_never_reach_the_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(0)
            .mount(&mock_server)
            .await;

        let both = run(&mock_server, Some("on"), Some("Power On"), OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(both, Error::Usage(UsageError::CommandConflict)));

        let neither = run(&mock_server, None, None, OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(neither, Error::Usage(UsageError::MissingCommand)));

        let unknown = run(&mock_server, Some("reboot"), None, OutputFormat::Text)
            .await
            .unwrap_err();
        assert!(matches!(unknown, Error::Usage(UsageError::UnknownCommand(_))));
    }

    #[tokio::test]
    async fn explicit_host_labels_output_with_host() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"POWER":"OFF"}"#))
            .mount(&mock_server)
            .await;

        let address = host(&mock_server);
        let invocation = Invocation::new(
            Target::host(address.clone()),
            CommandRequest::Mnemonic(Mnemonic::Off),
            OutputFormat::Text,
        );
        let rendered = invocation.run(&Config::default()).await.unwrap();
        assert_eq!(rendered, format!("{address}:OFF"));
    }
}
