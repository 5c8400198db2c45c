// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Response decoding for Tasmota JSON payloads.
//!
//! Each built-in command has one fixed response shape. Decoding ignores
//! unknown fields and gives missing ones their zero value, so only bytes
//! that are not JSON at all are rejected. A custom command has no known
//! shape and is kept as a generic JSON value.

mod lenient;
mod power;
mod status;
mod timers;

pub use power::PowerResponse;
pub use status::{
    StatusDeviceParameters, StatusFirmware, StatusLogging, StatusMemory, StatusMqtt,
    StatusNetwork, StatusParameters, StatusResponse, StatusState, StatusTime, StatusWifi,
};
pub use timers::{TIMER_SLOTS, Timer, TimerTable};

use crate::command::{CommandRequest, Mnemonic};
use crate::error::DecodeError;
use crate::types::RelayState;

/// A decoded device response.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Result of `on` / `off`.
    Power(PowerResponse),
    /// Relay state extracted from the status tree for `status`.
    Status(RelayState),
    /// The complete status tree for `statusall`.
    StatusAll(Box<StatusResponse>),
    /// The timer table for `timers`.
    Timers(Box<TimerTable>),
    /// Any JSON returned for a custom command.
    Raw(serde_json::Value),
}

impl Response {
    /// Decodes `body` into the shape expected for `request`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::Json`] if `body` is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use tascli::command::{CommandRequest, Mnemonic};
    /// use tascli::response::Response;
    /// use tascli::types::RelayState;
    ///
    /// let request = CommandRequest::Mnemonic(Mnemonic::Status);
    /// let response = Response::decode(&request, br#"{"Status": {"Power": 0}}"#).unwrap();
    /// assert_eq!(response, Response::Status(RelayState::Off));
    /// ```
    pub fn decode(request: &CommandRequest, body: &[u8]) -> Result<Self, DecodeError> {
        let response = match request {
            CommandRequest::Custom(_) => Self::Raw(serde_json::from_slice(body)?),
            CommandRequest::Mnemonic(mnemonic) => Self::decode_mnemonic(*mnemonic, body)?,
        };
        tracing::debug!(kind = response.kind(), "Decoded response");
        Ok(response)
    }

    fn decode_mnemonic(mnemonic: Mnemonic, body: &[u8]) -> Result<Self, DecodeError> {
        Ok(match mnemonic {
            Mnemonic::On | Mnemonic::Off => Self::Power(serde_json::from_slice(body)?),
            Mnemonic::Status => {
                let status: StatusResponse = serde_json::from_slice(body)?;
                Self::Status(status.power_state())
            }
            Mnemonic::StatusAll => Self::StatusAll(Box::new(serde_json::from_slice(body)?)),
            Mnemonic::Timers => Self::Timers(Box::new(serde_json::from_slice(body)?)),
        })
    }

    /// Returns a short name for the variant.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Power(_) => "power",
            Self::Status(_) => "status",
            Self::StatusAll(_) => "statusall",
            Self::Timers(_) => "timers",
            Self::Raw(_) => "raw",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mnemonic(m: Mnemonic) -> CommandRequest {
        CommandRequest::Mnemonic(m)
    }

    #[test]
    fn decode_power() {
        let response = Response::decode(&mnemonic(Mnemonic::On), br#"{"POWER":"ON"}"#).unwrap();
        assert_eq!(response, Response::Power(PowerResponse::new("ON")));
    }

    #[test]
    fn decode_power_with_missing_field() {
        let response = Response::decode(&mnemonic(Mnemonic::Off), b"{}").unwrap();
        assert_eq!(response, Response::Power(PowerResponse::new("")));
    }

    #[test]
    fn decode_status_classifies_power() {
        let cases = [
            (&br#"{"Status":{"Power":1,"Module":1}}"#[..], RelayState::On),
            (&br#"{"Status":{"Power":0}}"#[..], RelayState::Off),
            (&br#"{"Status":{"Power":2}}"#[..], RelayState::Unknown),
        ];
        for (body, expected) in cases {
            let response = Response::decode(&mnemonic(Mnemonic::Status), body).unwrap();
            assert_eq!(response, Response::Status(expected));
        }
    }

    #[test]
    fn decode_statusall_keeps_tree() {
        let body = br#"{"Status":{"Power":1,"DeviceName":"Plug"},"StatusFWR":{"Version":"12.5.0"}}"#;
        let Response::StatusAll(status) = Response::decode(&mnemonic(Mnemonic::StatusAll), body)
            .unwrap()
        else {
            panic!("expected statusall");
        };
        assert_eq!(status.device_name(), "Plug");
        assert_eq!(status.firmware_version(), "12.5.0");
    }

    #[test]
    fn decode_timers() {
        let body = br#"{"Timers":"OFF","Timer2":{"Enable":1,"Time":"08:00"}}"#;
        let Response::Timers(table) = Response::decode(&mnemonic(Mnemonic::Timers), body).unwrap()
        else {
            panic!("expected timers");
        };
        assert_eq!(table.len(), TIMER_SLOTS);
        assert_eq!(table.slot(2).unwrap().time, "08:00");
    }

    #[test]
    fn decode_custom_is_generic() {
        let request = CommandRequest::Custom("Dimmer".to_string());
        let response = Response::decode(&request, br#"{"Dimmer":40}"#).unwrap();
        assert_eq!(response, Response::Raw(serde_json::json!({"Dimmer": 40})));
    }

    #[test]
    fn custom_numbers_keep_their_text() {
        let request = CommandRequest::Custom("EnergyTotal".to_string());
        let body = br#"{"ENERGY":{"Current":0.100,"Total":1.50,"Factor":1e2,"Big":18446744073709551616}}"#;
        let response = Response::decode(&request, body).unwrap();
        let rendered = crate::output::to_json(&response_value(&response)).unwrap();

        assert!(rendered.contains("\"Current\": 0.100"), "{rendered}");
        assert!(rendered.contains("\"Total\": 1.50"), "{rendered}");
        assert!(rendered.contains("\"Factor\": 1e2"), "{rendered}");
        assert!(rendered.contains("\"Big\": 18446744073709551616"), "{rendered}");
    }

    fn response_value(response: &Response) -> &serde_json::Value {
        match response {
            Response::Raw(value) => value,
            other => panic!("expected raw, got {}", other.kind()),
        }
    }

    #[test]
    fn malformed_custom_body_is_decode_error() {
        let request = CommandRequest::Custom("Dimmer".to_string());
        let err = Response::decode(&request, b"<html>nope</html>").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
    }

    #[test]
    fn malformed_typed_body_is_decode_error() {
        for m in Mnemonic::all() {
            let err = Response::decode(&mnemonic(*m), b"{\"POWER\":").unwrap_err();
            assert!(matches!(err, DecodeError::Json(_)), "{m}");
        }
    }
}
