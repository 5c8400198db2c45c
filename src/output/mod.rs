// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rendering of decoded responses.
//!
//! | Response | Text | JSON |
//! |----------|------|------|
//! | power | `{device}:{POWER}` | `{"POWER": ...}` |
//! | status | `{device}:{ON\|OFF\|UNKNOWN}` | `{"POWER": ...}` |
//! | statusall | JSON | full status tree |
//! | timers | 9-column table | timer table |
//! | custom | JSON | re-indented body |
//!
//! JSON is indented with one tab per level and keeps a fixed key order.

mod table;

pub use table::Table;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::config::Config;
use crate::error::DecodeError;
use crate::response::{PowerResponse, Response, TimerTable};

/// Pointer printed after the timer table.
pub const TIMERS_DOC_URL: &str = "https://tasmota.github.io/docs/Timers/#json-payload-anatomy";

/// Column headers of the timer table.
pub const TIMER_COLUMNS: [&str; 9] = [
    "Name", "Enabled", "Mode", "Time", "Window", "Days", "Repeat", "Output", "Action",
];

/// Requested output style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Tab-indented JSON.
    Json,
}

/// Renders a decoded response.
///
/// `label` names the device in single-line text output.
///
/// # Errors
///
/// Returns [`DecodeError`] if the value cannot be serialized.
///
/// # Examples
///
/// ```
/// use tascli::output::{render, OutputFormat};
/// use tascli::response::{PowerResponse, Response};
///
/// let response = Response::Power(PowerResponse::new("ON"));
/// assert_eq!(render(&response, OutputFormat::Text, "lamp").unwrap(), "lamp:ON");
/// ```
pub fn render(response: &Response, format: OutputFormat, label: &str) -> Result<String, DecodeError> {
    match (response, format) {
        (Response::Power(power), OutputFormat::Text) => Ok(format!("{label}:{}", power.power())),
        (Response::Power(power), OutputFormat::Json) => to_json(power),
        (Response::Status(state), OutputFormat::Text) => Ok(format!("{label}:{state}")),
        (Response::Status(state), OutputFormat::Json) => to_json(&PowerResponse::from(*state)),
        (Response::StatusAll(status), _) => to_json(status),
        (Response::Timers(timers), OutputFormat::Text) => Ok(timer_table(timers)),
        (Response::Timers(timers), OutputFormat::Json) => to_json(timers),
        (Response::Raw(value), _) => to_json(value),
    }
}

/// Serializes `value` as JSON indented with tabs.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] if serialization fails.
pub fn to_json<T>(value: &T) -> Result<String, DecodeError>
where
    T: Serialize + ?Sized,
{
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|err| DecodeError::Render(err.to_string()))
}

/// Renders the timer table followed by a pointer to the field reference.
#[must_use]
pub fn timer_table(timers: &TimerTable) -> String {
    let mut table = Table::new(TIMER_COLUMNS);
    for (name, timer) in timers.iter() {
        table.push_row([
            name,
            timer.enable.to_string(),
            timer.mode.to_string(),
            timer.time.clone(),
            timer.window.to_string(),
            timer.days.clone(),
            timer.repeat.to_string(),
            timer.output.to_string(),
            timer.action.to_string(),
        ]);
    }
    format!(
        "{}\nFurther details available here: {TIMERS_DOC_URL}",
        table.render()
    )
}

/// Renders the configured devices as an `IP` / `Name` table.
#[must_use]
pub fn device_table(config: &Config) -> String {
    if config.devices().is_empty() {
        return "no devices found".to_string();
    }
    let mut table = Table::new(["IP", "Name"]);
    for (name, address) in config.devices() {
        table.push_row([address.as_str(), name.as_str()]);
    }
    table.render().trim_end().to_string()
}

/// Renders effective settings as a `Config` / `Setting` table.
#[must_use]
pub fn settings_table(settings: &[(String, String)]) -> String {
    let mut table = Table::new(["Config", "Setting"]);
    for (key, value) in settings {
        table.push_row([key.as_str(), value.as_str()]);
    }
    table.render().trim_end().to_string()
}
