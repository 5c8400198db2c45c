// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status response parsing.
//!
//! Every section and every field is optional on the wire and decodes to its
//! zero value when absent or of an unexpected type. The relay `Power` code
//! is the exception: it is kept as reported, so an unreadable code stays
//! distinguishable from `0`. Serialization emits the
//! sections in the order Tasmota itself uses, so rendering the same tree
//! twice produces identical output.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::response::lenient;
use crate::types::RelayState;

/// Complete status response from `Status 0`.
///
/// # Examples
///
/// ```
/// use tascli::response::StatusResponse;
/// use tascli::types::RelayState;
///
/// let json = r#"{
///     "Status": {"Module": 18, "DeviceName": "Tasmota", "FriendlyName": ["Light"], "Power": 1},
///     "StatusFWR": {"Version": "13.1.0", "BuildDateTime": "2024-01-01T00:00:00"},
///     "StatusNET": {"Hostname": "tasmota", "IPAddress": "192.168.1.100"}
/// }"#;
/// let response: StatusResponse = serde_json::from_str(json).unwrap();
/// assert_eq!(response.module_id(), 18);
/// assert_eq!(response.power_state(), RelayState::On);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Device parameters.
    #[serde(rename = "Status", default, deserialize_with = "lenient::record")]
    pub status: StatusDeviceParameters,

    /// Parameter settings.
    #[serde(rename = "StatusPRM", default, deserialize_with = "lenient::record")]
    pub parameters: StatusParameters,

    /// Firmware information.
    #[serde(rename = "StatusFWR", default, deserialize_with = "lenient::record")]
    pub firmware: StatusFirmware,

    /// Logging settings.
    #[serde(rename = "StatusLOG", default, deserialize_with = "lenient::record")]
    pub logging: StatusLogging,

    /// Memory information.
    #[serde(rename = "StatusMEM", default, deserialize_with = "lenient::record")]
    pub memory: StatusMemory,

    /// Network information.
    #[serde(rename = "StatusNET", default, deserialize_with = "lenient::record")]
    pub network: StatusNetwork,

    /// MQTT configuration.
    #[serde(rename = "StatusMQT", default, deserialize_with = "lenient::record")]
    pub mqtt: StatusMqtt,

    /// Time information.
    #[serde(rename = "StatusTIM", default, deserialize_with = "lenient::record")]
    pub time: StatusTime,

    /// Power thresholds, only reported by energy-monitoring devices.
    #[serde(
        rename = "StatusPTH",
        default,
        deserialize_with = "lenient::object",
        skip_serializing_if = "Map::is_empty"
    )]
    pub power_thresholds: Map<String, Value>,

    /// Sensor readings. The shape depends on the attached sensors.
    #[serde(rename = "StatusSNS", default, deserialize_with = "lenient::object")]
    pub sensors: Map<String, Value>,

    /// Runtime state.
    #[serde(rename = "StatusSTS", default, deserialize_with = "lenient::record")]
    pub state: StatusState,
}

impl StatusResponse {
    /// Returns the numeric power code from the device parameters.
    ///
    /// A missing code reads as `0`. A code that is not an integer (or an
    /// integer string) yields `None`.
    #[must_use]
    pub fn power_code(&self) -> Option<i64> {
        match &self.status.power {
            Value::Null => Some(0),
            value => lenient::exact_int(value),
        }
    }

    /// Classifies the power code; an unreadable code is
    /// [`RelayState::Unknown`].
    #[must_use]
    pub fn power_state(&self) -> RelayState {
        self.power_code()
            .map_or(RelayState::Unknown, RelayState::from_code)
    }

    /// Returns the device module ID.
    #[must_use]
    pub fn module_id(&self) -> u32 {
        self.status.module
    }

    /// Returns the device name.
    #[must_use]
    pub fn device_name(&self) -> &str {
        &self.status.device_name
    }

    /// Returns the firmware version.
    #[must_use]
    pub fn firmware_version(&self) -> &str {
        &self.firmware.version
    }

    /// Returns the IP address.
    #[must_use]
    pub fn ip_address(&self) -> &str {
        &self.network.ip_address
    }

    /// Returns the hostname.
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.network.hostname
    }
}

/// Device parameters (`Status`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusDeviceParameters {
    /// Module ID (e.g., 18 for Generic).
    #[serde(default, deserialize_with = "lenient::int")]
    pub module: u32,
    /// Device name.
    #[serde(default, deserialize_with = "lenient::string")]
    pub device_name: String,
    /// Friendly names for each relay.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub friendly_name: Vec<String>,
    /// MQTT topic.
    #[serde(default, deserialize_with = "lenient::string")]
    pub topic: String,
    /// Button topic.
    #[serde(default, deserialize_with = "lenient::string")]
    pub button_topic: String,
    /// Relay state as reported (0=off, 1=on); `Null` when absent.
    #[serde(default, serialize_with = "power_or_off")]
    pub power: Value,
    /// Power state on startup.
    #[serde(default, deserialize_with = "lenient::int")]
    pub power_on_state: u8,
    /// LED state.
    #[serde(default, deserialize_with = "lenient::int")]
    pub led_state: u8,
    /// LED mask.
    #[serde(default, deserialize_with = "lenient::string")]
    pub led_mask: String,
    /// Save data interval.
    #[serde(default, deserialize_with = "lenient::int")]
    pub save_data: u32,
    /// Save state flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub save_state: u8,
    /// Switch topic.
    #[serde(default, deserialize_with = "lenient::string")]
    pub switch_topic: String,
    /// Switch modes per input.
    #[serde(default, deserialize_with = "lenient::ints")]
    pub switch_mode: Vec<i64>,
    /// Button retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub button_retain: u8,
    /// Switch retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub switch_retain: u8,
    /// Sensor retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub sensor_retain: u8,
    /// Power retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub power_retain: u8,
    /// Info retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub info_retain: u8,
    /// State retain flag.
    #[serde(default, deserialize_with = "lenient::int")]
    pub state_retain: u8,
}

fn power_or_off<S>(power: &Value, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match power {
        Value::Null => serializer.serialize_i64(0),
        value => value.serialize(serializer),
    }
}

/// Parameter settings (`StatusPRM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusParameters {
    /// Serial baudrate.
    #[serde(default, deserialize_with = "lenient::int")]
    pub baudrate: u32,
    /// Serial configuration.
    #[serde(default, deserialize_with = "lenient::string")]
    pub serial_config: String,
    /// Group topic.
    #[serde(default, deserialize_with = "lenient::string")]
    pub group_topic: String,
    /// OTA URL.
    #[serde(default, deserialize_with = "lenient::string")]
    pub ota_url: String,
    /// Restart reason.
    #[serde(default, deserialize_with = "lenient::string")]
    pub restart_reason: String,
    /// Uptime.
    #[serde(default, deserialize_with = "lenient::string")]
    pub uptime: String,
    /// Startup time in UTC.
    #[serde(rename = "StartupUTC", default, deserialize_with = "lenient::string")]
    pub startup_utc: String,
    /// Sleep setting.
    #[serde(default, deserialize_with = "lenient::int")]
    pub sleep: u32,
    /// Configuration holder.
    #[serde(default, deserialize_with = "lenient::int")]
    pub cfg_holder: u32,
    /// Boot count.
    #[serde(default, deserialize_with = "lenient::int")]
    pub boot_count: u32,
    /// Boot count reset time.
    #[serde(rename = "BCResetTime", default, deserialize_with = "lenient::string")]
    pub bc_reset_time: String,
    /// Settings save count.
    #[serde(default, deserialize_with = "lenient::int")]
    pub save_count: u32,
    /// Settings save address.
    #[serde(default, deserialize_with = "lenient::string")]
    pub save_address: String,
}

/// Firmware information (`StatusFWR`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusFirmware {
    /// Firmware version string.
    #[serde(default, deserialize_with = "lenient::string")]
    pub version: String,
    /// Build date and time.
    #[serde(default, deserialize_with = "lenient::string")]
    pub build_date_time: String,
    /// Boot version.
    #[serde(default, deserialize_with = "lenient::int")]
    pub boot: u32,
    /// Core version.
    #[serde(default, deserialize_with = "lenient::string")]
    pub core: String,
    /// SDK version.
    #[serde(rename = "SDK", default, deserialize_with = "lenient::string")]
    pub sdk: String,
    /// CPU frequency in MHz.
    #[serde(default, deserialize_with = "lenient::int")]
    pub cpu_frequency: u32,
    /// Hardware identifier.
    #[serde(default, deserialize_with = "lenient::string")]
    pub hardware: String,
    /// Code image size report.
    #[serde(rename = "CR", default, deserialize_with = "lenient::string")]
    pub cr: String,
}

/// Logging settings (`StatusLOG`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusLogging {
    /// Serial log level.
    #[serde(default, deserialize_with = "lenient::int")]
    pub serial_log: u8,
    /// Web log level.
    #[serde(default, deserialize_with = "lenient::int")]
    pub web_log: u8,
    /// MQTT log level.
    #[serde(default, deserialize_with = "lenient::int")]
    pub mqtt_log: u8,
    /// Syslog level.
    #[serde(default, deserialize_with = "lenient::int")]
    pub sys_log: u8,
    /// Syslog host.
    #[serde(default, deserialize_with = "lenient::string")]
    pub log_host: String,
    /// Syslog port.
    #[serde(default, deserialize_with = "lenient::int")]
    pub log_port: u16,
    /// Configured Wi-Fi networks.
    #[serde(rename = "SSId", default, deserialize_with = "lenient::strings")]
    pub ssid: Vec<String>,
    /// Telemetry period in seconds.
    #[serde(default, deserialize_with = "lenient::int")]
    pub tele_period: u32,
    /// Resolution settings.
    #[serde(default, deserialize_with = "lenient::string")]
    pub resolution: String,
    /// `SetOption` bitfields.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub set_option: Vec<String>,
}

/// Memory information (`StatusMEM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusMemory {
    /// Program size in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub program_size: u32,
    /// Free program space in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub free: u32,
    /// Heap size in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub heap: u32,
    /// Program flash size in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub program_flash_size: u32,
    /// Flash size in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub flash_size: u32,
    /// Flash chip ID.
    #[serde(default, deserialize_with = "lenient::string")]
    pub flash_chip_id: String,
    /// Flash frequency in MHz.
    #[serde(default, deserialize_with = "lenient::int")]
    pub flash_frequency: u32,
    /// Flash mode.
    #[serde(default, deserialize_with = "lenient::int")]
    pub flash_mode: u8,
    /// Compiled feature bitfields.
    #[serde(default, deserialize_with = "lenient::strings")]
    pub features: Vec<String>,
    /// Compiled driver list.
    #[serde(default, deserialize_with = "lenient::string")]
    pub drivers: String,
    /// Compiled sensor list.
    #[serde(default, deserialize_with = "lenient::string")]
    pub sensors: String,
}

/// Network information (`StatusNET`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusNetwork {
    /// Hostname.
    #[serde(default, deserialize_with = "lenient::string")]
    pub hostname: String,
    /// IP address.
    #[serde(rename = "IPAddress", default, deserialize_with = "lenient::string")]
    pub ip_address: String,
    /// Gateway address.
    #[serde(default, deserialize_with = "lenient::string")]
    pub gateway: String,
    /// Subnet mask.
    #[serde(default, deserialize_with = "lenient::string")]
    pub subnetmask: String,
    /// Primary DNS server.
    #[serde(rename = "DNSServer1", default, deserialize_with = "lenient::string")]
    pub dns_server1: String,
    /// Secondary DNS server.
    #[serde(rename = "DNSServer2", default, deserialize_with = "lenient::string")]
    pub dns_server2: String,
    /// MAC address.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mac: String,
    /// Web server mode.
    #[serde(default, deserialize_with = "lenient::int")]
    pub webserver: u8,
    /// HTTP API enabled flag.
    #[serde(rename = "HTTP_API", default, deserialize_with = "lenient::int")]
    pub http_api: u8,
    /// Wi-Fi configuration mode.
    #[serde(default, deserialize_with = "lenient::int")]
    pub wifi_config: u8,
    /// Wi-Fi transmit power in dBm.
    #[serde(default, deserialize_with = "lenient::float")]
    pub wifi_power: f64,
}

/// MQTT configuration (`StatusMQT`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusMqtt {
    /// MQTT host.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mqtt_host: String,
    /// MQTT port.
    #[serde(default, deserialize_with = "lenient::int")]
    pub mqtt_port: u16,
    /// MQTT client ID mask.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mqtt_client_mask: String,
    /// MQTT client ID.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mqtt_client: String,
    /// MQTT user.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mqtt_user: String,
    /// MQTT connection count.
    #[serde(default, deserialize_with = "lenient::int")]
    pub mqtt_count: u32,
    /// Maximum packet size.
    #[serde(rename = "MAX_PACKET_SIZE", default, deserialize_with = "lenient::int")]
    pub max_packet_size: u32,
    /// Keepalive in seconds.
    #[serde(rename = "KEEPALIVE", default, deserialize_with = "lenient::int")]
    pub keepalive: u32,
    /// Socket timeout in seconds.
    #[serde(rename = "SOCKET_TIMEOUT", default, deserialize_with = "lenient::int")]
    pub socket_timeout: u32,
}

/// Time information (`StatusTIM`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusTime {
    /// UTC time.
    #[serde(rename = "UTC", default, deserialize_with = "lenient::string")]
    pub utc: String,
    /// Local time.
    #[serde(default, deserialize_with = "lenient::string")]
    pub local: String,
    /// Start of daylight saving time.
    #[serde(rename = "StartDST", default, deserialize_with = "lenient::string")]
    pub start_dst: String,
    /// End of daylight saving time.
    #[serde(rename = "EndDST", default, deserialize_with = "lenient::string")]
    pub end_dst: String,
    /// Timezone, either an offset like `+01:00` or a code like `99`.
    #[serde(default, deserialize_with = "lenient::string")]
    pub timezone: String,
    /// Sunrise time.
    #[serde(default, deserialize_with = "lenient::string")]
    pub sunrise: String,
    /// Sunset time.
    #[serde(default, deserialize_with = "lenient::string")]
    pub sunset: String,
}

/// Runtime state (`StatusSTS`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusState {
    /// Device local time.
    #[serde(default, deserialize_with = "lenient::string")]
    pub time: String,
    /// Uptime.
    #[serde(default, deserialize_with = "lenient::string")]
    pub uptime: String,
    /// Uptime in seconds.
    #[serde(default, deserialize_with = "lenient::int")]
    pub uptime_sec: u64,
    /// Free heap in KB.
    #[serde(default, deserialize_with = "lenient::int")]
    pub heap: u32,
    /// Sleep mode.
    #[serde(default, deserialize_with = "lenient::string")]
    pub sleep_mode: String,
    /// Sleep setting.
    #[serde(default, deserialize_with = "lenient::int")]
    pub sleep: u32,
    /// Load average.
    #[serde(default, deserialize_with = "lenient::int")]
    pub load_avg: u32,
    /// MQTT connection count.
    #[serde(default, deserialize_with = "lenient::int")]
    pub mqtt_count: u32,
    /// Relay state as reported at runtime.
    #[serde(rename = "POWER", default, deserialize_with = "lenient::string")]
    pub power: String,
    /// Wi-Fi link state.
    #[serde(default, deserialize_with = "lenient::record")]
    pub wifi: StatusWifi,
}

/// Wi-Fi link state inside `StatusSTS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StatusWifi {
    /// Access point index.
    #[serde(rename = "AP", default, deserialize_with = "lenient::int")]
    pub ap: u8,
    /// Wi-Fi SSID.
    #[serde(rename = "SSId", default, deserialize_with = "lenient::string")]
    pub ssid: String,
    /// Wi-Fi BSSID.
    #[serde(rename = "BSSId", default, deserialize_with = "lenient::string")]
    pub bssid: String,
    /// Wi-Fi channel.
    #[serde(default, deserialize_with = "lenient::int")]
    pub channel: u8,
    /// Wi-Fi mode.
    #[serde(default, deserialize_with = "lenient::string")]
    pub mode: String,
    /// Signal quality in percent.
    #[serde(rename = "RSSI", default, deserialize_with = "lenient::int")]
    pub rssi: i32,
    /// Signal strength in dBm.
    #[serde(default, deserialize_with = "lenient::int")]
    pub signal: i32,
    /// Reconnect count.
    #[serde(default, deserialize_with = "lenient::int")]
    pub link_count: u32,
    /// Accumulated downtime.
    #[serde(default, deserialize_with = "lenient::string")]
    pub downtime: String,
}
