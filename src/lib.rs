// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `tascli` - send one command to a Tasmota device and render the answer.
//!
//! A single invocation resolves a command, performs one HTTP request against
//! the device's `/cm?cmnd=` endpoint, decodes the JSON answer into the shape
//! expected for that command and renders it as text or JSON.
//!
//! # Supported Commands
//!
//! - **Power control**: `on`, `off`
//! - **Status queries**: `status` (relay state only), `statusall` (full tree)
//! - **Timers**: `timers` (16-slot timer table)
//! - **Custom**: any raw command; the answer is re-indented as JSON
//!
//! # Quick Start
//!
//! ```no_run
//! use tascli::{Config, Invocation, OutputFormat};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> tascli::Result<()> {
//!     let config = Config::from_yaml("devices:\n  lamp: 192.168.1.20\n").unwrap();
//!     let invocation = Invocation::from_parts(
//!         Some("on"),
//!         None,
//!         None,
//!         Some("lamp"),
//!         OutputFormat::Text,
//!         &config,
//!     )?;
//!
//!     // Prints "lamp:ON"
//!     println!("{}", invocation.run(&config).await?);
//!     Ok(())
//! }
//! ```

pub mod command;
pub mod config;
pub mod error;
mod invocation;
pub mod output;
pub mod protocol;
pub mod response;
mod target;
pub mod types;

pub use command::{CommandRequest, DeviceCommand, Mnemonic};
pub use config::Config;
pub use error::{ConfigError, DecodeError, Error, Result, TransportError, UsageError};
pub use invocation::Invocation;
pub use output::OutputFormat;
pub use protocol::{HttpClient, HttpConfig, Method, Protocol, RawResponse};
pub use response::{PowerResponse, Response, StatusResponse, Timer, TimerTable};
pub use target::Target;
pub use types::RelayState;
