//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//


//! Vote model and field validation.

use crate::result::{VoteError, VoteResult};
use std::fmt;
use std::net::IpAddr;
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::{Uuid, Variant};

const USERNAME_MIN: usize = 3;
const USERNAME_MAX: usize = 16;

/// A single player vote.
///
/// Fields are validated on the way in, so a constructed vote always holds a
/// well-formed address, username and UUID.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vote {
    service_name: String,
    address: IpAddr,
    username: String,
    uuid: Option<Uuid>,
    timestamp: u64,
}

impl Vote {
    /// Creates a vote stamped with the current time.
    pub fn new(service_name: impl Into<String>, address: &str, username: &str) -> VoteResult<Vote> {
        Ok(Vote {
            service_name: service_name.into(),
            address: parse_address(address)?,
            username: parse_username(username)?,
            uuid: None,
            timestamp: now_millis(),
        })
    }

    /// Builder form of [`Vote::set_uuid`].
    pub fn with_uuid(mut self, uuid: &str) -> VoteResult<Self> {
        self.set_uuid(uuid)?;
        Ok(self)
    }

    /// Builder form of [`Vote::set_timestamp`].
    pub fn with_timestamp(mut self, millis: u64) -> Self {
        self.set_timestamp(millis);
        self
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn set_service_name(&mut self, service_name: impl Into<String>) {
        self.service_name = service_name.into();
    }

    pub fn address(&self) -> IpAddr {
        self.address
    }

    pub fn set_address(&mut self, address: &str) -> VoteResult<()> {
        self.address = parse_address(address)?;
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn set_username(&mut self, username: &str) -> VoteResult<()> {
        self.username = parse_username(username)?;
        Ok(())
    }

    pub fn uuid(&self) -> Option<Uuid> {
        self.uuid
    }

    /// Sets the player UUID. An empty string clears it.
    ///
    /// Accepts the 32 digit simple form and the hyphenated form.
    pub fn set_uuid(&mut self, uuid: &str) -> VoteResult<()> {
        self.uuid = parse_uuid(uuid)?;
        Ok(())
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Sets the vote time in milliseconds. Zero means now.
    pub fn set_timestamp(&mut self, millis: u64) {
        self.timestamp = if millis == 0 { now_millis() } else { millis };
    }

    /// Whether every field required on the wire is present.
    pub fn is_valid(&self) -> bool {
        !self.service_name.trim().is_empty()
    }

    /// Plain text vote block as sent to the server before encryption.
    pub fn payload(&self) -> String {
        format!(
            "VOTE\n{}\n{}\n{}\n{}\n",
            self.service_name, self.username, self.address, self.timestamp
        )
    }
}

impl fmt::Display for Vote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} from {} via {}", self.username, self.address, self.service_name)
    }
}

fn parse_address(address: &str) -> VoteResult<IpAddr> {
    address
        .trim()
        .parse()
        .map_err(|_| VoteError::InvalidAddress(address.to_string()))
}

fn parse_username(username: &str) -> VoteResult<String> {
    let valid = (USERNAME_MIN..=USERNAME_MAX).contains(&username.len())
        && username.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_');
    if valid {
        Ok(username.to_string())
    } else {
        Err(VoteError::InvalidUsername(username.to_string()))
    }
}

fn parse_uuid(uuid: &str) -> VoteResult<Option<Uuid>> {
    if uuid.is_empty() {
        return Ok(None);
    }
    let invalid = || VoteError::InvalidUuid(uuid.to_string());
    // Braced and URN forms are rejected.
    if uuid.len() != 32 && uuid.len() != 36 {
        return Err(invalid());
    }
    let parsed = Uuid::try_parse(uuid).map_err(|_| invalid())?;
    if parsed.get_version_num() != 4 || parsed.get_variant() != Variant::RFC4122 {
        return Err(invalid());
    }
    Ok(Some(parsed))
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}
