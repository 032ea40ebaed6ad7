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


use std::time::Duration;

const PEM_BEGIN: &str = "-----BEGIN PUBLIC KEY-----";
const PEM_END: &str = "-----END PUBLIC KEY-----";
const PEM_WIDTH: usize = 65;

/// Default Votifier listener port.
pub const DEFAULT_PORT: u16 = 8192;

/// Default connect timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection settings for a Votifier server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VotifierConfig {
    /// Base64 body of the server's public key, or a full PEM block.
    pub public_key: String,
    pub host: String,
    pub port: u16,
    /// Upper bound on connection establishment.
    pub timeout: Duration,
}

impl VotifierConfig {
    pub fn new(host: impl Into<String>, public_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            host: host.into(),
            port: DEFAULT_PORT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `host:port` as used for logging and connection.
    pub fn endpoint(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public key wrapped in a PEM envelope at 65 columns.
    ///
    /// A key already carrying the PEM header is returned unchanged.
    pub fn public_key_pem(&self) -> String {
        let key = self.public_key.trim();
        if key.starts_with(PEM_BEGIN) {
            return key.to_string();
        }
        let body: Vec<char> = key.chars().filter(|c| !c.is_whitespace()).collect();
        let lines: Vec<String> = body
            .chunks(PEM_WIDTH)
            .map(|line| line.iter().collect())
            .collect();
        format!("{}\n{}\n{}", PEM_BEGIN, lines.join("\n"), PEM_END)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = VotifierConfig::new("localhost", "KEY");
        assert_eq!(config.port, 8192);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.endpoint(), "localhost:8192");
        assert_eq!(config.with_port(9000).endpoint(), "localhost:9000");
    }

    #[test]
    fn test_pem_wraps_at_65_columns() {
        let key = "A".repeat(130) + "BC";
        let pem = VotifierConfig::new("localhost", key).public_key_pem();
        let lines: Vec<&str> = pem.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "-----BEGIN PUBLIC KEY-----");
        assert_eq!(lines[1].len(), 65);
        assert_eq!(lines[2].len(), 65);
        assert_eq!(lines[3], "BC");
        assert_eq!(lines[4], "-----END PUBLIC KEY-----");
    }

    #[test]
    fn test_pem_short_key() {
        let pem = VotifierConfig::new("localhost", "MIIB").public_key_pem();
        assert_eq!(pem, "-----BEGIN PUBLIC KEY-----\nMIIB\n-----END PUBLIC KEY-----");
    }

    #[test]
    fn test_pem_passthrough() {
        let full = "-----BEGIN PUBLIC KEY-----\nMIIB\n-----END PUBLIC KEY-----";
        assert_eq!(VotifierConfig::new("h", full).public_key_pem(), full);
    }
}
