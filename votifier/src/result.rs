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


//! Error types for vote construction and delivery.

/// Result type alias for vote field validation.
pub type VoteResult<T> = Result<T, VoteError>;

/// Result type alias for vote delivery.
pub type VotifierResult<T> = Result<T, VotifierError>;

/// A vote field was rejected during validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VoteError {
    /// Address did not parse as an IPv4 or IPv6 address.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Username was not 3 to 16 characters of `[A-Za-z0-9_]`.
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    /// UUID was malformed or not a version 4 RFC 4122 UUID.
    #[error("Invalid UUID: {0}")]
    InvalidUuid(String),
}

/// Errors that can occur while delivering a vote.
#[derive(Debug, thiserror::Error)]
pub enum VotifierError {
    /// Vote is missing required fields.
    #[error("Vote is incomplete")]
    IncompleteVote,
    /// The public key could not be read or the payload not encrypted.
    #[error("Encryption failed: {0}")]
    Encryption(String),
    /// Connecting and writing the vote did not finish in time.
    #[error("Vote exchange with {0} timed out")]
    Timeout(String),
    /// Underlying socket error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
