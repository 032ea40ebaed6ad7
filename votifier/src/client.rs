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


use crate::config::VotifierConfig;
use crate::result::{VotifierError, VotifierResult};
use crate::vote::Vote;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::pkcs8::DecodePublicKey;
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{debug, info, instrument};

/// Encrypts a vote payload for the server.
///
/// [`Pkcs1Encryptor`] is used unless another encryptor is supplied through
/// [`Votifier::with_encryptor`].
pub trait VoteEncryptor: Send + Sync {
    fn encrypt(&self, public_key_pem: &str, payload: &[u8]) -> Result<Vec<u8>, String>;
}

impl<F> VoteEncryptor for F
where
    F: Fn(&str, &[u8]) -> Result<Vec<u8>, String> + Send + Sync,
{
    fn encrypt(&self, public_key_pem: &str, payload: &[u8]) -> Result<Vec<u8>, String> {
        self(public_key_pem, payload)
    }
}

/// RSA PKCS#1 v1.5 encryption with an X.509 `PUBLIC KEY`, as Votifier v1
/// servers expect.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pkcs1Encryptor;

impl VoteEncryptor for Pkcs1Encryptor {
    fn encrypt(&self, public_key_pem: &str, payload: &[u8]) -> Result<Vec<u8>, String> {
        // Body lines are decoded directly, so any wrap width is accepted.
        let body: String = public_key_pem
            .lines()
            .filter(|line| !line.starts_with("-----"))
            .flat_map(|line| line.chars().filter(|c| !c.is_whitespace()))
            .collect();
        let der = STANDARD
            .decode(body)
            .map_err(|err| format!("public key is not base64: {err}"))?;
        let key = RsaPublicKey::from_public_key_der(&der)
            .map_err(|err| format!("public key is not an RSA key: {err}"))?;
        key.encrypt(&mut OsRng, Pkcs1v15Encrypt, payload)
            .map_err(|err| err.to_string())
    }
}

/// Sends votes to a single Votifier server.
pub struct Votifier<E = Pkcs1Encryptor> {
    config: VotifierConfig,
    encryptor: E,
}

impl Votifier<Pkcs1Encryptor> {
    pub fn new(config: VotifierConfig) -> Self {
        Self::with_encryptor(config, Pkcs1Encryptor)
    }
}

impl<E: VoteEncryptor> Votifier<E> {
    /// Uses `encryptor` in place of the built in RSA encryption.
    pub fn with_encryptor(config: VotifierConfig, encryptor: E) -> Self {
        Self { config, encryptor }
    }

    pub fn config(&self) -> &VotifierConfig {
        &self.config
    }

    /// Encrypts and delivers one vote, closing the connection afterwards.
    ///
    /// Connecting, writing and shutting down all share the configured timeout.
    #[instrument(skip_all, fields(endpoint = %self.config.endpoint(), user = vote.username()))]
    pub async fn send_vote(&self, vote: &Vote) -> VotifierResult<()> {
        if !vote.is_valid() {
            return Err(VotifierError::IncompleteVote);
        }
        let block = self
            .encryptor
            .encrypt(&self.config.public_key_pem(), vote.payload().as_bytes())
            .map_err(VotifierError::Encryption)?;
        debug!(bytes = block.len(), "Payload encrypted");

        let endpoint = self.config.endpoint();
        let exchange = async {
            let mut stream =
                TcpStream::connect((self.config.host.as_str(), self.config.port)).await?;
            debug!("Connected");
            stream.write_all(&block).await?;
            stream.shutdown().await?;
            Ok::<_, std::io::Error>(())
        };
        tokio::time::timeout(self.config.timeout, exchange)
            .await
            .map_err(|_| VotifierError::Timeout(endpoint.clone()))??;

        info!("Vote delivered to {}", endpoint);
        Ok(())
    }
}
