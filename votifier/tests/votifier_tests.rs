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


use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use mccolors_votifier::{Vote, VoteEncryptor, Votifier, VotifierConfig, VotifierError};
use rsa::pkcs8::{EncodePublicKey, LineEnding};
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use std::time::Duration;
use tokio::io::AsyncReadExt;
use tokio::net::TcpListener;
use tracing_test::traced_test;

/// Test encryptor that prefixes the key's first body line and reverses the payload.
struct ReversingEncryptor;

impl VoteEncryptor for ReversingEncryptor {
    fn encrypt(&self, public_key_pem: &str, payload: &[u8]) -> Result<Vec<u8>, String> {
        let body = public_key_pem.lines().nth(1).ok_or("missing key body")?;
        let mut block = body.as_bytes().to_vec();
        block.push(b'|');
        block.extend(payload.iter().rev());
        Ok(block)
    }
}

async fn listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    (listener, port)
}

#[tokio::test]
#[traced_test]
async fn test_send_vote_delivers_encrypted_block() {
    let (listener, port) = listener().await;
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = Vec::new();
        socket.read_to_end(&mut received).await.unwrap();
        received
    });

    let config = VotifierConfig::new("127.0.0.1", "MIIBKEY").with_port(port);
    let votifier = Votifier::with_encryptor(config, ReversingEncryptor);
    let vote = Vote::new("TestList", "10.0.0.1", "Notch")
        .unwrap()
        .with_timestamp(1234);
    votifier.send_vote(&vote).await.unwrap();

    let received = server.await.unwrap();
    let (key, payload) = received.split_at(8);
    assert_eq!(key, b"MIIBKEY|");
    let mut payload = payload.to_vec();
    payload.reverse();
    assert_eq!(payload, b"VOTE\nTestList\nNotch\n10.0.0.1\n1234\n");
    assert!(logs_contain("Vote delivered"));
}

#[tokio::test]
async fn test_closure_encryptor() {
    let (listener, port) = listener().await;
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut received = String::new();
        socket.read_to_string(&mut received).await.unwrap();
        received
    });

    let identity = |_: &str, payload: &[u8]| -> Result<Vec<u8>, String> { Ok(payload.to_vec()) };
    let votifier = Votifier::with_encryptor(VotifierConfig::new("127.0.0.1", "KEY").with_port(port), identity);
    let vote = Vote::new("List", "::1", "jeb_").unwrap().with_timestamp(7);
    votifier.send_vote(&vote).await.unwrap();

    assert_eq!(server.await.unwrap(), "VOTE\nList\njeb_\n::1\n7\n");
}

#[tokio::test]
async fn test_incomplete_vote_is_rejected_before_connecting() {
    let mut vote = Vote::new("List", "127.0.0.1", "Notch").unwrap();
    vote.set_service_name("");
    let votifier = Votifier::with_encryptor(VotifierConfig::new("127.0.0.1", "KEY").with_port(1), ReversingEncryptor);
    assert!(matches!(
        votifier.send_vote(&vote).await,
        Err(VotifierError::IncompleteVote)
    ));
}

#[tokio::test]
async fn test_encryption_failure_is_reported() {
    let failing = |_: &str, _: &[u8]| -> Result<Vec<u8>, String> { Err("bad key".to_string()) };
    let votifier = Votifier::with_encryptor(VotifierConfig::new("127.0.0.1", "KEY").with_port(1), failing);
    let vote = Vote::new("List", "127.0.0.1", "Notch").unwrap();
    match votifier.send_vote(&vote).await {
        Err(VotifierError::Encryption(message)) => assert_eq!(message, "bad key"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[tokio::test]
async fn test_refused_connection_is_io_error() {
    let (listener, port) = listener().await;
    drop(listener);
    let config = VotifierConfig::new("127.0.0.1", "KEY")
        .with_port(port)
        .with_timeout(Duration::from_secs(2));
    let votifier = Votifier::with_encryptor(config, ReversingEncryptor);
    let vote = Vote::new("List", "127.0.0.1", "Notch").unwrap();
    assert!(matches!(
        votifier.send_vote(&vote).await,
        Err(VotifierError::Io(_))
    ));
}

async fn receive_one(listener: TcpListener) -> Vec<u8> {
    let (mut socket, _) = listener.accept().await.unwrap();
    let mut received = Vec::new();
    socket.read_to_end(&mut received).await.unwrap();
    received
}

#[tokio::test]
async fn test_rsa_block_decrypts_with_private_key() {
    let private = RsaPrivateKey::new(&mut OsRng, 1024).unwrap();
    let der = private.to_public_key().to_public_key_der().unwrap();
    let body = STANDARD.encode(der.as_bytes());

    let (listener, port) = listener().await;
    let server = tokio::spawn(receive_one(listener));
    let votifier = Votifier::new(VotifierConfig::new("127.0.0.1", body).with_port(port));
    let vote = Vote::new("TestList", "10.0.0.1", "Notch")
        .unwrap()
        .with_timestamp(1234);
    votifier.send_vote(&vote).await.unwrap();

    let block = server.await.unwrap();
    assert_eq!(block.len(), 128);
    let plain = private.decrypt(Pkcs1v15Encrypt, &block).unwrap();
    assert_eq!(plain, b"VOTE\nTestList\nNotch\n10.0.0.1\n1234\n");
}

#[tokio::test]
async fn test_rsa_accepts_full_pem_key() {
    let private = RsaPrivateKey::new(&mut OsRng, 1024).unwrap();
    let pem = private.to_public_key().to_public_key_pem(LineEnding::LF).unwrap();

    let (listener, port) = listener().await;
    let server = tokio::spawn(receive_one(listener));
    let votifier = Votifier::new(VotifierConfig::new("127.0.0.1", pem).with_port(port));
    let vote = Vote::new("List", "::1", "jeb_").unwrap().with_timestamp(7);
    votifier.send_vote(&vote).await.unwrap();

    let plain = private.decrypt(Pkcs1v15Encrypt, &server.await.unwrap()).unwrap();
    assert_eq!(plain, b"VOTE\nList\njeb_\n::1\n7\n");
}

#[tokio::test]
async fn test_malformed_public_key_is_encryption_error() {
    let votifier = Votifier::new(VotifierConfig::new("127.0.0.1", "not base64!").with_port(1));
    let vote = Vote::new("List", "127.0.0.1", "Notch").unwrap();
    assert!(matches!(
        votifier.send_vote(&vote).await,
        Err(VotifierError::Encryption(_))
    ));
}

#[tokio::test]
async fn test_stalled_write_times_out() {
    let (listener, port) = listener().await;
    let server = tokio::spawn(async move {
        let (socket, _) = listener.accept().await.unwrap();
        tokio::time::sleep(Duration::from_secs(5)).await;
        drop(socket);
    });

    let oversized = |_: &str, _: &[u8]| -> Result<Vec<u8>, String> { Ok(vec![0u8; 64 << 20]) };
    let config = VotifierConfig::new("127.0.0.1", "KEY")
        .with_port(port)
        .with_timeout(Duration::from_millis(300));
    let votifier = Votifier::with_encryptor(config, oversized);
    let vote = Vote::new("List", "127.0.0.1", "Notch").unwrap();
    assert!(matches!(
        votifier.send_vote(&vote).await,
        Err(VotifierError::Timeout(_))
    ));
    server.abort();
}
