// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{
    CodecError, InputFormat, KeyOptions, OutputFormat, OutputOptions, Phase, ShaError, ShaSession,
    StateError, Variant, digest,
};

fn keyed(variant: Variant) -> ShaSession {
    let mut session = ShaSession::new(variant, InputFormat::Text);
    session
        .set_hmac_key("key", InputFormat::Text, KeyOptions::default())
        .expect("Failed to set_hmac_key(..)");
    session
}

#[test]
fn test_phase_transitions() {
    let mut session = ShaSession::new(Variant::Sha224, InputFormat::Text);
    assert_eq!(session.phase(), Phase::Configured);
    assert!(!session.is_keyed());

    session.update("a").expect("Failed to update(..)");
    assert_eq!(session.phase(), Phase::Updating);

    session.hash_bytes().expect("Failed to hash_bytes()");
    assert_eq!(session.phase(), Phase::Finalized);
}

#[test]
fn test_setting_key_keeps_configured_phase() {
    let session = keyed(Variant::Sha1);

    assert_eq!(session.phase(), Phase::Configured);
    assert!(session.is_keyed());
}

#[test]
fn test_key_set_twice() {
    let mut session = keyed(Variant::Sha256);
    let result = session.set_hmac_key("other", InputFormat::Text, KeyOptions::default());

    assert_eq!(result, Err(ShaError::InvalidState(StateError::KeyAlreadySet)));
}

#[test]
fn test_key_after_update() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
    session.update("").expect("Failed to update(..)");

    assert_eq!(
        session.set_hmac_key_bytes(b"key"),
        Err(ShaError::InvalidState(StateError::KeyAfterUpdate))
    );
}

#[test]
fn test_key_after_finalize() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
    session.hash_bytes().expect("Failed to hash_bytes()");

    assert_eq!(
        session.set_hmac_key_bytes(b"key"),
        Err(ShaError::InvalidState(StateError::KeyAfterFinalize))
    );
}

#[test]
fn test_key_already_set_reported_before_phase() {
    let mut session = keyed(Variant::Sha256);
    session.update("x").expect("Failed to update(..)");

    assert_eq!(
        session.set_hmac_key_bytes(b"key"),
        Err(ShaError::InvalidState(StateError::KeyAlreadySet))
    );
}

#[test]
fn test_state_checked_before_key_is_decoded() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
    session.update("x").expect("Failed to update(..)");

    // Malformed key, but the ordering violation wins
    assert_eq!(
        session.set_hmac_key("zz!", InputFormat::Hex, KeyOptions::default()),
        Err(ShaError::InvalidState(StateError::KeyAfterUpdate))
    );
}

#[test]
fn test_get_hash_on_keyed_session() {
    let mut session = keyed(Variant::Sha384);

    assert_eq!(
        session.get_hash(OutputFormat::Hex, &OutputOptions::default()),
        Err(ShaError::InvalidState(StateError::HashOnKeyedSession))
    );
    // The rejected call did not finalize anything
    assert_eq!(session.phase(), Phase::Configured);
}

#[test]
fn test_get_hmac_without_key() {
    let mut session = ShaSession::new(Variant::Sha512, InputFormat::Text);

    assert_eq!(
        session.hmac_bytes(),
        Err(ShaError::InvalidState(StateError::HmacWithoutKey))
    );
}

#[test]
fn test_update_after_finalize() {
    let mut session = ShaSession::new(Variant::Sha1, InputFormat::Text);
    session.update("abc").expect("Failed to update(..)");
    let first = session.hash_bytes().expect("Failed to hash_bytes()");

    assert_eq!(
        session.update("more"),
        Err(ShaError::InvalidState(StateError::UpdateAfterFinalize))
    );
    assert_eq!(
        session.update_bytes(b"more"),
        Err(ShaError::InvalidState(StateError::UpdateAfterFinalize))
    );
    assert_eq!(session.hash_bytes().expect("Failed to hash_bytes()"), first);
}

#[test]
fn test_finalize_is_idempotent() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
    session.update("abc").expect("Failed to update(..)");

    let options = OutputOptions::default();
    let first = session
        .get_hash(OutputFormat::Hex, &options)
        .expect("Failed to get_hash(..)");
    let second = session
        .get_hash(OutputFormat::Hex, &options)
        .expect("Failed to get_hash(..)");

    assert_eq!(first, second);
}

#[test]
fn test_finalized_digest_reformatted_per_call() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
    session.update("abc").expect("Failed to update(..)");

    let lower = session
        .get_hash(OutputFormat::Hex, &OutputOptions::default())
        .expect("Failed to get_hash(..)");
    let upper = session
        .get_hash(
            OutputFormat::Hex,
            &OutputOptions::default().with_output_upper(true),
        )
        .expect("Failed to get_hash(..)");
    let b64 = session
        .get_hash(OutputFormat::B64, &OutputOptions::default())
        .expect("Failed to get_hash(..)");

    assert_eq!(upper, lower.to_uppercase());
    assert_eq!(b64, "ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=");
}

#[test]
fn test_hmac_idempotent() {
    let mut session = keyed(Variant::Sha512);
    session.update("message").expect("Failed to update(..)");

    let first = session.hmac_bytes().expect("Failed to hmac_bytes()");
    let second = session.hmac_bytes().expect("Failed to hmac_bytes()");
    assert_eq!(first, second);
}

#[test]
fn test_failed_update_keeps_committed_data() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Hex);
    session.update("6162").expect("Failed to update(..)");

    assert_eq!(
        session.update("6"),
        Err(ShaError::MalformedInput(CodecError::OddHexLength { len: 1 }))
    );
    assert_eq!(
        session.update("6x"),
        Err(ShaError::MalformedInput(CodecError::InvalidHexDigit {
            ch: 'x',
            position: 1
        }))
    );

    session.update("63").expect("Failed to update(..)");
    assert_eq!(
        session.hash_bytes().expect("Failed to hash_bytes()"),
        digest(Variant::Sha256, b"abc")
    );
}

#[test]
fn test_failed_key_leaves_session_unkeyed() {
    let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);

    let result = session.set_hmac_key("a=b", InputFormat::B64, KeyOptions::default());
    assert!(matches!(result, Err(ShaError::MalformedInput(_))));
    assert!(!session.is_keyed());
    assert_eq!(session.phase(), Phase::Configured);

    // Still usable as a plain hash
    session.update("abc").expect("Failed to update(..)");
    assert_eq!(
        session.hash_bytes().expect("Failed to hash_bytes()"),
        digest(Variant::Sha256, b"abc")
    );
}

#[test]
fn test_debug_redacts_state() {
    let session = keyed(Variant::Sha1);
    let debug = format!("{session:?}");

    assert!(debug.contains("REDACTED"));
    assert!(debug.contains("keyed: true"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ShaError::from(StateError::KeyAfterUpdate).to_string(),
        "invalid state: cannot set HMAC key after calling update"
    );
    assert_eq!(
        ShaError::from(CodecError::OddHexLength { len: 3 }).to_string(),
        "malformed input: HEX input must be in byte increments (got 3 digits)"
    );
}
