// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Streaming hash / HMAC session.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use zeroize::Zeroizing;

use shastream_codec::{
    InputFormat, OutputFormat, OutputOptions, PackedWordBuffer, decode_bytes, encode_bytes,
};
use shastream_core::{ChainingState, Variant, finalize};

use crate::error::{ShaError, StateError};
use crate::hash::iterate;
use crate::hmac::HmacPads;
use crate::options::{KeyOptions, NumRounds, SessionOptions};

/// Where a session stands in its lifecycle.
///
/// ```text
/// Configured --update--> Updating --get_hash/get_hmac--> Finalized
///      \________________get_hash/get_hmac_____________/
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Constructed; an HMAC key may still be set.
    Configured,
    /// At least one `update` call went through.
    Updating,
    /// The digest has been produced and is cached.
    Finalized,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::Configured => "configured",
            Phase::Updating => "updating",
            Phase::Finalized => "finalized",
        })
    }
}

/// Incremental SHA-1 / SHA-2 hash or HMAC computation.
///
/// Feed data with [`update`](Self::update) in as many pieces as convenient;
/// complete blocks are compressed immediately and only the trailing partial
/// block is buffered. The first call to [`get_hash`](Self::get_hash) or
/// [`get_hmac`](Self::get_hmac) finalizes the session and caches the digest;
/// later calls format the same digest again.
///
/// Every mutating call takes `&mut self`; sharing one session across threads
/// needs external synchronization. Independent sessions share nothing.
///
/// # Example
///
/// ```
/// use shastream::{InputFormat, OutputFormat, OutputOptions, ShaSession, Variant};
///
/// let mut session = ShaSession::new(Variant::Sha256, InputFormat::Text);
/// session.update("ab")?;
/// session.update("c")?;
///
/// let hex = session.get_hash(OutputFormat::Hex, &OutputOptions::default())?;
/// assert!(hex.starts_with("ba7816bf"));
/// # Ok::<(), shastream::ShaError>(())
/// ```
pub struct ShaSession {
    variant: Variant,
    input_format: InputFormat,
    options: SessionOptions,
    phase: Phase,
    state: ChainingState,
    remainder: PackedWordBuffer,
    processed_bits: u64,
    pads: Option<HmacPads>,
    digest: Zeroizing<Vec<u8>>,
}

impl fmt::Debug for ShaSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShaSession")
            .field("variant", &self.variant)
            .field("input_format", &self.input_format)
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("keyed", &self.is_keyed())
            .field("state", &"REDACTED")
            .finish()
    }
}

impl ShaSession {
    /// Session with default options (UTF-8 text, one round).
    pub fn new(variant: Variant, input_format: InputFormat) -> Self {
        Self::with_options(variant, input_format, SessionOptions::default())
    }

    /// Session with explicit options.
    pub fn with_options(
        variant: Variant,
        input_format: InputFormat,
        options: SessionOptions,
    ) -> Self {
        log::debug!(
            "{variant} session created (input {input_format}, text {}, {} round(s))",
            options.text_encoding,
            options.num_rounds
        );

        Self {
            variant,
            input_format,
            options,
            phase: Phase::Configured,
            state: ChainingState::new(variant),
            remainder: PackedWordBuffer::new(),
            processed_bits: 0,
            pads: None,
            digest: Zeroizing::new(Vec::new()),
        }
    }

    /// Session from string names, e.g. `("SHA-512", "HEX")`.
    pub fn from_names(
        variant: &str,
        input_format: &str,
        options: SessionOptions,
    ) -> Result<Self, ShaError> {
        let variant = variant.parse::<Variant>()?;
        let input_format = input_format.parse::<InputFormat>()?;

        Ok(Self::with_options(variant, input_format, options))
    }

    /// Selected variant.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Encoding of `update` input.
    pub fn input_format(&self) -> InputFormat {
        self.input_format
    }

    /// Configured hashing rounds.
    pub fn num_rounds(&self) -> NumRounds {
        self.options.num_rounds
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an HMAC key has been set.
    pub fn is_keyed(&self) -> bool {
        self.pads.is_some()
    }

    /// Set the HMAC key, decoded from `key` in `key_format`.
    ///
    /// Only legal once, before any `update` and before finalization.
    pub fn set_hmac_key(
        &mut self,
        key: &str,
        key_format: InputFormat,
        options: KeyOptions,
    ) -> Result<(), ShaError> {
        self.ensure_key_settable()?;
        let key = decode_bytes(key, key_format, options.text_encoding)?;
        self.install_key(&key);
        Ok(())
    }

    /// Set the HMAC key from raw bytes.
    pub fn set_hmac_key_bytes(&mut self, key: &[u8]) -> Result<(), ShaError> {
        self.ensure_key_settable()?;
        self.install_key(key);
        Ok(())
    }

    /// Decode `data` with the session's input format and absorb it.
    ///
    /// A decoding error leaves the session exactly as it was.
    pub fn update(&mut self, data: &str) -> Result<(), ShaError> {
        self.ensure_not_finalized()?;
        let bytes = decode_bytes(data, self.input_format, self.options.text_encoding)?;
        self.absorb(&bytes);
        Ok(())
    }

    /// Absorb raw bytes, bypassing the input format.
    pub fn update_bytes(&mut self, data: &[u8]) -> Result<(), ShaError> {
        self.ensure_not_finalized()?;
        self.absorb(data);
        Ok(())
    }

    /// Finalize (first call only) and format the hash.
    ///
    /// Fails with [`StateError::HashOnKeyedSession`] once a key is set.
    pub fn get_hash(
        &mut self,
        format: OutputFormat,
        options: &OutputOptions,
    ) -> Result<String, ShaError> {
        let digest = self.hash_digest()?;
        Ok(encode_bytes(digest, format, options))
    }

    /// Finalize (first call only) and return the raw hash.
    pub fn hash_bytes(&mut self) -> Result<Vec<u8>, ShaError> {
        self.hash_digest().map(<[u8]>::to_vec)
    }

    /// Finalize (first call only) and format the HMAC.
    ///
    /// Fails with [`StateError::HmacWithoutKey`] unless a key is set.
    pub fn get_hmac(
        &mut self,
        format: OutputFormat,
        options: &OutputOptions,
    ) -> Result<String, ShaError> {
        let digest = self.hmac_digest()?;
        Ok(encode_bytes(digest, format, options))
    }

    /// Finalize (first call only) and return the raw HMAC.
    pub fn hmac_bytes(&mut self) -> Result<Vec<u8>, ShaError> {
        self.hmac_digest().map(<[u8]>::to_vec)
    }

    fn ensure_key_settable(&self) -> Result<(), StateError> {
        if self.pads.is_some() {
            return Err(StateError::KeyAlreadySet);
        }

        match self.phase {
            Phase::Configured => Ok(()),
            Phase::Updating => Err(StateError::KeyAfterUpdate),
            Phase::Finalized => Err(StateError::KeyAfterFinalize),
        }
    }

    fn ensure_not_finalized(&self) -> Result<(), StateError> {
        if self.phase == Phase::Finalized {
            return Err(StateError::UpdateAfterFinalize);
        }
        Ok(())
    }

    fn install_key(&mut self, key: &[u8]) {
        let (pads, path) = HmacPads::derive(self.variant, key);

        self.state = pads.inner_state();
        self.processed_bits = self.variant.block_bits() as u64;
        self.pads = Some(pads);

        log::debug!("{} HMAC key installed ({path})", self.variant);
    }

    fn absorb(&mut self, bytes: &[u8]) {
        let block_words = self.variant.block_words();
        let block_bits = self.variant.block_bits() as u64;

        self.remainder.append_bytes(bytes);

        let state = &mut self.state;
        let blocks = self
            .remainder
            .drain_blocks(block_words, |block| state.compress_block(block));
        self.processed_bits += blocks as u64 * block_bits;
        self.phase = Phase::Updating;

        log::trace!(
            "{} update: {} byte(s), {blocks} block(s) compressed, {} bit(s) buffered",
            self.variant,
            bytes.len(),
            self.remainder.bit_len()
        );
    }

    fn hash_digest(&mut self) -> Result<&[u8], ShaError> {
        if self.pads.is_some() {
            return Err(StateError::HashOnKeyedSession.into());
        }
        Ok(self.finalized_digest())
    }

    fn hmac_digest(&mut self) -> Result<&[u8], ShaError> {
        if self.pads.is_none() {
            return Err(StateError::HmacWithoutKey.into());
        }
        Ok(self.finalized_digest())
    }

    /// Pad and compress the buffered tail once; afterwards return the cache.
    fn finalized_digest(&mut self) -> &[u8] {
        if self.phase != Phase::Finalized {
            let mut state = self.state.clone();
            finalize(
                &mut state,
                self.remainder.words(),
                self.remainder.bit_len(),
                self.processed_bits,
            );

            let state = match &self.pads {
                Some(pads) => pads.outer_state(&state),
                None => iterate(state, self.options.num_rounds.extra()),
            };

            log::debug!(
                "{} {} finalized ({} bit(s) total)",
                self.variant,
                if self.pads.is_some() { "HMAC" } else { "hash" },
                self.processed_bits + self.remainder.bit_len()
            );

            self.digest = Zeroizing::new(state.digest_bytes());
            self.remainder.clear();
            self.phase = Phase::Finalized;
        }

        &self.digest
    }
}
