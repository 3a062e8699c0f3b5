//! Items related to verifying parsed contracts.

use crate::{
    fetch::{self, StoreConfig},
    hash, parse,
    sign::{self, SignatureError},
    types::Contract,
};
use thiserror::Error;

/// [`verify_participant`] error.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The issuer's recorded signature does not recover to the claimed
    /// issuer.
    #[error("Invalid issuer signature")]
    InvalidIssuerSignature,
    /// The participant's recorded signature does not recover to the claimed
    /// participant.
    #[error("Invalid participant signature")]
    InvalidParticipantSignature,
    /// The typed message could not be built or a signature is malformed.
    #[error("{0}")]
    Signature(#[from] SignatureError),
}

/// [`verify_fulfilled`] error.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Fetching the document failed.
    #[error("{0}")]
    Fetch(#[from] fetch::FetchError),
    /// The document failed to parse as a fulfilled contract.
    #[error("{0}")]
    Parse(#[from] parse::ParseError),
    /// The document does not descend from the expected acceptable contract.
    #[error("parent contract mismatch")]
    ParentMismatch,
    /// Signature verification failed.
    #[error("{0}")]
    Verify(#[from] VerifyError),
}

/// Whether the contract descends from the expected acceptable contract.
///
/// Strict byte equality. No URL normalization is applied, so a trailing
/// slash or scheme difference does not match.
pub fn match_parent(parent: &str, contract: &Contract) -> bool {
    contract.parent_url == parent
}

/// Verify both recorded signatures and return the recovered participant
/// address.
///
/// Rebuilds the canonical content hash from the contract's semantic fields,
/// builds the typed message once, then recovers the issuer's signature
/// first, short-circuiting on mismatch before the participant's signature
/// is looked at. On success the recovered participant address is returned
/// in checksum form; callers should treat it, not the document's claimed
/// field, as authoritative.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(skip_all, fields(issuer = %contract.issuer), err)
)]
pub fn verify_participant(contract: &Contract) -> Result<String, VerifyError> {
    let value = hash::contract_hash(contract);
    let verifying_contract = contract
        .smart_contract
        .as_deref()
        .ok_or(SignatureError::MissingVerifyingContract)?;
    let issuer = sign::recover_typed(
        &contract.network,
        verifying_contract,
        &value,
        &contract.issuer_signature,
    )?;
    if !sign::compare_addresses(&issuer, &contract.issuer) {
        return Err(VerifyError::InvalidIssuerSignature);
    }
    let participant = sign::recover_typed(
        &contract.network,
        verifying_contract,
        &value,
        &contract.participant_signature,
    )?;
    if !sign::compare_addresses(&participant, &contract.participant) {
        return Err(VerifyError::InvalidParticipantSignature);
    }
    Ok(participant)
}

/// Fetch, parse and verify a fulfilled contract document end to end.
///
/// Steps run strictly in order: identifier validation and fetch, fulfilled
/// parse, parent lineage check, dual signature verification. Each step runs
/// at most once; nothing is retried.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(config), err))]
pub async fn verify_fulfilled(
    cid: &str,
    expected_parent: &str,
    config: &StoreConfig,
) -> Result<String, CheckError> {
    let html = fetch::cat(cid, config).await?;
    let contract = parse::parse_fulfilled(&html)?;
    if !match_parent(expected_parent, &contract) {
        return Err(CheckError::ParentMismatch);
    }
    Ok(verify_participant(&contract)?)
}
