//! Strict extraction of a [`Contract`] record from contract document
//! markup.
//!
//! Contract documents carry their semantic fields as `data-*` attributes on
//! the element with id `page`, and the human-readable legal text as the
//! children of the element with id `contract-display`. Parsing is
//! fail-closed: a missing element or attribute is an error, never a
//! silently defaulted field. Documents containing `script` elements are
//! rejected unconditionally since the signed legal text must be static,
//! non-executable content.

#![deny(missing_docs)]
#![deny(unsafe_code)]

use ricardian_types::{BlockCountry, Contract, ContractType};
use scraper::{Html, Selector};
use thiserror::Error;

/// [`parse`] and [`parse_fulfilled`] error.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document has no element with id `page`.
    #[error("Invalid document")]
    InvalidDocument,
    /// The document has no `contract-display` element to read the legal
    /// text from.
    #[error("missing contract display element")]
    MissingDisplay,
    /// A required `data-*` attribute is absent from the page element.
    #[error("missing required attribute: {0}")]
    MissingAttribute(&'static str),
    /// A JSON-encoded attribute failed to deserialize.
    #[error("malformed attribute {0}: {1}")]
    MalformedAttribute(&'static str, serde_json::Error),
    /// The contract type token is outside the wire enumeration.
    #[error("unknown contract type: {0}")]
    UnknownContractType(String),
    /// A fulfilled contract was required but the document is not one.
    #[error("Invalid contract type")]
    InvalidContractType,
    /// The document contains executable content.
    #[error("Unknown scripts detected")]
    ScriptsDetected,
}

/// Parse a contract document of any contract type.
pub fn parse(html: &str) -> Result<Contract, ParseError> {
    parse_contract(html, false)
}

/// Parse a contract document, requiring a fulfilled contract.
///
/// Used when verifying proofs of acceptance, which must carry both
/// parties' signatures.
pub fn parse_fulfilled(html: &str) -> Result<Contract, ParseError> {
    parse_contract(html, true)
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector should always parse")
}

fn parse_contract(html: &str, require_fulfilled: bool) -> Result<Contract, ParseError> {
    let document = Html::parse_document(html);
    let page = document
        .select(&selector("#page"))
        .next()
        .ok_or(ParseError::InvalidDocument)?;

    // Executable content invalidates the document before anything else is
    // read off it, independently of the contract-type gate below.
    if document.select(&selector("script")).next().is_some() {
        return Err(ParseError::ScriptsDetected);
    }

    let display = document
        .select(&selector("#contract-display"))
        .next()
        .ok_or(ParseError::MissingDisplay)?;
    let legal_contract = display.inner_html();

    let attr = |name: &'static str| {
        page.value()
            .attr(name)
            .ok_or(ParseError::MissingAttribute(name))
    };

    let contract_type_token = attr("data-contracttype")?;
    let contract_type = ContractType::from_wire(contract_type_token)
        .ok_or_else(|| ParseError::UnknownContractType(contract_type_token.to_string()))?;

    let blocked_addresses: Vec<String> = serde_json::from_str(attr("data-blockedaddresses")?)
        .map_err(|err| ParseError::MalformedAttribute("data-blockedaddresses", err))?;
    let blocked_countries: Vec<BlockCountry> = serde_json::from_str(attr("data-blockedcountries")?)
        .map_err(|err| ParseError::MalformedAttribute("data-blockedcountries", err))?;

    let contract = Contract {
        contract_type,
        version: attr("data-version")?.to_string(),
        signed_on: attr("data-signedon")?.to_string(),
        created: attr("data-created")?.to_string(),
        expires: attr("data-expires")?.to_string(),
        redirect_to: attr("data-redirectto")?.to_string(),
        parent_url: attr("data-parenturl")?.to_string(),
        network: attr("data-network")?.to_string(),
        issuer: attr("data-issuer")?.to_string(),
        issuer_signature: attr("data-issuersignature")?.to_string(),
        participant: attr("data-participant")?.to_string(),
        participant_signature: attr("data-participantsignature")?.to_string(),
        smart_contract: optional(attr("data-smartcontract")?),
        erc20: optional(attr("data-erc20")?),
        legal_contract,
        blocked_addresses,
        blocked_countries,
    };

    if require_fulfilled && contract.contract_type != ContractType::Fulfilled {
        return Err(ParseError::InvalidContractType);
    }
    Ok(contract)
}

/// The wire encodes an intentionally-absent optional as the string `null`.
fn optional(raw: &str) -> Option<String> {
    (raw != "null").then(|| raw.to_string())
}
