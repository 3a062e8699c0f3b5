use ricardian_parse::{parse, parse_fulfilled, ParseError};
use ricardian_types::{BlockCountry, ContractType};

const LEGAL_TEXT: &str = "<p>I agree to the <em>terms</em>.</p>";

fn doc(contract_type: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Proof of acceptance</title></head>
<body>
<div id="page"
  data-contracttype="{contract_type}"
  data-version="0.0.4"
  data-signedon="2021-11-05"
  data-created="2021-11-01"
  data-expires="2022-11-01"
  data-redirectto="https://example.com/done"
  data-parenturl="https://example.com/parent"
  data-network="1"
  data-issuer="0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
  data-issuersignature="0xaa11"
  data-participant="0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359"
  data-participantsignature="0xbb22"
  data-smartcontract="0x1111111111111111111111111111111111111111"
  data-erc20="null"
  data-blockedaddresses='["0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"]'
  data-blockedcountries='["OFEC","BLOCKUSA"]'>
<div id="contract-display">{LEGAL_TEXT}</div>
</div>
</body>
</html>"#
    )
}

fn fulfilled_doc() -> String {
    doc("fulfilled")
}

#[test]
fn parses_fulfilled_document() {
    let contract = parse_fulfilled(&fulfilled_doc()).unwrap();
    assert_eq!(contract.contract_type, ContractType::Fulfilled);
    assert_eq!(contract.version, "0.0.4");
    assert_eq!(contract.signed_on, "2021-11-05");
    assert_eq!(contract.created, "2021-11-01");
    assert_eq!(contract.expires, "2022-11-01");
    assert_eq!(contract.redirect_to, "https://example.com/done");
    assert_eq!(contract.parent_url, "https://example.com/parent");
    assert_eq!(contract.network, "1");
    assert_eq!(contract.issuer, "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    assert_eq!(
        contract.smart_contract.as_deref(),
        Some("0x1111111111111111111111111111111111111111")
    );
    assert_eq!(contract.erc20, None);
    assert_eq!(contract.legal_contract, LEGAL_TEXT);
    assert_eq!(
        contract.blocked_addresses,
        vec!["0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_string()]
    );
    assert_eq!(
        contract.blocked_countries,
        vec![BlockCountry::Ofec, BlockCountry::BlockUsa]
    );
}

#[test]
fn parsing_is_deterministic() {
    let html = fulfilled_doc();
    assert_eq!(parse(&html).unwrap(), parse(&html).unwrap());
}

#[test]
fn missing_page_element_is_invalid_document() {
    let html = fulfilled_doc().replace(r#"id="page""#, r#"id="other""#);
    let err = parse_fulfilled(&html).unwrap_err();
    assert!(matches!(err, ParseError::InvalidDocument));
    assert_eq!(err.to_string(), "Invalid document");
}

#[test]
fn missing_display_element_is_fatal() {
    let html = fulfilled_doc().replace(r#"id="contract-display""#, r#"id="other-display""#);
    assert!(matches!(
        parse_fulfilled(&html).unwrap_err(),
        ParseError::MissingDisplay
    ));
}

#[test]
fn missing_required_attribute_fails_closed() {
    let html = fulfilled_doc().replace(r#"data-network="1""#, "");
    assert!(matches!(
        parse_fulfilled(&html).unwrap_err(),
        ParseError::MissingAttribute("data-network")
    ));
}

#[test]
fn null_sentinel_maps_to_absent_not_empty() {
    let contract = parse_fulfilled(&fulfilled_doc()).unwrap();
    assert_eq!(contract.erc20, None);

    let html = fulfilled_doc().replace(
        r#"data-smartcontract="0x1111111111111111111111111111111111111111""#,
        r#"data-smartcontract="null""#,
    );
    let contract = parse_fulfilled(&html).unwrap();
    assert_eq!(contract.smart_contract, None);
}

#[test]
fn malformed_blocked_addresses_rejected() {
    let html = fulfilled_doc().replace(
        r#"data-blockedaddresses='["0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB"]'"#,
        r#"data-blockedaddresses='not json'"#,
    );
    assert!(matches!(
        parse_fulfilled(&html).unwrap_err(),
        ParseError::MalformedAttribute("data-blockedaddresses", _)
    ));
}

#[test]
fn unknown_blocked_country_rejected() {
    let html = fulfilled_doc().replace(
        r#"data-blockedcountries='["OFEC","BLOCKUSA"]'"#,
        r#"data-blockedcountries='["OFEC","MOON"]'"#,
    );
    assert!(matches!(
        parse_fulfilled(&html).unwrap_err(),
        ParseError::MalformedAttribute("data-blockedcountries", _)
    ));
}

#[test]
fn acceptable_contract_parses_in_plain_mode() {
    let contract = parse(&doc("acceptable")).unwrap();
    assert_eq!(contract.contract_type, ContractType::Acceptable);
    assert!(!contract.is_fulfilled());
}

#[test]
fn acceptable_contract_rejected_in_fulfilled_mode() {
    let err = parse_fulfilled(&doc("acceptable")).unwrap_err();
    assert!(matches!(err, ParseError::InvalidContractType));
    assert_eq!(err.to_string(), "Invalid contract type");
}

#[test]
fn unknown_contract_type_rejected() {
    assert!(matches!(
        parse(&doc("banana")).unwrap_err(),
        ParseError::UnknownContractType(token) if token == "banana"
    ));
}

#[test]
fn script_elements_rejected_anywhere() {
    let err = parse_fulfilled(
        &fulfilled_doc().replace("</body>", "<script>alert(1)</script></body>"),
    )
    .unwrap_err();
    assert!(matches!(err, ParseError::ScriptsDetected));
    assert_eq!(err.to_string(), "Unknown scripts detected");

    let in_head = fulfilled_doc().replace("</head>", r#"<script src="x.js"></script></head>"#);
    assert!(matches!(
        parse_fulfilled(&in_head).unwrap_err(),
        ParseError::ScriptsDetected
    ));

    let in_display = fulfilled_doc().replace(
        LEGAL_TEXT,
        "<p>terms</p><script>steal()</script>",
    );
    assert!(matches!(
        parse_fulfilled(&in_display).unwrap_err(),
        ParseError::ScriptsDetected
    ));
}

#[test]
fn script_scan_applies_to_every_contract_type() {
    // The scan is not tied to the fulfilled gate: an acceptable contract
    // with a script still fails with the script error in both modes.
    let html = doc("acceptable").replace("</body>", "<script></script></body>");
    assert!(matches!(
        parse(&html).unwrap_err(),
        ParseError::ScriptsDetected
    ));
    assert!(matches!(
        parse_fulfilled(&html).unwrap_err(),
        ParseError::ScriptsDetected
    ));
}
