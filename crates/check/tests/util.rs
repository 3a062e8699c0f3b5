use rand::SeedableRng;
use ricardian_check::{
    hash, sign,
    types::{BlockCountry, Contract, ContractType},
};
use secp256k1::{Message, PublicKey, Secp256k1, SecretKey};

pub const SMART_CONTRACT: &str = "0x1111111111111111111111111111111111111111";
pub const PARENT_URL: &str = "https://example.com/parent";

pub fn random_keypair(seed: [u8; 32]) -> (SecretKey, PublicKey) {
    let mut rng = rand::rngs::SmallRng::from_seed(seed);
    let secp = Secp256k1::new();
    secp.generate_keypair(&mut rng)
}

/// Format a recoverable signature over `digest` the way documents record
/// them: `0x` + r + s + v, with v in the 27/28 convention.
pub fn sign_digest(digest: [u8; 32], sk: &SecretKey) -> String {
    let secp = Secp256k1::new();
    let (rec_id, sig) = secp
        .sign_ecdsa_recoverable(&Message::from_digest(digest), sk)
        .serialize_compact();
    let v = 27 + u8::try_from(rec_id.to_i32()).unwrap();
    let mut out = String::with_capacity(132);
    out.push_str("0x");
    for byte in sig {
        out.push_str(&format!("{byte:02x}"));
    }
    out.push_str(&format!("{v:02x}"));
    out
}

pub fn unsigned_contract(issuer: String, participant: String) -> Contract {
    Contract {
        contract_type: ContractType::Fulfilled,
        version: "0.0.4".to_string(),
        signed_on: "2021-11-05".to_string(),
        created: "2021-11-01".to_string(),
        expires: "2022-11-01".to_string(),
        redirect_to: "https://example.com/done".to_string(),
        parent_url: PARENT_URL.to_string(),
        network: "1".to_string(),
        issuer,
        issuer_signature: String::new(),
        participant,
        participant_signature: String::new(),
        smart_contract: Some(SMART_CONTRACT.to_string()),
        erc20: None,
        legal_contract: "<p>I agree to the <em>terms</em>.</p>".to_string(),
        blocked_addresses: vec!["0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB".to_string()],
        blocked_countries: vec![BlockCountry::Ofec, BlockCountry::BlockUsa],
    }
}

/// A fulfilled contract with both signatures valid over its canonical hash.
pub fn signed_contract() -> Contract {
    let (issuer_sk, issuer_pk) = random_keypair([0xaa; 32]);
    let (participant_sk, participant_pk) = random_keypair([0xbb; 32]);
    let mut contract = unsigned_contract(
        sign::public_key_address(&issuer_pk),
        sign::public_key_address(&participant_pk),
    );
    let digest = sign::typed_digest(
        &contract.network,
        SMART_CONTRACT,
        &hash::contract_hash(&contract),
    )
    .unwrap();
    contract.issuer_signature = sign_digest(digest, &issuer_sk);
    contract.participant_signature = sign_digest(digest, &participant_sk);
    contract
}
