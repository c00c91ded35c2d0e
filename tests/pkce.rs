use tweetcast::auth::{code_challenge, code_verifier, login_challenge};
use tweetcast::config::AuthConfig;

#[test]
fn s256_challenge_matches_rfc_7636_vector() {
    // RFC 7636 appendix B.
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn verifier_has_the_requested_length_and_charset() {
    let verifier = code_verifier(128);
    assert_eq!(verifier.chars().count(), 128);
    assert!(verifier
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'));
}

#[test]
fn verifier_length_is_clamped_to_rfc_bounds() {
    assert_eq!(code_verifier(10).chars().count(), 43);
    assert_eq!(code_verifier(4096).chars().count(), 128);
}

#[test]
fn verifiers_are_not_reused() {
    assert_ne!(code_verifier(64), code_verifier(64));
}

#[test]
fn login_url_carries_the_challenge_for_its_verifier() {
    let config = AuthConfig::default();
    let challenge = login_challenge(&config);

    assert!(challenge.url.starts_with(&config.authorize_endpoint));
    assert!(challenge.url.contains("response_type=code"));
    assert!(challenge.url.contains("code_challenge_method=S256"));
    assert!(challenge
        .url
        .contains(&format!("code_challenge={}", code_challenge(&challenge.verifier))));
    assert!(challenge
        .url
        .contains(&format!("state={}", urlencoding::encode(&challenge.state))));
}
