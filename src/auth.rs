use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use rand::RngCore;
use sha2::{Digest, Sha256};

use crate::config::AuthConfig;

// RFC 7636 bounds for the code verifier length.
const VERIFIER_MIN: usize = 43;
const VERIFIER_MAX: usize = 128;

/// Everything the webapp needs to start the OAuth2 code flow: the
/// authorization URL to redirect to, plus the verifier and state it must
/// hold on to for the exchange callback.
#[derive(Debug, Clone)]
pub struct LoginChallenge {
    pub url: String,
    pub verifier: String,
    pub state: String,
}

pub fn code_verifier(length: usize) -> String {
    let length = length.clamp(VERIFIER_MIN, VERIFIER_MAX);
    // 3 random bytes yield 4 base64url chars; over-generate and truncate.
    let mut bytes = vec![0u8; (length * 3).div_ceil(4)];
    rand::thread_rng().fill_bytes(&mut bytes);
    let mut encoded = URL_SAFE_NO_PAD.encode(&bytes);
    encoded.truncate(length);
    encoded
}

/// S256 challenge: base64url(sha256(verifier)), no padding.
pub fn code_challenge(verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

pub fn login_challenge(config: &AuthConfig) -> LoginChallenge {
    let verifier = code_verifier(VERIFIER_MAX);
    let challenge = code_challenge(&verifier);
    let state = random_state();

    let url = format!(
        "{}?response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method=S256",
        config.authorize_endpoint,
        urlencoding::encode(&config.client_id),
        urlencoding::encode(&config.redirect_uri),
        urlencoding::encode(&config.scope),
        urlencoding::encode(&state),
        challenge,
    );

    LoginChallenge {
        url,
        verifier,
        state,
    }
}

fn random_state() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
