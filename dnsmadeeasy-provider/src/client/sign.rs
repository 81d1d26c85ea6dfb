//! DNS Made Easy HMAC-SHA1 request signing

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use super::DnsMadeEasyClient;

type HmacSha1 = Hmac<Sha1>;

/// HTTP-date layout expected in `x-dnsme-requestDate`.
const REQUEST_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Values attached to one outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSignature {
    /// Signing time as an HTTP date, e.g. `Tue, 14 Nov 2023 22:13:20 GMT`.
    pub timestamp: String,
    /// Lowercase hex HMAC-SHA1 of `timestamp`, keyed by the secret key.
    pub hmac: String,
}

/// Sign a request issued at `signing_time`.
///
/// The server compares the timestamp against its own clock and rejects
/// requests outside a narrow window, so callers pass the local time already
/// corrected by the configured offset.
pub fn sign(secret_key: &str, signing_time: DateTime<Utc>) -> RequestSignature {
    let timestamp = signing_time.format(REQUEST_DATE_FORMAT).to_string();
    let hmac = hex::encode(hmac_sha1(secret_key.as_bytes(), timestamp.as_bytes()));
    RequestSignature { timestamp, hmac }
}

/// Raw HMAC-SHA1 of `data` under `key`
fn hmac_sha1(key: &[u8], data: &[u8]) -> Vec<u8> {
    // HMAC accepts keys of any length; the error branch is unreachable.
    let Ok(mut mac) = HmacSha1::new_from_slice(key) else {
        return Vec::new();
    };
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

impl DnsMadeEasyClient {
    /// Sign a request issued now, shifted by the configured clock offset.
    pub(crate) fn sign_now(&self) -> RequestSignature {
        let signing_time = self.config.signing_time(Utc::now());
        sign(self.config.credentials().secret_key(), signing_time)
    }
}
