//! Gateway request/response signing
//!
//! The gateway signs the ordinal-sorted, percent-encoded query string with
//! HMAC-SHA512 over the merchant's shared secret. Outbound redirect URLs
//! carry the digest as `vnp_SecureHash`; inbound callbacks are verified by
//! recomputing the digest over the same canonical form.

use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::core::error::{AppError, Result};
use crate::features::payments::models::ParamSet;
use crate::shared::constants::{VNP_SECURE_HASH, VNP_SECURE_HASH_TYPE};

type HmacSha512 = Hmac<Sha512>;

/// Signature codec for the payment gateway's canonicalization rule
pub struct SignatureService;

impl SignatureService {
    /// Build the signed redirect URL for an outbound payment request.
    ///
    /// The query string keeps its trailing `&` and the hash pair is
    /// concatenated directly after it, so the seam before `vnp_SecureHash`
    /// carries exactly one separator. The sign data is the same query
    /// without the trailing `&`. An empty parameter set signs the empty
    /// string and yields `{base_url}?vnp_SecureHash={digest}`.
    pub fn build_signed_url(
        base_url: &str,
        params: &ParamSet,
        secret_key: &str,
    ) -> Result<String> {
        let mut query = String::new();
        for (name, value) in params.iter() {
            query.push_str(&urlencoding::encode(name));
            query.push('=');
            query.push_str(&urlencoding::encode(value));
            query.push('&');
        }

        let sign_data = query.trim_end_matches('&');
        let signature = Self::hmac_sha512_hex(secret_key, sign_data)?;

        Ok(format!(
            "{}?{}{}={}",
            base_url, query, VNP_SECURE_HASH, signature
        ))
    }

    /// Verify the digest carried on an inbound payment callback.
    ///
    /// The gateway-reserved `vnp_SecureHash` and `vnp_SecureHashType` keys
    /// are excluded from the canonical form wherever they sit. A mismatch is
    /// `Ok(false)`, never an error; the digest comparison ignores case.
    pub fn validate_signature(
        params: &ParamSet,
        provided_hash: &str,
        secret_key: &str,
    ) -> Result<bool> {
        let sign_data = Self::canonical_sign_data(
            params
                .iter()
                .filter(|(name, _)| *name != VNP_SECURE_HASH && *name != VNP_SECURE_HASH_TYPE),
        );

        let computed = Self::hmac_sha512_hex(secret_key, &sign_data)?;
        Ok(computed.eq_ignore_ascii_case(provided_hash))
    }

    /// Lowercase hex HMAC-SHA512 over the UTF-8 bytes of key and message
    pub fn hmac_sha512_hex(secret_key: &str, data: &str) -> Result<String> {
        let mut mac = HmacSha512::new_from_slice(secret_key.as_bytes())
            .map_err(|e| AppError::Internal(format!("HMAC key error: {}", e)))?;
        mac.update(data.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }

    /// Percent-encoded `key=value` pairs joined with `&`, no trailing separator
    fn canonical_sign_data<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> String {
        let mut data = String::new();
        for (name, value) in pairs {
            if !data.is_empty() {
                data.push('&');
            }
            data.push_str(&urlencoding::encode(name));
            data.push('=');
            data.push_str(&urlencoding::encode(value));
        }
        data
    }
}
