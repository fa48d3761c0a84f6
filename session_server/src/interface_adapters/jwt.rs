use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde_json::{Map, Value};

use crate::domain::errors::TokenDecodeError;
use crate::domain::ports::TokenDecoder;

// Reads the payload segment of a JWT without verifying its signature.
// Verification belongs to the identity client that issued the token.
#[derive(Clone, Copy, Debug, Default)]
pub struct JwtPayloadDecoder;

impl TokenDecoder for JwtPayloadDecoder {
    fn claims(&self, token: &str) -> Result<Map<String, Value>, TokenDecodeError> {
        let mut segments = token.split('.');
        let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
            (Some(_), Some(payload), Some(_), None) => payload,
            _ => return Err(TokenDecodeError::Malformed),
        };

        // Some issuers keep base64 padding; the no-pad engine rejects it.
        let bytes = URL_SAFE_NO_PAD.decode(payload.trim_end_matches('='))?;
        let claims = serde_json::from_slice::<Map<String, Value>>(&bytes)?;
        Ok(claims)
    }
}
