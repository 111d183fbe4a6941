//! RFC 2397 `data:` URIs.

use crate::provider::ResourceError;
use base64::Engine as _;

const SCHEME: &str = "data:";

/// A parsed `data:` URI borrowing from its source string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri<'a> {
    /// Media type, e.g. `image/png`. Empty when omitted.
    pub mime_type: &'a str,
    pub base64: bool,
    pub payload: &'a str,
}

impl<'a> DataUri<'a> {
    pub fn is_data_uri(src: &str) -> bool {
        src.get(..SCHEME.len())
            .is_some_and(|scheme| scheme.eq_ignore_ascii_case(SCHEME))
    }

    pub fn parse(src: &'a str) -> Result<Self, ResourceError> {
        if !Self::is_data_uri(src) {
            return Err(ResourceError::InvalidFormat(format!("not a data URI: {}", preview(src))));
        }
        let body = &src[SCHEME.len()..];
        let (header, payload) = body
            .split_once(',')
            .ok_or_else(|| ResourceError::InvalidFormat("data URI has no ',' separator".to_string()))?;

        let mut params = header.split(';');
        let mime_type = params.next().unwrap_or_default().trim();
        let base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

        Ok(Self {
            mime_type,
            base64,
            payload,
        })
    }

    /// Decodes the payload to bytes.
    ///
    /// Base64 payloads may contain whitespace. Plain payloads are taken
    /// verbatim; percent-escapes are not expanded.
    pub fn decode(&self) -> Result<Vec<u8>, ResourceError> {
        if !self.base64 {
            return Ok(self.payload.as_bytes().to_vec());
        }
        let compact: String = self.payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact.as_bytes())
            .map_err(|e| ResourceError::InvalidFormat(format!("invalid base64 payload: {}", e)))
    }
}

fn preview(src: &str) -> String {
    src.chars().take(32).collect()
}
