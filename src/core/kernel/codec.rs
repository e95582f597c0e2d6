use crate::core::errors::RestError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// An encoded request body plus the MIME type that describes it.
#[derive(Debug, Clone)]
pub struct EncodedBody {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

/// Codec trait for translating typed values to request body bytes and
/// response body bytes back to typed values.
///
/// A client routes every encode and every decode through a single codec
/// value, so swapping the codec changes the wire format for all operations
/// of that client at once. Implementations must be pure: no I/O, no
/// internal state that varies between calls.
pub trait BodyCodec: Send + Sync {
    /// MIME string attached as `Content-Type` when a request carries a body.
    fn content_type(&self) -> &'static str;

    /// Encode a value into body bytes.
    ///
    /// # Errors
    /// Returns [`RestError::Encode`] when the value cannot be represented in
    /// this codec's format.
    fn encode<T: Serialize>(&self, value: &T) -> Result<EncodedBody, RestError>;

    /// Decode body bytes into a typed value.
    ///
    /// # Errors
    /// Returns [`RestError::Decode`] when the bytes do not parse as `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, RestError>;
}

/// JSON codec over `serde_json`; the default for every client.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl BodyCodec for JsonCodec {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode<T: Serialize>(&self, value: &T) -> Result<EncodedBody, RestError> {
        let bytes = serde_json::to_vec(value)
            .map_err(|e| RestError::Encode(format!("Failed to serialize request body: {}", e)))?;
        Ok(EncodedBody {
            bytes,
            content_type: self.content_type(),
        })
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, RestError> {
        serde_json::from_slice(bytes)
            .map_err(|e| RestError::Decode(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        id: u32,
        text: String,
    }

    #[test]
    fn encode_tags_bodies_as_json() {
        let note = Note {
            id: 3,
            text: "hello".to_string(),
        };
        let encoded = JsonCodec.encode(&note).unwrap();
        assert_eq!(encoded.content_type, "application/json");
        assert_eq!(encoded.bytes, br#"{"id":3,"text":"hello"}"#);
    }

    #[test]
    fn decode_failure_reports_decode_error() {
        let err = JsonCodec.decode::<Note>(b"{not json").unwrap_err();
        assert!(matches!(err, RestError::Decode(_)));
    }

    #[test]
    fn encode_failure_reports_encode_error() {
        // serde_json rejects maps whose keys are not strings.
        let unencodable: HashMap<(u8, u8), &str> = HashMap::from([((1, 2), "pair")]);
        let err = JsonCodec.encode(&unencodable).unwrap_err();
        assert!(matches!(err, RestError::Encode(_)));
    }
}
