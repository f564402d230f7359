//! Decode rules of the generated serialization adapters.

use enumgen_core::Value;

use super::{LookupError, Resolver};

/// Failure of a generated `Unmarshal*`/`Scan` method.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AdapterError {
    #[error("{type_name} should be a string, got {got}")]
    NotAString { type_name: String, got: String },

    #[error("Invalid value for {type_name} ({value})")]
    InvalidValue { type_name: String, value: Value },

    #[error("unsupported scan source type {source_type} for {type_name}")]
    UnsupportedScanSource {
        type_name: String,
        source_type: String,
    },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Dynamic value handed to `Scan` by a database driver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScanSource<'s> {
    Null,
    Text(&'s str),
    Bytes(&'s [u8]),
    /// Any other driver type, named by its Go type.
    Other(&'s str),
}

impl Resolver<'_> {
    /// `MarshalJSON`.
    pub fn encode_json(&self, value: Value) -> serde_json::Value {
        serde_json::Value::String(self.render(value))
    }

    /// `UnmarshalJSON`: a string goes through parse, a bare integer must be a member.
    ///
    /// `null` leaves the Go string empty, so it fails as a lookup of `""`.
    pub fn decode_json(&self, data: &serde_json::Value) -> Result<Value, AdapterError> {
        match data {
            serde_json::Value::Null => Ok(self.parse("")?),
            serde_json::Value::String(s) => Ok(self.parse(s)?),
            serde_json::Value::Number(n) => {
                let decoded = if self.kind().is_signed() {
                    n.as_i64().map(Value::from)
                } else {
                    n.as_u64().map(Value::from)
                };
                let Some(value) = decoded else {
                    return Err(self.not_a_string(data));
                };
                if !self.kind().contains(value) || !self.contains(value) {
                    return Err(AdapterError::InvalidValue {
                        type_name: self.type_name().to_string(),
                        value,
                    });
                }
                Ok(value)
            }
            _ => Err(self.not_a_string(data)),
        }
    }

    /// `UnmarshalText`: pure delegation to parse.
    pub fn decode_text(&self, text: &[u8]) -> Result<Value, AdapterError> {
        Ok(self.parse(self.utf8(text)?)?)
    }

    /// `UnmarshalYAML`: only a string scalar is accepted.
    pub fn decode_yaml(&self, scalar: Option<&str>) -> Result<Value, AdapterError> {
        match scalar {
            Some(s) => Ok(self.parse(s)?),
            None => Err(AdapterError::NotAString {
                type_name: self.type_name().to_string(),
                got: "non-string node".to_string(),
            }),
        }
    }

    /// `Scan`: `Ok(None)` leaves the destination untouched.
    pub fn scan(&self, source: ScanSource<'_>) -> Result<Option<Value>, AdapterError> {
        let text = match source {
            ScanSource::Null => return Ok(None),
            ScanSource::Text(s) => s,
            ScanSource::Bytes(b) => self.utf8(b)?,
            ScanSource::Other(go_type) => {
                return Err(AdapterError::UnsupportedScanSource {
                    type_name: self.type_name().to_string(),
                    source_type: go_type.to_string(),
                });
            }
        };
        Ok(Some(self.parse(text)?))
    }

    /// Names are valid UTF-8, so bytes that are not can never match one.
    fn utf8<'b>(&self, bytes: &'b [u8]) -> Result<&'b str, LookupError> {
        std::str::from_utf8(bytes).map_err(|_| LookupError::NotRecognized {
            text: String::from_utf8_lossy(bytes).into_owned(),
            type_name: self.type_name().to_string(),
        })
    }

    fn not_a_string(&self, data: &serde_json::Value) -> AdapterError {
        AdapterError::NotAString {
            type_name: self.type_name().to_string(),
            got: data.to_string(),
        }
    }
}

