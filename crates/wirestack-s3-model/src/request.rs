//! Raw payload type shared by object uploads and downloads.

use bytes::Bytes;

/// Object payload bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreamingBlob {
    /// The underlying bytes.
    pub data: Bytes,
}

impl StreamingBlob {
    /// Create a blob from anything convertible to `Bytes`.
    #[must_use]
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self { data: data.into() }
    }

    /// Returns true if the blob is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the length of the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl From<Bytes> for StreamingBlob {
    fn from(data: Bytes) -> Self {
        Self { data }
    }
}

impl From<Vec<u8>> for StreamingBlob {
    fn from(data: Vec<u8>) -> Self {
        Self { data: data.into() }
    }
}

impl From<&'static str> for StreamingBlob {
    fn from(data: &'static str) -> Self {
        Self {
            data: Bytes::from_static(data.as_bytes()),
        }
    }
}
