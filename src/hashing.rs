use bytes::Bytes;
use futures_core::Stream;
use sha1_smol::Sha1;
use tokio::io::{AsyncRead, AsyncReadExt};

use async_stream::try_stream;

/// Sentinel B2 accepts in place of a precomputed `Content-Sha1` header when
/// the digest isn't known until the body has been fully streamed.
pub(crate) const HEX_DIGITS_AT_END: &str = "hex_digits_at_end";

/// Wraps an [`AsyncRead`] source into a chunked byte stream suitable for
/// `reqwest::Body::wrap_stream`, optionally hashing as it goes and appending
/// the 40 hex SHA1 digits to the end of the stream once the source is
/// exhausted (single-part uploads only; a precomputed digest is always
/// available for parts, since [`PartBuffer`] buffers a part fully before
/// it's ever sent).
pub(crate) fn hashing_stream<R>(
    mut reader: R,
    chunk_size: usize,
    deferred_hash: bool,
) -> impl Stream<Item = Result<Bytes, std::io::Error>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    try_stream! {
        let mut hasher = Sha1::new();
        let mut buf = vec![0u8; chunk_size];

        loop {
            let read = reader.read(&mut buf).await?;

            if read == 0 {
                break;
            }

            if deferred_hash {
                hasher.update(&buf[..read]);
            }

            yield Bytes::copy_from_slice(&buf[..read]);
        }

        if deferred_hash {
            yield Bytes::from(hasher.digest().to_string().into_bytes());
        }
    }
}

/// An in-memory accumulator for one large-file part. Hashes incrementally as
/// bytes are pushed in, rather than buffering the whole part up front and
/// hashing it in one shot — so a part that arrives as many small writes
/// never pays for a second full pass over its bytes.
#[derive(Debug)]
pub(crate) struct PartBuffer {
    capacity: usize,
    data: Vec<u8>,
    hasher: Sha1,
}

impl PartBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            data: Vec::with_capacity(capacity),
            hasher: Sha1::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_full(&self) -> bool {
        self.data.len() >= self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.data.len()
    }

    /// Appends as much of `chunk` as fits under `capacity`, returning the
    /// slice that didn't fit so the caller can start the next part with it.
    pub fn push<'a>(&mut self, chunk: &'a [u8]) -> &'a [u8] {
        let take = chunk.len().min(self.remaining());

        self.hasher.update(&chunk[..take]);
        self.data.extend_from_slice(&chunk[..take]);

        &chunk[take..]
    }

    /// Consumes the buffer, returning its bytes and their hex SHA1 digest.
    pub fn seal(self) -> (Bytes, String) {
        (Bytes::from(self.data), self.hasher.digest().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn hashing_stream_appends_digest_trailer_when_deferred() {
        let source = std::io::Cursor::new(b"hello world".to_vec());
        let stream = hashing_stream(source, 4, true);
        tokio::pin!(stream);

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }

        let expected_digest = Sha1::from(b"hello world").digest().to_string();
        assert!(collected.ends_with(expected_digest.as_bytes()));
        assert_eq!(
            &collected[..collected.len() - expected_digest.len()],
            b"hello world"
        );
    }

    #[tokio::test]
    async fn hashing_stream_without_deferred_hash_has_no_trailer() {
        let source = std::io::Cursor::new(b"abc".to_vec());
        let stream = hashing_stream(source, 4, false);
        tokio::pin!(stream);

        let mut collected = Vec::new();
        while let Some(chunk) = stream.next().await {
            collected.extend_from_slice(&chunk.unwrap());
        }

        assert_eq!(collected, b"abc");
    }

    #[test]
    fn part_buffer_splits_overflow_to_caller() {
        let mut buffer = PartBuffer::with_capacity(4);
        let overflow = buffer.push(b"hello");

        assert_eq!(overflow, b"o");
        assert!(buffer.is_full());

        let (bytes, digest) = buffer.seal();
        assert_eq!(&bytes[..], b"hell");
        assert_eq!(digest, Sha1::from(b"hell").digest().to_string());
    }
}
