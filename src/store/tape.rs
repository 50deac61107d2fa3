use std::io::{self, Cursor, SeekFrom};

use async_trait::async_trait;
use tokio::io::{AsyncSeek, AsyncSeekExt, AsyncWrite, AsyncWriteExt};

/// Streams that can be cut (or zero-extended) to an exact length.
#[async_trait]
pub trait Truncate {
    async fn set_len(&mut self, len: u64) -> io::Result<()>;
}

#[async_trait]
impl Truncate for tokio::fs::File {
    async fn set_len(&mut self, len: u64) -> io::Result<()> {
        tokio::fs::File::set_len(self, len).await
    }
}

#[async_trait]
impl Truncate for Cursor<Vec<u8>> {
    async fn set_len(&mut self, len: u64) -> io::Result<()> {
        let len = usize::try_from(len)
            .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "length exceeds memory"))?;
        self.get_mut().resize(len, 0);
        Ok(())
    }
}

/// Wraps a stream so every write replaces its whole content.
///
/// A shorter document never leaves bytes from a longer previous one behind.
#[derive(Debug)]
pub struct Tape<S> {
    stream: S,
}

impl<S> Tape<S>
where
    S: AsyncWrite + AsyncSeek + Truncate + Unpin + Send,
{
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Replaces the stream's content with `bytes`.
    ///
    /// The stream is resized before writing, so an error part way through can
    /// leave it truncated or partly overwritten.
    pub async fn rewrite(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.stream.set_len(bytes.len() as u64).await?;
        self.stream.seek(SeekFrom::Start(0)).await?;
        self.stream.write_all(bytes).await?;
        self.stream.flush().await
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rewrite_replaces_longer_content() {
        let mut tape = Tape::new(Cursor::new(b"12345".to_vec()));

        tape.rewrite(b"abc").await.unwrap();

        assert_eq!(tape.into_inner().into_inner(), b"abc");
    }

    #[tokio::test]
    async fn rewrite_grows_content() {
        let mut tape = Tape::new(Cursor::new(b"ab".to_vec()));

        tape.rewrite(b"abcdef").await.unwrap();

        assert_eq!(tape.into_inner().into_inner(), b"abcdef");
    }

    #[tokio::test]
    async fn rewrite_ignores_current_position() {
        let mut cursor = Cursor::new(b"0123456789".to_vec());
        cursor.set_position(7);
        let mut tape = Tape::new(cursor);

        tape.rewrite(b"xy").await.unwrap();

        assert_eq!(tape.into_inner().into_inner(), b"xy");
    }
}
