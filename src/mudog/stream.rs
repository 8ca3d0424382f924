//! Character streams
//!
//! The interpreter reads its input one byte at a time and occasionally steps
//! back by exactly one byte. [`CharSource`] exposes just that: sequential
//! reads with an explicit end-of-stream, the current position, and seeking to
//! a previously observed position. There is no `unread`; bytes
//! consumed by a failed directive match stay consumed.
//!
//! Output goes to any [`std::io::Write`].

use std::fs::File;
use std::io::{self, BufReader, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

/// Opaque byte offset into a [`CharSource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(u64);

impl Position {
    /// The position one byte earlier, saturating at the start of the stream.
    pub fn previous(self) -> Position {
        Position(self.0.saturating_sub(1))
    }

    pub fn offset(self) -> u64 {
        self.0
    }
}

/// A seekable byte source with an explicit end-of-stream signal.
pub trait CharSource {
    /// Read the next byte, or `None` once the stream is exhausted.
    fn next_char(&mut self) -> io::Result<Option<u8>>;

    fn position(&mut self) -> io::Result<Position>;

    fn seek(&mut self, position: Position) -> io::Result<()>;

    /// Byte length measured when the stream was opened.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [`CharSource`] over any buffered `Read + Seek`.
#[derive(Debug)]
pub struct InputStream<R> {
    inner: BufReader<R>,
    length: u64,
}

impl InputStream<File> {
    /// Open a file for reading and record its length.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Self::new(File::open(path)?)
    }
}

impl<T: AsRef<[u8]>> InputStream<Cursor<T>> {
    /// Wrap an in-memory buffer.
    pub fn from_bytes(bytes: T) -> Self {
        let length = bytes.as_ref().len() as u64;
        InputStream {
            inner: BufReader::new(Cursor::new(bytes)),
            length,
        }
    }
}

impl<R: Read + Seek> InputStream<R> {
    pub fn new(mut reader: R) -> io::Result<Self> {
        let length = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;
        Ok(InputStream {
            inner: BufReader::new(reader),
            length,
        })
    }
}

impl<R: Read + Seek> CharSource for InputStream<R> {
    fn next_char(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn position(&mut self) -> io::Result<Position> {
        self.inner.stream_position().map(Position)
    }

    fn seek(&mut self, position: Position) -> io::Result<()> {
        self.inner.seek(SeekFrom::Start(position.0)).map(|_| ())
    }

    fn len(&self) -> u64 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(source: &mut impl CharSource) -> Vec<u8> {
        let mut out = Vec::new();
        while let Some(b) = source.next_char().unwrap() {
            out.push(b);
        }
        out
    }

    #[test]
    fn test_reads_until_end() {
        let mut input = InputStream::from_bytes("ab\0c");
        assert_eq!(input.len(), 4);
        assert_eq!(drain(&mut input), b"ab\0c");
        // End of stream is sticky
        assert_eq!(input.next_char().unwrap(), None);
    }

    #[test]
    fn test_step_back_one() {
        let mut input = InputStream::from_bytes("xyz");
        input.next_char().unwrap();
        input.next_char().unwrap();
        let pos = input.position().unwrap();
        assert_eq!(pos.offset(), 2);
        input.seek(pos.previous()).unwrap();
        assert_eq!(input.next_char().unwrap(), Some(b'y'));
    }

    #[test]
    fn test_previous_saturates() {
        assert_eq!(Position::default().previous(), Position::default());
    }

    #[test]
    fn test_length_is_measured_at_open() {
        let input = InputStream::new(Cursor::new(vec![1u8; 17])).unwrap();
        assert_eq!(input.len(), 17);
        assert!(InputStream::from_bytes("").is_empty());
    }
}
