//! Payload loading.
//!
//! Payloads are raw bytes end to end; they are never decoded as text, so a
//! body that is not valid UTF-8 still reaches the verifier unchanged.
//! A read either yields the whole payload or an error.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::errors::PayloadError;

/// Where the payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadSource {
    /// A file on disk.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

impl PayloadSource {
    /// Maps `None` or `-` to stdin and anything else to a file path.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => PayloadSource::Stdin,
            Some(path) => PayloadSource::File(PathBuf::from(path)),
        }
    }
}

impl fmt::Display for PayloadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayloadSource::File(path) => write!(f, "{}", path.display()),
            PayloadSource::Stdin => f.write_str("<stdin>"),
        }
    }
}

/// Reads the full payload, rejecting anything larger than `max_size` bytes.
pub fn read_payload(
    source: &PayloadSource,
    max_size: Option<u64>,
) -> Result<Vec<u8>, PayloadError> {
    let io_error = |error: io::Error| PayloadError::Io {
        source_name: source.to_string(),
        error,
    };

    let bytes = match source {
        PayloadSource::File(path) => {
            let file = std::fs::File::open(path).map_err(io_error)?;
            if let Some(max) = max_size {
                let size = file.metadata().map_err(io_error)?.len();
                if size > max {
                    return Err(PayloadError::TooLarge { size, max });
                }
            }
            read_limited(file, max_size).map_err(io_error)?
        }
        PayloadSource::Stdin => read_limited(io::stdin().lock(), max_size).map_err(io_error)?,
    };

    if let Some(max) = max_size {
        let size = bytes.len() as u64;
        if size > max {
            return Err(PayloadError::TooLarge { size, max });
        }
    }

    tracing::debug!(source = %source, bytes = bytes.len(), "payload loaded");
    Ok(bytes)
}

/// Reads to end, stopping one byte past `max_size` so oversized input is
/// detected without buffering all of it.
fn read_limited<R: Read>(mut reader: R, max_size: Option<u64>) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    match max_size {
        Some(max) => {
            reader.take(max.saturating_add(1)).read_to_end(&mut buffer)?;
        }
        None => {
            reader.read_to_end(&mut buffer)?;
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn dash_and_none_mean_stdin() {
        assert_eq!(PayloadSource::from_arg(None), PayloadSource::Stdin);
        assert_eq!(PayloadSource::from_arg(Some("-")), PayloadSource::Stdin);
        assert_eq!(
            PayloadSource::from_arg(Some("body.json")),
            PayloadSource::File(PathBuf::from("body.json"))
        );
    }

    #[test]
    fn read_limited_stops_past_limit() {
        let data = vec![1u8; 100];
        let read = read_limited(Cursor::new(&data), Some(10)).unwrap();
        assert_eq!(read.len(), 11);
    }

    #[test]
    fn read_limited_unbounded_reads_all() {
        let data = vec![1u8; 100];
        let read = read_limited(Cursor::new(&data), None).unwrap();
        assert_eq!(read, data);
    }
}
