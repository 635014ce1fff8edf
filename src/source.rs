// Text sources: decoding and line splitting for file-backed documents.
//
// Files are decoded as Latin-1 by default: every byte maps to the code point
// of the same value, so legacy documents with extended Latin characters read
// exactly as they always have. UTF-8 is available as an opt-in; invalid
// sequences are replaced rather than rejected.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};
use std::iter;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How raw bytes from a file become text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    #[default]
    Latin1,
    Utf8,
}

impl Encoding {
    pub fn decode(self, bytes: &[u8]) -> String {
        match self {
            Encoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Latin1 => "latin1",
            Encoding::Utf8 => "utf8",
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown encoding {0:?} (expected latin1 or utf8)")]
pub struct UnknownEncoding(pub String);

impl FromStr for Encoding {
    type Err = UnknownEncoding;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            other => Err(UnknownEncoding(other.to_string())),
        }
    }
}

/// A file-backed source could not be turned into a vector.
///
/// Callers that prefer a numeric answer over a failure can treat either
/// variant as empty input.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot find the file {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub(crate) fn open(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            SourceError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::read(path, source)
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        SourceError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            SourceError::NotFound { path } | SourceError::Read { path, .. } => path,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Characters that end a line: `\r\n` counts once, the rest on their own.
const LINE_TERMINATORS: [char; 5] = ['\r', '\n', '\u{85}', '\u{2028}', '\u{2029}'];

/// Split a reader into decoded lines.
///
/// Lines end at `\r\n`, `\r`, `\n`, NEL (`\u{85}`, byte 0x85 in Latin-1) and
/// the Unicode line and paragraph separators. A last line without a
/// terminator is still yielded, and an empty reader yields nothing.
pub fn read_lines<R: BufRead>(
    mut reader: R,
    encoding: Encoding,
) -> impl Iterator<Item = io::Result<String>> {
    let mut pending = VecDeque::new();
    let mut done = false;
    iter::from_fn(move || loop {
        if let Some(line) = pending.pop_front() {
            return Some(Ok(line));
        }
        if done {
            return None;
        }
        // A `\n`-delimited chunk never splits a `\r\n` pair.
        let mut chunk = Vec::new();
        match reader.read_until(b'\n', &mut chunk) {
            Ok(0) => done = true,
            Ok(_) => pending.extend(split_lines(&encoding.decode(&chunk))),
            Err(e) => {
                done = true;
                return Some(Err(e));
            }
        }
    })
}

/// Split decoded text into lines. A terminator at the very end does not
/// start another, empty line.
fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(LINE_TERMINATORS) {
            Some(at) => {
                lines.push(rest[..at].to_string());
                let tail = &rest[at..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[width..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }
    lines
}
