//! # Record Codec
//!
//! Every record is stored as one fixed-width text line:
//!
//! ```text
//! a00000001 55 \n
//! └───┬───┘│└┬┘└─ newline
//!   id (9) │ score, left-aligned and space-padded to 3
//!          └─ separator
//! ```
//!
//! The width never varies, so the record at 1-based position `p` always starts at
//! byte `(p - 1) * RECORD_WIDTH`. Modifying a record in place depends on this.

use crate::model::Record;
use thiserror::Error;

pub const ID_WIDTH: usize = 9;
pub const SCORE_WIDTH: usize = 3;
/// Bytes per stored line: id, separator, score, newline.
pub const RECORD_WIDTH: usize = ID_WIDTH + 1 + SCORE_WIDTH + 1;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("record id is empty")]
    EmptyId,

    #[error("record id '{0}' is wider than {width} bytes", width = ID_WIDTH)]
    IdTooWide(String),

    #[error("record id '{0}' contains whitespace or control characters")]
    InvalidId(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {width} bytes, found {0}", width = RECORD_WIDTH)]
    WrongWidth(usize),

    #[error("line is not terminated by a newline")]
    MissingNewline,

    #[error("line is not valid UTF-8")]
    NotUtf8,

    #[error("expected an id and a score")]
    MalformedLine,

    #[error("stored id '{0}' is wider than {width} bytes", width = ID_WIDTH)]
    IdTooWide(String),

    #[error("stored score '{0}' is not a number")]
    InvalidScore(String),
}

/// Encodes a record into its fixed-width line.
pub fn encode(record: &Record) -> Result<String, EncodeError> {
    if record.id.is_empty() {
        return Err(EncodeError::EmptyId);
    }
    if record.id.len() > ID_WIDTH {
        return Err(EncodeError::IdTooWide(record.id.clone()));
    }
    if record
        .id
        .chars()
        .any(|c| c.is_whitespace() || c.is_control())
    {
        return Err(EncodeError::InvalidId(record.id.clone()));
    }

    let line = format!(
        "{:<id_w$} {:<score_w$}\n",
        record.id,
        record.score,
        id_w = ID_WIDTH,
        score_w = SCORE_WIDTH
    );
    debug_assert_eq!(line.len(), RECORD_WIDTH);
    Ok(line)
}

/// Decodes one fixed-width line back into a record.
pub fn decode(line: &[u8]) -> Result<Record, DecodeError> {
    if line.len() != RECORD_WIDTH {
        return Err(DecodeError::WrongWidth(line.len()));
    }
    if line[RECORD_WIDTH - 1] != b'\n' {
        return Err(DecodeError::MissingNewline);
    }

    let text = std::str::from_utf8(line).map_err(|_| DecodeError::NotUtf8)?;
    let mut tokens = text.split_ascii_whitespace();
    let (id, score) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(id), Some(score), None) => (id, score),
        _ => return Err(DecodeError::MalformedLine),
    };

    if id.len() > ID_WIDTH {
        return Err(DecodeError::IdTooWide(id.to_string()));
    }
    let score = score
        .parse::<u8>()
        .map_err(|_| DecodeError::InvalidScore(score.to_string()))?;

    Ok(Record::new(id, score))
}

/// Byte offset of the record at a 1-based position, or `None` for position 0.
pub fn offset_of(position: u32) -> Option<u64> {
    let index = u64::from(position.checked_sub(1)?);
    index.checked_mul(RECORD_WIDTH as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_fixed_width_for_any_score() {
        for score in [0, 7, 55, 100] {
            let line = encode(&Record::new("a12345678", score)).unwrap();
            assert_eq!(line.len(), RECORD_WIDTH);
            assert!(line.ends_with('\n'));
        }
    }

    #[test]
    fn encodes_left_aligned_score() {
        assert_eq!(
            encode(&Record::new("a00000001", 7)).unwrap(),
            "a00000001 7  \n"
        );
        assert_eq!(
            encode(&Record::new("A00000002", 100)).unwrap(),
            "A00000002 100\n"
        );
    }

    #[test]
    fn pads_short_ids() {
        assert_eq!(encode(&Record::new("a1", 5)).unwrap(), "a1        5  \n");
    }

    #[test]
    fn rejects_unencodable_ids() {
        assert_eq!(encode(&Record::new("", 5)), Err(EncodeError::EmptyId));
        assert!(matches!(
            encode(&Record::new("a123456789", 5)),
            Err(EncodeError::IdTooWide(_))
        ));
        assert!(matches!(
            encode(&Record::new("a12 45678", 5)),
            Err(EncodeError::InvalidId(_))
        ));
    }

    #[test]
    fn decodes_what_it_encodes() {
        for id in ["a00000000", "A99999999", "a12345678"] {
            for score in 0..=100u8 {
                let record = Record::new(id, score);
                let line = encode(&record).unwrap();
                assert_eq!(line.len(), RECORD_WIDTH);
                assert_eq!(decode(line.as_bytes()).unwrap(), record);
            }
        }
    }

    #[test]
    fn rejects_wrong_width() {
        assert_eq!(decode(b"a00000001 5\n"), Err(DecodeError::WrongWidth(12)));
        assert_eq!(decode(b""), Err(DecodeError::WrongWidth(0)));
    }

    #[test]
    fn rejects_missing_newline() {
        assert_eq!(decode(b"a00000001 55  "), Err(DecodeError::MissingNewline));
    }

    #[test]
    fn rejects_malformed_lines() {
        assert_eq!(decode(b"a00000001    \n"), Err(DecodeError::MalformedLine));
        assert_eq!(decode(b"a0000 001 55 \n"), Err(DecodeError::MalformedLine));
        assert_eq!(
            decode(b"\0\0\0\0\0\0\0\0\0\0\0\0\0\n"),
            Err(DecodeError::MalformedLine)
        );
        assert!(matches!(
            decode(b"a00000001 xx \n"),
            Err(DecodeError::InvalidScore(_))
        ));
    }

    #[test]
    fn offsets_are_multiples_of_width() {
        assert_eq!(offset_of(0), None);
        assert_eq!(offset_of(1), Some(0));
        assert_eq!(offset_of(2), Some(14));
        assert_eq!(offset_of(10), Some(126));
        assert_eq!(offset_of(u32::MAX), Some((u32::MAX as u64 - 1) * 14));
    }
}
