//! Average activity score per user.
//!
//! Input rows are comma-separated; field 1 holds the user id and field 3 the
//! activity score. The reducer averages the scores collected for each user.

use bytes::Bytes;

use crate::utils::{display, split_fields};
use crate::{Error, KeyValue, Result};

const DELIMITER: u8 = super::ACTIVITY.input_delimiter as u8;
const USER_FIELD: usize = super::ACTIVITY.key_field;
const SCORE_FIELD: usize = super::ACTIVITY.value_field;

/// A user id is one or more ASCII digits `0-9`. Other Unicode decimal
/// digits (`٣`, `²`) are not accepted.
fn is_user_id(field: &[u8]) -> bool {
    !field.is_empty() && field.iter().all(u8::is_ascii_digit)
}

/// Maps one raw input row to a `(user id, score)` pair.
///
/// Returns `Ok(None)` for rows that are filtered out: fewer than two fields
/// or a user id that is not all digits. The score is passed through as text;
/// a bad number only fails once it reaches [`reduce`].
pub fn map_line(line_no: usize, line: &str) -> Result<Option<KeyValue>> {
    let record = Bytes::copy_from_slice(line.trim().as_bytes());
    let fields = split_fields(&record, DELIMITER);

    if fields.len() <= USER_FIELD || !is_user_id(&fields[USER_FIELD]) {
        tracing::trace!(line_no, "skipping row");
        return Ok(None);
    }

    let score = fields.get(SCORE_FIELD).ok_or_else(|| Error::MissingField {
        line: line_no,
        index: SCORE_FIELD,
        record: display(&record).into_owned(),
    })?;

    Ok(Some(KeyValue::new(
        fields[USER_FIELD].clone(),
        score.clone(),
    )))
}

/// Averages every score collected for `key`.
///
/// Fails with [`Error::Conversion`] on the first value that is not a number.
pub fn reduce(key: &Bytes, values: impl Iterator<Item = Bytes>) -> Result<f64> {
    let mut sum = 0.0;
    let mut count = 0usize;

    for value in values {
        let text = display(&value);
        let score: f64 = text.trim().parse().map_err(|source| Error::Conversion {
            key: display(key).into_owned(),
            value: text.to_string(),
            source,
        })?;
        sum += score;
        count += 1;
    }

    if count == 0 {
        return Err(Error::EmptyGroup(display(key).into_owned()));
    }
    Ok(sum / count as f64)
}
