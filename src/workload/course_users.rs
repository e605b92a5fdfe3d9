//! Distinct users per course.
//!
//! Rows are `course_id,user_id,...`. Every course collects the ids of the
//! users seen with it; the reducer keeps each id once.

use std::collections::HashSet;

use bytes::Bytes;

use crate::utils::{display, split_fields};
use crate::{Error, KeyValue, Result};

const DELIMITER: u8 = super::COURSE_USERS.input_delimiter as u8;
const COURSE_FIELD: usize = super::COURSE_USERS.key_field;
const USER_FIELD: usize = super::COURSE_USERS.value_field;

/// Maps one data row to a `(course id, user id)` pair.
///
/// The row guard only asks for a first field, which splitting always
/// provides, so a row without a comma reaches the user-id lookup and fails
/// with [`Error::MissingField`].
pub fn map_line(line_no: usize, line: &str) -> Result<KeyValue> {
    let record = Bytes::copy_from_slice(line.trim().as_bytes());
    let fields = split_fields(&record, DELIMITER);

    let missing = |index| Error::MissingField {
        line: line_no,
        index,
        record: display(&record).into_owned(),
    };
    let course = fields.get(COURSE_FIELD).ok_or_else(|| missing(COURSE_FIELD))?;
    let user = fields.get(USER_FIELD).ok_or_else(|| missing(USER_FIELD))?;

    Ok(KeyValue::new(course.clone(), user.clone()))
}

/// Collapses the users collected for one course into a set.
///
/// Iteration order of the result is unspecified.
pub fn reduce(values: impl IntoIterator<Item = Bytes>) -> HashSet<Bytes> {
    values.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_course_and_user() {
        let kv = map_line(2, "c7,u1,extra\r").unwrap();
        assert_eq!(kv.key, "c7");
        assert_eq!(kv.value, "u1");
    }

    #[test]
    fn row_without_second_field_fails() {
        let err = map_line(3, "lonely").unwrap_err();
        assert!(matches!(
            err,
            Error::MissingField {
                line: 3,
                index: 1,
                ..
            }
        ));
        assert!(map_line(4, "").is_err());
    }

    #[test]
    fn reduce_drops_duplicates() {
        let users = reduce(["1", "2", "1", "2", "3"].map(Bytes::from));
        assert_eq!(users.len(), 3);
        assert!(users.contains(&Bytes::from("3")));
    }
}
