use crate::database::error::DatabaseError;
use chrono::{NaiveDate, NaiveDateTime};
use std::str::FromStr;

pub(crate) mod budget;
pub(crate) mod club;
pub(crate) mod comite;
pub(crate) mod commission;
pub(crate) mod cotisation;
pub(crate) mod gala;
pub(crate) mod mandat;
pub(crate) mod reunion;
pub(crate) mod user;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

pub(crate) fn parse_date(value: &str) -> Result<NaiveDate, DatabaseError> {
    Ok(NaiveDate::from_str(value)?)
}

pub(crate) fn parse_date_time(value: &str) -> Result<NaiveDateTime, DatabaseError> {
    Ok(NaiveDateTime::parse_from_str(value, DATE_TIME_FORMAT)?)
}

/// Parse a value stored through its `Display` implementation.
pub(crate) fn parse_stored<T: FromStr<Err = String>>(value: &str) -> Result<T, DatabaseError> {
    T::from_str(value).map_err(DatabaseError::MalformedValue)
}

#[cfg(test)]
mod tests {
    use crate::database::error::DatabaseError;
    use crate::database::model::{parse_date, parse_date_time, parse_stored};
    use chrono::{NaiveDate, NaiveDateTime};
    use dto::club::Role;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_parse_date() {
        let date = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert_eq!(Ok(date), parse_date(&date.to_string()));
    }

    #[parameterized(
        date_time = {
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap().and_hms_opt(19, 30, 0).unwrap(),
            NaiveDate::from_ymd_opt(2025, 9, 30).unwrap().and_hms_milli_opt(19, 30, 0, 125).unwrap(),
        }
    )]
    fn should_parse_date_time(date_time: NaiveDateTime) {
        assert_eq!(Ok(date_time), parse_date_time(&date_time.to_string()));
    }

    #[test]
    fn should_fail_to_parse_malformed_date() {
        assert!(matches!(
            parse_date("30/09/2025"),
            Err(DatabaseError::MalformedValue(_))
        ));
    }

    #[test]
    fn should_fail_to_parse_unknown_role() {
        assert!(matches!(
            parse_stored::<Role>("Owner"),
            Err(DatabaseError::MalformedValue(_))
        ));
    }
}
