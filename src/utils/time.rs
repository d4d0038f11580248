use crate::error::{Error, Result};
use chrono::{DateTime, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn to_epoch(dt: DateTime<Utc>) -> i64 {
    dt.timestamp()
}

pub fn from_epoch(secs: i64) -> Result<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or_else(|| Error::BadRequest(format!("timestamp out of range: {}", secs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_round_trip() {
        let dt = from_epoch(1_700_000_000).unwrap();
        assert_eq!(to_epoch(dt), 1_700_000_000);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(from_epoch(i64::MAX).is_err());
    }
}
