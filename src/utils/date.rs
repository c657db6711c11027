pub const DATE_TIME_FMT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// serde adapter for entity timestamps, rendered as RFC 3339 on the wire.
// Day-precision fields (date_of_hold, date_of_checkout) use chrono's plain
// NaiveDate serde instead.
pub mod serializer {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::DATE_TIME_FMT;

    pub fn serialize<S: Serializer>(time: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        time_to_json(*time).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let str_time: String = Deserialize::deserialize(deserializer)?;
        let time = NaiveDateTime::parse_from_str(&str_time, DATE_TIME_FMT).map_err(D::Error::custom)?;
        Ok(time)
    }

    fn time_to_json(t: NaiveDateTime) -> String {
        DateTime::<Utc>::from_utc(t, Utc).format(DATE_TIME_FMT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDateTime, Utc};
    use serde::{Deserialize, Serialize};
    use crate::utils::date::serializer;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "serializer")]
        at: NaiveDateTime,
    }

    #[tokio::test]
    async fn test_should_round_trip_timestamp() {
        let stamped = Stamped { at: Utc::now().naive_utc() };
        let json = serde_json::to_string(&stamped).expect("serialize timestamp");
        let parsed: Stamped = serde_json::from_str(json.as_str()).expect("parse timestamp");
        assert_eq!(stamped, parsed);
    }
}
