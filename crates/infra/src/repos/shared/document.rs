use serde::{de::DeserializeOwned, Serialize};

/// Maps a domain entity to and from the JSON shape it is stored in
pub trait StoredDocument<E>: Serialize + DeserializeOwned {
    fn to_domain(self) -> E;
    fn from_domain(e: &E) -> Self;
}

/// Millisecond timestamps are stored as RFC 3339 strings with millisecond
/// precision in UTC, e.g. `2024-12-15T13:00:00.000Z`
pub mod js_date {
    use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
    use serde::{de, ser, Deserialize, Deserializer, Serializer};

    /// `None` for timestamps outside the range chrono can represent
    pub fn from_millis(timestamp_millis: i64) -> Option<DateTime<Utc>> {
        Utc.timestamp_millis_opt(timestamp_millis).single()
    }

    pub fn serialize<S>(timestamp_millis: &i64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let date = from_millis(*timestamp_millis).ok_or_else(|| {
            ser::Error::custom(format!("Timestamp out of range: {}", timestamp_millis))
        })?;
        serializer.serialize_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|date| date.timestamp_millis())
            .map_err(|_| de::Error::custom(format!("Malformed date: {}", raw)))
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S>(timestamp_millis: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match timestamp_millis {
                Some(ts) => super::serialize(ts, serializer),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
        where
            D: Deserializer<'de>,
        {
            #[derive(Deserialize)]
            struct Wrapper(#[serde(with = "super")] i64);

            let wrapper = Option::<Wrapper>::deserialize(deserializer)?;
            Ok(wrapper.map(|Wrapper(ts)| ts))
        }
    }
}

/// Older clients stored some ids as JSON numbers
pub mod lenient_id {
    use lembrete_domain::ID;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    pub(crate) enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    impl From<RawId> for ID {
        fn from(raw: RawId) -> Self {
            match raw {
                RawId::Text(s) => ID::from(s),
                RawId::Number(n) => ID::from(n.to_string()),
            }
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ID, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(ID::from)
    }

    pub mod vec {
        use super::RawId;
        use lembrete_domain::ID;
        use serde::{Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<ID>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = Vec::<RawId>::deserialize(deserializer)?;
            Ok(raw.into_iter().map(ID::from).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::js_date;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize)]
    struct Dated {
        #[serde(with = "js_date")]
        at: i64,
        #[serde(default, with = "js_date::option")]
        maybe: Option<i64>,
    }

    #[test]
    fn writes_and_reads_js_dates() {
        let d = Dated {
            at: 1734267600123,
            maybe: None,
        };
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"at":"2024-12-15T13:00:00.123Z","maybe":null}"#);

        let d: Dated = serde_json::from_str(r#"{"at":"2024-12-15T10:00:00-03:00"}"#).unwrap();
        assert_eq!(d.at, 1734267600000);
        assert!(d.maybe.is_none());

        assert!(serde_json::from_str::<Dated>(r#"{"at":"yesterday"}"#).is_err());
    }

    #[test]
    fn out_of_range_timestamps_are_not_written() {
        assert!(js_date::from_millis(i64::MAX).is_none());
        for ts in &[i64::MAX, i64::MIN, 9_000_000_000_000_000] {
            let d = Dated {
                at: 0,
                maybe: Some(*ts),
            };
            assert!(serde_json::to_string(&d).is_err());
        }
    }
}
