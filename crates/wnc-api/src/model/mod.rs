// Serde models for the controller's YANG containers.
//
// Each top-level response wrapper carries the module-qualified JSON key
// RESTCONF puts at the root of the document. Lists default to empty and
// scalar leaves are optional: the controller omits unset leaves.

pub mod ap;
pub mod client;
pub mod controller;
pub mod general;
pub mod mobility;
pub mod rf;
pub mod rfid;
pub mod rogue;
pub mod wlan;

/// RESTCONF JSON encodes 64-bit integers as strings; accept either form.
pub(crate) mod counter {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(u64),
        Str(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Num(n)) => Ok(Some(n)),
            Some(Raw::Str(s)) => s.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }

    #[allow(clippy::ref_option)]
    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_str(&n.to_string()),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Default, Serialize, Deserialize)]
    struct Counters {
        #[serde(default, with = "super::counter")]
        bytes: Option<u64>,
    }

    #[test]
    fn counters_accept_strings_and_numbers() {
        let a: Counters = serde_json::from_str(r#"{"bytes":"18446744073709551615"}"#).unwrap();
        assert_eq!(a.bytes, Some(u64::MAX));
        let b: Counters = serde_json::from_str(r#"{"bytes":42}"#).unwrap();
        assert_eq!(b.bytes, Some(42));
        let c: Counters = serde_json::from_str("{}").unwrap();
        assert_eq!(c.bytes, None);
        assert_eq!(serde_json::to_string(&b).unwrap(), r#"{"bytes":"42"}"#);
    }
}
