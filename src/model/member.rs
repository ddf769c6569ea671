use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serenity::all::UserId;
use std::fmt;

/// Discord identity of a guild member taking part in events.
///
/// Stored as the raw snowflake. Serialized as a decimal string so snapshot
/// files stay readable by tools that lose precision on large JSON numbers;
/// deserialization also accepts integers and rejects anything that is not a
/// valid snowflake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MemberId(u64);

impl MemberId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for MemberId {
    fn from(id: UserId) -> Self {
        Self(id.get())
    }
}

impl From<MemberId> for UserId {
    fn from(id: MemberId) -> Self {
        UserId::new(id.get())
    }
}

impl Serialize for MemberId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for MemberId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MemberIdVisitor;

        impl de::Visitor<'_> for MemberIdVisitor {
            type Value = MemberId;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a non-zero Discord user id as a string or integer")
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<MemberId, E> {
                if value == 0 {
                    return Err(E::invalid_value(de::Unexpected::Unsigned(value), &self));
                }
                Ok(MemberId(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<MemberId, E> {
                u64::try_from(value)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
                    .and_then(|value| self.visit_u64(value))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<MemberId, E> {
                value
                    .parse::<u64>()
                    .map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
                    .and_then(|value| self.visit_u64(value))
            }
        }

        deserializer.deserialize_any(MemberIdVisitor)
    }
}
