use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use super::{Number, WireError};

/// Symbolic block identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockTag {
    Earliest,
    Latest,
    Pending,
}

impl BlockTag {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Earliest => "earliest",
            Self::Latest => "latest",
            Self::Pending => "pending",
        }
    }
}

/// Block parameter: either a concrete block number or a [`BlockTag`].
///
/// Numbers are limited to the signed 64-bit range, matching what upstream nodes accept.
/// Tags are a separate variant, so a tag can never be confused with a real height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockId {
    Number(u64),
    Tag(BlockTag),
}

impl BlockId {
    pub const LATEST: Self = Self::Tag(BlockTag::Latest);

    #[must_use]
    pub const fn is_tag(&self) -> bool {
        matches!(self, Self::Tag(_))
    }

    #[must_use]
    pub const fn is_earliest(&self) -> bool {
        matches!(self, Self::Tag(BlockTag::Earliest))
    }

    #[must_use]
    pub const fn is_latest(&self) -> bool {
        matches!(self, Self::Tag(BlockTag::Latest))
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Tag(BlockTag::Pending))
    }

    /// Returns the block number, or `None` for tags.
    #[must_use]
    pub const fn number(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Tag(_) => None,
        }
    }
}

impl From<u64> for BlockId {
    fn from(value: u64) -> Self {
        Self::Number(value)
    }
}

impl From<BlockTag> for BlockId {
    fn from(tag: BlockTag) -> Self {
        Self::Tag(tag)
    }
}

impl TryFrom<Number> for BlockId {
    type Error = WireError;

    fn try_from(value: Number) -> Result<Self, Self::Error> {
        value
            .to_u64()
            .filter(|n| i64::try_from(*n).is_ok())
            .map(Self::Number)
            .ok_or(WireError::BlockNumberTooLarge)
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", Number::from(*n)),
            Self::Tag(tag) => f.write_str(tag.as_str()),
        }
    }
}

impl FromStr for BlockId {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "earliest" => Ok(Self::Tag(BlockTag::Earliest)),
            "latest" => Ok(Self::Tag(BlockTag::Latest)),
            "pending" => Ok(Self::Tag(BlockTag::Pending)),
            _ if s.starts_with("0x") || s.starts_with("0X") => Self::try_from(s.parse::<Number>()?),
            _ => Err(WireError::InvalidBlockTag(s.to_string())),
        }
    }
}

impl Serialize for BlockId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BlockId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlockIdVisitor;

        impl de::Visitor<'_> for BlockIdVisitor {
            type Value = BlockId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a block number or one of \"earliest\", \"latest\", \"pending\"")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                BlockId::try_from(Number::from(v)).map_err(E::custom)
            }
        }

        deserializer.deserialize_any(BlockIdVisitor)
    }
}
