use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of an aggregate.
///
/// Identifiers are plain strings, equal by value. Fresh ones are time-ordered
/// (UUIDv7, hyphens stripped) so they sort by creation.
pub trait Identifier: Clone + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync {
    fn value(&self) -> &str;
}

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Generate a fresh, time-ordered identifier.
            pub fn unique() -> Self {
                Self(Uuid::now_v7().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Identifier for $name {
            fn value(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identity of a [`Category`](crate::domain::Category).
    CategoryId
);
define_id!(
    /// Identity of a [`Genre`](crate::domain::Genre).
    GenreId
);
define_id!(
    /// Identity of a [`CastMember`](crate::domain::CastMember).
    CastMemberId
);
define_id!(
    /// Identity of a [`Video`](crate::domain::Video).
    VideoId
);

/// Current instant, truncated to microseconds so it survives storage round-trips.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Drop repeated identifiers, keeping first occurrences in order.
///
/// Reference collections behave as sets but keep the caller's ordering, which
/// integrity messages rely on.
pub fn unique_ids<I, T>(ids: T) -> Vec<I>
where
    I: Identifier,
    T: IntoIterator<Item = I>,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}
