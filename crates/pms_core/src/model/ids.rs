//! Stable identifiers for domain entities.
//!
//! Ids are UUID v5 values derived from the entity kind and its natural key.
//! Two in-memory instances with the same natural key therefore share one id,
//! which makes id equality and natural-key equality the same relation.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! natural_id {
    ($(#[$meta:meta])* $name:ident, $scope:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Derives the id for one natural key.
            pub fn from_key(key: &str) -> Self {
                Self(Uuid::new_v5(
                    &Uuid::NAMESPACE_OID,
                    format!("{}/{}", $scope, key).as_bytes(),
                ))
            }

            /// Raw UUID value.
            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

natural_id!(
    /// Employee id, keyed by last name.
    EmployeeId,
    "pms.employee"
);
natural_id!(
    /// Project id, keyed by project name.
    ProjectId,
    "pms.project"
);
natural_id!(
    /// Task id, keyed by task name.
    TaskId,
    "pms.task"
);
