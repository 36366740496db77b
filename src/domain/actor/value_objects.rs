// src/domain/actor/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(pub i64);

impl ActorId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("actor id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ActorId> for i64 {
    fn from(value: ActorId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Capability {
    pub resource: String,
    pub action: String,
}

impl Capability {
    pub fn new(resource: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            action: action.into(),
        }
    }

    pub fn matches(&self, resource: &str, action: &str) -> bool {
        self.resource == resource && self.action == action
    }
}

/// The two privileged actor classes. Both are authenticated upstream; the
/// core only decides what each may do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ActorKind {
    Admin,
    Moderator,
}

impl ActorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorKind::Admin => "admin",
            ActorKind::Moderator => "moderator",
        }
    }

    /// Capability set for this kind. An unverified moderator is denied
    /// article create/update but keeps read access and own-article cleanup.
    pub fn capabilities(&self, verified: bool) -> HashSet<Capability> {
        use Capability as Cap;
        match self {
            ActorKind::Admin => HashSet::from([
                Cap::new("articles", "create"),
                Cap::new("articles", "update:any"),
                Cap::new("articles", "delete:any"),
                Cap::new("images", "delete:any"),
                Cap::new("moderators", "verify"),
                Cap::new("audit", "read:any"),
            ]),
            ActorKind::Moderator => {
                let mut caps = HashSet::from([
                    Cap::new("articles", "delete:own"),
                    Cap::new("images", "delete:own"),
                    Cap::new("audit", "read:own"),
                ]);
                if verified {
                    caps.insert(Cap::new("articles", "create"));
                    caps.insert(Cap::new("articles", "update:own"));
                }
                caps
            }
        }
    }
}

impl fmt::Display for ActorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActorKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(ActorKind::Admin),
            "moderator" => Ok(ActorKind::Moderator),
            other => Err(DomainError::Validation(format!(
                "unknown actor kind '{other}'"
            ))),
        }
    }
}
