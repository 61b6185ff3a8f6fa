use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Employee,
    Management,
    Owner,
}

impl Role {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Management => "management",
            Role::Owner => "owner",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Role::Employee),
            "management" => Some(Role::Management),
            "owner" => Some(Role::Owner),
            _ => None,
        }
    }

    /// Redemptions, ratings and archiving are reserved to these roles.
    pub fn is_manager(&self) -> bool {
        matches!(self, Role::Management | Role::Owner)
    }
}
