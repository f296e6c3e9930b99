use crate::model::lenient::or_default;
use serde::{Deserialize, Serialize};
use snapshot_framework::{Record, RecordId};
use std::fmt;

/// Advisory only: no operation checks it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    #[serde(rename = "Warehouse Staff")]
    WarehouseStaff,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::WarehouseStaff => "Warehouse Staff",
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserStatus {
    #[default]
    Active,
    Inactive,
}

/// An operator account.
///
/// The password is stored as given. Nothing authenticates against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, deserialize_with = "or_default")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "or_default")]
    pub full_name: String,
    #[serde(default, deserialize_with = "or_default")]
    pub email: String,
    #[serde(default, deserialize_with = "or_default")]
    pub phone: String,
    #[serde(default, deserialize_with = "or_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "or_default")]
    pub status: UserStatus,
    #[serde(default, deserialize_with = "or_default")]
    pub password: String,
}

/// Payload for creating a new user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub status: UserStatus,
    pub password: String,
}

impl Record for User {
    type Draft = UserDraft;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn from_draft(id: RecordId, draft: UserDraft) -> Self {
        Self {
            id,
            full_name: draft.full_name,
            email: draft.email,
            phone: draft.phone,
            role: draft.role,
            status: draft.status,
            password: draft.password,
        }
    }
}
