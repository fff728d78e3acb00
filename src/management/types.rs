//! Management API resource and payload types.

use serde::{Deserialize, Serialize};

/// A project user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Login identifiers; the first is the primary key.
    #[serde(default)]
    pub login_ids: Vec<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl User {
    pub fn primary_login_id(&self) -> Option<&str> {
        self.login_ids.first().map(String::as_str)
    }
}

/// A project-defined extra user field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomAttribute {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tenant {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Permission {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Role {
    pub name: String,
}

// Response envelopes. Missing lists decode as empty.

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UsersResponse {
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CustomAttributesResponse {
    #[serde(default)]
    pub data: Vec<CustomAttribute>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TenantsResponse {
    #[serde(default)]
    pub tenants: Vec<Tenant>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PermissionsResponse {
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RolesResponse {
    #[serde(default)]
    pub roles: Vec<Role>,
}

// Request payloads.

#[derive(Debug, Serialize)]
pub(crate) struct UserSearchRequest {
    pub limit: u32,
    pub page: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct DeleteUserRequest<'a> {
    pub login_id: &'a str,
}

/// Batch delete of custom attributes by name.
#[derive(Debug, Serialize)]
pub struct DeleteCustomAttributesRequest<'a> {
    pub names: &'a [String],
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteByIdRequest<'a> {
    pub id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteByNameRequest<'a> {
    pub name: &'a str,
}
