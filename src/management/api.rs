//! Management capability consumed by the cleanup passes.

use std::future::Future;

use crate::error::CleanupResult;
use crate::management::types::{CustomAttribute, Permission, Role, Tenant, User};

/// List and delete operations on a project's identity resources.
///
/// Passed explicitly to the orchestrator so tests can substitute a fake.
pub trait ManagementApi: Send + Sync {
    fn search_all_users(&self) -> impl Future<Output = CleanupResult<Vec<User>>> + Send;

    fn delete_user(&self, login_id: &str) -> impl Future<Output = CleanupResult<()>> + Send;

    /// Retried on rate limiting and read timeouts.
    fn load_custom_attributes(
        &self,
    ) -> impl Future<Output = CleanupResult<Vec<CustomAttribute>>> + Send;

    /// Retried on rate limiting and read timeouts.
    fn delete_custom_attributes(
        &self,
        names: &[String],
    ) -> impl Future<Output = CleanupResult<()>> + Send;

    fn load_all_tenants(&self) -> impl Future<Output = CleanupResult<Vec<Tenant>>> + Send;

    fn delete_tenant(&self, id: &str) -> impl Future<Output = CleanupResult<()>> + Send;

    fn load_all_permissions(&self) -> impl Future<Output = CleanupResult<Vec<Permission>>> + Send;

    fn delete_permission(&self, name: &str) -> impl Future<Output = CleanupResult<()>> + Send;

    fn load_all_roles(&self) -> impl Future<Output = CleanupResult<Vec<Role>>> + Send;

    fn delete_role(&self, name: &str) -> impl Future<Output = CleanupResult<()>> + Send;
}
