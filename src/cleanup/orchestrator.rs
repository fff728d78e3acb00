//! Sequences the five deletion passes against one project.

use crate::cleanup::report::{Pass, RunSummary};
use crate::error::{CleanupError, CleanupResult};
use crate::management::ManagementApi;

/// Runs the reset against an injected management handle.
#[derive(Debug)]
pub struct Cleanup<M> {
    api: M,
    progress_interval: usize,
}

impl<M: ManagementApi> Cleanup<M> {
    pub fn new(api: M, progress_interval: usize) -> Self {
        Self {
            api,
            progress_interval: progress_interval.max(1),
        }
    }

    pub fn api(&self) -> &M {
        &self.api
    }

    /// Run every pass in order.
    ///
    /// An error in the users, tenants, permissions or roles pass halts the run.
    /// A custom-attribute failure is logged, recorded as skipped, and the run
    /// moves on.
    pub async fn run(&self) -> CleanupResult<RunSummary> {
        let mut summary = RunSummary::default();

        summary.record(Pass::Users, self.clear_users().await?);

        match self.clear_custom_attributes().await {
            Ok(count) => summary.record(Pass::CustomAttributes, count),
            Err(e) => {
                tracing::error!(error = %e, "Failed to clear custom user attributes");
                summary.skip(Pass::CustomAttributes, e.to_string());
            }
        }

        summary.record(Pass::Tenants, self.clear_tenants().await?);
        summary.record(Pass::Permissions, self.clear_permissions().await?);
        summary.record(Pass::Roles, self.clear_roles().await?);

        Ok(summary)
    }

    pub async fn clear_users(&self) -> CleanupResult<usize> {
        let users = self.api.search_all_users().await?;
        tracing::info!("Deleting {} users:", users.len());

        let mut count = 0;
        for user in &users {
            let login_id = user.primary_login_id().ok_or_else(|| {
                CleanupError::MissingLoginId(user.user_id.clone().unwrap_or_default())
            })?;
            self.api.delete_user(login_id).await?;
            count += 1;
            if is_progress_checkpoint(count, self.progress_interval) {
                tracing::info!("\tDeleted {} users", count);
            }
        }
        Ok(count)
    }

    pub async fn clear_custom_attributes(&self) -> CleanupResult<usize> {
        let attrs = self.api.load_custom_attributes().await?;
        tracing::info!("Deleting {} custom user attributes:", attrs.len());

        let names: Vec<String> = attrs.into_iter().map(|attr| attr.name).collect();
        self.api.delete_custom_attributes(&names).await?;
        Ok(names.len())
    }

    pub async fn clear_tenants(&self) -> CleanupResult<usize> {
        let tenants = self.api.load_all_tenants().await?;
        tracing::info!("Deleting {} tenants", tenants.len());

        for tenant in &tenants {
            self.api.delete_tenant(&tenant.id).await?;
        }
        Ok(tenants.len())
    }

    pub async fn clear_permissions(&self) -> CleanupResult<usize> {
        let permissions = self.api.load_all_permissions().await?;
        tracing::info!("Deleting {} permissions", permissions.len());

        for permission in &permissions {
            self.api.delete_permission(&permission.name).await?;
        }
        Ok(permissions.len())
    }

    pub async fn clear_roles(&self) -> CleanupResult<usize> {
        let roles = self.api.load_all_roles().await?;
        tracing::info!("Deleting {} roles", roles.len());

        for role in &roles {
            self.api.delete_role(&role.name).await?;
        }
        Ok(roles.len())
    }
}

/// True when `count` deletions should be reported.
fn is_progress_checkpoint(count: usize, interval: usize) -> bool {
    count > 0 && count % interval == 0
}
