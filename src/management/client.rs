//! Descope management API client.
//!
//! # Responsibilities
//! - Authenticate every call with `Bearer <project_id>:<management_key>`
//! - Single-shot list/delete calls for users, tenants, permissions, roles
//! - Retried raw calls for custom user attributes

use reqwest::header::HeaderMap;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CleanupConfig;
use crate::error::{CleanupError, CleanupResult};
use crate::http::{bearer_headers, ApiRequest, ApiResponse, HttpTransport, ReqwestTransport};
use crate::management::api::ManagementApi;
use crate::management::types::{
    CustomAttribute, CustomAttributesResponse, DeleteByIdRequest, DeleteByNameRequest,
    DeleteCustomAttributesRequest, DeleteUserRequest, Permission, PermissionsResponse, Role,
    RolesResponse, Tenant, TenantsResponse, User, UserSearchRequest, UsersResponse,
};
use crate::resilience::{RetryPolicy, RetryingCaller, Sleeper, TokioSleeper};

pub const USER_SEARCH_PATH: &str = "/v2/mgmt/user/search";
pub const USER_DELETE_PATH: &str = "/v1/mgmt/user/delete";
pub const CUSTOM_ATTRIBUTES_PATH: &str = "/v1/mgmt/user/customattributes";
pub const CUSTOM_ATTRIBUTE_DELETE_PATH: &str = "/v1/mgmt/user/customattribute/delete";
pub const TENANT_LOAD_ALL_PATH: &str = "/v1/mgmt/tenant/all";
pub const TENANT_DELETE_PATH: &str = "/v1/mgmt/tenant/delete";
pub const PERMISSION_LOAD_ALL_PATH: &str = "/v1/mgmt/authz/permission/all";
pub const PERMISSION_DELETE_PATH: &str = "/v1/mgmt/authz/permission/delete";
pub const ROLE_LOAD_ALL_PATH: &str = "/v1/mgmt/authz/role/all";
pub const ROLE_DELETE_PATH: &str = "/v1/mgmt/authz/role/delete";

/// Authenticated handle to one project's management API.
#[derive(Clone)]
pub struct DescopeClient<T = ReqwestTransport, S = TokioSleeper> {
    caller: RetryingCaller<T, S>,
    base_url: String,
    headers: HeaderMap,
    project_id: String,
}

impl DescopeClient {
    /// Create a client from validated configuration.
    ///
    /// # Returns
    /// A client, or `CleanupError::Init` if credentials are missing or unusable
    pub fn new(config: &CleanupConfig) -> CleanupResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("descope-reset/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CleanupError::Init(format!("HTTP client: {}", e)))?;

        let caller = RetryingCaller::new(
            ReqwestTransport::new(http),
            RetryPolicy::from(&config.retries),
        );

        let client = Self::with_caller(
            &config.project_id,
            &config.management_key,
            &config.base_url,
            caller,
        )?;

        tracing::info!(
            project_id = %config.project_id,
            base_url = %client.base_url,
            "Management client initialized"
        );

        Ok(client)
    }
}

impl<T: HttpTransport, S: Sleeper> DescopeClient<T, S> {
    /// Create a client over an arbitrary transport and sleeper.
    pub fn with_caller(
        project_id: &str,
        management_key: &str,
        base_url: &str,
        caller: RetryingCaller<T, S>,
    ) -> CleanupResult<Self> {
        if project_id.trim().is_empty() {
            return Err(CleanupError::Init("project id is empty".to_string()));
        }
        if management_key.trim().is_empty() {
            return Err(CleanupError::Init("management key is empty".to_string()));
        }

        Ok(Self {
            caller,
            base_url: base_url.trim_end_matches('/').to_string(),
            headers: bearer_headers(project_id, management_key)?,
            project_id: project_id.to_string(),
        })
    }

    pub fn caller(&self) -> &RetryingCaller<T, S> {
        &self.caller
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send once, without retry, and require a 2xx status.
    async fn execute(
        &self,
        request: ApiRequest,
        operation: &'static str,
    ) -> CleanupResult<ApiResponse> {
        self.caller
            .transport()
            .send(&request, self.caller.policy().timeout)
            .await
            .map_err(|e| CleanupError::Transport { operation, source: e })?
            .require_success(operation)
    }

    async fn fetch<R>(&self, path: &str, operation: &'static str) -> CleanupResult<R>
    where
        R: DeserializeOwned + Send,
    {
        let request = ApiRequest::get(self.url(path), self.headers.clone());
        self.execute(request, operation).await?.json(operation)
    }

    async fn post<P>(&self, path: &str, payload: &P, operation: &'static str) -> CleanupResult<()>
    where
        P: Serialize + Sync,
    {
        let request = ApiRequest::post_json(self.url(path), self.headers.clone(), payload)?;
        self.execute(request, operation).await?;
        Ok(())
    }

    /// Send through the retrying caller; exhaustion and aborts become errors.
    async fn call_with_retry(
        &self,
        request: ApiRequest,
        operation: &'static str,
    ) -> CleanupResult<ApiResponse> {
        self.caller
            .call(&request)
            .await
            .map_err(|e| CleanupError::Retry { operation, source: e })
    }
}

impl<T: HttpTransport, S: Sleeper> ManagementApi for DescopeClient<T, S> {
    async fn search_all_users(&self) -> CleanupResult<Vec<User>> {
        let operation = "search users";
        let request = ApiRequest::post_json(
            self.url(USER_SEARCH_PATH),
            self.headers.clone(),
            &UserSearchRequest { limit: 0, page: 0 },
        )?;
        let resp: UsersResponse = self.execute(request, operation).await?.json(operation)?;
        Ok(resp.users)
    }

    async fn delete_user(&self, login_id: &str) -> CleanupResult<()> {
        self.post(USER_DELETE_PATH, &DeleteUserRequest { login_id }, "delete user")
            .await
    }

    async fn load_custom_attributes(&self) -> CleanupResult<Vec<CustomAttribute>> {
        let operation = "load custom attributes";
        let request = ApiRequest::get(self.url(CUSTOM_ATTRIBUTES_PATH), self.headers.clone());
        let resp: CustomAttributesResponse = self
            .call_with_retry(request, operation)
            .await?
            .require_ok(operation)?
            .json(operation)?;
        Ok(resp.data)
    }

    async fn delete_custom_attributes(&self, names: &[String]) -> CleanupResult<()> {
        let operation = "delete custom attributes";
        let request = ApiRequest::post_json(
            self.url(CUSTOM_ATTRIBUTE_DELETE_PATH),
            self.headers.clone(),
            &DeleteCustomAttributesRequest { names },
        )?;
        self.call_with_retry(request, operation)
            .await?
            .require_success(operation)?;
        Ok(())
    }

    async fn load_all_tenants(&self) -> CleanupResult<Vec<Tenant>> {
        let resp: TenantsResponse = self.fetch(TENANT_LOAD_ALL_PATH, "load tenants").await?;
        Ok(resp.tenants)
    }

    async fn delete_tenant(&self, id: &str) -> CleanupResult<()> {
        self.post(TENANT_DELETE_PATH, &DeleteByIdRequest { id }, "delete tenant")
            .await
    }

    async fn load_all_permissions(&self) -> CleanupResult<Vec<Permission>> {
        let resp: PermissionsResponse = self
            .fetch(PERMISSION_LOAD_ALL_PATH, "load permissions")
            .await?;
        Ok(resp.permissions)
    }

    async fn delete_permission(&self, name: &str) -> CleanupResult<()> {
        self.post(PERMISSION_DELETE_PATH, &DeleteByNameRequest { name }, "delete permission")
            .await
    }

    async fn load_all_roles(&self) -> CleanupResult<Vec<Role>> {
        let resp: RolesResponse = self.fetch(ROLE_LOAD_ALL_PATH, "load roles").await?;
        Ok(resp.roles)
    }

    async fn delete_role(&self, name: &str) -> CleanupResult<()> {
        self.post(ROLE_DELETE_PATH, &DeleteByNameRequest { name }, "delete role")
            .await
    }
}

impl<T, S> std::fmt::Debug for DescopeClient<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DescopeClient")
            .field("project_id", &self.project_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransportError;
    use crate::http::Method;
    use crate::resilience::retries::testing::{RecordingSleeper, ScriptedTransport};
    use crate::resilience::RetryError;

    fn client(transport: ScriptedTransport) -> DescopeClient<ScriptedTransport, RecordingSleeper> {
        let caller = RetryingCaller::with_sleeper(
            transport,
            RecordingSleeper::default(),
            RetryPolicy::default(),
        );
        DescopeClient::with_caller("P2abc", "K2xyz", "https://api.descope.com/", caller).unwrap()
    }

    #[test]
    fn test_empty_credentials_fail_init() {
        let caller = RetryingCaller::with_sleeper(
            ScriptedTransport::always(ScriptedTransport::status(200, "{}")),
            RecordingSleeper::default(),
            RetryPolicy::default(),
        );
        let result = DescopeClient::with_caller("", "K2xyz", "https://api.descope.com", caller);
        assert!(matches!(result, Err(CleanupError::Init(_))));
    }

    #[test]
    fn test_debug_hides_key() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(200, "{}")));
        let printed = format!("{:?}", client);
        assert!(printed.contains("P2abc"));
        assert!(!printed.contains("K2xyz"));
    }

    #[tokio::test]
    async fn test_custom_attribute_delete_body() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(200, "{}")));
        let names = vec!["a".to_string(), "b".to_string(), "c".to_string()];

        client.delete_custom_attributes(&names).await.unwrap();

        let sent = client.caller().transport().sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, Method::Post);
        assert_eq!(sent[0].1, "https://api.descope.com/v1/mgmt/user/customattribute/delete");
        assert_eq!(sent[0].2.as_deref(), Some(r#"{"names":["a","b","c"]}"#));
    }

    #[tokio::test]
    async fn test_custom_attributes_retried_on_rate_limit() {
        let client = client(ScriptedTransport::new(
            vec![ScriptedTransport::status(429, "")],
            ScriptedTransport::status(200, r#"{"data":[{"name":"dept"},{"name":"level"}]}"#),
        ));

        let attrs = client.load_custom_attributes().await.unwrap();

        assert_eq!(attrs.len(), 2);
        assert_eq!(attrs[1].name, "level");
        assert_eq!(client.caller().sleeper().delays(), vec![5]);
    }

    #[tokio::test]
    async fn test_custom_attributes_non_200_is_error() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(401, "unauthorized")));

        let result = client.load_custom_attributes().await;

        assert!(matches!(
            result,
            Err(CleanupError::UnexpectedStatus { operation: "load custom attributes", .. })
        ));
    }

    #[tokio::test]
    async fn test_custom_attributes_exhausted_is_error() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(429, "")));

        let result = client.load_custom_attributes().await;

        assert!(matches!(
            result,
            Err(CleanupError::Retry { source: RetryError::Exhausted { attempts: 4 }, .. })
        ));
    }

    #[tokio::test]
    async fn test_sdk_calls_are_not_retried() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(429, "")));

        let result = client.load_all_roles().await;

        assert!(matches!(result, Err(CleanupError::UnexpectedStatus { .. })));
        assert_eq!(client.caller().transport().requests(), 1);
        assert!(client.caller().sleeper().delays().is_empty());
    }

    #[tokio::test]
    async fn test_sdk_transport_error() {
        let client = client(ScriptedTransport::always(Err(TransportError::Request(
            "dns".to_string(),
        ))));

        let result = client.delete_tenant("T1").await;

        assert!(matches!(
            result,
            Err(CleanupError::Transport { operation: "delete tenant", .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_payloads_and_paths() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(200, "{}")));

        client.delete_user("a@example.com").await.unwrap();
        client.delete_tenant("T1").await.unwrap();
        client.delete_permission("read").await.unwrap();
        client.delete_role("admin").await.unwrap();

        let sent = client.caller().transport().sent();
        let summary: Vec<(&str, &str)> = sent
            .iter()
            .map(|(_, url, body)| (url.as_str(), body.as_deref().unwrap_or("")))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("https://api.descope.com/v1/mgmt/user/delete", r#"{"loginId":"a@example.com"}"#),
                ("https://api.descope.com/v1/mgmt/tenant/delete", r#"{"id":"T1"}"#),
                ("https://api.descope.com/v1/mgmt/authz/permission/delete", r#"{"name":"read"}"#),
                ("https://api.descope.com/v1/mgmt/authz/role/delete", r#"{"name":"admin"}"#),
            ]
        );
    }

    #[tokio::test]
    async fn test_search_users_posts_search() {
        let client = client(ScriptedTransport::always(ScriptedTransport::status(
            200,
            r#"{"users":[{"loginIds":["a@example.com"]}]}"#,
        )));

        let users = client.search_all_users().await.unwrap();

        assert_eq!(users.len(), 1);
        let sent = client.caller().transport().sent();
        assert_eq!(sent[0].0, Method::Post);
        assert_eq!(sent[0].1, "https://api.descope.com/v2/mgmt/user/search");
    }
}
