//! Account client.

use std::sync::Arc;

use crate::endpoints::{ApiRequest, Requester, Surface, encode_path_segment};
use crate::error::Result;
use crate::models::Account;

/// Reads user and organization accounts. Account paths are not workspace-scoped.
#[derive(Debug, Clone)]
pub struct AccountClient {
    requester: Arc<dyn Requester>,
}

impl AccountClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    /// Get an account (user or organization) by username.
    pub async fn get(&self, account: &str) -> Result<Account> {
        let path = format!("/{}", encode_path_segment(account));
        self.requester
            .request(ApiRequest::get(path).on(Surface::Account))
            .await?
            .decode("account")
    }
}
