//! Space client.

use std::sync::Arc;

use serde_json::json;

use crate::endpoints::{ApiRequest, QueryParams, Requester, encode_path_segment};
use crate::error::Result;
use crate::models::{Space, SpaceFields, SpaceFilter};

#[derive(Debug, Clone)]
pub struct SpaceClient {
    requester: Arc<dyn Requester>,
}

impl SpaceClient {
    pub fn new(requester: Arc<dyn Requester>) -> Self {
        Self { requester }
    }

    fn item_path(space: &str) -> String {
        format!("/spaces/{}", encode_path_segment(space))
    }

    pub async fn get(&self, space: &str) -> Result<Space> {
        self.requester
            .request(ApiRequest::get(Self::item_path(space)))
            .await?
            .decode("space")
    }

    /// Spaces visible to the credential: custom only, or all including private ones.
    pub async fn list(&self, filter: SpaceFilter) -> Result<Vec<Space>> {
        let params = QueryParams::new().required("filter", filter.as_str());
        self.requester
            .request(ApiRequest::get("/spaces").params(params))
            .await?
            .embedded("spaces", "space")
    }

    pub async fn create(&self, name: &str, description: Option<&str>) -> Result<Space> {
        let fields = SpaceFields {
            name: Some(name),
            description,
        };
        self.requester
            .request(ApiRequest::post("/spaces").json(json!({ "space": fields })))
            .await?
            .decode("space")
    }

    /// Change the given fields of a space. Mode takes space updates as POST.
    pub async fn update(&self, space: &str, fields: &SpaceFields<'_>) -> Result<Space> {
        self.requester
            .request(ApiRequest::post(Self::item_path(space)).json(json!({ "space": fields })))
            .await?
            .decode("space")
    }

    pub async fn delete(&self, space: &str) -> Result<()> {
        self.requester
            .request(ApiRequest::delete(Self::item_path(space)))
            .await?;
        Ok(())
    }
}
