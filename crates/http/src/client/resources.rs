//! Resource endpoints consumed by the console pages

use super::{ApiClient, error::ClientError};
use reqwest::Method;
use serde_json::Value;

/// Backend collections exposed to the pages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Products,
    Orders,
    Sellers,
    Categories,
    Settings,
    Reviews,
}

impl Resource {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Products => "/products",
            Self::Orders => "/orders",
            Self::Sellers => "/sellers",
            Self::Categories => "/categories",
            Self::Settings => "/settings",
            Self::Reviews => "/reviews",
        }
    }
}

/// Untyped CRUD helpers; every call goes through the intercepting client
#[derive(Clone)]
pub struct ResourceClient {
    client: ApiClient,
}

impl ResourceClient {
    pub const fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, resource: Resource) -> Result<Value, ClientError> {
        let request = self.client.request(Method::GET, resource.path());
        self.client.execute(request).await
    }

    pub async fn get(&self, resource: Resource, id: &str) -> Result<Value, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("{}/{id}", resource.path()));
        self.client.execute(request).await
    }

    pub async fn create(&self, resource: Resource, body: &Value) -> Result<Value, ClientError> {
        let request = self.client.request(Method::POST, resource.path()).json(body);
        self.client.execute(request).await
    }

    pub async fn update(
        &self,
        resource: Resource,
        id: &str,
        body: &Value,
    ) -> Result<Value, ClientError> {
        let request = self
            .client
            .request(Method::PUT, &format!("{}/{id}", resource.path()))
            .json(body);
        self.client.execute(request).await
    }

    pub async fn delete(&self, resource: Resource, id: &str) -> Result<(), ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("{}/{id}", resource.path()));
        self.client.execute::<Value>(request).await.map(|_| ())
    }

    /// Upload a file (e.g. a product image) as multipart form data
    pub async fn upload(
        &self,
        resource: Resource,
        form: reqwest::multipart::Form,
    ) -> Result<Value, ClientError> {
        self.client
            .upload(&format!("{}/upload", resource.path()), form)
            .await
    }
}
