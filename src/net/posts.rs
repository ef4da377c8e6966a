//! Posts REST API: the [`PostsApi`] seam and its `gloo-net` implementation.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): every call returns a network error, so
//! controller tests go through mock implementations of the trait instead.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use async_trait::async_trait;

use super::http;
use super::types::{Post, PostDraft, PostId};
use crate::config::AppConfig;
use crate::error::ClientError;

/// CRUD operations against the posts backend.
#[async_trait(?Send)]
pub trait PostsApi {
    /// `GET /posts`, in server order.
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError>;

    /// `GET /posts/{id}`; [`ClientError::NotFound`] when the id is unknown.
    async fn get_post(&self, id: PostId) -> Result<Post, ClientError>;

    /// `POST /posts`. Callers validate the draft before dispatch.
    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError>;

    /// `PUT /posts/{id}`, returning the updated record.
    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ClientError>;

    /// `DELETE /posts/{id}`.
    async fn delete_post(&self, id: PostId) -> Result<(), ClientError>;
}

fn posts_endpoint(base: &str) -> String {
    http::endpoint(base, "/posts")
}

fn post_endpoint(base: &str, id: PostId) -> String {
    http::endpoint(base, &format!("/posts/{id}"))
}

/// Browser HTTP client for the posts API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpPostsApi {
    base_url: String,
}

impl HttpPostsApi {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self { base_url: config.posts_base_url.clone() }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait(?Send)]
impl PostsApi for HttpPostsApi {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&posts_endpoint(&self.base_url))
                .send()
                .await
                .map_err(http::network_error)?;
            http::decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = posts_endpoint(&self.base_url);
            Err(http::transport_unavailable())
        }
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&post_endpoint(&self.base_url, id))
                .send()
                .await
                .map_err(http::network_error)?;
            http::decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = post_endpoint(&self.base_url, id);
            Err(http::transport_unavailable())
        }
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::post(&posts_endpoint(&self.base_url))
                .json(draft)
                .map_err(|e| ClientError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(http::network_error)?;
            http::decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = draft;
            Err(http::transport_unavailable())
        }
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::put(&post_endpoint(&self.base_url, id))
                .json(draft)
                .map_err(|e| ClientError::Decode(e.to_string()))?
                .send()
                .await
                .map_err(http::network_error)?;
            http::decode_json(resp).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, draft);
            Err(http::transport_unavailable())
        }
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::delete(&post_endpoint(&self.base_url, id))
                .send()
                .await
                .map_err(http::network_error)?;
            http::check_status(resp.status())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(http::transport_unavailable())
        }
    }
}
