//! In-memory API doubles for controller tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::error::ClientError;
use crate::net::posts::PostsApi;
use crate::net::telemetry::TelemetryApi;
use crate::net::types::{Post, PostDraft, PostId, Prediction, RealtimeReading, Station};

// =========================================================================
// MockPosts
// =========================================================================

/// Posts backend that behaves like the real service: ids assigned on create,
/// 404 for unknown ids, newest first on list.
#[derive(Default)]
pub(crate) struct MockPosts {
    posts: Mutex<Vec<Post>>,
    next_id: Mutex<i64>,
    calls: Mutex<Vec<String>>,
    gates: Mutex<HashMap<PostId, oneshot::Receiver<()>>>,
    fail_list: Mutex<bool>,
    fail_mutations: Mutex<bool>,
}

impl MockPosts {
    pub(crate) fn seeded(titles: &[&str]) -> Self {
        let mock = Self::default();
        for title in titles {
            mock.insert(title, &format!("{title} body"));
        }
        mock.calls.lock().unwrap().clear();
        mock
    }

    fn insert(&self, title: &str, content: &str) -> Post {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let post = Post {
            id: PostId(*next_id),
            title: title.to_owned(),
            content: content.to_owned(),
            created_at: Some(format!("2025-03-01T09:{:02}:00", *next_id)),
            updated_at: None,
        };
        self.posts.lock().unwrap().push(post.clone());
        post
    }

    /// Hold the next get, update, or delete of `id` until the returned sender
    /// fires.
    pub(crate) fn gate(&self, id: PostId) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(id, rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    pub(crate) fn fail_mutations(&self, fail: bool) {
        *self.fail_mutations.lock().unwrap() = fail;
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_gate(&self, id: PostId) {
        let gate = self.gates.lock().unwrap().remove(&id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    fn mutation_guard(&self) -> Result<(), ClientError> {
        if *self.fail_mutations.lock().unwrap() {
            return Err(ClientError::Status { status: 500 });
        }
        Ok(())
    }
}

#[async_trait(?Send)]
impl PostsApi for MockPosts {
    async fn list_posts(&self) -> Result<Vec<Post>, ClientError> {
        self.record("list".to_owned());
        if *self.fail_list.lock().unwrap() {
            return Err(ClientError::Network("connection refused".to_owned()));
        }
        let mut posts = self.posts.lock().unwrap().clone();
        posts.reverse();
        Ok(posts)
    }

    async fn get_post(&self, id: PostId) -> Result<Post, ClientError> {
        self.record(format!("get {id}"));
        self.wait_gate(id).await;
        self.posts
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ClientError::NotFound)
    }

    async fn create_post(&self, draft: &PostDraft) -> Result<Post, ClientError> {
        self.record("create".to_owned());
        self.mutation_guard()?;
        Ok(self.insert(&draft.title, &draft.content))
    }

    async fn update_post(&self, id: PostId, draft: &PostDraft) -> Result<Post, ClientError> {
        self.record(format!("update {id}"));
        self.wait_gate(id).await;
        self.mutation_guard()?;
        let mut posts = self.posts.lock().unwrap();
        let post = posts.iter_mut().find(|p| p.id == id).ok_or(ClientError::NotFound)?;
        post.title.clone_from(&draft.title);
        post.content.clone_from(&draft.content);
        post.updated_at = Some("2025-03-02T10:00:00".to_owned());
        Ok(post.clone())
    }

    async fn delete_post(&self, id: PostId) -> Result<(), ClientError> {
        self.record(format!("delete {id}"));
        self.wait_gate(id).await;
        self.mutation_guard()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id != id);
        if posts.len() == before {
            return Err(ClientError::NotFound);
        }
        Ok(())
    }
}

// =========================================================================
// MockTelemetry
// =========================================================================

/// Telemetry service with per-station readings and predictions. Stations
/// without an entry answer 404.
#[derive(Default)]
pub(crate) struct MockTelemetry {
    pub(crate) stations: Vec<Station>,
    pub(crate) fail_listing: bool,
    pub(crate) realtime: HashMap<String, RealtimeReading>,
    pub(crate) predictions: HashMap<String, Prediction>,
    pub(crate) fail_predictions: bool,
    pub(crate) calls: Mutex<Vec<String>>,
    pub(crate) gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockTelemetry {
    /// Hold `realtime(station_id)` until the returned sender fires.
    pub(crate) fn gate(&self, station_id: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(station_id.to_owned(), rx);
        tx
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl TelemetryApi for MockTelemetry {
    async fn list_stations(&self, limit: u32) -> Result<Vec<Station>, ClientError> {
        self.record(format!("stations {limit}"));
        if self.fail_listing {
            return Err(ClientError::Network("timeout".to_owned()));
        }
        Ok(self.stations.iter().take(limit as usize).cloned().collect())
    }

    async fn realtime(&self, station_id: &str) -> Result<RealtimeReading, ClientError> {
        self.record(format!("realtime {station_id}"));
        let gate = self.gates.lock().unwrap().remove(station_id);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.realtime.get(station_id).cloned().ok_or(ClientError::NotFound)
    }

    async fn prediction(&self, station_id: &str) -> Result<Prediction, ClientError> {
        self.record(format!("predict {station_id}"));
        if self.fail_predictions {
            return Err(ClientError::Status { status: 500 });
        }
        self.predictions.get(station_id).cloned().ok_or(ClientError::NotFound)
    }
}

pub(crate) fn station(id: &str, name: &str) -> Station {
    Station { station_id: id.to_owned(), name: name.to_owned() }
}

pub(crate) fn reading(name: &str, bikes: u32) -> RealtimeReading {
    RealtimeReading { name: name.to_owned(), bikes, docks: 12, ts: "2025-03-01T09:00:00+09:00".to_owned() }
}

pub(crate) fn prediction(bikes: u32) -> Prediction {
    Prediction {
        predicted_bikes: bikes,
        model_version: "lgbm-v2".to_owned(),
        target_time: "2025-03-01T09:10:00+09:00".to_owned(),
    }
}
