use async_trait::async_trait;
use mymanga_admin::api::{ApiError, CollectionSource};
use mymanga_admin::filter::ListingQuery;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::oneshot;

/// A request the fake received, in arrival order
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List {
        endpoint: String,
        params: Vec<(String, String)>,
    },
    Get {
        endpoint: String,
        id: String,
    },
    Delete {
        endpoint: String,
        id: String,
    },
}

/// In-memory admin API.
///
/// Collections are plain JSON records. `name` filters match by
/// case-insensitive substring; other filters must match exactly.
#[derive(Default)]
pub struct FakeSource {
    collections: Mutex<HashMap<String, Vec<Value>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(self, endpoint: &str, records: Vec<Value>) -> Self {
        self.collections
            .lock()
            .unwrap()
            .insert(endpoint.to_string(), records);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Query parameters of every list call, in order
    pub fn list_params(&self) -> Vec<Vec<(String, String)>> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::List { params, .. } => Some(params),
                _ => None,
            })
            .collect()
    }

    fn id_of(record: &Value) -> String {
        match &record["id"] {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    fn matches(record: &Value, query: &ListingQuery) -> bool {
        query.filters().iter().all(|(name, wanted)| {
            let actual = match record.get(name) {
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
                None => return false,
            };
            if name == "name" {
                actual.to_lowercase().contains(&wanted.to_lowercase())
            } else {
                &actual == wanted
            }
        })
    }
}

#[async_trait]
impl CollectionSource for FakeSource {
    async fn list(&self, endpoint: &str, query: &ListingQuery) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(Call::List {
            endpoint: endpoint.to_string(),
            params: query.to_params(),
        });

        let collections = self.collections.lock().unwrap();
        let records = collections.get(endpoint).ok_or(ApiError::NotFound)?;
        let matching: Vec<&Value> = records
            .iter()
            .filter(|record| Self::matches(record, query))
            .collect();

        let start = ((query.page - 1) * query.page_size) as usize;
        let data: Vec<&Value> = matching
            .iter()
            .skip(start)
            .take(query.page_size as usize)
            .copied()
            .collect();

        Ok(json!({
            "data": data,
            "total": matching.len(),
            "page": query.page,
            "limit": query.page_size,
        }))
    }

    async fn get(&self, endpoint: &str, id: &str) -> Result<Value, ApiError> {
        self.calls.lock().unwrap().push(Call::Get {
            endpoint: endpoint.to_string(),
            id: id.to_string(),
        });

        let collections = self.collections.lock().unwrap();
        collections
            .get(endpoint)
            .and_then(|records| records.iter().find(|record| Self::id_of(record) == id))
            .map(|record| json!({ "data": record }))
            .ok_or(ApiError::NotFound)
    }

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(Call::Delete {
            endpoint: endpoint.to_string(),
            id: id.to_string(),
        });

        let mut collections = self.collections.lock().unwrap();
        let records = collections.get_mut(endpoint).ok_or(ApiError::NotFound)?;
        let before = records.len();
        records.retain(|record| Self::id_of(record) != id);
        if records.len() == before {
            return Err(ApiError::NotFound);
        }
        Ok(())
    }
}

/// Wraps a [`FakeSource`] so that list calls for a given `name` filter
/// block until the test opens that gate
pub struct GatedSource {
    inner: FakeSource,
    gates: Mutex<HashMap<String, oneshot::Receiver<()>>>,
}

impl GatedSource {
    pub fn new(inner: FakeSource) -> Self {
        Self {
            inner,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the sender that releases list calls filtered by `name`
    pub fn gate(&self, name: &str) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(name.to_string(), rx);
        tx
    }
}

#[async_trait]
impl CollectionSource for GatedSource {
    async fn list(&self, endpoint: &str, query: &ListingQuery) -> Result<Value, ApiError> {
        let gate = query
            .filter("name")
            .and_then(|name| self.gates.lock().unwrap().remove(name));
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.inner.list(endpoint, query).await
    }

    async fn get(&self, endpoint: &str, id: &str) -> Result<Value, ApiError> {
        self.inner.get(endpoint, id).await
    }

    async fn delete(&self, endpoint: &str, id: &str) -> Result<(), ApiError> {
        self.inner.delete(endpoint, id).await
    }
}
