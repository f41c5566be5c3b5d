//! Qdrant vector store provider implementation
//!
//! Talks to a Qdrant server over gRPC. One client is created at start-up;
//! it multiplexes every request over a shared channel and is safe to use
//! from concurrent tasks without locking.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use qdrant_client::qdrant::value::Kind;
use qdrant_client::qdrant::{
    CreateCollectionBuilder, Distance, PointStruct, Query, QueryPointsBuilder,
    UpsertPointsBuilder, Value as QdrantValue, VectorParamsBuilder,
};
use qdrant_client::{Payload, Qdrant};
use serde_json::{Map, Number, Value};
use snipdex_domain::error::{Error, Result};
use snipdex_domain::ports::providers::VectorStoreProvider;
use snipdex_domain::value_objects::{DistanceMetric, ScoredPayload, SnippetRecord};
use tracing::{debug, info};

use crate::constants::QDRANT_ADMIN_TIMEOUT;

/// Qdrant vector store provider
pub struct QdrantVectorStoreProvider {
    client: Qdrant,
}

impl QdrantVectorStoreProvider {
    /// Connect to the Qdrant server at `address` (gRPC, e.g. `http://localhost:6334`)
    ///
    /// The connection is established lazily; an unreachable server surfaces
    /// on the first call.
    pub fn new(address: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        let client = Qdrant::from_url(address)
            .api_key(api_key)
            .timeout(timeout)
            .build()
            .map_err(|e| Error::vector_db(format!("Failed to create Qdrant client: {e}")))?;

        Ok(Self { client })
    }

    /// Run an administrative call under the fixed admin deadline
    async fn admin_call<T, F>(operation: &str, call: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, qdrant_client::QdrantError>>,
    {
        match tokio::time::timeout(QDRANT_ADMIN_TIMEOUT, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(Error::vector_db(format!("Qdrant {operation} failed: {e}"))),
            Err(_) => Err(Error::vector_db(format!(
                "Qdrant {operation} timed out after {QDRANT_ADMIN_TIMEOUT:?}"
            ))),
        }
    }
}

/// Map a domain distance metric to the Qdrant enum
fn to_qdrant_distance(metric: DistanceMetric) -> Distance {
    match metric {
        DistanceMetric::Cosine => Distance::Cosine,
        DistanceMetric::Dot => Distance::Dot,
        DistanceMetric::Euclid => Distance::Euclid,
    }
}

/// Convert a Qdrant payload value back to JSON
fn qdrant_value_to_json(value: QdrantValue) -> Value {
    match value.kind {
        Some(Kind::StringValue(s)) => Value::String(s),
        Some(Kind::IntegerValue(i)) => Value::Number(i.into()),
        Some(Kind::DoubleValue(d)) => Number::from_f64(d).map_or(Value::Null, Value::Number),
        Some(Kind::BoolValue(b)) => Value::Bool(b),
        Some(Kind::StructValue(s)) => Value::Object(payload_to_json(s.fields)),
        Some(Kind::ListValue(list)) => {
            Value::Array(list.values.into_iter().map(qdrant_value_to_json).collect())
        }
        Some(Kind::NullValue(_)) | None => Value::Null,
    }
}

/// Convert a Qdrant payload map to a JSON object
fn payload_to_json(payload: HashMap<String, QdrantValue>) -> Map<String, Value> {
    payload
        .into_iter()
        .map(|(key, value)| (key, qdrant_value_to_json(value)))
        .collect()
}

#[async_trait]
impl VectorStoreProvider for QdrantVectorStoreProvider {
    async fn collection_exists(&self, name: &str) -> Result<bool> {
        Self::admin_call("collection check", self.client.collection_exists(name)).await
    }

    async fn ensure_collection(
        &self,
        name: &str,
        dimensions: usize,
        metric: DistanceMetric,
    ) -> Result<()> {
        if self.collection_exists(name).await? {
            debug!(collection = name, "Qdrant collection already exists");
            return Ok(());
        }

        let request = CreateCollectionBuilder::new(name).vectors_config(VectorParamsBuilder::new(
            dimensions as u64,
            to_qdrant_distance(metric),
        ));
        Self::admin_call("collection creation", self.client.create_collection(request)).await?;

        info!(collection = name, dimensions, metric = %metric, "Created Qdrant collection");
        Ok(())
    }

    async fn upsert(&self, collection: &str, record: &SnippetRecord) -> Result<()> {
        let payload = Payload::try_from(Value::Object(record.payload.to_json_map()))
            .map_err(|e| Error::vector_db(format!("Invalid snippet payload: {e}")))?;
        let point = PointStruct::new(record.id.clone(), record.vector.vector.clone(), payload);

        self.client
            .upsert_points(UpsertPointsBuilder::new(collection, vec![point]).wait(true))
            .await
            .map_err(|e| Error::vector_db(format!("Qdrant upsert failed: {e}")))?;
        Ok(())
    }

    async fn query(
        &self,
        collection: &str,
        vector: &[f32],
        limit: usize,
    ) -> Result<Vec<ScoredPayload>> {
        let request = QueryPointsBuilder::new(collection)
            .query(Query::new_nearest(vector.to_vec()))
            .limit(limit as u64)
            .with_payload(true);

        let response = self
            .client
            .query(request)
            .await
            .map_err(|e| Error::vector_db(format!("Qdrant query failed: {e}")))?;

        Ok(response
            .result
            .into_iter()
            .map(|point| ScoredPayload {
                payload: (!point.payload.is_empty()).then(|| payload_to_json(point.payload)),
                score: point.score,
            })
            .collect())
    }

    fn provider_name(&self) -> &str {
        "qdrant"
    }
}
