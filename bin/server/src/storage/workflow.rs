//! In-memory workflow repository.

use chrono::{DateTime, Utc};
use copper_circular_core::WorkflowId;
use copper_circular_editor::WorkflowData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A stored workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowRecord {
    /// Workflow ID.
    pub id: WorkflowId,
    /// Human-readable name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// The workflow graph (nodes and edges).
    pub data: WorkflowData,
    /// When created.
    pub created_at: DateTime<Utc>,
    /// When last updated.
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a workflow.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkflow {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub data: WorkflowData,
}

/// Fields for updating a workflow. Absent fields keep their values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkflow {
    pub name: Option<String>,
    pub description: Option<String>,
    pub data: Option<WorkflowData>,
}

#[derive(Debug)]
struct WorkflowTable {
    rows: BTreeMap<WorkflowId, WorkflowRecord>,
    next_id: i64,
}

/// Repository for workflow operations, backed by an in-memory table.
#[derive(Debug, Clone)]
pub struct WorkflowRepository {
    table: Arc<RwLock<WorkflowTable>>,
}

impl WorkflowRepository {
    /// Creates an empty repository. Ids start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(WorkflowTable {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Creates a repository pre-loaded with the example workflows.
    pub async fn seeded() -> Self {
        let repository = Self::new();
        repository
            .create(NewWorkflow {
                name: "Sales Outreach".to_string(),
                description: Some(
                    "AI-powered sales outreach campaign with personalized messages".to_string(),
                ),
                data: WorkflowData::default(),
            })
            .await;
        repository
            .create(NewWorkflow {
                name: "Lead Qualification".to_string(),
                description: Some(
                    "Automatically qualify and score leads based on CRM data".to_string(),
                ),
                data: WorkflowData::default(),
            })
            .await;
        repository
    }

    /// Stores a new workflow under the next sequential id.
    pub async fn create(&self, new: NewWorkflow) -> WorkflowRecord {
        let mut table = self.table.write().await;
        let id = WorkflowId::new(table.next_id);
        table.next_id += 1;

        let now = Utc::now();
        let record = WorkflowRecord {
            id,
            name: new.name,
            description: new.description,
            data: new.data,
            created_at: now,
            updated_at: now,
        };
        table.rows.insert(id, record.clone());
        record
    }

    /// Fetches one workflow.
    pub async fn find_by_id(&self, id: WorkflowId) -> Option<WorkflowRecord> {
        let table = self.table.read().await;
        table.rows.get(&id).cloned()
    }

    /// Lists all workflows in id order.
    pub async fn list(&self) -> Vec<WorkflowRecord> {
        let table = self.table.read().await;
        table.rows.values().cloned().collect()
    }

    /// Applies a partial update and stamps `updated_at`. Returns the
    /// updated record, or `None` for an unknown id.
    pub async fn update(&self, id: WorkflowId, changes: UpdateWorkflow) -> Option<WorkflowRecord> {
        let mut table = self.table.write().await;
        let record = table.rows.get_mut(&id)?;

        if let Some(name) = changes.name {
            record.name = name;
        }
        if let Some(description) = changes.description {
            record.description = Some(description);
        }
        if let Some(data) = changes.data {
            record.data = data;
        }
        record.updated_at = Utc::now();
        Some(record.clone())
    }

    /// Removes a workflow. Returns whether anything was deleted.
    pub async fn delete(&self, id: WorkflowId) -> bool {
        let mut table = self.table.write().await;
        table.rows.remove(&id).is_some()
    }
}

impl Default for WorkflowRepository {
    fn default() -> Self {
        Self::new()
    }
}
