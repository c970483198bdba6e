//! Shared factories and a recording task-service fake for integration
//! tests. The fake records every created resource so tests can assert on
//! the exact shape of generated work, and can be scripted to fail for
//! chosen projects.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use titleflow_core::client::{
    ActingUser, GroupId, ListId, ProjectId, TaskId, TaskParent, TaskServiceClient,
    TaskServiceConnections, TaskServiceError,
};
use titleflow_core::error::Result;
use titleflow_core::models::{
    Agency, Lease, Order, OrderGraph, OrderStore, Report, ReportKind, ReportWithLeases,
};

pub const STATE_RUNSHEET_PROJECT_ID: &str = "proj-state-runsheet";
pub const FEDERAL_RUNSHEET_PROJECT_ID: &str = "proj-federal-runsheet";
pub const STATE_ABSTRACT_PROJECT_ID: &str = "proj-state-abstract";

/// Point the first three product locators at fixed project ids. Every test
/// in a binary uses the same values, so concurrent setup is harmless. The
/// federal-abstract locator is deliberately never set, which lets one test
/// exercise the missing-configuration path without racing the others.
pub fn setup_project_env() {
    std::env::set_var(
        "TITLEFLOW_STATE_RUNSHEET_PROJECT_ID",
        STATE_RUNSHEET_PROJECT_ID,
    );
    std::env::set_var(
        "TITLEFLOW_FEDERAL_RUNSHEET_PROJECT_ID",
        FEDERAL_RUNSHEET_PROJECT_ID,
    );
    std::env::set_var(
        "TITLEFLOW_STATE_ABSTRACT_PROJECT_ID",
        STATE_ABSTRACT_PROJECT_ID,
    );
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedList {
    pub id: ListId,
    pub project_id: ProjectId,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedGroup {
    pub id: GroupId,
    pub list_id: ListId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatedTask {
    pub id: TaskId,
    pub parent: TaskParent,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Default)]
pub struct RecordingState {
    pub lists: Vec<CreatedList>,
    pub groups: Vec<CreatedGroup>,
    pub tasks: Vec<CreatedTask>,
}

/// Task-service fake that records every created resource.
pub struct RecordingClient {
    state: Mutex<RecordingState>,
    next_id: AtomicU64,
    /// Projects whose `create_list` calls fail with a validation error.
    fail_projects: HashSet<String>,
}

impl RecordingClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(RecordingState::default()),
            next_id: AtomicU64::new(1),
            fail_projects: HashSet::new(),
        })
    }

    pub fn failing_for_projects(projects: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(RecordingState::default()),
            next_id: AtomicU64::new(1),
            fail_projects: projects.iter().map(|p| p.to_string()).collect(),
        })
    }

    fn next_id(&self, prefix: &str) -> String {
        format!("{prefix}-{}", self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    pub fn lists(&self) -> Vec<CreatedList> {
        self.state.lock().unwrap().lists.clone()
    }

    pub fn groups(&self) -> Vec<CreatedGroup> {
        self.state.lock().unwrap().groups.clone()
    }

    pub fn tasks(&self) -> Vec<CreatedTask> {
        self.state.lock().unwrap().tasks.clone()
    }

    pub fn groups_in(&self, list_id: &ListId) -> Vec<CreatedGroup> {
        self.groups()
            .into_iter()
            .filter(|g| &g.list_id == list_id)
            .collect()
    }

    pub fn tasks_under(&self, parent: &TaskParent) -> Vec<CreatedTask> {
        self.tasks()
            .into_iter()
            .filter(|t| &t.parent == parent)
            .collect()
    }

    pub fn lists_in(&self, project_id: &str) -> Vec<CreatedList> {
        self.lists()
            .into_iter()
            .filter(|l| l.project_id.0 == project_id)
            .collect()
    }
}

#[async_trait]
impl TaskServiceClient for RecordingClient {
    async fn create_list(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: Option<&str>,
    ) -> std::result::Result<ListId, TaskServiceError> {
        if self.fail_projects.contains(&project_id.0) {
            return Err(TaskServiceError::validation(format!(
                "simulated rejection for project {project_id}"
            )));
        }
        let id = ListId(self.next_id("list"));
        self.state.lock().unwrap().lists.push(CreatedList {
            id: id.clone(),
            project_id: project_id.clone(),
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
        });
        Ok(id)
    }

    async fn create_group(
        &self,
        list_id: &ListId,
        name: &str,
    ) -> std::result::Result<GroupId, TaskServiceError> {
        let id = GroupId(self.next_id("group"));
        self.state.lock().unwrap().groups.push(CreatedGroup {
            id: id.clone(),
            list_id: list_id.clone(),
            name: name.to_string(),
        });
        Ok(id)
    }

    async fn create_task(
        &self,
        parent: &TaskParent,
        name: &str,
        description: Option<&str>,
    ) -> std::result::Result<TaskId, TaskServiceError> {
        let id = TaskId(self.next_id("task"));
        self.state.lock().unwrap().tasks.push(CreatedTask {
            id: id.clone(),
            parent: parent.clone(),
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
        });
        Ok(id)
    }
}

/// Connections fake: every user shares one client, or none at all.
pub struct StaticConnections {
    client: Option<Arc<dyn TaskServiceClient>>,
}

impl TaskServiceConnections for StaticConnections {
    fn client_for(&self, _user: &ActingUser) -> Option<Arc<dyn TaskServiceClient>> {
        self.client.clone()
    }
}

pub fn connections_with(client: Arc<RecordingClient>) -> Arc<StaticConnections> {
    Arc::new(StaticConnections {
        client: Some(client),
    })
}

pub fn no_connections() -> Arc<StaticConnections> {
    Arc::new(StaticConnections { client: None })
}

/// In-memory order store seeded with whole graphs.
pub struct InMemoryOrderStore {
    graphs: Mutex<HashMap<i64, OrderGraph>>,
}

impl InMemoryOrderStore {
    pub fn empty() -> Arc<Self> {
        Arc::new(Self {
            graphs: Mutex::new(HashMap::new()),
        })
    }

    pub fn with_graph(graph: OrderGraph) -> Arc<Self> {
        let mut graphs = HashMap::new();
        graphs.insert(graph.order.id, graph);
        Arc::new(Self {
            graphs: Mutex::new(graphs),
        })
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn load_order_graph(&self, order_id: i64) -> Result<Option<OrderGraph>> {
        Ok(self.graphs.lock().unwrap().get(&order_id).cloned())
    }
}

pub fn order(id: i64, number: &str, year: i32, month: u32, day: u32) -> Order {
    Order {
        id,
        order_number: number.to_string(),
        order_date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        delivery_link: None,
    }
}

pub fn runsheet_report(id: i64, order_id: i64, description: &str) -> Report {
    Report {
        id,
        order_id,
        kind: ReportKind::Runsheet,
        legal_description: description.to_string(),
        start_date: None,
        end_date: None,
    }
}

pub fn abstract_report(id: i64, order_id: i64, kind: ReportKind, description: &str) -> Report {
    Report {
        id,
        order_id,
        kind,
        legal_description: description.to_string(),
        start_date: None,
        end_date: None,
    }
}

pub fn lease(id: i64, number: &str, agency: Agency) -> Lease {
    Lease {
        id,
        lease_number: number.to_string(),
        agency,
        prior_report_found: false,
        archive_link: None,
    }
}

pub fn lease_with_prior(id: i64, number: &str, agency: Agency) -> Lease {
    Lease {
        prior_report_found: true,
        ..lease(id, number, agency)
    }
}

pub fn with_leases(report: Report, leases: Vec<Lease>) -> ReportWithLeases {
    ReportWithLeases { report, leases }
}

pub fn acting_user() -> ActingUser {
    ActingUser {
        id: 7,
        display_name: "abstractor".to_string(),
    }
}
