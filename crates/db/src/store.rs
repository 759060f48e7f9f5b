//! Connection handling for the document store.

use bson::doc;
use mongodb::{Client, Collection, Database};

use hyperadmin_core::models::{Project, User, Workflow, WorkflowRun, WorkflowSchedule};

/// Names of the five platform collections.
pub mod collections {
    pub const USERS: &str = "users";
    pub const PROJECTS: &str = "projects";
    pub const WORKFLOWS: &str = "workflows";
    pub const SCHEDULES: &str = "workflow_schedules";
    pub const RUNS: &str = "workflow_runs";
}

/// Handle to the dashboard's database.
///
/// Wraps the driver's pooled [`Client`]; cloning shares the pool. Created
/// once at startup and carried in request state, so there is no
/// process-global connection cache to reach for.
#[derive(Clone)]
pub struct Store {
    db: Database,
}

impl Store {
    /// Open a handle to the given database.
    ///
    /// The driver connects lazily; [`Store::health_check`] performs the
    /// first round-trip.
    pub async fn connect(uri: &str, database: &str) -> Result<Self, mongodb::error::Error> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Store {
            db: client.database(database),
        })
    }

    /// Ping the server.
    pub async fn health_check(&self) -> Result<(), mongodb::error::Error> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Name of the database this handle points at.
    pub fn database_name(&self) -> &str {
        self.db.name()
    }

    pub fn users(&self) -> Collection<User> {
        self.db.collection(collections::USERS)
    }

    pub fn projects(&self) -> Collection<Project> {
        self.db.collection(collections::PROJECTS)
    }

    pub fn workflows(&self) -> Collection<Workflow> {
        self.db.collection(collections::WORKFLOWS)
    }

    pub fn schedules(&self) -> Collection<WorkflowSchedule> {
        self.db.collection(collections::SCHEDULES)
    }

    pub fn runs(&self) -> Collection<WorkflowRun> {
        self.db.collection(collections::RUNS)
    }
}
