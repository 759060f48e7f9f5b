//! Per-user relational rollup across the five collections.

use hyperadmin_core::models::{Project, User, Workflow, WorkflowRun, WorkflowSchedule};
use hyperadmin_core::rollup::{self, RollupStats};

use super::{ProjectRepo, RunRepo, ScheduleRepo, UserRepo, WorkflowRepo};
use crate::Store;

/// A user together with every entity rolled up under them.
#[derive(Debug, Clone)]
pub struct UserWithRelations {
    pub user: User,
    pub projects: Vec<Project>,
    pub workflows: Vec<Workflow>,
    pub schedules: Vec<WorkflowSchedule>,
    pub runs: Vec<WorkflowRun>,
    pub stats: RollupStats,
}

/// Roster row from the bulk variant: the user plus summary counts only.
#[derive(Debug, Clone)]
pub struct UserBasicStats {
    pub user: User,
    pub project_count: u64,
    pub workflow_count: u64,
    pub run_count: u64,
}

/// Joins a user's owned entities and derives their rollup counters.
pub struct RollupRepo;

impl RollupRepo {
    /// Fetch one user's full rollup.
    ///
    /// Returns `Ok(None)` when the id matches under neither encoding; the
    /// caller renders that as an empty state. The workflow query depends
    /// on the fetched project id set, the only sequential dependency in
    /// the chain; schedules and runs filter by the user id directly.
    pub async fn user_with_relations(
        store: &Store,
        id: &str,
    ) -> Result<Option<UserWithRelations>, mongodb::error::Error> {
        let Some(user) = UserRepo::find_by_id(store, id).await? else {
            return Ok(None);
        };

        // Foreign keys hold the string form of whichever encoding matched.
        let user_id = user.id.to_string();

        let projects = ProjectRepo::list_for_user(store, &user_id).await?;
        let project_ids: Vec<String> = projects.iter().map(|p| p.id.to_string()).collect();
        let workflows = WorkflowRepo::list_for_projects(store, &project_ids).await?;

        let schedules = ScheduleRepo::list_for_user(store, &user_id).await?;
        let runs = RunRepo::list_recent_for_user(store, &user_id).await?;

        let stats = rollup::derive_stats(&user, &projects, &workflows, &schedules, &runs);

        Ok(Some(UserWithRelations {
            user,
            projects,
            workflows,
            schedules,
            runs,
            stats,
        }))
    }

    /// Roster listing: per-user summary counts, no entity payloads.
    ///
    /// Counts go straight at the store instead of joining documents; this
    /// is a cheaper read shape for the roster, not a different algorithm.
    pub async fn users_with_basic_stats(
        store: &Store,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Vec<UserBasicStats>, mongodb::error::Error> {
        let users = UserRepo::list(store, limit, offset).await?;

        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let user_id = user.id.to_string();

            let project_count = ProjectRepo::count_for_user(store, &user_id).await?;
            let project_ids = ProjectRepo::distinct_ids_for_user(store, &user_id).await?;
            let workflow_count = WorkflowRepo::count_for_projects(store, &project_ids).await?;
            let run_count = RunRepo::count_for_user(store, &user_id).await?;

            rows.push(UserBasicStats {
                user,
                project_count,
                workflow_count,
                run_count,
            });
        }

        Ok(rows)
    }
}
