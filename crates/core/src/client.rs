// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! TestRail client: resolution and command operations
//!
//! Lookups translate human-supplied names into the service's numeric
//! ids by listing the relevant scope and scanning for the first exact
//! match. Creation is the only mutating operation.

use crate::config::Config;
use crate::error::{Entity, RailError};
use crate::model::{Milestone, Project, Run, RunSelector, Suite};
use crate::transport::{ApiResponse, HttpTransport, Method, Transport};
use serde::Deserialize;
use serde_json::{json, Value};

/// Client for one TestRail instance.
pub struct TestRail<T: Transport> {
    transport: T,
}

impl TestRail<HttpTransport> {
    /// Build a client speaking to a real instance.
    pub fn connect(config: &Config) -> Self {
        TestRail {
            transport: HttpTransport::new(config),
        }
    }
}

impl<T: Transport> TestRail<T> {
    pub fn with_transport(transport: T) -> Self {
        TestRail { transport }
    }

    /// Issue one request and unwrap the response envelope.
    fn request(
        &self,
        method: Method,
        endpoint: &str,
        payload: Option<&Value>,
    ) -> Result<Value, RailError> {
        let value = self.transport.send(method, endpoint, payload)?;
        match ApiResponse::decode(value) {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure(message) => Err(RailError::Api(message)),
        }
    }

    fn list<R: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<Vec<R>, RailError> {
        let value = self.request(Method::Get, endpoint, None)?;
        Ok(serde_json::from_value(value)?)
    }

    /// List all projects on the instance.
    pub fn projects(&self) -> Result<Vec<Project>, RailError> {
        self.list("get_projects")
    }

    /// List the suites of a project.
    pub fn suites(&self, project: &Project) -> Result<Vec<Suite>, RailError> {
        self.list(&format!("get_suites/{}", project.id))
    }

    /// List the milestones of a project.
    pub fn milestones(&self, project: &Project) -> Result<Vec<Milestone>, RailError> {
        self.list(&format!("get_milestones/{}", project.id))
    }

    /// List the runs of a project.
    pub fn runs(&self, project: &Project) -> Result<Vec<Run>, RailError> {
        self.list(&format!("get_runs/{}", project.id))
    }

    /// Resolve a project by name (first exact match).
    pub fn project(&self, name: &str) -> Result<Project, RailError> {
        tracing::debug!(project = name, "resolving project");
        self.projects()?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| RailError::not_found(Entity::Project, name))
    }

    /// Resolve a suite by name within a project.
    pub fn suite(&self, project: &Project, name: &str) -> Result<Suite, RailError> {
        self.suites(project)?
            .into_iter()
            .find(|s| s.name == name)
            .ok_or_else(|| RailError::not_found(Entity::Suite, name))
    }

    /// Resolve a milestone by name within a project.
    pub fn milestone(&self, project: &Project, name: &str) -> Result<Milestone, RailError> {
        self.milestones(project)?
            .into_iter()
            .find(|m| m.name == name)
            .ok_or_else(|| RailError::not_found(Entity::Milestone, name))
    }

    /// Resolve a run by name or id within a project.
    pub fn run(&self, project: &Project, selector: &RunSelector) -> Result<Run, RailError> {
        self.runs(project)?
            .into_iter()
            .find(|r| selector.matches(r))
            .ok_or_else(|| RailError::not_found(Entity::Run, selector.to_string()))
    }

    /// Look up a run's status: project name, then run name or id.
    pub fn run_status(&self, project_name: &str, selector: &RunSelector) -> Result<Run, RailError> {
        let project = self.project(project_name)?;
        self.run(&project, selector)
    }

    /// Create a run covering all cases of a suite.
    ///
    /// The run name must not already exist among the project's runs.
    /// The uniqueness check and the creation POST are not atomic; a
    /// concurrent creation in between is left to the service.
    pub fn add_run(
        &self,
        project_name: &str,
        suite_name: &str,
        run_name: &str,
        milestone_name: Option<&str>,
    ) -> Result<i64, RailError> {
        let project = self.project(project_name)?;
        let suite = self.suite(&project, suite_name)?;

        let runs = self.runs(&project)?;
        if runs.iter().any(|r| r.name == run_name) {
            return Err(RailError::DuplicateName(run_name.to_string()));
        }

        let mut params = json!({
            "suite_id": suite.id,
            "name": run_name,
            "include_all": true,
        });
        if let Some(name) = milestone_name {
            let milestone = self.milestone(&project, name)?;
            params["milestone_id"] = json!(milestone.id);
        }

        tracing::debug!(run = run_name, suite = suite.id, "creating run");
        let created = self.request(
            Method::Post,
            &format!("add_run/{}", project.id),
            Some(&params),
        )?;
        let created: CreatedRun = serde_json::from_value(created)?;
        Ok(created.id)
    }
}

#[derive(Deserialize)]
struct CreatedRun {
    id: i64,
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
