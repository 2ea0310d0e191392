//! HTTP client implementing the bug-tracker port.

use super::credentials::Credentials;
use super::models::{BugModel, PageModel, PersonModel, TaskModel};
use crate::sru::domain::{Bug, BugId, Person, TaskLink, TaskStatus};
use crate::sru::ports::{BugTracker, NewTask, TrackerError, TrackerResult};
use async_trait::async_trait;
use mockable::Clock;
use reqwest::{Response, StatusCode, header::AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::sync::Arc;

/// Service root of the production API.
pub const SERVICE_ROOT: &str = "https://api.launchpad.net/devel";

/// Distribution whose packages and series the tool targets.
pub const DISTRIBUTION: &str = "ubuntu";

/// Bug tracker backed by the remote JSON API.
///
/// All mutations follow the service's load / PATCH-fields / save object
/// model; the engine above decides, this adapter only moves bytes.
#[derive(Debug, Clone)]
pub struct LaunchpadTracker<C> {
    http: reqwest::Client,
    root: String,
    credentials: Credentials,
    clock: Arc<C>,
}

impl<C> LaunchpadTracker<C>
where
    C: Clock + Send + Sync,
{
    /// Creates a tracker against an explicit service root.
    #[must_use]
    pub fn new(root: impl Into<String>, credentials: Credentials, clock: Arc<C>) -> Self {
        Self {
            http: reqwest::Client::new(),
            root: root.into(),
            credentials,
            clock,
        }
    }

    /// Creates a tracker against the production service root.
    #[must_use]
    pub fn production(credentials: Credentials, clock: Arc<C>) -> Self {
        Self::new(SERVICE_ROOT, credentials, clock)
    }

    fn bug_url(&self, id: BugId) -> String {
        format!("{}/bugs/{id}", self.root)
    }

    fn person_link(&self, person: &Person) -> String {
        format!("{}/~{}", self.root, person.name())
    }

    fn series_package_link(&self, task: &NewTask) -> String {
        format!(
            "{}/{DISTRIBUTION}/{}/+source/{}",
            self.root,
            task.series(),
            task.package()
        )
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> TrackerResult<Response> {
        request
            .header(
                AUTHORIZATION,
                self.credentials.authorization_header(&*self.clock),
            )
            .send()
            .await
            .map_err(TrackerError::transport)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> TrackerResult<T> {
        response.json().await.map_err(TrackerError::transport)
    }
}

fn unexpected_status(status: StatusCode, url: &str) -> TrackerError {
    TrackerError::transport(std::io::Error::other(format!(
        "unexpected status {status} from {url}"
    )))
}

#[async_trait]
impl<C> BugTracker for LaunchpadTracker<C>
where
    C: Clock + Send + Sync,
{
    async fn authenticated_user(&self) -> TrackerResult<Person> {
        let url = format!("{}/people/+me", self.root);
        let response = self.send(self.http.get(&url)).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(unexpected_status(status, &url));
        }
        Self::decode::<PersonModel>(response).await?.into_domain()
    }

    async fn person_by_name(&self, name: &str) -> TrackerResult<Option<Person>> {
        let url = format!("{}/~{name}", self.root);
        let response = self.send(self.http.get(&url)).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => {
                Ok(Some(Self::decode::<PersonModel>(response).await?.into_domain()?))
            }
            status => Err(unexpected_status(status, &url)),
        }
    }

    async fn bug(&self, id: BugId) -> TrackerResult<Bug> {
        let url = self.bug_url(id);
        let response = self.send(self.http.get(&url)).await?;
        let bug_model = match response.status() {
            StatusCode::NOT_FOUND => return Err(TrackerError::BugNotFound(id)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(TrackerError::Unauthorized(id));
            }
            status if status.is_success() => Self::decode::<BugModel>(response).await?,
            status => return Err(unexpected_status(status, &url)),
        };

        // The task collection is paged; follow continuation links until the
        // last page so no task is dropped from the snapshot.
        let mut tasks = Vec::new();
        let mut next_page = Some(bug_model.bug_tasks_collection_link.clone());
        while let Some(tasks_url) = next_page {
            let tasks_response = self.send(self.http.get(&tasks_url)).await?;
            let status = tasks_response.status();
            if !status.is_success() {
                return Err(unexpected_status(status, &tasks_url));
            }
            let page: PageModel<TaskModel> = Self::decode(tasks_response).await?;
            next_page = page.next_collection_link;
            for entry in page.entries {
                tasks.push(entry.into_domain()?);
            }
        }
        Ok(Bug::new(BugId::new(bug_model.id), tasks))
    }

    async fn set_task_status(&self, task: &TaskLink, status: TaskStatus) -> TrackerResult<()> {
        let body = json!({ "status": status.as_str() });
        let response = self
            .send(self.http.patch(task.as_str()).json(&body))
            .await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(TrackerError::TaskNotFound(task.clone())),
            s if s.is_success() => Ok(()),
            s => Err(unexpected_status(s, task.as_str())),
        }
    }

    async fn create_task(&self, bug: BugId, task: &NewTask) -> TrackerResult<()> {
        let url = self.bug_url(bug);
        let form = [
            ("ws.op", "addTask".to_owned()),
            ("target", self.series_package_link(task)),
        ];
        let response = self.send(self.http.post(&url).form(&form)).await?;
        let created = match response.status() {
            StatusCode::NOT_FOUND => return Err(TrackerError::BugNotFound(bug)),
            // The service answers creation against an already-tasked target
            // with a bad request.
            StatusCode::BAD_REQUEST => {
                return Err(TrackerError::TaskAlreadyExists {
                    bug,
                    package: task.package().clone(),
                    series: task.series().clone(),
                });
            }
            status if status.is_success() => Self::decode::<TaskModel>(response).await?,
            status => return Err(unexpected_status(status, &url)),
        };

        let body = json!({
            "status": task.status().as_str(),
            "importance": task.importance().as_str(),
            "assignee_link": self.person_link(task.assignee()),
        });
        let patch_response = self
            .send(self.http.patch(&created.self_link).json(&body))
            .await?;
        let status = patch_response.status();
        if !status.is_success() {
            return Err(unexpected_status(status, &created.self_link));
        }
        Ok(())
    }

    async fn save_bug(&self, id: BugId) -> TrackerResult<()> {
        let url = self.bug_url(id);
        let response = self.send(self.http.patch(&url).json(&json!({}))).await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(TrackerError::BugNotFound(id)),
            status if status.is_success() => Ok(()),
            status => Err(unexpected_status(status, &url)),
        }
    }
}
