// Action dispatcher core

use tracing::{debug, info};

use super::error::Result;
use super::types::{ActionOutcome, ActionRequest};
use crate::runner::{RunOutcome, RunRequest, SandboxRunner};
use crate::search::{SearchClient, SearchOutcome, SearchRequest};
use crate::storage::{OutputWriter, WriteOutcome, WriteRequest};

/// Routes actions to the runner, writer and search client.
///
/// Holds no mutable state; the components are injected once at startup
/// and shared across requests.
pub struct Gateway {
    runner: SandboxRunner,
    writer: OutputWriter,
    search: SearchClient,
}

impl Gateway {
    pub fn new(runner: SandboxRunner, writer: OutputWriter, search: SearchClient) -> Self {
        info!("gateway initialized");
        Self {
            runner,
            writer,
            search,
        }
    }

    pub async fn run(&self, req: RunRequest) -> Result<RunOutcome> {
        Ok(self.runner.run(req).await?)
    }

    pub async fn write(&self, req: WriteRequest) -> Result<WriteOutcome> {
        Ok(self.writer.write(req).await?)
    }

    pub async fn search(&self, req: SearchRequest) -> Result<SearchOutcome> {
        Ok(self.search.search(req).await?)
    }

    /// Invoke the handler selected by the action's mode and return its
    /// result or error unchanged.
    pub async fn dispatch(&self, action: ActionRequest) -> Result<ActionOutcome> {
        debug!(mode = action.mode(), "dispatching action");
        match action {
            ActionRequest::Run(req) => Ok(ActionOutcome::Run(self.run(req).await?)),
            ActionRequest::Write(req) => Ok(ActionOutcome::Write(self.write(req).await?)),
            ActionRequest::Search(req) => Ok(ActionOutcome::Search(self.search(req).await?)),
        }
    }
}
