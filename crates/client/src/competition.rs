use crate::error::Result;
use crate::http::ApiClient;
use crate::models::RankingEntry;

/// Start/stop endpoints for the global competition flag.
pub struct CompetitionApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn competition(&self) -> CompetitionApi<'_> {
        CompetitionApi { client: self }
    }
}

impl CompetitionApi<'_> {
    pub async fn start(&self) -> Result<()> {
        self.client.post_empty("/competencia/iniciar").await
    }

    /// Stopping the competition returns the final top-N ranking snapshot in
    /// the same response, so one call does both.
    pub async fn stop(&self) -> Result<Vec<RankingEntry>> {
        self.client.post_empty_json("/competencia/detener").await
    }
}

/// The single start/stop control over the competition.
///
/// The `competing` flag is process-local; the backend exposes no endpoint to
/// read it back, so it is not re-synchronized after a restart.
#[derive(Debug, Default)]
pub struct CompetitionToggle {
    competing: bool,
}

#[derive(Debug)]
pub enum ToggleOutcome {
    Started,
    Stopped(Vec<RankingEntry>),
}

impl CompetitionToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn competing(&self) -> bool {
        self.competing
    }

    pub async fn toggle(&mut self, api: &ApiClient) -> Result<ToggleOutcome> {
        if self.competing {
            let ranking = api.competition().stop().await?;
            self.competing = false;
            Ok(ToggleOutcome::Stopped(ranking))
        } else {
            api.competition().start().await?;
            self.competing = true;
            Ok(ToggleOutcome::Started)
        }
    }
}
