//! The round finalization workflow: the one place where several calls have
//! to land together.

use validator::Validate;

use crate::error::{ClientError, Result};
use crate::models::{CreateRound, CreateScore, Round, RoundState, UpdateRound};
use crate::resources::{Crud, ScoresApi};

impl<'a> Crud<'a, Round, CreateRound, UpdateRound> {
    /// Flip a round between pending and in-progress. The action is derived
    /// from the state read just before the update, same as the start/stop
    /// button it backs.
    pub async fn toggle(&self, id: i64) -> Result<RoundState> {
        let round = self.get(id).await?;
        let next = round.state.toggled();
        self.update(id, &UpdateRound::state(next)).await?;
        tracing::info!("round {} moved to {}", id, next);
        Ok(next)
    }

    /// Record both team scores and mark the round finished.
    ///
    /// Issues, in order: the red score, the blue score, the state update.
    /// The backend offers no transaction across the three calls, so a
    /// failure part-way triggers compensation: score records already created
    /// are permanently deleted before the error is reported. Only when the
    /// compensation itself fails is the caller told about partial state.
    pub async fn finalize(&self, round: &Round, red_points: i64, blue_points: i64) -> Result<()> {
        let red_payload = CreateScore::new(red_points, round.id, round.red_team.id);
        let blue_payload = CreateScore::new(blue_points, round.id, round.blue_team.id);
        red_payload.validate()?;
        blue_payload.validate()?;

        let scores = self.client.scores();

        let red = scores.create(&red_payload).await?;

        let blue = match scores.create(&blue_payload).await {
            Ok(score) => score,
            Err(err) => {
                tracing::warn!("round {}: blue score failed ({}), rolling back", round.id, err);
                roll_back(&scores, round.id, &[red.id]).await?;
                return Err(err);
            }
        };

        if let Err(err) = self.update(round.id, &UpdateRound::state(RoundState::Finished)).await {
            tracing::warn!(
                "round {}: state update failed ({}), rolling back scores",
                round.id,
                err
            );
            roll_back(&scores, round.id, &[red.id, blue.id]).await?;
            return Err(err);
        }

        tracing::info!(
            "round {} finalized ({} - {})",
            round.id,
            red_points,
            blue_points
        );
        Ok(())
    }
}

async fn roll_back(scores: &ScoresApi<'_>, round_id: i64, created: &[i64]) -> Result<()> {
    for &score_id in created {
        if let Err(err) = scores.delete(score_id).await {
            tracing::error!(
                "round {}: could not roll back score {}: {}",
                round_id,
                score_id,
                err
            );
            return Err(ClientError::PartialState {
                round: round_id,
                score: score_id,
            });
        }
    }
    Ok(())
}
