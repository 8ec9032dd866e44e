use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::Result;
use crate::http::{ApiClient, ListEnvelope};
use crate::models::{
    CreateParticipant, CreateRound, CreateScore, CreateTeam, CreateTeamMember, CreateTrack,
    CreateTutor, CreateUser, Participant, Round, RoundDetail, Score, ScoreDetail, Team, TeamDetail,
    TeamMember, Track, Tutor, UpdateParticipant, UpdateRound, UpdateScore, UpdateTeam,
    UpdateTeamMember, UpdateTrack, UpdateTutor, UpdateUser, User,
};

/// Typed CRUD endpoint for one backend resource.
///
/// Every resource exposes the same seven operations over the same path
/// scheme, so they share one implementation parameterized over the record
/// type and the create/update payloads. Create and update payloads are
/// validated before anything goes on the wire.
///
/// ```text
/// GET    /<recurso>                   list
/// GET    /<recurso>/:id               get
/// POST   /<recurso>                   create
/// PATCH  /<recurso>/:id               update (partial)
/// PATCH  /<recurso>/soft-delete/:id   remove (reversible)
/// PATCH  /<recurso>/restore/:id       restore
/// DELETE /<recurso>/eliminar/:id      delete (permanent)
/// ```
pub struct Crud<'a, T, C, U> {
    pub(crate) client: &'a ApiClient,
    base: &'static str,
    _marker: PhantomData<fn() -> (T, C, U)>,
}

impl<'a, T, C, U> Crud<'a, T, C, U>
where
    T: DeserializeOwned,
    C: Serialize + Validate,
    U: Serialize + Validate,
{
    pub(crate) fn new(client: &'a ApiClient, base: &'static str) -> Self {
        Self {
            client,
            base,
            _marker: PhantomData,
        }
    }

    pub async fn list(&self) -> Result<Vec<T>> {
        let envelope: ListEnvelope<T> = self.client.get_json(&format!("/{}", self.base)).await?;
        Ok(envelope.into_rows())
    }

    pub async fn get(&self, id: i64) -> Result<T> {
        self.client
            .get_json(&format!("/{}/{}", self.base, id))
            .await
    }

    pub async fn create(&self, payload: &C) -> Result<T> {
        payload.validate()?;
        self.client
            .post_json(&format!("/{}", self.base), payload)
            .await
    }

    pub async fn update(&self, id: i64, payload: &U) -> Result<()> {
        payload.validate()?;
        self.client
            .patch_json(&format!("/{}/{}", self.base, id), payload)
            .await
    }

    /// Soft-delete: the record disappears from the default list but can be
    /// brought back with [`restore`](Self::restore).
    pub async fn remove(&self, id: i64) -> Result<()> {
        self.client
            .patch_empty(&format!("/{}/soft-delete/{}", self.base, id))
            .await
    }

    pub async fn restore(&self, id: i64) -> Result<()> {
        self.client
            .patch_empty(&format!("/{}/restore/{}", self.base, id))
            .await
    }

    /// Permanent removal; there is no way back from this one.
    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .delete_empty(&format!("/{}/eliminar/{}", self.base, id))
            .await
    }
}

pub type ParticipantsApi<'a> = Crud<'a, Participant, CreateParticipant, UpdateParticipant>;
pub type TutorsApi<'a> = Crud<'a, Tutor, CreateTutor, UpdateTutor>;
pub type TeamsApi<'a> = Crud<'a, Team, CreateTeam, UpdateTeam>;
pub type TeamMembersApi<'a> = Crud<'a, TeamMember, CreateTeamMember, UpdateTeamMember>;
pub type TracksApi<'a> = Crud<'a, Track, CreateTrack, UpdateTrack>;
pub type ScoresApi<'a> = Crud<'a, Score, CreateScore, UpdateScore>;
pub type RoundsApi<'a> = Crud<'a, Round, CreateRound, UpdateRound>;
pub type UsersApi<'a> = Crud<'a, User, CreateUser, UpdateUser>;

impl ApiClient {
    pub fn participants(&self) -> ParticipantsApi<'_> {
        Crud::new(self, "participantes")
    }

    pub fn tutors(&self) -> TutorsApi<'_> {
        Crud::new(self, "tutores")
    }

    pub fn teams(&self) -> TeamsApi<'_> {
        Crud::new(self, "equipos")
    }

    pub fn team_members(&self) -> TeamMembersApi<'_> {
        Crud::new(self, "equiposParticipantes")
    }

    pub fn tracks(&self) -> TracksApi<'_> {
        Crud::new(self, "pistas")
    }

    pub fn scores(&self) -> ScoresApi<'_> {
        Crud::new(self, "puntajes")
    }

    pub fn rounds(&self) -> RoundsApi<'_> {
        Crud::new(self, "rondas")
    }

    pub fn users(&self) -> UsersApi<'_> {
        Crud::new(self, "usuarios")
    }
}

impl<'a> Crud<'a, Team, CreateTeam, UpdateTeam> {
    pub async fn list_details(&self) -> Result<Vec<TeamDetail>> {
        let envelope: ListEnvelope<TeamDetail> = self.client.get_json("/equipos/details").await?;
        Ok(envelope.into_rows())
    }
}

impl<'a> Crud<'a, Score, CreateScore, UpdateScore> {
    /// Works without a session, so it also backs the public score board.
    pub async fn list_details(&self) -> Result<Vec<ScoreDetail>> {
        let envelope: ListEnvelope<ScoreDetail> = self.client.get_json("/puntajes/details").await?;
        Ok(envelope.into_rows())
    }
}

impl<'a> Crud<'a, Round, CreateRound, UpdateRound> {
    /// One call for the whole round table, with track and team names already
    /// joined in.
    pub async fn list_details(&self) -> Result<Vec<RoundDetail>> {
        let envelope: ListEnvelope<RoundDetail> = self.client.get_json("/rondas/details").await?;
        Ok(envelope.into_rows())
    }

    /// Ask the backend to generate rounds by randomly pairing participants
    /// into teams of two per track slot. The pairing is entirely
    /// server-side; the response body carries nothing the console needs.
    pub async fn generate(&self) -> Result<()> {
        self.client.post_empty("/rondas/generar").await
    }
}
