pub mod participant;
pub mod ranking;
pub mod round;
pub mod score;
pub mod team;
pub mod team_member;
pub mod track;
pub mod tutor;
pub mod user;

pub use participant::{CreateParticipant, Participant, UpdateParticipant};
pub use ranking::RankingEntry;
pub use round::{CreateRound, Round, RoundDetail, RoundState, TeamRef, TrackRef, UpdateRound};
pub use score::{CreateScore, RoundRef, Score, ScoreDetail, UpdateScore};
pub use team::{CreateTeam, Team, TeamDetail, UpdateTeam};
pub use team_member::{CreateTeamMember, MemberParticipant, TeamMember, UpdateTeamMember};
pub use track::{CreateTrack, Track, UpdateTrack};
pub use tutor::{CreateTutor, Tutor, UpdateTutor};
pub use user::{CreateUser, LoginRequest, UpdateUser, User};
