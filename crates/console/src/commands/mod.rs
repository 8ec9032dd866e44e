pub mod competition;
pub mod participants;
pub mod results;
pub mod rounds;
pub mod scores;
pub mod session;
pub mod team_members;
pub mod teams;
pub mod tracks;
pub mod tutors;
pub mod users;
