use crate::table::record::UserRecord;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// Member list fetched and decoded
    UsersLoaded(Vec<UserRecord>),

    /// Member list fetch failed; carries the user-facing reason
    UsersFailed(String),

    /// Tick for the loading spinner
    Tick,
}
