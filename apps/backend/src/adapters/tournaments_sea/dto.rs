//! DTOs for tournaments_sea adapter.

/// DTO for creating a tournament.
#[derive(Debug, Clone)]
pub struct TournamentCreate {
    pub name: String,
}

impl TournamentCreate {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
