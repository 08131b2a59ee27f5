pub mod path_ids;
pub mod validated_json;
pub mod week;

pub use path_ids::{PlayerId, TournamentId};
pub use validated_json::ValidatedJson;
pub use week::WeekStart;
