use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Whether final placements name individual competitors or rostered teams.
/// Team placements fan out to every roster member during aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum TournamentKind {
    Solo,
    Team
}
