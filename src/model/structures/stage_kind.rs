use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Format of a tournament phase. Bracket stages carry raw map records;
/// group and Swiss stages carry pre-computed standings rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum StageKind {
    Group,
    Bracket,
    Swiss
}
