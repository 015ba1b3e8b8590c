// Presentation constants
pub const AVATAR_PREFIX: &str = "/avatar";
pub const DEFAULT_AVATAR: &str = "/avatar/default.jpg";
pub const DEFAULT_REPORT_TITLE: &str = "Best Player";
