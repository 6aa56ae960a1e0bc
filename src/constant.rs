/// Application name and metadata constants
pub const APP_QUALIFIER: &str = "io";
pub const APP_ORGANIZATION: &str = "redraft";
pub const APP_NAME: &str = "redraft";

/// History related magic numbers
pub const HISTORY_FILE_NAME: &str = "transformation_history.json";
pub const DEFAULT_MAX_RECORDS: usize = 1000;
