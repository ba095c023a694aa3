// Centralized names & exit codes
pub const PROGRAM_NAME: &str = "xml-single-line";
pub const USAGE_EXIT_CODE: u8 = 1;
pub const DEFAULT_LOG_FILTER: &str = "warn";
