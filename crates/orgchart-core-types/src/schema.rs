//! Field and event names shared by the logging macros and the capture layer
//!
//! `tracing` field names are written as identifiers at the call site, so these
//! constants are what readers of log output (tests, log pipelines) match on.

// Lifecycle fields, present on every boundary event
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Hierarchy context
pub const FIELD_MEMBER_ID: &str = "member_id";
pub const FIELD_SUPERVISOR_ID: &str = "supervisor_id";
pub const FIELD_UNDO_DEPTH: &str = "undo_depth";
pub const FIELD_REDO_DEPTH: &str = "redo_depth";

// Set only on `end_error`
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events_differ_from_start() {
        for terminal in [EVENT_END, EVENT_END_ERROR] {
            assert_ne!(EVENT_START, terminal);
        }
        assert_ne!(EVENT_END, EVENT_END_ERROR);
    }

    #[test]
    fn test_error_fields_share_prefix() {
        assert!(FIELD_ERR_KIND.starts_with("err."));
        assert!(FIELD_ERR_CODE.starts_with("err."));
    }
}
