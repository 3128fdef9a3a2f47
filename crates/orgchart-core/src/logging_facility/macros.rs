//! Operation lifecycle macros
//!
//! A manager operation logs one `start` event on entry and then exactly one
//! of `end` or `end_error`. All three carry `component` (the calling module)
//! and `op`; the terminal events add `duration_ms`. Extra `tracing` fields may
//! follow, e.g. `member_id = id.0` or `supervisor_id = ?target`.
//!
//! ```
//! use orgchart_core::{log_op_end, log_op_error, log_op_start};
//! use orgchart_core::{errors::OrgChartError, model::MemberId};
//!
//! log_op_start!("move", member_id = 5u64);
//! log_op_end!("move", duration_ms = 3u64, member_id = 5u64);
//!
//! let err = OrgChartError::MemberNotFound { member_id: MemberId(9) };
//! log_op_error!("move", err, duration_ms = 1u64, member_id = 9u64);
//! ```

/// Shared emitter for the lifecycle macros; not part of the public surface
#[doc(hidden)]
#[macro_export]
macro_rules! __log_op_event {
    ($level:ident, $op:expr, $event:expr $(, $($field:tt)*)?) => {
        $crate::tracing::$level!(
            component = module_path!(),
            op = $op,
            event = $event,
            $($($field)*)?
        )
    };
}

/// `start` event at info level
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::core_types::schema::EVENT_START
            $(, $($field)*)?
        )
    };
}

/// `end` event at info level; `duration_ms` is required
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        $crate::__log_op_event!(
            info,
            $op,
            $crate::core_types::schema::EVENT_END,
            duration_ms = $duration
            $(, $($field)*)?
        )
    };
}

/// `end_error` event at error level
///
/// `$err` is anything convertible into [`crate::errors::ExError`]; its kind
/// and stable code are logged as `err.kind` / `err.code`.
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        $crate::__log_op_event!(
            error,
            $op,
            $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code()
            $(, $($field)*)?
        )
    }};
}
