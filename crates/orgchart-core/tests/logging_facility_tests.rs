#![allow(clippy::unwrap_used, clippy::expect_used)]

use orgchart_core::errors::OrgChartError;
use orgchart_core::logging_facility::test_capture::init_test_capture;
use orgchart_core::{log_op_end, log_op_error, log_op_start, HierarchyManager, Member, MemberId};
use orgchart_core_types::schema::{
    EVENT_END, EVENT_END_ERROR, EVENT_START, FIELD_DURATION_MS, FIELD_ERR_CODE, FIELD_ERR_KIND,
    FIELD_MEMBER_ID, FIELD_REDO_DEPTH, FIELD_SUPERVISOR_ID, FIELD_UNDO_DEPTH,
};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, member_id = 12u64);

    let events = capture.events_for(op_name, EVENT_START);
    assert_eq!(events.len(), 1, "Should have exactly one start event");
    assert_eq!(events[0].field(FIELD_MEMBER_ID), Some("12"));
    assert!(events[0].component.is_some());
}

#[test]
fn test_log_op_end_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42u64);

    let events = capture.events_for(op_name, EVENT_END);
    assert_eq!(events.len(), 1, "Should have exactly one end event");
    assert_eq!(events[0].field(FIELD_DURATION_MS), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = OrgChartError::SupervisorNotFound {
        supervisor_id: MemberId(8),
    };
    log_op_error!(op_name, err, duration_ms = 10u64);

    let events = capture.events_for(op_name, EVENT_END_ERROR);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, tracing::Level::ERROR);
    assert_eq!(events[0].field(FIELD_ERR_KIND), Some("NotFound"));
    assert_eq!(events[0].field(FIELD_ERR_CODE), Some("ERR_NOT_FOUND"));
}

// Manager tests share the "move"/"undo" op names, so each one picks member
// ids no other test in this file uses and filters on them.

#[test]
fn test_manager_move_emits_start_and_end() {
    let capture = init_test_capture();
    let root = Member::new(100, "root")
        .with_subordinate(Member::new(101, "a"))
        .with_subordinate(Member::new(102, "b"));
    let mut manager = HierarchyManager::from_root(root).unwrap();

    manager.move_member(MemberId(102), Some(MemberId(101))).unwrap();

    let for_member = |event: &str| {
        capture
            .events_for("move", event)
            .into_iter()
            .filter(|e| e.field(FIELD_MEMBER_ID) == Some("102"))
            .collect::<Vec<_>>()
    };
    assert_eq!(for_member(EVENT_START).len(), 1);
    assert_eq!(for_member(EVENT_END_ERROR).len(), 0);

    let ends = for_member(EVENT_END);
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_SUPERVISOR_ID), Some("101"));
    assert_eq!(ends[0].field(FIELD_UNDO_DEPTH), Some("1"));
    assert!(ends[0].field(FIELD_DURATION_MS).is_some());
}

#[test]
fn test_manager_failed_move_emits_end_error() {
    let capture = init_test_capture();
    let root = Member::new(200, "root")
        .with_subordinate(Member::new(201, "a").with_subordinate(Member::new(202, "b")));
    let mut manager = HierarchyManager::from_root(root).unwrap();

    let _ = manager.move_member(MemberId(201), Some(MemberId(202)));

    let errors: Vec<_> = capture
        .events_for("move", EVENT_END_ERROR)
        .into_iter()
        .filter(|e| e.field(FIELD_MEMBER_ID) == Some("201"))
        .collect();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field(FIELD_ERR_CODE), Some("ERR_CYCLE_DETECTED"));

    let ends = capture
        .events_for("move", EVENT_END)
        .into_iter()
        .filter(|e| e.field(FIELD_MEMBER_ID) == Some("201"))
        .count();
    assert_eq!(ends, 0);
}

#[test]
fn test_manager_undo_end_reports_member() {
    let capture = init_test_capture();
    let root = Member::new(300, "root")
        .with_subordinate(Member::new(301, "a"))
        .with_subordinate(Member::new(302, "b"));
    let mut manager = HierarchyManager::from_root(root).unwrap();

    manager.move_member(MemberId(302), Some(MemberId(301))).unwrap();
    manager.undo().unwrap();

    let ends: Vec<_> = capture
        .events_for("undo", EVENT_END)
        .into_iter()
        .filter(|e| e.field(FIELD_MEMBER_ID) == Some("Some(302)"))
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field(FIELD_UNDO_DEPTH), Some("0"));
    assert_eq!(ends[0].field(FIELD_REDO_DEPTH), Some("1"));
}

#[test]
fn test_manager_logs_one_lifecycle_pair_per_operation() {
    let capture = init_test_capture();
    let root = Member::new(400, "root")
        .with_subordinate(Member::new(401, "a"))
        .with_subordinate(Member::new(402, "b"));
    let mut manager = HierarchyManager::from_root(root).unwrap();

    manager.move_member(MemberId(402), Some(MemberId(401))).unwrap();
    manager.move_member(MemberId(401), Some(MemberId(400))).unwrap();

    let moves_of = |id: &str, event: &str| {
        capture.count_events(|e| {
            e.op.as_deref() == Some("move")
                && e.event.as_deref() == Some(event)
                && e.field(FIELD_MEMBER_ID) == Some(id)
        })
    };
    for id in ["401", "402"] {
        assert_eq!(moves_of(id, EVENT_START), 1);
        assert_eq!(moves_of(id, EVENT_END), 1);
        assert_eq!(moves_of(id, EVENT_END_ERROR), 0);
    }
}
