use chrono::{DateTime, Utc};
use incidentdesk_core::{project, Incident, Severity, SeverityFilter, SortOrder};

fn ts(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

fn incident(id: i64, severity: Severity, reported_at: &str) -> Incident {
    Incident {
        id,
        title: format!("incident {id}"),
        description: "d".to_string(),
        severity,
        reported_at: ts(reported_at),
        updated_at: Some(ts(reported_at)),
    }
}

fn sample() -> Vec<Incident> {
    vec![
        incident(1, Severity::Medium, "2025-03-15T07:30:00Z"),
        incident(2, Severity::High, "2025-04-01T14:30:00Z"),
        incident(3, Severity::Low, "2025-03-20T09:15:00Z"),
    ]
}

#[test]
fn all_filter_keeps_every_incident() {
    let view = project(&sample(), SeverityFilter::All, SortOrder::Newest);
    assert_eq!(view.len(), 3);
}

#[test]
fn severity_filter_keeps_only_matching_incidents() {
    let view = project(
        &sample(),
        SeverityFilter::Only(Severity::High),
        SortOrder::Newest,
    );

    assert_eq!(view.len(), 1);
    assert_eq!(view[0].id, 2);
    assert!(view.iter().all(|i| i.severity == Severity::High));
}

#[test]
fn newest_orders_by_descending_report_time() {
    let view = project(&sample(), SeverityFilter::All, SortOrder::Newest);
    let ids: Vec<_> = view.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn oldest_orders_by_ascending_report_time() {
    let view = project(&sample(), SeverityFilter::All, SortOrder::Oldest);
    let ids: Vec<_> = view.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![1, 3, 2]);
}

#[test]
fn projection_never_mutates_its_input() {
    let incidents = sample();
    let before = incidents.clone();

    let _ = project(&incidents, SeverityFilter::Only(Severity::Low), SortOrder::Oldest);

    assert_eq!(incidents, before);
}

#[test]
fn projection_is_idempotent_for_identical_inputs() {
    let incidents = sample();

    let first = project(&incidents, SeverityFilter::All, SortOrder::Newest);
    let second = project(&incidents, SeverityFilter::All, SortOrder::Newest);

    assert_eq!(first, second);
}

#[test]
fn newest_reversed_equals_oldest_for_distinct_report_times() {
    let incidents = sample();

    let mut newest = project(&incidents, SeverityFilter::All, SortOrder::Newest);
    newest.reverse();
    let oldest = project(&incidents, SeverityFilter::All, SortOrder::Oldest);

    assert_eq!(newest, oldest);
}

#[test]
fn equal_report_times_preserve_relative_input_order() {
    let incidents = vec![
        incident(10, Severity::Low, "2025-05-01T00:00:00Z"),
        incident(11, Severity::Low, "2025-05-01T00:00:00Z"),
        incident(12, Severity::Low, "2025-05-01T00:00:00Z"),
    ];

    for order in [SortOrder::Newest, SortOrder::Oldest] {
        let view = project(&incidents, SeverityFilter::All, order);
        let ids: Vec<_> = view.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11, 12], "order {order} broke tie stability");
    }
}

#[test]
fn sort_order_toggle_flips_between_the_two_orders() {
    assert_eq!(SortOrder::Newest.toggled(), SortOrder::Oldest);
    assert_eq!(SortOrder::Oldest.toggled(), SortOrder::Newest);
    assert_eq!(SortOrder::Newest.toggled().toggled(), SortOrder::Newest);
}

#[test]
fn filter_and_order_parse_from_user_input() {
    assert_eq!("all".parse::<SeverityFilter>().unwrap(), SeverityFilter::All);
    assert_eq!(
        "High".parse::<SeverityFilter>().unwrap(),
        SeverityFilter::Only(Severity::High)
    );
    assert!("severe".parse::<SeverityFilter>().is_err());

    assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
    assert_eq!(" OLDEST ".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
    assert!("recent".parse::<SortOrder>().is_err());
}
