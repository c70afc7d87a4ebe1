use chrono::{Duration, Local, TimeZone};

use opsdash::application::generator::MetricGenerator;
use opsdash::application::summary::SnapshotSummary;
use opsdash::domain::metrics::MetricKind;
use opsdash::domain::panel::{DashboardLayout, GridSlot, YBounds};
use opsdash::domain::timeline::{Timeline, WINDOW_LEN};

#[test]
fn test_unseeded_run_completes() {
    let snapshot = MetricGenerator::from_entropy()
        .snapshot(Timeline::now().unwrap())
        .unwrap();

    assert_eq!(snapshot.timeline().len(), WINDOW_LEN);
    for series in snapshot.iter() {
        assert_eq!(
            series.len(),
            WINDOW_LEN,
            "{} should have {} samples",
            series.kind(),
            WINDOW_LEN
        );
    }
}

#[test]
fn test_timeline_is_strictly_increasing_by_minute() {
    let now = Local
        .with_ymd_and_hms(2026, 10, 19, 9, 30, 0)
        .single()
        .unwrap();
    let snapshot = MetricGenerator::seeded(17)
        .snapshot(Timeline::ending_at(now, WINDOW_LEN).unwrap())
        .unwrap();

    let points = snapshot.timeline().points();
    assert_eq!(points.len(), 60);
    for pair in points.windows(2) {
        assert!(pair[0] < pair[1]);
        assert_eq!(pair[1] - pair[0], Duration::minutes(1));
    }
    assert_eq!(*points.last().unwrap(), now - Duration::minutes(1));
}

#[test]
fn test_incident_windows_stand_out() {
    let snapshot = MetricGenerator::seeded(2026)
        .snapshot(Timeline::now().unwrap())
        .unwrap();

    let queue = snapshot.series(MetricKind::QueueDepth).unwrap().samples();
    assert!(queue[45..50].iter().all(|v| *v >= 100.0));

    let dlq = snapshot.series(MetricKind::DlqCount).unwrap().samples();
    assert_eq!(dlq.iter().sum::<f64>(), 11.0);

    let gateway = snapshot.series(MetricKind::GatewayLatency).unwrap().samples();
    assert!(gateway[20..25].iter().all(|v| *v >= 80.0));

    let worker = snapshot.series(MetricKind::WorkerLatency).unwrap().samples();
    assert!(worker[45..50].iter().all(|v| *v >= 2.0));
}

#[test]
fn test_same_seed_same_snapshot() {
    let a = MetricGenerator::seeded(5).snapshot(Timeline::now().unwrap()).unwrap();
    let b = MetricGenerator::seeded(5).snapshot(Timeline::now().unwrap()).unwrap();

    for kind in MetricKind::ALL {
        assert_eq!(a.series(kind), b.series(kind));
    }
}

#[test]
fn test_layout_matches_figure() {
    let layout = DashboardLayout::standard();

    let expected = [
        (GridSlot::new(0, 0), MetricKind::SuccessRate, 80.0),
        (GridSlot::new(0, 1), MetricKind::QueueDepth, 200.0),
        (GridSlot::new(1, 0), MetricKind::DlqCount, 1.0),
        (GridSlot::new(1, 1), MetricKind::Health, 80.0),
        (GridSlot::new(2, 0), MetricKind::GatewayLatency, 250.0),
    ];

    for (slot, metric, threshold) in expected {
        let panel = layout.panel_at(slot).unwrap();
        assert_eq!(panel.metric, metric);
        assert_eq!(panel.threshold, threshold);
    }

    assert!(layout.panel_at(GridSlot::new(2, 1)).is_none());

    let success = layout.panel_at(GridSlot::new(0, 0)).unwrap();
    assert_eq!(
        success.y_bounds,
        YBounds::Fixed {
            min: 70.0,
            max: 100.0
        }
    );
}

#[test]
fn test_summary_json_is_parseable() {
    let snapshot = MetricGenerator::seeded(3).snapshot(Timeline::now().unwrap()).unwrap();
    let text = serde_json::to_string(&SnapshotSummary::from_snapshot(&snapshot)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["series"].as_array().unwrap().len(), 6);
    assert_eq!(value["series"][0]["label"], "SAP Success Rate");
}
