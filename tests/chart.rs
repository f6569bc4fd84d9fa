mod common;

use common::*;
use hemicycle::prelude::*;

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_leveling_flags() {
    init();
    let parties = vec![Party::new("A", 5, 2), Party::new("B", 3, 1)];
    let chart = ParliamentChart::new(parties, ChartConfig::default()).unwrap();
    let flags: Vec<bool> = chart.seats().iter().map(|s| s.leveling).collect();

    assert_eq!(flags, [true, true, false, false, false, true, false, false]);
}

#[test]
fn test_seat_takes_matching_point() {
    init();
    let chart = ParliamentChart::new(storting(), ChartConfig::default()).unwrap();
    let layout = positioned(chart.layout().unwrap());
    let points = assemble(169, &chart.config().params, chart.config().width)
        .unwrap()
        .into_points();

    assert_eq!(layout.seats.len(), points.len());
    for (i, (seat, point)) in layout.seats.iter().zip(&points).enumerate() {
        assert_eq!(seat.seat.index, i);
        assert_eq!(seat.point, *point);
    }
}

#[test]
fn test_party_seats_grouped() {
    init();
    let chart = ParliamentChart::new(storting(), ChartConfig::default()).unwrap();
    let layout = positioned(chart.layout().unwrap());

    for party in chart.parties() {
        let seats: Vec<&PositionedSeat> = layout.party_seats(&party.code).collect();
        assert_eq!(seats.len(), party.seats as usize);
        // Each party occupies one contiguous run of the display order.
        for pair in seats.windows(2) {
            assert_eq!(pair[1].seat.index, pair[0].seat.index + 1);
        }
    }
}

#[test]
fn test_ensure_positioned_is_stable() {
    init();
    let chart = ParliamentChart::new(storting(), ChartConfig::default()).unwrap();
    let layout = chart.layout().unwrap();
    let again = chart.ensure_positioned(layout.clone()).unwrap();
    assert_eq!(again, layout);
}

#[test]
fn test_zero_width_defers() {
    init();
    let chart = ParliamentChart::new(storting(), ChartConfig::default().with_width(0.0)).unwrap();
    let layout = chart.layout().unwrap();
    assert!(!layout.is_positioned());
    assert_eq!(layout.seat_count(), 169);

    let sized = chart.reconfigure(ChartConfig::default()).unwrap();
    let layout = sized.ensure_positioned(layout).unwrap();
    assert_eq!(positioned(layout).len(), 169);
}

#[test]
fn test_no_seats_defers() {
    init();
    let chart = ParliamentChart::new(vec![Party::new("A", 0, 0)], ChartConfig::default()).unwrap();
    assert_eq!(chart.layout().unwrap(), SeatLayout::Unpositioned(Vec::new()));
}

#[test]
fn test_unknown_party() {
    init();
    let slots = expand_seats(&[Party::new("A", 2, 0)]);
    assert_eq!(
        annotate(&slots, &[Party::new("B", 2, 0)]),
        Err(LayoutError::PartyLookup("A".to_string()))
    );
}

#[test]
fn test_deterministic_chart() {
    init();
    let a = positioned(ParliamentChart::new(storting(), ChartConfig::default()).unwrap().layout().unwrap());
    let b = positioned(ParliamentChart::new(storting(), ChartConfig::default()).unwrap().layout().unwrap());

    let points = |l: &PositionedLayout| l.seats.iter().map(|s| s.point).collect::<Vec<_>>();
    assert_eq!(compute_points_hash(&points(&a)), compute_points_hash(&points(&b)));
}
