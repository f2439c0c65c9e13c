// Connection animator: wrap-around law, trail emission, sampling bounds.

use globe_core::connection::{sample_connections, Connection};
use globe_core::constants::*;
use globe_core::geo::{Destination, DestinationKind, GeoPoint};
use globe_core::marker::MarkerKind;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn hub() -> GeoPoint {
    GeoPoint::new(HUB_LAT, HUB_LNG)
}

fn destinations(n: usize) -> Vec<Destination> {
    (0..n)
        .map(|i| Destination {
            location: GeoPoint::new(
                -60.0 + (i as f32 * 7.3) % 120.0,
                -170.0 + (i as f32 * 13.7) % 340.0,
            ),
            kind: DestinationKind::Talent,
        })
        .collect()
}

#[test]
fn progress_stays_in_unit_interval_forever() {
    let mut conn = Connection {
        start: hub(),
        end: GeoPoint::new(35.68, 139.69),
        progress: 0.97,
        speed: CONNECTION_SPEED_MAX,
    };
    for _ in 0..10_000 {
        conn.advance();
        assert!(
            (0.0..1.0).contains(&conn.progress),
            "progress escaped: {}",
            conn.progress
        );
    }
}

#[test]
fn wrap_resets_to_zero() {
    let mut conn = Connection {
        start: hub(),
        end: GeoPoint::new(0.0, 0.0),
        progress: 0.995,
        speed: 0.008,
    };
    conn.advance();
    assert_eq!(conn.progress, 0.0);
}

#[test]
fn trail_sizes_strictly_decrease() {
    let conn = Connection {
        start: hub(),
        end: GeoPoint::new(40.71, -74.0),
        progress: 0.5,
        speed: 0.005,
    };
    let markers = conn.markers();
    assert_eq!(markers[0].kind, MarkerKind::ConnectionHead);
    let trail: Vec<_> = markers
        .iter()
        .filter(|m| m.kind == MarkerKind::ConnectionTrail)
        .collect();
    assert_eq!(trail.len(), CONNECTION_TRAIL_COUNT);
    for pair in trail.windows(2) {
        assert!(pair[0].size > pair[1].size);
    }
}

#[test]
fn trail_ghosts_behind_the_start_are_omitted() {
    let fresh = Connection {
        start: hub(),
        end: GeoPoint::new(40.71, -74.0),
        progress: 0.01,
        speed: 0.005,
    };
    // Only the head; every ghost's virtual progress would be negative
    assert_eq!(fresh.markers().len(), 1);

    let partial = Connection {
        progress: 0.05,
        ..fresh
    };
    // Two ghosts fit (0.03 and 0.01), the third would be at -0.01
    assert_eq!(partial.markers().len(), 3);
}

#[test]
fn head_interpolates_each_axis_linearly() {
    let conn = Connection {
        start: GeoPoint::new(0.0, 0.0),
        end: GeoPoint::new(10.0, -40.0),
        progress: 0.25,
        speed: 0.005,
    };
    let head = conn.head();
    assert!((head.lat - 2.5).abs() < 1e-5);
    assert!((head.lng - (-10.0)).abs() < 1e-5);
}

#[test]
fn oversized_destination_set_is_capped_with_distinct_ends() {
    let dests = destinations(CONNECTION_CAP + 37);
    let mut rng = StdRng::seed_from_u64(7);
    let conns = sample_connections(hub(), &dests, CONNECTION_CAP, &mut rng);
    assert_eq!(conns.len(), CONNECTION_CAP);

    let mut ends: Vec<(u32, u32)> = conns
        .iter()
        .map(|c| (c.end.lat.to_bits(), c.end.lng.to_bits()))
        .collect();
    ends.sort_unstable();
    ends.dedup();
    assert_eq!(ends.len(), CONNECTION_CAP, "sampled ends must be distinct");
}

#[test]
fn undersized_destination_set_uses_every_destination() {
    let dests = destinations(5);
    let mut rng = StdRng::seed_from_u64(7);
    let conns = sample_connections(hub(), &dests, CONNECTION_CAP, &mut rng);
    assert_eq!(conns.len(), 5);
}

#[test]
fn empty_destination_set_yields_no_connections() {
    let mut rng = StdRng::seed_from_u64(7);
    let conns = sample_connections(hub(), &[], CONNECTION_CAP, &mut rng);
    assert!(conns.is_empty());
}

#[test]
fn sampled_connections_start_staggered_within_speed_range() {
    let dests = destinations(30);
    let mut rng = StdRng::seed_from_u64(11);
    let conns = sample_connections(hub(), &dests, CONNECTION_CAP, &mut rng);
    for c in &conns {
        assert!((0.0..1.0).contains(&c.progress));
        assert!((CONNECTION_SPEED_MIN..CONNECTION_SPEED_MAX).contains(&c.speed));
        assert_eq!(c.start.lat, HUB_LAT);
        assert_eq!(c.start.lng, HUB_LNG);
    }
}
