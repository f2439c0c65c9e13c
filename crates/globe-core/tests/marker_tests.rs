// Pulse envelopes and marker construction.

use globe_core::constants::*;
use globe_core::geo::{Destination, DestinationKind, GeoPoint};
use globe_core::marker::{
    destination_marker, destination_pulse, hub_marker, hub_pulse, pulse_phase, MarkerKind,
};

#[test]
fn destination_pulse_stays_within_envelope() {
    let base = 0.05;
    // The envelope of base * (0.8 + 0.4 * sin) over a full cycle
    let lo = (DEST_PULSE_BASE - DEST_PULSE_SPAN) * base;
    let hi = (DEST_PULSE_BASE + DEST_PULSE_SPAN) * base;
    // Sweep more than a full sine cycle at several longitudes
    for lng in [-180.0_f32, -30.0, 0.0, 77.5, 180.0] {
        let mut t = 0.0;
        while t < 4000.0 {
            let size = destination_pulse(base, t, lng);
            assert!(
                size >= lo - 1e-6 && size <= hi + 1e-6,
                "size {size} out of envelope at t={t} lng={lng}"
            );
            t += 7.0;
        }
    }
}

#[test]
fn hub_pulse_stays_within_envelope() {
    let base = HUB_BASE_SIZE;
    let mut t = 0.0;
    while t < 8000.0 {
        let size = hub_pulse(base, t);
        assert!(
            size >= 0.7 * base - 1e-6 && size <= 1.3 * base + 1e-6,
            "hub size {size} out of envelope at t={t}"
        );
        t += 11.0;
    }
}

#[test]
fn markers_do_not_pulse_in_lockstep() {
    // The phase offset is a pure function of longitude, so two markers at
    // different longitudes show different sizes at the same instant.
    assert_ne!(pulse_phase(0.0), pulse_phase(90.0));
    let a = destination_pulse(0.05, 0.0, 0.0);
    let b = destination_pulse(0.05, 0.0, 90.0);
    assert!((a - b).abs() > 1e-6);
}

#[test]
fn hub_marker_carries_hub_semantics() {
    let hub = GeoPoint::new(HUB_LAT, HUB_LNG);
    let m = hub_marker(hub, 0.0);
    assert_eq!(m.kind, MarkerKind::Hub);
    assert_eq!(m.color, HUB_COLOR);
    assert_eq!(m.location, hub);
}

#[test]
fn destination_markers_are_colored_by_kind() {
    let now = 123.0;
    let cases = [
        (DestinationKind::Talent, TALENT_COLOR, MarkerKind::Talent),
        (DestinationKind::Team, TEAM_COLOR, MarkerKind::Team),
        (DestinationKind::Agency, AGENCY_COLOR, MarkerKind::Agency),
    ];
    for (kind, color, marker_kind) in cases {
        let dest = Destination {
            location: GeoPoint::new(12.0, 34.0),
            kind,
        };
        let m = destination_marker(&dest, now);
        assert_eq!(m.color, color);
        assert_eq!(m.kind, marker_kind);
        assert!(m.size > 0.0);
    }
}

#[test]
fn unit_vectors_land_on_the_unit_sphere() {
    for (lat, lng) in [
        (0.0_f32, 0.0_f32),
        (90.0, 0.0),
        (-90.0, 0.0),
        (51.5, -0.13),
        (-33.87, 151.21),
    ] {
        let v = GeoPoint::new(lat, lng).to_unit_vector();
        assert!((v.length() - 1.0).abs() < 1e-5, "({lat},{lng}) -> {v:?}");
    }
    // Poles map to the y axis, the equator prime meridian to +x
    assert!((GeoPoint::new(90.0, 0.0).to_unit_vector().y - 1.0).abs() < 1e-5);
    assert!((GeoPoint::new(0.0, 0.0).to_unit_vector().x - 1.0).abs() < 1e-5);
}
