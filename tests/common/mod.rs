#![allow(dead_code)]

use approx::assert_abs_diff_eq;
use zodiac_orrery::{body::Body, body_state::BodyState, sun_system::SunSystem};

/// Reference run for 1990-09-09 (day number -3400), default parameters.
///
/// (body, heliocentric longitude, geocentric longitude, zodiac index, zodiac angle)
pub const REFERENCE_1990_09_09: [(Body, f64, f64, u8, f64); 9] = [
    (Body::Sun, 166.06604475351966, 166.06604475351966, 6, 16.066044753519662),
    (Body::Mercury, 348.9167346564058, 164.28449238791157, 6, 14.28449238791157),
    (Body::Venus, 132.16596571662305, 151.92740406459257, 6, 1.9274040645925652),
    (Body::Mars, 19.903195208391217, 58.69073181821959, 2, 28.69073181821959),
    (Body::Jupiter, 117.04115360907531, 124.38487753704725, 5, 4.384877537047245),
    (Body::Saturn, 293.7684405906733, 288.7126844141776, 10, 18.712684414177602),
    (Body::Uranus, 278.44217063506784, 275.62638186260415, 10, 5.626381862604148),
    (Body::Neptune, 283.572033099618, 281.8552825228934, 10, 11.85528252289339),
    (Body::Moon, 35.909656582199645, 35.909656582199645, 2, 5.909656582199645),
];

pub fn calculated(day: f64) -> SunSystem {
    let mut system = SunSystem::new();
    system.calculate(day);
    system
}

pub fn assert_state_close(actual: &BodyState, expected: &BodyState, epsilon: f64) {
    assert_eq!(actual.body, expected.body);
    assert_abs_diff_eq!(
        actual.heliocentric_longitude,
        expected.heliocentric_longitude,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(
        actual.ecliptic_latitude,
        expected.ecliptic_latitude,
        epsilon = epsilon
    );
    assert_abs_diff_eq!(actual.ecliptic, expected.ecliptic, epsilon = epsilon);
    assert_eq!(
        actual.geocentric_longitude.is_some(),
        expected.geocentric_longitude.is_some()
    );
    if let (Some(a), Some(e)) = (actual.geocentric_longitude, expected.geocentric_longitude) {
        assert_abs_diff_eq!(a, e, epsilon = epsilon);
    }
    assert_eq!(actual.zodiac_index(), expected.zodiac_index());
}
