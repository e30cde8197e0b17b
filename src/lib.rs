//! # zodiac_orrery
//!
//! Ecliptic longitudes and zodiac placements of the Sun, the Moon and the
//! planets from simplified J2000 Keplerian elements with linear drift.
//!
//! ```rust
//! use zodiac_orrery::{body::Body, sun_system::SunSystem, time::day_number};
//!
//! let mut system = SunSystem::new();
//! system.calculate(day_number(9, 9, 1990));
//!
//! for state in &system {
//!     println!("{state}");
//! }
//! assert!(system.body(Body::Mars).geocentric_longitude.is_some());
//! ```

pub mod body;
pub mod body_state;
pub mod constants;
pub mod kepler;
pub mod orbital_elements;
pub mod orrery_errors;
pub mod params;
pub mod solver;
pub mod sun_system;
pub mod time;
pub mod zodiac;
