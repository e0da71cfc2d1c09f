//! Encode latitude/longitude pairs as short geocode strings and decode them
//! back into the rectangle they denote.
//!
//! Two schemes are available. [`Base32Coder`] bisects longitude and latitude
//! alternately and packs five bits into each symbol of the geohash alphabet.
//! [`QuadrantCoder`] bisects each axis once per symbol and names the quadrant
//! with one of `a`, `b`, `c` or `d`. [`GeoHasher`] picks one by [`Strategy`].
//!
//! ```
//! use geohasher::{GeoCoder, GeoHasher, Strategy};
//!
//! let hasher = GeoHasher::new(Strategy::Veness);
//! let geocode = hasher.encode(42.6, -5.6, 5).unwrap();
//! assert_eq!(geocode, "ezs42");
//!
//! let bounds = hasher.decode(&geocode).unwrap();
//! assert!(bounds.latitude.contains(42.6));
//! ```
pub mod alphabet;
pub mod base32;
pub mod bounds;
pub mod coder;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod quadrant;
pub mod strategy;

pub use bounds::{Point, Range, RangeBounds};
pub use coder::{Base32Coder, Coder, GeoCoder, QuadrantCoder};
pub use error::{Error, Result};
pub use strategy::{GeoHasher, Strategy};

/// Shortest geocode produced.
pub const MIN_PRECISION: usize = 1;
/// Longest geocode produced.
pub const MAX_PRECISION: usize = 12;
