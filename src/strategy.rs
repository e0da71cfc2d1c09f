use crate::bounds::RangeBounds;
use crate::coder::{Base32Coder, GeoCoder, QuadrantCoder};
use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The available geocoding schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum Strategy {
    /// Base32 bisection coder.
    Veness,
    /// Quadrant coder.
    Talwar,
}

impl Strategy {
    /// The name the strategy is selected by.
    pub fn tag(&self) -> &'static str {
        match self {
            Strategy::Veness => "VENESS",
            Strategy::Talwar => "TALWAR",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "VENESS" => Ok(Strategy::Veness),
            "TALWAR" => Ok(Strategy::Talwar),
            _ => Err(Error::UndefinedStrategy(s.to_owned())),
        }
    }
}

/// One coder per strategy.
pub enum GeoHasher {
    Veness(Base32Coder),
    Talwar(QuadrantCoder),
}

impl GeoHasher {
    /// Create the coder for a strategy.
    pub fn new(strategy: Strategy) -> Self {
        log::debug!("Creating {strategy} geo hasher");
        match strategy {
            Strategy::Veness => GeoHasher::Veness(Base32Coder::default()),
            Strategy::Talwar => GeoHasher::Talwar(QuadrantCoder::default()),
        }
    }

    /// Create the coder for a strategy tag such as `"VENESS"`.
    pub fn from_name(name: &str) -> Result<Self> {
        let strategy = name.parse::<Strategy>().inspect_err(|err| log::warn!("{err}"))?;
        Ok(Self::new(strategy))
    }

    /// The strategy this coder implements.
    pub fn strategy(&self) -> Strategy {
        match self {
            GeoHasher::Veness(_) => Strategy::Veness,
            GeoHasher::Talwar(_) => Strategy::Talwar,
        }
    }
}

impl GeoCoder for GeoHasher {
    fn encode(&self, latitude: f64, longitude: f64, precision: usize) -> Result<String> {
        match self {
            GeoHasher::Veness(coder) => coder.encode(latitude, longitude, precision),
            GeoHasher::Talwar(coder) => coder.encode(latitude, longitude, precision),
        }
    }

    fn decode(&self, geocode: &str) -> Result<RangeBounds> {
        match self {
            GeoHasher::Veness(coder) => coder.decode(geocode),
            GeoHasher::Talwar(coder) => coder.decode(geocode),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_strategy() {
        assert_eq!("VENESS".parse::<Strategy>(), Ok(Strategy::Veness));
        assert_eq!("TALWAR".parse::<Strategy>(), Ok(Strategy::Talwar));
        assert_eq!(Strategy::Talwar.to_string(), "TALWAR");
    }

    #[test_log::test]
    fn error_on_undefined_strategy() {
        for name in ["", "veness", "GEOHASH"] {
            assert_eq!(
                GeoHasher::from_name(name).err(),
                Some(Error::UndefinedStrategy(name.to_string()))
            );
        }
    }

    #[test]
    fn hasher_dispatches_on_strategy() {
        let veness = GeoHasher::from_name("VENESS").unwrap();
        let talwar = GeoHasher::from_name("TALWAR").unwrap();
        assert_eq!(veness.strategy(), Strategy::Veness);
        assert_eq!(talwar.strategy(), Strategy::Talwar);

        assert_eq!(veness.encode(42.6, -5.6, 5), Ok("ezs42".to_string()));
        assert_eq!(talwar.encode(0.133333, 117.5, 5), Ok("cbaba".to_string()));
        assert!(talwar.decode("ezs42").is_err());
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn coders_are_shareable_across_threads() {
        assert_send_sync::<GeoHasher>();
        assert_send_sync::<Base32Coder>();
        assert_send_sync::<QuadrantCoder>();

        let hasher = GeoHasher::new(Strategy::Veness);
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| assert_eq!(hasher.encode(42.6, -5.6, 5), Ok("ezs42".to_string())));
            }
        });
    }

    #[cfg(feature = "serde")]
    #[test]
    fn strategy_serializes_as_tag() {
        assert_eq!(serde_json::to_string(&Strategy::Veness).unwrap(), "\"VENESS\"");
        assert_eq!(
            serde_json::from_str::<Strategy>("\"TALWAR\"").unwrap(),
            Strategy::Talwar
        );
    }
}
