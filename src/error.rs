/// Errors that can occur while encoding, decoding or choosing a coder.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Invalid coordinate (latitude: {latitude}, longitude: {longitude})")]
    InvalidLatLong { latitude: f64, longitude: f64 },

    #[error("Invalid geocode {geocode:?}: {reason}")]
    InvalidGeocode {
        geocode: String,
        reason: &'static str,
    },

    #[error("Undefined strategy {0:?}")]
    UndefinedStrategy(String),
}

impl Error {
    pub(crate) fn invalid_geocode(geocode: &str, reason: &'static str) -> Self {
        Error::InvalidGeocode {
            geocode: geocode.to_owned(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
