//! Train catalogue construction.

use crate::domain::{
    InvalidStation, InvalidTrainId, Station, TimeError, TimetableTime, TrainId, TrainListing,
};

/// Error raised when a catalogue entry is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogueError {
    #[error(transparent)]
    Station(#[from] InvalidStation),

    #[error(transparent)]
    Train(#[from] InvalidTrainId),

    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Build a listing from raw catalogue fields.
pub fn parse_listing(
    id: &str,
    name: &str,
    source: &str,
    destination: &str,
    departure: &str,
    arrival: &str,
    seats: u32,
) -> Result<TrainListing, CatalogueError> {
    Ok(TrainListing {
        id: TrainId::new(id.to_string())?,
        name: name.to_string(),
        source: Station::parse(source)?,
        destination: Station::parse(destination)?,
        departure_time: TimetableTime::parse_hhmm(departure)?,
        arrival_time: TimetableTime::parse_hhmm(arrival)?,
        seats,
    })
}

/// Trains running on the three-city demonstration network.
pub fn sample_catalogue() -> Result<Vec<TrainListing>, CatalogueError> {
    Ok(vec![
        parse_listing("T101", "Express A", "City1", "City2", "09:00", "12:00", 50)?,
        parse_listing("T102", "Express B", "City1", "City3", "10:00", "13:00", 40)?,
        parse_listing("T103", "Express C", "City2", "City3", "11:00", "14:00", 30)?,
    ])
}
