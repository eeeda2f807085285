//! Ordering of train listings for presentation.

use tracing::trace;

use super::merge_sort::stable_sort_by_key;
use crate::domain::{Station, TrainListing};

/// Order trains by departure time.
///
/// Trains departing at the same time keep their catalogue order.
pub fn sort_by_departure(trains: Vec<TrainListing>) -> Vec<TrainListing> {
    stable_sort_by_key(trains, |train| train.departure_time)
}

/// Select the trains running from `source` to `destination` and order them
/// by departure time.
pub fn trains_between(
    catalogue: &[TrainListing],
    source: &Station,
    destination: &Station,
) -> Vec<TrainListing> {
    let matching: Vec<TrainListing> = catalogue
        .iter()
        .filter(|train| train.serves(source, destination))
        .cloned()
        .collect();

    trace!(
        source = %source,
        destination = %destination,
        matches = matching.len(),
        "listing trains"
    );

    sort_by_departure(matching)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{TimetableTime, TrainId};
    use proptest::prelude::*;

    fn make_train(index: usize, dep_mins: u32) -> TrainListing {
        TrainListing {
            id: TrainId::new(format!("T{index}")).unwrap(),
            name: format!("Train {index}"),
            source: Station::parse("City1").unwrap(),
            destination: Station::parse("City2").unwrap(),
            departure_time: TimetableTime::from_hm(dep_mins / 60, dep_mins % 60).unwrap(),
            arrival_time: TimetableTime::from_hm(23, 59).unwrap(),
            seats: 1,
        }
    }

    proptest! {
        /// Sorting yields non-decreasing departures, stable within ties
        #[test]
        fn departures_non_decreasing_and_stable(deps in prop::collection::vec(0u32..6, 0..60)) {
            // A small departure range forces plenty of ties
            let trains: Vec<TrainListing> = deps
                .iter()
                .enumerate()
                .map(|(i, d)| make_train(i, 9 * 60 + d))
                .collect();
            let len = trains.len();

            let sorted = sort_by_departure(trains);
            prop_assert_eq!(sorted.len(), len);

            for pair in sorted.windows(2) {
                prop_assert!(pair[0].departure_time <= pair[1].departure_time);
                if pair[0].departure_time == pair[1].departure_time {
                    let a: usize = pair[0].id.as_str()[1..].parse().unwrap();
                    let b: usize = pair[1].id.as_str()[1..].parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
