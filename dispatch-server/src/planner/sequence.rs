//! Destination sequencing by origin-relative travel time.

use crate::domain::{DomainError, GeoPoint, TimedDestination};

/// Order destinations by ascending travel time from the origin.
///
/// `travel_times` pairs with `destinations` by index. All times are
/// measured from the single origin, not chained between stops: the
/// result minimizes origin-relative time, not tour length. The sort is
/// stable, so destinations with equal times keep their insertion order.
///
/// Fails with [`DomainError`] when the pairing is inconsistent or a time
/// is unusable; both indicate a bug in whoever assembled the inputs.
pub fn sequence(
    destinations: &[GeoPoint],
    travel_times: &[f64],
) -> Result<Vec<GeoPoint>, DomainError> {
    if travel_times.len() != destinations.len() {
        return Err(DomainError::TravelTimeCount {
            expected: destinations.len(),
            actual: travel_times.len(),
        });
    }

    for (index, &value) in travel_times.iter().enumerate() {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::BadTravelTime { index, value });
        }
    }

    let mut timed: Vec<TimedDestination> = destinations
        .iter()
        .zip(travel_times)
        .map(|(&point, &travel_time_seconds)| TimedDestination {
            point,
            travel_time_seconds,
        })
        .collect();

    timed.sort_by(|a, b| a.travel_time_seconds.total_cmp(&b.travel_time_seconds));

    Ok(timed.into_iter().map(|t| t.point).collect())
}
