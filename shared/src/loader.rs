use chrono::NaiveDate;

use crate::error::ApiError;
use crate::reservation::{Reservation, ReservationCollection};
use crate::week::{is_in_week, WeekNumber};

/// Anything that can hand over the full reservation collection in one read.
#[allow(async_fn_in_trait)]
pub trait ReservationSource {
    async fn fetch_collection(&self) -> Result<ReservationCollection, ApiError>;
}

/// Reservations arriving and departing during one week, in server order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekPartition {
    pub arrivals: Vec<Reservation>,
    pub departures: Vec<Reservation>,
}

impl WeekPartition {
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty() && self.departures.is_empty()
    }
}

/// Split a collection by arrival and by departure day, for `week` of the
/// year `today` falls in.
///
/// The two filters are independent, so a stay that starts and ends within
/// the same week shows up in both lists.
pub fn partition(reservations: &[Reservation], week: WeekNumber, today: NaiveDate) -> WeekPartition {
    WeekPartition {
        arrivals: reservations
            .iter()
            .filter(|reservation| is_in_week(reservation.date_start, week, today))
            .cloned()
            .collect(),
        departures: reservations
            .iter()
            .filter(|reservation| is_in_week(reservation.date_end, week, today))
            .cloned()
            .collect(),
    }
}

/// Fetch the whole collection and keep what concerns `week` of the current year
pub async fn load_reservations<S: ReservationSource>(
    source: &S,
    week: WeekNumber,
    today: NaiveDate,
) -> Result<WeekPartition, ApiError> {
    let collection = source.fetch_collection().await?;
    Ok(partition(&collection.member, week, today))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::reservation::{Lodging, LodgingId, ReservationId, ReservationStatus, Tenant};
    use crate::week::WeekCalendar;
    use std::cell::Cell;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn reservation(id: &str, start: NaiveDate, end: NaiveDate, lodging: &str) -> Reservation {
        Reservation {
            id: ReservationId::new(id),
            date_start: start,
            date_end: end,
            status: ReservationStatus::Pending,
            tenant: Some(Tenant {
                firstname: "Lou".to_string(),
                lastname: "Petit".to_string(),
            }),
            lodging: Some(Lodging {
                id: LodgingId::new(lodging),
                label: format!("Emplacement {}", lodging),
            }),
        }
    }

    struct FakeSource {
        pub result: Result<ReservationCollection, ApiError>,
        pub calls: Cell<u32>,
    }

    impl FakeSource {
        fn with(member: Vec<Reservation>) -> Self {
            Self {
                result: Ok(ReservationCollection::new(member)),
                calls: Cell::new(0),
            }
        }

        fn failing(error: ApiError) -> Self {
            Self {
                result: Err(error),
                calls: Cell::new(0),
            }
        }
    }

    impl ReservationSource for FakeSource {
        async fn fetch_collection(&self) -> Result<ReservationCollection, ApiError> {
            self.calls.set(self.calls.get() + 1);
            self.result.clone()
        }
    }

    #[test]
    fn test_partition_by_start_and_end_day() {
        let today = date(2025, 3, 5);
        let week = WeekNumber::new(10); // 2025-03-02 ..= 2025-03-08

        let arriving = reservation("1", date(2025, 3, 5), date(2025, 3, 15), "A1");
        let leaving = reservation("2", date(2025, 2, 20), date(2025, 3, 2), "A2");
        let short_stay = reservation("3", date(2025, 3, 2), date(2025, 3, 8), "A3");
        let elsewhere = reservation("4", date(2025, 3, 9), date(2025, 3, 16), "A4");

        let result = partition(
            &[arriving.clone(), leaving.clone(), short_stay.clone(), elsewhere],
            week,
            today,
        );

        assert_eq!(result.arrivals, vec![arriving, short_stay.clone()]);
        assert_eq!(result.departures, vec![leaving, short_stay]);
        assert!(!result.is_empty());
        assert!(partition(&[], week, today).is_empty());
    }

    #[test]
    fn test_partition_membership_matches_week_range() {
        let today = date(2026, 10, 19);
        let calendar = WeekCalendar::for_date(today);
        let reservations: Vec<Reservation> = (0..60)
            .map(|i| {
                let start = date(2026, 1, 1) + chrono::Days::new(i * 5);
                let end = start + chrono::Days::new(i % 11);
                reservation(&i.to_string(), start, end, "B")
            })
            .collect();

        for week in 1..=52 {
            let week = WeekNumber::new(week);
            let range = calendar.week_range(week);
            let result = partition(&reservations, week, today);

            for r in &reservations {
                assert_eq!(
                    result.arrivals.contains(r),
                    range.start <= r.date_start && r.date_start <= range.end
                );
                assert_eq!(
                    result.departures.contains(r),
                    range.start <= r.date_end && r.date_end <= range.end
                );
            }
        }
    }

    #[tokio::test]
    async fn test_load_reservations_week_ten_arrival_only() {
        let source = FakeSource::with(vec![reservation(
            "42",
            date(2025, 3, 4),
            date(2025, 3, 20),
            "C7",
        )]);

        let result = load_reservations(&source, WeekNumber::new(10), date(2025, 1, 15))
            .await
            .unwrap();

        assert_eq!(source.calls.get(), 1);
        assert_eq!(result.arrivals.len(), 1);
        assert_eq!(result.arrivals[0].id, ReservationId::new("42"));
        assert!(result.departures.is_empty());
    }

    #[tokio::test]
    async fn test_load_reservations_propagates_failure() {
        let source = FakeSource::failing(ApiError::network("offline"));

        let result = load_reservations(&source, WeekNumber::new(3), date(2025, 1, 15)).await;

        assert_eq!(result, Err(ApiError::network("offline")));
    }
}
