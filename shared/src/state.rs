use chrono::NaiveDate;

use crate::loader::WeekPartition;
use crate::navigator::Direction;
use crate::reservation::{LodgingId, Reservation, ReservationStatus};
use crate::status::{StatusBoard, StatusUpdate};
use crate::week::{current_week_number, WeekNumber};

/// A load the dashboard asked for. Only the latest one may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    pub id: u64,
    pub week: WeekNumber,
}

/// Everything the dashboard shows, passed to and returned from each
/// operation instead of living in a global.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub week: WeekNumber,
    pub arrivals: Vec<Reservation>,
    pub departures: Vec<Reservation>,
    pub statuses: StatusBoard,
    pub loading: bool,
    latest_request: u64,
}

impl DashboardState {
    /// Fresh state for the week containing `today`, with its first load pending
    pub fn starting_at(today: NaiveDate) -> Self {
        Self::for_week(current_week_number(today))
    }

    pub fn for_week(week: WeekNumber) -> Self {
        Self {
            week,
            arrivals: Vec::new(),
            departures: Vec::new(),
            statuses: StatusBoard::default(),
            loading: true,
            latest_request: 1,
        }
    }

    /// The load that should currently be in flight
    pub fn pending_request(&self) -> LoadRequest {
        LoadRequest {
            id: self.latest_request,
            week: self.week,
        }
    }

    pub fn is_current(&self, request: LoadRequest) -> bool {
        request == self.pending_request()
    }

    /// Ask for another load of the current week. Prior lists stay on screen
    /// until it settles.
    pub fn request_load(mut self) -> Self {
        self.latest_request += 1;
        self.loading = true;
        self
    }

    /// Move one week back or forward, clamped to the valid range. Always
    /// requests a load, even when the week did not change.
    pub fn change_week(mut self, direction: Direction) -> Self {
        self.week = self.week.step(direction);
        self.request_load()
    }

    /// Replace both lists with a settled load. Responses to superseded
    /// requests are ignored.
    pub fn apply_load(mut self, request: LoadRequest, partition: WeekPartition) -> Self {
        if !self.is_current(request) {
            return self;
        }
        self.arrivals = partition.arrivals;
        self.departures = partition.departures;
        self.statuses.clear();
        self.loading = false;
        self
    }

    /// A failed load keeps the prior lists untouched
    pub fn fail_load(mut self, request: LoadRequest) -> Self {
        if self.is_current(request) {
            self.loading = false;
        }
        self
    }

    /// Record a pick made in a row's dropdown. Rows without a lodging have
    /// nothing to key on and are left alone.
    pub fn select_status(mut self, lodging_id: Option<LodgingId>, status: ReservationStatus) -> Self {
        if let Some(lodging_id) = lodging_id {
            self.statuses.select(lodging_id, status);
        }
        self
    }

    pub fn confirm_status(mut self, update: &StatusUpdate) -> Self {
        self.statuses.confirm(update);
        self
    }
}
