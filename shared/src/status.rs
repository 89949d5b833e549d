use std::collections::HashMap;
use thiserror::Error;

use crate::error::ApiError;
use crate::reservation::{LodgingId, Reservation, ReservationStatus};

/// Content type the lodging status endpoint expects for PATCH
pub const MERGE_PATCH_CONTENT_TYPE: &str = "application/merge-patch+json";

/// A confirmed intent to change one lodging's status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub lodging_id: LodgingId,
    pub status: ReservationStatus,
}

impl StatusUpdate {
    /// `{lodgings_url}/{id}/update-status?status={value}`
    pub fn url(&self, lodgings_url: &str) -> String {
        format!(
            "{}/{}/update-status?status={}",
            lodgings_url.trim_end_matches('/'),
            self.lodging_id,
            self.status.as_str()
        )
    }
}

/// What a row interaction asks for: the lodging it is bound to (if any) and
/// the value currently selected in its dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSelection {
    pub lodging_id: Option<LodgingId>,
    pub status: ReservationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdatePlan {
    /// Neutral value selected: nothing to send
    Skip,
    Patch(StatusUpdate),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusOutcome {
    Skipped,
    Confirmed(StatusUpdate),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusUpdateError {
    #[error("lodging id not found on the selected row")]
    MissingLodgingId,
    #[error("status update failed: {0}")]
    Api(#[from] ApiError),
}

/// Sends a status change to the backend
#[allow(async_fn_in_trait)]
pub trait StatusTransport {
    async fn patch_status(&self, update: &StatusUpdate) -> Result<(), ApiError>;
}

pub fn plan_status_update(
    lodging_id: Option<&LodgingId>,
    selected: ReservationStatus,
) -> Result<StatusUpdatePlan, StatusUpdateError> {
    let lodging_id = lodging_id.ok_or(StatusUpdateError::MissingLodgingId)?;

    if selected.is_pending() {
        return Ok(StatusUpdatePlan::Skip);
    }

    Ok(StatusUpdatePlan::Patch(StatusUpdate {
        lodging_id: lodging_id.clone(),
        status: selected,
    }))
}

/// Plan and, when needed, send a single status update
pub async fn submit_status<T: StatusTransport>(
    transport: &T,
    selection: &StatusSelection,
) -> Result<StatusOutcome, StatusUpdateError> {
    match plan_status_update(selection.lodging_id.as_ref(), selection.status)? {
        StatusUpdatePlan::Skip => Ok(StatusOutcome::Skipped),
        StatusUpdatePlan::Patch(update) => {
            transport.patch_status(&update).await?;
            Ok(StatusOutcome::Confirmed(update))
        }
    }
}

/// Values shown in the status dropdowns, keyed by lodging.
///
/// Rows fall back to their reservation's own status until staff pick a
/// value; every row bound to the same lodging then shows that value. A
/// failed update leaves the pick in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    selected: HashMap<LodgingId, ReservationStatus>,
}

impl StatusBoard {
    pub fn status_for(&self, reservation: &Reservation) -> ReservationStatus {
        reservation
            .lodging_id()
            .and_then(|id| self.selected.get(id).copied())
            .unwrap_or(reservation.status)
    }

    pub fn select(&mut self, lodging_id: LodgingId, status: ReservationStatus) {
        self.selected.insert(lodging_id, status);
    }

    /// Reflect a value the backend accepted
    pub fn confirm(&mut self, update: &StatusUpdate) {
        self.selected.insert(update.lodging_id.clone(), update.status);
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}
