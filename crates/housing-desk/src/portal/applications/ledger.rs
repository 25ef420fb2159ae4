use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{Application, ApplicationId, ApplicationStatus, ApplicationView, UserId};
use crate::portal::error::PortalError;
use crate::portal::rooms::domain::RoomId;
use crate::portal::store::{HousingStore, StoreTx};

/// Service owning housing applications and the occupancy bookkeeping that
/// follows their status transitions.
pub struct ApplicationLedger<S> {
    store: Arc<S>,
}

static APPLICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_application_id() -> ApplicationId {
    let id = APPLICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("app-{id:06}"))
}

/// Claims one seat in the room, failing without a write when the room is
/// already at capacity. The read and the increment share the transaction, so
/// two approvals racing for the last seat cannot both pass the check.
fn claim_seat(tx: &mut dyn StoreTx, room_id: &RoomId) -> Result<(), PortalError> {
    let mut room = tx.room(room_id)?.ok_or(PortalError::NotFound("room"))?;
    if room.is_full() {
        return Err(PortalError::RoomFull { room: room.name });
    }
    room.occupancy += 1;
    tx.put_room(room)?;
    Ok(())
}

fn release_seat(tx: &mut dyn StoreTx, room_id: &RoomId) -> Result<(), PortalError> {
    if let Some(mut room) = tx.room(room_id)? {
        room.occupancy = room.occupancy.saturating_sub(1);
        tx.put_room(room)?;
    }
    Ok(())
}

impl<S> ApplicationLedger<S>
where
    S: HousingStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Submit or replace the caller's application for a room.
    ///
    /// Each user holds at most one application; resubmitting keeps the
    /// application's id but resets it to Pending against the new room. A seat
    /// held through a prior approval is released in the same transaction.
    /// The capacity check runs against the target room before any release, so
    /// a full room rejects every submission.
    pub fn submit(&self, user_id: UserId, room_id: RoomId) -> Result<Application, PortalError> {
        let mut tx = self.store.begin()?;
        let target = tx.room(&room_id)?.ok_or(PortalError::NotFound("room"))?;
        if target.is_full() {
            return Err(PortalError::RoomFull { room: target.name });
        }

        let application = match tx.application_for_user(&user_id)? {
            Some(mut existing) => {
                if existing.status == ApplicationStatus::Approved {
                    release_seat(tx.as_mut(), &existing.room_id)?;
                }
                existing.room_id = room_id;
                existing.status = ApplicationStatus::Pending;
                existing.room_number = None;
                existing.created_at = Utc::now();
                existing
            }
            None => Application {
                id: next_application_id(),
                user_id,
                room_id,
                status: ApplicationStatus::Pending,
                room_number: None,
                created_at: Utc::now(),
            },
        };

        tx.put_application(application.clone())?;
        tx.commit()?;

        info!(
            application = %application.id.0,
            room = %application.room_id.0,
            "application submitted"
        );
        Ok(application)
    }

    /// Fetch the caller's application joined with its room summary.
    pub fn for_user(&self, user_id: &UserId) -> Result<ApplicationView, PortalError> {
        let tx = self.store.begin()?;
        let application = tx
            .application_for_user(user_id)?
            .ok_or(PortalError::NotFound("application"))?;
        let room = tx
            .room(&application.room_id)?
            .ok_or(PortalError::NotFound("room"))?;
        Ok(ApplicationView::join(application, &room))
    }

    /// List every application with its room summary, ordered by application
    /// id, for administrative review.
    pub fn list(&self) -> Result<Vec<ApplicationView>, PortalError> {
        let tx = self.store.begin()?;
        let mut views = Vec::new();
        for application in tx.applications()? {
            let room = tx
                .room(&application.room_id)?
                .ok_or(PortalError::NotFound("room"))?;
            views.push(ApplicationView::join(application, &room));
        }
        Ok(views)
    }

    /// Move an application through the review state machine.
    ///
    /// Occupancy follows the transition: entering Approved claims a seat
    /// (re-checking capacity at transition time), leaving Approved releases
    /// one. Re-affirming Approved neither claims nor releases; it may still
    /// update the room number. The status write and the occupancy adjustment
    /// commit together or not at all.
    pub fn update_status(
        &self,
        id: &ApplicationId,
        status_token: &str,
        room_number: Option<String>,
    ) -> Result<Application, PortalError> {
        let target = ApplicationStatus::parse(status_token)?;

        let mut tx = self.store.begin()?;
        let mut application = tx
            .application(id)?
            .ok_or(PortalError::NotFound("application"))?;
        let previous = application.status;

        match (previous, target) {
            (ApplicationStatus::Approved, ApplicationStatus::Approved) => {}
            (_, ApplicationStatus::Approved) => claim_seat(tx.as_mut(), &application.room_id)?,
            (ApplicationStatus::Approved, _) => release_seat(tx.as_mut(), &application.room_id)?,
            _ => {}
        }

        application.status = target;
        if target == ApplicationStatus::Approved {
            if let Some(number) = room_number {
                application.room_number = Some(number);
            }
        } else {
            application.room_number = None;
        }

        tx.put_application(application.clone())?;
        tx.commit()?;

        info!(
            application = %application.id.0,
            from = previous.label(),
            to = target.label(),
            "application status updated"
        );
        Ok(application)
    }

    /// Withdraw an application, releasing its seat if one was held.
    pub fn delete(&self, id: &ApplicationId) -> Result<(), PortalError> {
        let mut tx = self.store.begin()?;
        let application = tx
            .application(id)?
            .ok_or(PortalError::NotFound("application"))?;
        if application.status == ApplicationStatus::Approved {
            release_seat(tx.as_mut(), &application.room_id)?;
        }
        tx.remove_application(id)?;
        tx.commit()?;

        info!(application = %id.0, "application withdrawn");
        Ok(())
    }
}
