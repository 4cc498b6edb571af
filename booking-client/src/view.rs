//! Booking screen state
//!
//! At most one modal is open at a time: the date picker, the time selector
//! (loading or ready) or the confirmation dialog. Outcomes of network calls
//! are reported through a [`Notice`] the UI shows once and then drops.
//!
//! The reserved-slot list is a best-effort projection of the server state for
//! the selected table and day. It is replaced by every list response that
//! arrives, in arrival order, and is trimmed locally after a delete.

use chrono::NaiveDate;
use shared::models::{
    Reservation, ReservationCreate, normalize_slot_label, slot_catalog, slot_id_for_label,
};
use thiserror::Error;

use crate::{ClientResult, ReservationApi};

/// Number of tables in the dining room, numbered from 1
pub const TABLE_COUNT: i64 = 10;

/// Shown when a list or create call fails
pub const GENERIC_FAILURE: &str = "Oops!!! Something went wrong, try again.";

/// Shown when a delete call fails without a server message
pub const DELETE_FAILURE: &str = "Something went wrong. Please try again.";

pub const RESERVATION_DELETED: &str = "Reservation deleted successfully.";

/// Which modal is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    Idle,
    DatePicking,
    /// Time selector; `loading` while the reserved list is being fetched
    TimeSelecting { loading: bool },
    /// Confirmation dialog for the chosen slot label
    Confirming { slot: String },
}

/// User action not allowed in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("{action} is not available in the current view")]
    InvalidTransition { action: &'static str },

    #[error("{0} is in the past")]
    PastDate(NaiveDate),

    #[error("table {0} does not exist")]
    UnknownTable(i64),

    #[error("{0} is not a bookable time")]
    UnknownSlot(String),

    #[error("{0} is already reserved")]
    SlotReserved(String),
}

/// A reserved slot of the selected table and day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedSlot {
    /// `HH:MM` label
    pub slot: String,
    pub reservation_id: i64,
}

impl From<&Reservation> for ReservedSlot {
    fn from(r: &Reservation) -> Self {
        Self {
            slot: normalize_slot_label(&r.slot_time),
            reservation_id: r.reservation_id,
        }
    }
}

/// One button of the time selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotButton {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Failure,
}

/// Message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Failure,
            message: message.into(),
        }
    }
}

/// Parameters of the list call issued when a table is picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRequest {
    pub table_id: i64,
    pub reservation_date: NaiveDate,
}

/// State of the booking screen
#[derive(Debug, Clone)]
pub struct BookingView {
    today: NaiveDate,
    selected_date: NaiveDate,
    selected_table: Option<i64>,
    modal: Modal,
    reserved: Vec<ReservedSlot>,
    showing_reserved: bool,
    notice: Option<Notice>,
}

impl BookingView {
    /// Fresh screen with `today` selected
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            selected_date: today,
            selected_table: None,
            modal: Modal::Idle,
            reserved: Vec::new(),
            showing_reserved: false,
            notice: None,
        }
    }

    /// Fresh screen dated by the local clock
    pub fn starting_today() -> Self {
        Self::new(shared::util::today())
    }

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn selected_table(&self) -> Option<i64> {
        self.selected_table
    }

    pub fn reserved(&self) -> &[ReservedSlot] {
        &self.reserved
    }

    pub fn showing_reserved(&self) -> bool {
        self.showing_reserved
    }

    /// Take the pending notice, if any
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn is_slot_reserved(&self, label: &str) -> bool {
        let label = normalize_slot_label(label);
        self.reserved.iter().any(|r| r.slot == label)
    }

    /// Time selector buttons, disabled where the slot is reserved
    pub fn slot_buttons(&self) -> Vec<SlotButton> {
        slot_catalog()
            .into_iter()
            .map(|slot| SlotButton {
                disabled: self.is_slot_reserved(&slot.time),
                label: slot.time,
            })
            .collect()
    }

    fn expect_modal(&self, allowed: bool, action: &'static str) -> Result<(), ViewError> {
        if allowed {
            Ok(())
        } else {
            Err(ViewError::InvalidTransition { action })
        }
    }

    // ==================== Date picker ====================

    pub fn open_date_picker(&mut self) -> Result<(), ViewError> {
        self.expect_modal(self.modal == Modal::Idle, "open_date_picker")?;
        self.modal = Modal::DatePicking;
        Ok(())
    }

    /// Pick a day no earlier than today and close the picker
    pub fn choose_date(&mut self, date: NaiveDate) -> Result<(), ViewError> {
        self.expect_modal(self.modal == Modal::DatePicking, "choose_date")?;
        if date < self.today {
            return Err(ViewError::PastDate(date));
        }
        self.selected_date = date;
        self.reserved.clear();
        self.modal = Modal::Idle;
        Ok(())
    }

    pub fn close_date_picker(&mut self) -> Result<(), ViewError> {
        self.expect_modal(self.modal == Modal::DatePicking, "close_date_picker")?;
        self.modal = Modal::Idle;
        Ok(())
    }

    // ==================== Time selector ====================

    /// Pick a table, then fetch its reservations for the selected day
    pub async fn select_table(
        &mut self,
        api: &dyn ReservationApi,
        table_id: i64,
    ) -> Result<(), ViewError> {
        let request = self.begin_table_selection(table_id)?;
        let result = api
            .list_reservations(request.table_id, request.reservation_date)
            .await;
        self.finish_table_selection(result);
        Ok(())
    }

    /// Open the time selector in its loading state
    ///
    /// Returns the list call the caller must issue and feed back through
    /// [`finish_table_selection`](Self::finish_table_selection).
    pub fn begin_table_selection(&mut self, table_id: i64) -> Result<ListRequest, ViewError> {
        self.expect_modal(
            matches!(self.modal, Modal::Idle | Modal::TimeSelecting { .. }),
            "select_table",
        )?;
        if !(1..=TABLE_COUNT).contains(&table_id) {
            return Err(ViewError::UnknownTable(table_id));
        }
        if self.selected_table != Some(table_id) {
            self.reserved.clear();
        }
        self.selected_table = Some(table_id);
        self.modal = Modal::TimeSelecting { loading: true };
        Ok(ListRequest {
            table_id,
            reservation_date: self.selected_date,
        })
    }

    /// Apply a list response, whichever selection it was issued for
    pub fn finish_table_selection(&mut self, result: ClientResult<Vec<Reservation>>) {
        match result {
            Ok(rows) => {
                self.reserved = rows.iter().map(ReservedSlot::from).collect();
                tracing::debug!(reserved = self.reserved.len(), "Reserved slots loaded");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch reservations");
                self.notice = Some(Notice::failure(GENERIC_FAILURE));
            }
        }
        if matches!(self.modal, Modal::Idle | Modal::TimeSelecting { .. }) {
            self.modal = Modal::TimeSelecting { loading: false };
        }
    }

    pub fn toggle_reserved_list(&mut self) -> Result<(), ViewError> {
        self.expect_modal(
            matches!(self.modal, Modal::TimeSelecting { .. }),
            "toggle_reserved_list",
        )?;
        self.showing_reserved = !self.showing_reserved;
        Ok(())
    }

    pub fn close_time_selector(&mut self) -> Result<(), ViewError> {
        self.expect_modal(
            matches!(self.modal, Modal::TimeSelecting { .. }),
            "close_time_selector",
        )?;
        self.modal = Modal::Idle;
        Ok(())
    }

    /// Choose a free slot and move to the confirmation dialog
    pub fn select_time(&mut self, label: &str) -> Result<(), ViewError> {
        self.expect_modal(
            self.modal == Modal::TimeSelecting { loading: false },
            "select_time",
        )?;
        if slot_id_for_label(label).is_none() {
            return Err(ViewError::UnknownSlot(label.to_string()));
        }
        let slot = normalize_slot_label(label);
        if self.is_slot_reserved(&slot) {
            return Err(ViewError::SlotReserved(slot));
        }
        self.modal = Modal::Confirming { slot };
        Ok(())
    }

    /// Delete a reservation listed in the time selector
    ///
    /// On success the entry is dropped from the local list; nothing is
    /// re-fetched. Returns whether the server accepted the delete.
    pub async fn delete(
        &mut self,
        api: &dyn ReservationApi,
        reservation_id: i64,
    ) -> Result<bool, ViewError> {
        self.expect_modal(matches!(self.modal, Modal::TimeSelecting { .. }), "delete")?;

        match api.delete_reservation(reservation_id).await {
            Ok(_) => {
                self.reserved.retain(|r| r.reservation_id != reservation_id);
                self.notice = Some(Notice::success(RESERVATION_DELETED));
                Ok(true)
            }
            Err(e) => {
                tracing::warn!(reservation_id, error = %e, "Failed to delete reservation");
                let message = e.server_message().unwrap_or(DELETE_FAILURE);
                self.notice = Some(Notice::failure(message));
                Ok(false)
            }
        }
    }

    // ==================== Confirmation ====================

    pub fn cancel_confirmation(&mut self) -> Result<(), ViewError> {
        self.expect_modal(
            matches!(self.modal, Modal::Confirming { .. }),
            "cancel_confirmation",
        )?;
        self.modal = Modal::Idle;
        Ok(())
    }

    /// Book the chosen slot and close the dialog, whatever the outcome
    ///
    /// Returns the new reservation id when the server accepted it.
    pub async fn confirm(&mut self, api: &dyn ReservationApi) -> Result<Option<i64>, ViewError> {
        let (slot, table_id) = match (&self.modal, self.selected_table) {
            (Modal::Confirming { slot }, Some(table_id)) => (slot.clone(), table_id),
            _ => return Err(ViewError::InvalidTransition { action: "confirm" }),
        };
        let slot_id = slot_id_for_label(&slot).ok_or_else(|| ViewError::UnknownSlot(slot.clone()))?;

        let body = ReservationCreate::new(self.selected_date, table_id, slot_id);
        let result = api.create_reservation(&body).await;
        self.modal = Modal::Idle;

        match result {
            Ok(created) => {
                tracing::info!(
                    reservation_id = created.reservation_id,
                    table_id,
                    slot = %slot,
                    "Reservation confirmed"
                );
                self.notice = Some(Notice::success(format!(
                    "Congratulations, your reservation is successful! We are waiting for you on {} at {} (Table {}).",
                    self.selected_date.format("%Y-%m-%d"),
                    slot,
                    table_id
                )));
                Ok(Some(created.reservation_id))
            }
            Err(e) => {
                tracing::warn!(table_id, slot = %slot, error = %e, "Failed to create reservation");
                self.notice = Some(Notice::failure(GENERIC_FAILURE));
                Ok(None)
            }
        }
    }
}
