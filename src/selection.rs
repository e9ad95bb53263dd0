//! Currency selection flow.
//!
//! The app cycles between two states for its whole lifetime: browsing the
//! watchlist and picking a display currency. The picker reports back through
//! a single-shot channel — a [`PickerSession`] consumes itself on
//! [`select`](PickerSession::select) or [`cancel`](PickerSession::cancel),
//! so it can never report twice. Dropping a session without acting resolves
//! as a cancellation.
//!
//! The flow itself carries no side effects: persisting the selection and
//! re-fetching the watchlist are the caller's job (see
//! [`CoinwatchClient::select_currency`](crate::client::CoinwatchClient::select_currency)).

use crate::shared::TickerSymbol;
use thiserror::Error;
use tokio::sync::oneshot;

/// Where the app currently is in the selection cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Watchlist visible.
    Browsing,
    /// Currency picker presented, waiting for its single message.
    PickingCurrency,
}

/// The picker's single outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The user picked a currency. The picker performs no further action
    /// after emitting this.
    Selected(TickerSymbol),
    /// The picker was dismissed without a selection.
    Cancelled,
}

/// Selection flow errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("picker already open")]
    PickerAlreadyOpen,

    #[error("no picker open")]
    NoPickerOpen,
}

/// The browsing ⇄ picking state machine. No terminal state.
#[derive(Debug)]
pub struct SelectionFlow {
    state: SelectionState,
    pending: Option<oneshot::Receiver<SelectionEvent>>,
}

impl SelectionFlow {
    pub fn new() -> Self {
        Self {
            state: SelectionState::Browsing,
            pending: None,
        }
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Present the picker: `Browsing → PickingCurrency`.
    ///
    /// Returns the session handle to hand to the picker. No side effect
    /// beyond the transition.
    pub fn open_picker(&mut self) -> Result<PickerSession, SelectionError> {
        if self.state == SelectionState::PickingCurrency {
            return Err(SelectionError::PickerAlreadyOpen);
        }
        let (tx, rx) = oneshot::channel();
        self.state = SelectionState::PickingCurrency;
        self.pending = Some(rx);
        Ok(PickerSession { tx })
    }

    /// Wait for the picker's message and return to `Browsing`.
    ///
    /// A session dropped without acting resolves as
    /// [`SelectionEvent::Cancelled`].
    pub async fn resolved(&mut self) -> Result<SelectionEvent, SelectionError> {
        let rx = self.pending.take().ok_or(SelectionError::NoPickerOpen)?;
        let event = rx.await.unwrap_or(SelectionEvent::Cancelled);
        self.state = SelectionState::Browsing;
        Ok(event)
    }
}

impl Default for SelectionFlow {
    fn default() -> Self {
        Self::new()
    }
}

/// One presentation of the currency picker.
///
/// Single-shot by construction: both actions consume the session.
#[derive(Debug)]
pub struct PickerSession {
    tx: oneshot::Sender<SelectionEvent>,
}

impl PickerSession {
    /// Report the picked currency and dismiss.
    pub fn select(self, currency: TickerSymbol) {
        let _ = self.tx.send(SelectionEvent::Selected(currency));
    }

    /// Dismiss without a selection. No state changes anywhere.
    pub fn cancel(self) {
        let _ = self.tx.send(SelectionEvent::Cancelled);
    }
}
