use chrono::NaiveDate;
use thiserror::Error;

use crate::booking::wizard::Step;

/// Refusals from the booking flow. The panel disables the matching buttons,
/// so in practice these only show up in the console log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("date {0} is before today")]
    DateInPast(NaiveDate),
    #[error("\"{0}\" is not one of the offered time slots")]
    UnknownTimeSlot(String),
    #[error("pick both a date and a time slot first")]
    IncompleteSelection,
    #[error("the cart is empty")]
    EmptyCart,
    #[error("name, phone and wechat are all required")]
    IncompleteContact,
    #[error("cannot go from the {from} step to the {to} step")]
    InvalidTransition { from: Step, to: Step },
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("mount point #{0} not found, check index.html")]
    MissingMountPoint(&'static str),
}
