use std::fmt;

use chrono::NaiveDate;

use crate::cart::Cart;
use crate::error::BookingError;
use crate::models::{BookingState, CartItem, ClassType, ContactInfo, Course, TimeSlot};

/// Local calendar date, used as the lower bound for bookings.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Booking,
    Form,
    Card,
    Contact,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::Booking => "booking",
            Step::Form => "form",
            Step::Card => "card",
            Step::Contact => "contact",
        };
        f.write_str(name)
    }
}

impl Step {
    fn can_move_to(self, to: Step) -> bool {
        matches!(
            (self, to),
            (Step::Booking, Step::Form)
                | (Step::Form, Step::Booking)
                | (Step::Form, Step::Card)
                | (Step::Card, Step::Form)
                | (Step::Card, Step::Contact)
        )
    }
}

/// Booking flow for one open course.
///
/// The wizard never touches the cart itself. Operations that should change
/// it hand back the [`CartItem`] to commit, and the caller applies it.
#[derive(Debug, Clone, PartialEq)]
pub struct Wizard {
    course: &'static Course,
    step: Step,
    class_type: ClassType,
    booking: BookingState,
    contact: ContactInfo,
}

impl Wizard {
    /// Starts on the booking step, pre-filled from the cart when the course
    /// is already in it.
    pub fn open(course: &'static Course, cart: &Cart) -> Self {
        let (class_type, booking) = match cart.get(course.id) {
            Some(item) => (item.class_type, BookingState::from(item)),
            None => (ClassType::default(), BookingState::default()),
        };
        Self {
            course,
            step: Step::Booking,
            class_type,
            booking,
            contact: ContactInfo::default(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn class_type(&self) -> ClassType {
        self.class_type
    }

    pub fn booking(&self) -> &BookingState {
        &self.booking
    }

    pub fn contact(&self) -> &ContactInfo {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactInfo {
        &mut self.contact
    }

    pub fn current_price(&self) -> u32 {
        self.class_type.price()
    }

    pub fn select_class(&mut self, class_type: ClassType) {
        self.class_type = class_type;
    }

    /// `None` clears the date. A date before `today` is refused and also
    /// clears the previous choice, matching the emptied input.
    pub fn set_date(&mut self, date: Option<NaiveDate>, today: NaiveDate) -> Result<(), BookingError> {
        if let Some(date) = date.filter(|&date| date < today) {
            self.booking.date = None;
            return Err(BookingError::DateInPast(date));
        }
        self.booking.date = date;
        Ok(())
    }

    /// Takes the raw `<select>` value; an empty value clears the slot.
    pub fn set_time(&mut self, value: &str) -> Result<(), BookingError> {
        self.booking.time = if value.is_empty() {
            None
        } else {
            Some(value.parse::<TimeSlot>()?)
        };
        Ok(())
    }

    pub fn can_commit(&self) -> bool {
        self.step == Step::Booking && self.booking.is_complete()
    }

    /// The item the current configuration would put in the cart.
    pub fn pending_item(&self) -> Result<CartItem, BookingError> {
        match (self.booking.date, self.booking.time) {
            (Some(date), Some(time)) => Ok(CartItem::new(self.course, self.class_type, date, time)),
            _ => Err(BookingError::IncompleteSelection),
        }
    }

    pub fn commit(&self) -> Result<CartItem, BookingError> {
        self.require(Step::Booking, Step::Booking)?;
        self.pending_item()
    }

    pub fn can_checkout(&self, cart: &Cart) -> bool {
        self.step == Step::Booking && (!cart.is_empty() || self.booking.is_complete())
    }

    /// Cart size once checkout has committed the current configuration.
    /// Zero while the cart is empty, so the label carries no count.
    pub fn checkout_count(&self, cart: &Cart) -> usize {
        if cart.is_empty() {
            0
        } else if self.booking.is_complete() && !cart.contains(self.course.id) {
            cart.len() + 1
        } else {
            cart.len()
        }
    }

    /// Moves to the form. A complete configuration is returned for the
    /// caller to commit first.
    pub fn checkout(&mut self, cart: &Cart) -> Result<Option<CartItem>, BookingError> {
        self.require(Step::Booking, Step::Form)?;
        let pending = self.pending_item().ok();
        if pending.is_none() && cart.is_empty() {
            return Err(BookingError::EmptyCart);
        }
        self.step = Step::Form;
        Ok(pending)
    }

    pub fn can_generate_card(&self, cart: &Cart) -> bool {
        self.step == Step::Form && self.contact.is_complete() && !cart.is_empty()
    }

    pub fn generate_card(&mut self, cart: &Cart) -> Result<(), BookingError> {
        self.require(Step::Form, Step::Card)?;
        if !self.contact.is_complete() {
            return Err(BookingError::IncompleteContact);
        }
        if cart.is_empty() {
            return Err(BookingError::EmptyCart);
        }
        self.step = Step::Card;
        Ok(())
    }

    /// Card to contact. The user has (hopefully) taken the screenshot.
    pub fn finish_card(&mut self) -> Result<(), BookingError> {
        self.require(Step::Card, Step::Contact)?;
        self.step = Step::Contact;
        Ok(())
    }

    /// Form back to booking, or card back to form. The cart is left alone.
    pub fn back(&mut self) -> Result<(), BookingError> {
        let to = match self.step {
            Step::Form => Step::Booking,
            Step::Card => Step::Form,
            from => return Err(BookingError::InvalidTransition { from, to: from }),
        };
        self.require(self.step, to)?;
        self.step = to;
        Ok(())
    }

    fn require(&self, from: Step, to: Step) -> Result<(), BookingError> {
        let allowed = self.step == from && (from == to || from.can_move_to(to));
        if allowed {
            Ok(())
        } else {
            Err(BookingError::InvalidTransition { from: self.step, to })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COURSES;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn configured(course: &'static Course, cart: &Cart) -> Wizard {
        let mut wizard = Wizard::open(course, cart);
        wizard.set_date(Some(day(20)), day(18)).unwrap();
        wizard.set_time("20:00").unwrap();
        wizard
    }

    fn fill_contact(wizard: &mut Wizard) {
        let contact = wizard.contact_mut();
        contact.name = "星川同学".into();
        contact.phone = "13800000000".into();
        contact.wechat = "star_river".into();
    }

    #[test]
    fn opens_blank_for_new_course() {
        let wizard = Wizard::open(&COURSES[0], &Cart::default());
        assert_eq!(wizard.step(), Step::Booking);
        assert_eq!(wizard.class_type(), ClassType::Group);
        assert_eq!(wizard.booking(), &BookingState::default());
        assert!(!wizard.can_commit());
    }

    #[test]
    fn reopening_prefills_from_cart() {
        let mut cart = Cart::default();
        let mut wizard = configured(&COURSES[2], &cart);
        wizard.select_class(ClassType::Private);
        cart.add_or_replace(wizard.commit().unwrap());

        let reopened = Wizard::open(&COURSES[2], &cart);
        assert_eq!(reopened.step(), Step::Booking);
        assert_eq!(reopened.class_type(), ClassType::Private);
        assert_eq!(reopened.booking().date, Some(day(20)));
        assert_eq!(reopened.booking().time, TimeSlot::at(20));

        let other = Wizard::open(&COURSES[3], &cart);
        assert_eq!(other.class_type(), ClassType::Group);
        assert!(!other.booking().is_complete());
    }

    #[test]
    fn rejects_past_dates_and_unknown_slots() {
        let mut wizard = Wizard::open(&COURSES[0], &Cart::default());
        assert_eq!(
            wizard.set_date(Some(day(17)), day(18)),
            Err(BookingError::DateInPast(day(17)))
        );
        assert_eq!(wizard.booking().date, None);
        wizard.set_date(Some(day(18)), day(18)).unwrap();
        assert_eq!(wizard.booking().date, Some(day(18)));

        assert!(wizard.set_time("08:00").is_err());
        assert_eq!(wizard.booking().time, None);
        wizard.set_time("23:00").unwrap();
        wizard.set_time("").unwrap();
        assert_eq!(wizard.booking().time, None);
    }

    #[test]
    fn checkout_needs_config_or_cart() {
        let empty = Cart::default();
        let mut wizard = Wizard::open(&COURSES[0], &empty);
        assert!(!wizard.can_checkout(&empty));
        assert_eq!(wizard.checkout(&empty), Err(BookingError::EmptyCart));
        assert_eq!(wizard.step(), Step::Booking);

        wizard.set_time("19:00").unwrap();
        assert!(!wizard.can_checkout(&empty));

        let mut cart = Cart::default();
        cart.add_or_replace(configured(&COURSES[1], &cart).commit().unwrap());
        assert!(wizard.can_checkout(&cart));
        assert_eq!(wizard.checkout(&cart), Ok(None));
        assert_eq!(wizard.step(), Step::Form);
    }

    #[test]
    fn checkout_returns_current_config_for_commit() {
        let cart = Cart::default();
        let mut wizard = configured(&COURSES[4], &cart);
        assert_eq!(wizard.checkout_count(&cart), 0);

        let item = wizard.checkout(&cart).unwrap().unwrap();
        assert_eq!(item.course_id, COURSES[4].id);
        assert_eq!(item.price, 199);
        assert_eq!(wizard.step(), Step::Form);
    }

    #[test]
    fn checkout_count_does_not_double_count_existing_entry() {
        let mut cart = Cart::default();
        let wizard = configured(&COURSES[0], &cart);
        cart.add_or_replace(wizard.commit().unwrap());
        assert_eq!(wizard.checkout_count(&cart), 1);

        let blank = Wizard::open(&COURSES[5], &cart);
        assert_eq!(blank.checkout_count(&cart), 1);

        let other = configured(&COURSES[5], &cart);
        assert_eq!(other.checkout_count(&cart), 2);
    }

    #[test]
    fn refused_date_clears_previous_choice() {
        let cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        assert!(wizard.can_commit());

        assert_eq!(
            wizard.set_date(Some(day(1)), day(18)),
            Err(BookingError::DateInPast(day(1)))
        );
        assert_eq!(wizard.booking().date, None);
        assert_eq!(wizard.booking().time, TimeSlot::at(20));
        assert!(!wizard.can_commit());
        assert!(!wizard.can_checkout(&cart));
        assert_eq!(wizard.commit(), Err(BookingError::IncompleteSelection));
    }

    #[test]
    fn card_needs_contact_and_items() {
        let mut cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        cart.add_or_replace(wizard.checkout(&cart).unwrap().unwrap());

        assert!(!wizard.can_generate_card(&cart));
        assert_eq!(wizard.generate_card(&cart), Err(BookingError::IncompleteContact));

        fill_contact(&mut wizard);
        cart.remove(COURSES[0].id);
        assert!(!wizard.can_generate_card(&cart));
        assert_eq!(wizard.generate_card(&cart), Err(BookingError::EmptyCart));
        assert_eq!(wizard.step(), Step::Form);

        cart.add_or_replace(configured(&COURSES[1], &cart).commit().unwrap());
        assert!(wizard.can_generate_card(&cart));
        wizard.generate_card(&cart).unwrap();
        assert_eq!(wizard.step(), Step::Card);
    }

    #[test]
    fn walks_forward_and_back() {
        let mut cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        cart.add_or_replace(wizard.checkout(&cart).unwrap().unwrap());
        fill_contact(&mut wizard);

        wizard.back().unwrap();
        assert_eq!(wizard.step(), Step::Booking);
        assert_eq!(cart.len(), 1);

        wizard.checkout(&cart).unwrap();
        wizard.generate_card(&cart).unwrap();
        wizard.back().unwrap();
        assert_eq!(wizard.step(), Step::Form);
        assert_eq!(wizard.contact().name, "星川同学");

        wizard.generate_card(&cart).unwrap();
        wizard.finish_card().unwrap();
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn illegal_jumps_leave_state_alone() {
        let cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        let before = wizard.clone();

        assert_eq!(
            wizard.finish_card(),
            Err(BookingError::InvalidTransition { from: Step::Booking, to: Step::Contact })
        );
        assert!(wizard.back().is_err());
        assert!(wizard.generate_card(&cart).is_err());
        assert_eq!(wizard, before);

        wizard.checkout(&cart).unwrap();
        assert!(wizard.commit().is_err());
        assert!(!wizard.can_commit());
        assert!(!wizard.can_checkout(&cart));
    }

    #[test]
    fn contact_step_is_terminal() {
        let mut cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        cart.add_or_replace(wizard.checkout(&cart).unwrap().unwrap());
        fill_contact(&mut wizard);
        wizard.generate_card(&cart).unwrap();
        wizard.finish_card().unwrap();

        assert!(wizard.back().is_err());
        assert!(wizard.checkout(&cart).is_err());
        assert_eq!(wizard.step(), Step::Contact);
    }

    #[test]
    fn reopen_resets_step_and_contact() {
        let mut cart = Cart::default();
        let mut wizard = configured(&COURSES[0], &cart);
        cart.add_or_replace(wizard.checkout(&cart).unwrap().unwrap());
        fill_contact(&mut wizard);

        let reopened = Wizard::open(&COURSES[0], &cart);
        assert_eq!(reopened.step(), Step::Booking);
        assert_eq!(reopened.contact(), &ContactInfo::default());
    }

    #[test]
    fn price_tracks_class_type() {
        let mut wizard = Wizard::open(&COURSES[0], &Cart::default());
        assert_eq!(wizard.current_price(), 199);
        wizard.select_class(ClassType::Private);
        assert_eq!(wizard.current_price(), 499);
    }
}
