use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::models::CartItem;

/// Bookings collected during this visit, at most one per course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartItem>,
}

pub enum CartAction {
    Add(CartItem),
    Remove(String),
}

impl Cart {
    /// Replaces any item for the same course. The new item always goes to the end.
    pub fn add_or_replace(&mut self, item: CartItem) {
        self.items.retain(|existing| existing.course_id != item.course_id);
        self.items.push(item);
    }

    pub fn remove(&mut self, course_id: &str) {
        self.items.retain(|item| item.course_id != course_id);
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn first(&self) -> Option<&CartItem> {
        self.items.first()
    }

    pub fn get(&self, course_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.course_id == course_id)
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.get(course_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Levels in cart order, e.g. `Level 1+Level 3`.
    pub fn levels(&self) -> String {
        self.items
            .iter()
            .map(|item| item.course_level.as_str())
            .collect::<Vec<_>>()
            .join("+")
    }
}

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut cart = (*self).clone();
        match action {
            CartAction::Add(item) => {
                info!(
                    "Cart add: {}",
                    serde_json::to_string(&item).unwrap_or_else(|_| item.course_id.clone())
                );
                cart.add_or_replace(item);
            }
            CartAction::Remove(course_id) => {
                if !cart.contains(&course_id) {
                    return self;
                }
                info!("Cart remove: {}", course_id);
                cart.remove(&course_id);
            }
        }
        Rc::new(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::COURSES;
    use crate::models::{ClassType, TimeSlot};
    use chrono::NaiveDate;

    fn item(index: usize, class_type: ClassType) -> CartItem {
        let date = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        CartItem::new(&COURSES[index], class_type, date, TimeSlot::at(19).unwrap())
    }

    #[test]
    fn adding_same_course_replaces_and_moves_to_end() {
        let mut cart = Cart::default();
        cart.add_or_replace(item(0, ClassType::Group));
        cart.add_or_replace(item(1, ClassType::Group));
        cart.add_or_replace(item(0, ClassType::Private));

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].course_id, COURSES[1].id);
        assert_eq!(cart.items()[1].course_id, COURSES[0].id);
        assert_eq!(cart.get(COURSES[0].id).unwrap().class_type, ClassType::Private);
    }

    #[test]
    fn removing_unknown_course_is_noop() {
        let mut cart = Cart::default();
        cart.add_or_replace(item(0, ClassType::Group));
        let before = cart.clone();

        cart.remove("no-such-course");
        assert_eq!(cart, before);
    }

    #[test]
    fn total_follows_removals() {
        let mut cart = Cart::default();
        cart.add_or_replace(item(0, ClassType::Group));
        cart.add_or_replace(item(1, ClassType::Private));
        assert_eq!(cart.total(), 698);

        cart.remove(COURSES[0].id);
        assert_eq!(cart.total(), 499);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn levels_join_in_cart_order() {
        let mut cart = Cart::default();
        assert_eq!(cart.levels(), "");
        cart.add_or_replace(item(2, ClassType::Group));
        cart.add_or_replace(item(0, ClassType::Group));
        assert_eq!(cart.levels(), "Level 3+Level 1");
    }

    #[test]
    fn reducer_keeps_same_rc_on_noop_remove() {
        let cart = Rc::new(Cart::default());
        let next = cart.clone().reduce(CartAction::Remove("l1".into()));
        assert!(Rc::ptr_eq(&cart, &next));

        let next = next.reduce(CartAction::Add(item(0, ClassType::Group)));
        assert!(next.contains(COURSES[0].id));
        assert_eq!(next.first().map(|i| i.price), Some(199));
    }
}
