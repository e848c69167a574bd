use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::catalog::AVAILABLE_HOURS;
use crate::config::{PRICE_GROUP, PRICE_PRIVATE};
use crate::error::BookingError;

/// One entry of the static catalog.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Course {
    pub id: &'static str,
    pub level: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub details: &'static [&'static str],
    pub tags: &'static [&'static str],
}

impl Course {
    /// Summary without the "核心目标：" label, for the catalog grid.
    pub fn short_summary(&self) -> &'static str {
        self.summary.trim_start_matches("核心目标：")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    #[default]
    Group,
    Private,
}

impl ClassType {
    pub const ALL: [ClassType; 2] = [ClassType::Group, ClassType::Private];

    /// Flat price in yuan, per session.
    pub fn price(self) -> u32 {
        match self {
            ClassType::Group => PRICE_GROUP,
            ClassType::Private => PRICE_PRIVATE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ClassType::Group => "团体课",
            ClassType::Private => "私教课",
        }
    }

    pub fn blurb(self) -> &'static str {
        match self {
            ClassType::Group => "5-10 人成团 | 1-2小时",
            ClassType::Private => "1V1 深度指导 | 1-2小时",
        }
    }
}

/// A start time from the fixed evening menu, shown as `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    hour: u8,
}

impl TimeSlot {
    pub fn at(hour: u8) -> Option<Self> {
        AVAILABLE_HOURS.contains(&hour).then_some(Self { hour })
    }

    pub fn all() -> impl Iterator<Item = TimeSlot> {
        AVAILABLE_HOURS.iter().map(|&hour| TimeSlot { hour })
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour)
    }
}

impl FromStr for TimeSlot {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || BookingError::UnknownTimeSlot(s.to_string());
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M").map_err(|_| unknown())?;
        if time.minute() != 0 {
            return Err(unknown());
        }
        u8::try_from(time.hour())
            .ok()
            .and_then(TimeSlot::at)
            .ok_or_else(unknown)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = BookingError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// A committed selection. Title and level are copied from the course when
/// the item is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub course_id: String,
    pub course_title: String,
    pub course_level: String,
    pub class_type: ClassType,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub price: u32,
}

impl CartItem {
    pub fn new(course: &Course, class_type: ClassType, date: NaiveDate, time: TimeSlot) -> Self {
        Self {
            course_id: course.id.to_string(),
            course_title: course.title.to_string(),
            course_level: course.level.to_string(),
            class_type,
            date,
            time,
            price: class_type.price(),
        }
    }

    /// `2026-10-20 19:00`
    pub fn schedule(&self) -> String {
        format!("{} {}", self.date.format("%Y-%m-%d"), self.time)
    }
}

/// Date and time being edited for the open course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    pub date: Option<NaiveDate>,
    pub time: Option<TimeSlot>,
}

impl BookingState {
    pub fn is_complete(&self) -> bool {
        self.date.is_some() && self.time.is_some()
    }
}

impl From<&CartItem> for BookingState {
    fn from(item: &CartItem) -> Self {
        Self {
            date: Some(item.date),
            time: Some(item.time),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub wechat: String,
}

impl ContactInfo {
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.phone, &self.wechat]
            .iter()
            .all(|field| !field.is_empty())
    }
}
