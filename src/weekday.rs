//! Pattern 7: Weekday Classifier
//!
//! A fixed seven-value enumeration, Monday first, and a total classifier
//! over it. No value outside the seven days can be constructed.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in their fixed Monday-first order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

/// Labels Saturday and Sunday "Weekend" and the other five days "Weekday".
pub fn classify(day: Weekday) -> &'static str {
    match day {
        Weekday::Saturday | Weekday::Sunday => "Weekend",
        Weekday::Monday
        | Weekday::Tuesday
        | Weekday::Wednesday
        | Weekday::Thursday
        | Weekday::Friday => "Weekday",
    }
}
