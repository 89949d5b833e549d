use crate::week::WeekNumber;

/// Direction of a week navigation click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    pub fn delta(self) -> i64 {
        match self {
            Direction::Previous => -1,
            Direction::Next => 1,
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            Direction::Previous => "← Semaines précédentes",
            Direction::Next => "Semaines suivantes →",
        }
    }
}

/// Text of the on-screen week indicator
pub fn week_label(week: WeekNumber) -> String {
    format!("Semaine {}", week)
}
