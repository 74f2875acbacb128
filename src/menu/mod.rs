mod day;
mod day_menu;
mod diet;
mod fallback;
mod lexicon;

use chrono::{Local, NaiveDate};

pub use day::DayKey;
pub use day_menu::{DayMenu, MenuEntry, WeeklyMenu};
pub use diet::Diet;
pub use fallback::fallback_menu;
pub use lexicon::{Lexicon, SWEDISH};

/// Picks the menu for `date` (today if `None`) out of a week.
pub fn get_menu_for_day(weekly: &WeeklyMenu, date: Option<NaiveDate>) -> DayMenu {
    let date = date.unwrap_or_else(|| Local::now().date_naive());
    weekly.day(DayKey::from_date(date))
}
