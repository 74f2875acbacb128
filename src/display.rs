use std::fmt::{self, Write};

use chrono::NaiveDate;

use crate::menu::{DayKey, DayMenu, Diet, WeeklyMenu};

const RULE_WIDTH: usize = 50;

/// Heading for a single day view.
pub fn day_title(date: Option<NaiveDate>) -> String {
    date.map_or_else(
        || "Today".to_owned(),
        |date| date.format("%A, %B %d, %Y").to_string(),
    )
}

/// Writes one day's menu, limited to the lists in `show`.
pub fn write_day(out: &mut impl Write, title: &str, menu: &DayMenu, show: Diet) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "🍽️  Lunch Menu for {title}")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    write_sections(out, &menu.filtered(show))?;
    writeln!(out)
}

/// Writes every day from Monday to Sunday; days missing from `weekly` show as empty.
pub fn write_week(out: &mut impl Write, weekly: &WeeklyMenu, show: Diet) -> fmt::Result {
    writeln!(out)?;
    writeln!(out, "🍽️  Lunch Menu for the Week")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    for day in DayKey::ALL {
        writeln!(out)?;
        writeln!(out, "📅 {}", capitalized(day.name()))?;
        writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
        write_sections(out, &weekly.day(day).filtered(show))?;
    }
    writeln!(out)
}

fn write_sections(out: &mut impl Write, menu: &DayMenu) -> fmt::Result {
    if menu.is_empty() {
        return write_no_items(out);
    }
    if !menu.vegetarian.is_empty() {
        writeln!(out, "\n🥬 Vegetarian Options:")?;
        for item in &menu.vegetarian {
            writeln!(out, "  • {item}")?;
        }
    }
    if !menu.meat.is_empty() {
        writeln!(out, "\n🥩 Meat Options:")?;
        for item in &menu.meat {
            writeln!(out, "  • {item}")?;
        }
    }
    Ok(())
}

fn write_no_items(out: &mut impl Write) -> fmt::Result {
    writeln!(out, "\n❌ No menu items found for this date.")?;
    writeln!(out, "This might be because:")?;
    writeln!(out, "  • It's a weekend (restaurant might be closed)")?;
    writeln!(out, "  • The menu hasn't been updated yet")?;
    writeln!(out, "  • There was an issue scraping the website")
}

fn capitalized(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::fallback_menu;

    fn menu() -> DayMenu {
        DayMenu {
            vegetarian: vec!["Vegetariskt Falafel".into()],
            meat: vec!["Kött Biff".into()],
        }
    }

    fn render_day(menu: &DayMenu, show: Diet) -> String {
        let mut out = String::new();
        write_day(&mut out, "Today", menu, show).unwrap();
        out
    }

    #[test]
    fn test_day_title() {
        assert_eq!(day_title(None), "Today");
        assert_eq!(
            day_title(NaiveDate::from_ymd_opt(2024, 1, 15)),
            "Monday, January 15, 2024"
        );
    }

    #[test]
    fn test_write_day() {
        let out = render_day(&menu(), Diet::all());
        assert!(out.contains("Lunch Menu for Today"));
        assert!(out.contains("🥬 Vegetarian Options:\n  • Vegetariskt Falafel"));
        assert!(out.contains("🥩 Meat Options:\n  • Kött Biff"));
        assert!(!out.contains("No menu items"));
    }

    #[test]
    fn test_write_empty_day() {
        let out = render_day(&DayMenu::default(), Diet::all());
        assert!(out.contains("❌ No menu items found for this date."));
        assert!(out.contains("It's a weekend"));
        assert!(!out.contains("Vegetarian Options"));
        assert!(!out.contains("Meat Options"));
    }

    #[test]
    fn test_vegetarian_only_hides_meat() {
        let out = render_day(&menu(), Diet::Vegetarian);
        assert!(out.contains("Vegetariskt Falafel"));
        assert!(!out.contains("Kött Biff"));
        assert!(!out.contains("Meat Options"));
    }

    #[test]
    fn test_meat_only_hides_vegetarian() {
        let out = render_day(&menu(), Diet::Meat);
        assert!(out.contains("Kött Biff"));
        assert!(!out.contains("Vegetariskt Falafel"));
        assert!(!out.contains("Vegetarian Options"));
    }

    #[test]
    fn test_filter_leaving_nothing_reports_no_items() {
        let menu = DayMenu {
            vegetarian: vec![],
            meat: vec!["Kött Biff".into()],
        };
        let out = render_day(&menu, Diet::Vegetarian);
        assert!(out.contains("No menu items found"));
        assert!(!out.contains("Kött Biff"));
    }

    #[test]
    fn test_write_week() {
        let mut out = String::new();
        write_week(&mut out, &fallback_menu(), Diet::all()).unwrap();
        let monday = out.find("📅 Måndag").unwrap();
        let sunday = out.find("📅 Söndag").unwrap();
        assert!(monday < sunday);
        assert_eq!(out.matches("No menu items found").count(), 2);
        assert!(out.contains("Pannkaka Yessufs goda pannkisar"));
    }
}
