//! Search boxes of the user, supplier and activity-log pages, plus the log's
//! display helpers.

use crate::model::{ActivityLogEntry, Supplier, User};
use chrono::{DateTime, Utc};
use snapshot_framework::Collection;

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Users whose full name or email contains `term`, ignoring case.
pub fn search_users<'a>(users: &'a Collection<User>, term: &str) -> Vec<&'a User> {
    let needle = term.to_lowercase();
    users
        .iter()
        .filter(|u| {
            contains_ignore_case(&u.full_name, &needle) || contains_ignore_case(&u.email, &needle)
        })
        .collect()
}

/// Suppliers whose name or contact person contains `term`, ignoring case.
pub fn search_suppliers<'a>(suppliers: &'a Collection<Supplier>, term: &str) -> Vec<&'a Supplier> {
    let needle = term.to_lowercase();
    suppliers
        .iter()
        .filter(|s| {
            contains_ignore_case(&s.name, &needle)
                || contains_ignore_case(&s.contact_person, &needle)
        })
        .collect()
}

/// Log entries whose message contains `term`, ignoring case. Newest first, like the log.
pub fn search_log<'a>(
    log: &'a Collection<ActivityLogEntry>,
    term: &str,
) -> Vec<&'a ActivityLogEntry> {
    let needle = term.to_lowercase();
    log.iter()
        .filter(|e| contains_ignore_case(&e.message, &needle))
        .collect()
}

/// Avatar initials for a log line: `SYS` for system messages, otherwise taken
/// from the first one or two words.
pub fn log_initials(message: &str) -> String {
    let mut words = message.split_whitespace();
    let Some(first) = words.next() else {
        return "??".to_string();
    };
    if first.eq_ignore_ascii_case("system") {
        return "SYS".to_string();
    }

    let initials: String = match words.next() {
        Some(second) if second.chars().count() > 1 => {
            first.chars().take(1).chain(second.chars().take(1)).collect()
        }
        _ => first.chars().take(2).collect(),
    };
    initials.to_uppercase()
}

/// Coarse age of `timestamp` relative to `now`, e.g. `"3 hours ago"`.
pub fn relative_time(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - timestamp).num_seconds();
    if seconds < 0 {
        return "in the future".to_string();
    }

    const UNITS: [(i64, &str); 5] = [
        (31_536_000, "year"),
        (2_592_000, "month"),
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
    ];
    let (count, unit) = UNITS
        .iter()
        .find(|(span, _)| seconds >= *span)
        .map(|(span, unit)| (seconds / span, *unit))
        .unwrap_or((seconds, "second"));

    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SupplierDraft, UserDraft};
    use chrono::Duration;

    #[test]
    fn user_search_covers_name_and_email() {
        let mut users = Collection::new();
        users.insert(UserDraft {
            full_name: "John Doe".into(),
            email: "admin@gudangjaya.com".into(),
            ..UserDraft::default()
        });
        users.insert(UserDraft {
            full_name: "Siti Aminah".into(),
            email: "siti@example.com".into(),
            ..UserDraft::default()
        });

        assert_eq!(search_users(&users, "SITI").len(), 1);
        assert_eq!(search_users(&users, "gudangjaya")[0].full_name, "John Doe");
        assert_eq!(search_users(&users, "").len(), 2);
    }

    #[test]
    fn supplier_search_covers_contact_person() {
        let mut suppliers = Collection::new();
        suppliers.insert(SupplierDraft {
            name: "PT Sumber Makmur".into(),
            contact_person: "Budi".into(),
            ..SupplierDraft::default()
        });
        assert_eq!(search_suppliers(&suppliers, "budi").len(), 1);
        assert!(search_suppliers(&suppliers, "andi").is_empty());
    }

    #[test]
    fn log_search_keeps_newest_first() {
        let mut log = Collection::new();
        log.prepend("New item added: Kabel (SKU: K1)".to_string());
        log.prepend("Item deleted: Kabel (SKU: K1)".to_string());
        let found = search_log(&log, "kabel");
        assert_eq!(found.len(), 2);
        assert!(found[0].message.starts_with("Item deleted"));
    }

    #[test]
    fn initials_follow_the_first_words() {
        assert_eq!(log_initials("System started. Admin user (John Doe) created."), "SYS");
        assert_eq!(log_initials("John Doe updated stock"), "JD");
        assert_eq!(log_initials("Exported 3 item(s) to CSV."), "EX");
        assert_eq!(log_initials(""), "??");
    }

    #[test]
    fn relative_time_picks_largest_unit() {
        let now = Utc::now();
        assert_eq!(relative_time(now - Duration::seconds(5), now), "5 seconds ago");
        assert_eq!(relative_time(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(relative_time(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(relative_time(now - Duration::days(40), now), "1 month ago");
        assert_eq!(relative_time(now + Duration::hours(1), now), "in the future");
    }
}
