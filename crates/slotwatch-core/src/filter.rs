//! Reduction of raw center/session records to reportable entries.

use crate::types::{AvailabilityEntry, Center, CenterSession};

/// Returns one [`AvailabilityEntry`] per session that has open capacity and
/// admits someone of `min_age`.
///
/// A session is eligible when `available_capacity_total > 0` and
/// `min_age_limit <= min_age`. Output keeps center order, then session order
/// within each center.
#[must_use]
pub fn filter_available(centers: &[Center], min_age: u32) -> Vec<AvailabilityEntry> {
    centers
        .iter()
        .flat_map(|center| {
            center
                .sessions
                .iter()
                .filter(move |session| is_eligible(session, min_age))
                .map(move |session| to_entry(center, session))
        })
        .collect()
}

fn is_eligible(session: &CenterSession, min_age: u32) -> bool {
    session.available_capacity_total > 0 && session.min_age_limit <= min_age
}

fn to_entry(center: &Center, session: &CenterSession) -> AvailabilityEntry {
    AvailabilityEntry {
        center_name: center.name.clone(),
        address: center.address.clone(),
        postal_code: center.postal_code.clone(),
        fee_type: center.fee_type.clone(),
        min_age: session.min_age_limit,
        vaccine_name: session.vaccine_name.clone(),
        date: session.date.clone(),
        slot_times: session.slot_times.join(", "),
        total_capacity: session.available_capacity_total,
        dose1_capacity: session.available_capacity_dose1,
        dose2_capacity: session.available_capacity_dose2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(capacity: u32, min_age_limit: u32, vaccine: &str) -> CenterSession {
        CenterSession {
            vaccine_name: vaccine.to_string(),
            date: "16-10-2026".to_string(),
            available_capacity_total: capacity,
            available_capacity_dose1: capacity,
            available_capacity_dose2: 0,
            min_age_limit,
            slot_times: vec![
                "09:00AM-11:00AM".to_string(),
                "11:00AM-01:00PM".to_string(),
            ],
        }
    }

    fn center(name: &str, sessions: Vec<CenterSession>) -> Center {
        Center {
            name: name.to_string(),
            address: "1 Main Road".to_string(),
            postal_code: "411001".to_string(),
            fee_type: "Free".to_string(),
            sessions,
        }
    }

    #[test]
    fn keeps_only_sessions_with_capacity() {
        let centers = vec![center(
            "Ruby Hall",
            vec![session(5, 18, "COVISHIELD"), session(0, 18, "COVAXIN")],
        )];
        let entries = filter_available(&centers, 45);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].vaccine_name, "COVISHIELD");
        assert_eq!(entries[0].total_capacity, 5);
    }

    #[test]
    fn min_age_limit_equal_to_age_is_included() {
        let centers = vec![center("Ruby Hall", vec![session(3, 45, "COVISHIELD")])];
        assert_eq!(filter_available(&centers, 45).len(), 1);
    }

    #[test]
    fn min_age_limit_above_age_is_excluded() {
        let centers = vec![center("Ruby Hall", vec![session(3, 45, "COVISHIELD")])];
        assert!(filter_available(&centers, 44).is_empty());
    }

    #[test]
    fn inclusion_matches_predicate_across_grid() {
        for capacity in [0, 1, 7] {
            for limit in [0, 18, 45, 60] {
                for age in [0, 18, 44, 45, 100] {
                    let centers = vec![center("C", vec![session(capacity, limit, "V")])];
                    let included = !filter_available(&centers, age).is_empty();
                    assert_eq!(
                        included,
                        capacity > 0 && limit <= age,
                        "capacity={capacity} limit={limit} age={age}"
                    );
                }
            }
        }
    }

    #[test]
    fn preserves_center_then_session_order() {
        let centers = vec![
            center(
                "First",
                vec![session(1, 18, "A"), session(0, 18, "skip"), session(2, 18, "B")],
            ),
            center("Second", vec![session(4, 18, "C")]),
        ];
        let entries = filter_available(&centers, 45);
        let seen: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.center_name.as_str(), e.vaccine_name.as_str()))
            .collect();
        assert_eq!(
            seen,
            vec![("First", "A"), ("First", "B"), ("Second", "C")]
        );
    }

    #[test]
    fn one_entry_per_session_without_mixing_fields() {
        let centers = vec![center(
            "Ruby Hall",
            vec![session(2, 18, "COVAXIN"), session(9, 45, "COVISHIELD")],
        )];
        let entries = filter_available(&centers, 100);
        assert_eq!(entries.len(), 2);
        assert_eq!((entries[0].min_age, entries[0].total_capacity), (18, 2));
        assert_eq!((entries[1].min_age, entries[1].total_capacity), (45, 9));
    }

    #[test]
    fn center_without_eligible_sessions_contributes_nothing() {
        let centers = vec![center("Empty", vec![]), center("Full", vec![session(0, 18, "V")])];
        assert!(filter_available(&centers, 100).is_empty());
    }

    #[test]
    fn projects_center_and_session_fields() {
        let centers = vec![center("Ruby Hall", vec![session(5, 18, "COVISHIELD")])];
        let entry = &filter_available(&centers, 45)[0];
        assert_eq!(entry.center_name, "Ruby Hall");
        assert_eq!(entry.address, "1 Main Road");
        assert_eq!(entry.postal_code, "411001");
        assert_eq!(entry.fee_type, "Free");
        assert_eq!(entry.date, "16-10-2026");
        assert_eq!(entry.slot_times, "09:00AM-11:00AM, 11:00AM-01:00PM");
        assert_eq!(entry.dose1_capacity, 5);
        assert_eq!(entry.dose2_capacity, 0);
    }
}
