//! Conversion of `CoWIN` wire records into `slotwatch-core` domain types.

use slotwatch_core::{Center, CenterSession};

use crate::types::{CalendarResponse, CenterRecord, SessionRecord};

#[must_use]
pub fn normalize_calendar(response: CalendarResponse) -> Vec<Center> {
    response.centers.into_iter().map(normalize_center).collect()
}

#[must_use]
pub fn normalize_center(record: CenterRecord) -> Center {
    Center {
        name: record.name,
        address: record.address,
        postal_code: record.pincode,
        fee_type: record.fee_type,
        sessions: record.sessions.into_iter().map(normalize_session).collect(),
    }
}

fn normalize_session(record: SessionRecord) -> CenterSession {
    CenterSession {
        vaccine_name: record.vaccine,
        date: record.date,
        available_capacity_total: record.available_capacity,
        available_capacity_dose1: record.available_capacity_dose1,
        available_capacity_dose2: record.available_capacity_dose2,
        min_age_limit: record.min_age_limit,
        slot_times: record.slots,
    }
}
