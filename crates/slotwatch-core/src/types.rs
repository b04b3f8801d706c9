/// One vaccine offering at a center on a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterSession {
    pub vaccine_name: String,
    /// Session date as the provider formats it (`DD-MM-YYYY`).
    pub date: String,
    pub available_capacity_total: u32,
    pub available_capacity_dose1: u32,
    pub available_capacity_dose2: u32,
    pub min_age_limit: u32,
    pub slot_times: Vec<String>,
}

/// A vaccination center and its sessions, as returned for one query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Center {
    pub name: String,
    pub address: String,
    pub postal_code: String,
    pub fee_type: String,
    pub sessions: Vec<CenterSession>,
}

/// A single eligible session, flattened together with its center's details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityEntry {
    pub center_name: String,
    pub address: String,
    pub postal_code: String,
    pub fee_type: String,
    pub min_age: u32,
    pub vaccine_name: String,
    pub date: String,
    /// Slot times joined with `", "`.
    pub slot_times: String,
    pub total_capacity: u32,
    pub dose1_capacity: u32,
    pub dose2_capacity: u32,
}
