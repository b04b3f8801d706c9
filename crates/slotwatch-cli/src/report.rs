//! Plain-text rendering of poll results for stdout.

use std::io::{self, Write};

use slotwatch_core::AvailabilityEntry;
use slotwatch_cowin::ResolveError;

pub(crate) const NO_SLOTS: &str = "No slots available";

/// Writes one blank-line-separated `field: value` block per entry, or the
/// no-slots line when `entries` is empty.
pub(crate) fn write_availability<W: Write>(
    out: &mut W,
    entries: &[AvailabilityEntry],
) -> io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "{NO_SLOTS}")?;
        return out.flush();
    }

    writeln!(out, "Vaccine availability:")?;
    for entry in entries {
        writeln!(out)?;
        writeln!(out, "Center Name: {}", entry.center_name)?;
        writeln!(out, "Address: {}", entry.address)?;
        writeln!(out, "Pincode: {}", entry.postal_code)?;
        writeln!(out, "Fee: {}", entry.fee_type)?;
        writeln!(out, "Min Age: {}", entry.min_age)?;
        writeln!(out, "Vaccine Name: {}", entry.vaccine_name)?;
        writeln!(out, "Availability On: {}", entry.date)?;
        writeln!(out, "Slots: {}", entry.slot_times)?;
        writeln!(out, "Total Availability: {}", entry.total_capacity)?;
        writeln!(out, "Dose 1 Capacity: {}", entry.dose1_capacity)?;
        writeln!(out, "Dose 2 Capacity: {}", entry.dose2_capacity)?;
    }
    out.flush()
}

/// Explains a failed district lookup, listing valid names when there are any.
pub(crate) fn write_resolution_failure<W: Write>(
    out: &mut W,
    err: &ResolveError,
) -> io::Result<()> {
    match err {
        ResolveError::NotFound {
            district,
            candidates,
        } => {
            writeln!(out, "District name \"{district}\" not found.")?;
            writeln!(out, "Available district names:")?;
            for name in candidates {
                writeln!(out, "  {name}")?;
            }
        }
        ResolveError::RemoteUnavailable(source) => {
            writeln!(out, "Could not fetch the district list: {source}")?;
        }
    }
    out.flush()
}
