use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::Result;
use log::debug;

use crate::donations::commands::extract_command;
use crate::donations::ledger::Ledger;

/// Feeds every line of the named file through the ledger.
pub fn process_file(path: &str, ledger: &mut Ledger) -> Result<()> {
    let file = File::open(path)?;
    process_lines(BufReader::new(file), ledger)
}

/// Consumes an ordered sequence of lines, processing each one in turn.
pub fn process_lines<R: BufRead>(reader: R, ledger: &mut Ledger) -> Result<()> {
    for line in reader.lines() {
        process_line(&line?, ledger);
    }

    Ok(())
}

/// Runs a single line through dispatch and execution. Never fails: parse
/// errors and unmatched lines end up as reporter input entries.
pub fn process_line(line: &str, ledger: &mut Ledger) {
    debug!("processing line: {line}");

    match extract_command(line) {
        Ok(Some(command)) => {
            debug!("extracted command: {command:?}");
            ledger.execute_command(command);
        }
        Ok(None) => {
            let description = format!("Discarding record, no command recognized for: {line}");
            ledger.report_unmatched_line(line, description);
        }
        Err(err) => {
            debug!("failed to parse line, err={err}");
            ledger.report_line_error(line, err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::donations::report::build_report;
    use crate::donations::reporter::EntryStatus;

    #[test]
    fn processes_a_full_session() {
        let mut ledger = Ledger::new();
        for line in [
            "Add Donor Greg 300",
            "Add Campaign HelpTheKids",
            "Donate greg MONTHLY helpthekids $150",
        ] {
            process_line(line, &mut ledger);
        }

        let donor = ledger.donor("greg").unwrap();
        assert_eq!(donor.funds(), 150.0);
        assert_eq!(donor.donations().len(), 1);
        assert_eq!(donor.donations()[0].amount(), 150.0);
        assert_eq!(ledger.campaign("helpthekids").unwrap().funds(), 150.0);

        assert_eq!(
            build_report(&ledger),
            "Donors:\nGreg: Total: $150 Average: $150\n\nCampaigns:\nHelpTheKids: Total: $150"
        );
    }

    #[test]
    fn malformed_amount_becomes_an_input_error() {
        let mut ledger = Ledger::new();
        process_line("add donor pepe as10", &mut ledger);

        assert!(ledger.all_donors().is_empty());

        let entries = ledger.reporter().input_entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].status(), EntryStatus::Error);
        assert_eq!(entries[0].target(), "add donor pepe as10");
    }

    #[test]
    fn unmatched_lines_are_skipped_at_input_level() {
        let mut ledger = Ledger::new();
        process_line("transfer everything now", &mut ledger);
        process_line("Donate pepe WEEKLY camp 0", &mut ledger);

        assert!(!ledger.has_any_data());

        let entries = ledger.reporter().input_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].status(), EntryStatus::Skipped);
        assert_eq!(entries[1].status(), EntryStatus::Skipped);
        assert!(ledger.reporter().donation_entries().is_empty());
    }

    #[test]
    fn reads_lines_from_any_buffered_source() -> anyhow::Result<()> {
        let source = "Add Donor Ana 40\nAdd Campaign Trees\nDonate ana WEEKLY trees 10\n";
        let mut ledger = Ledger::new();
        process_lines(source.as_bytes(), &mut ledger)?;

        assert_eq!(ledger.donor("ana").unwrap().funds(), 0.0);
        assert_eq!(ledger.campaign("trees").unwrap().funds(), 40.0);

        Ok(())
    }
}
