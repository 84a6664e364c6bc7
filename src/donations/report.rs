use super::ledger::Ledger;
use super::models::{Campaign, Donor};

/// Renders the final human-readable summary from the ledger state: donors
/// first, campaigns second, each section sorted by display name, one blank
/// line between them. Empty string when there is nothing to report, no
/// trailing newline otherwise.
pub fn build_report(ledger: &Ledger) -> String {
    let mut lines: Vec<String> = Vec::new();

    let mut donors = ledger.all_donors();
    if !donors.is_empty() {
        donors.sort_by(|a, b| a.name().cmp(b.name()));
        lines.push("Donors:".to_string());
        for donor in donors {
            lines.push(donor_line(donor));
        }
    }

    let mut campaigns = ledger.all_campaigns();
    if !lines.is_empty() && !campaigns.is_empty() {
        lines.push(String::new());
    }
    if !campaigns.is_empty() {
        campaigns.sort_by(|a, b| a.name().cmp(b.name()));
        lines.push("Campaigns:".to_string());
        for campaign in campaigns {
            lines.push(campaign_line(campaign));
        }
    }

    lines.join("\n")
}

fn donor_line(donor: &Donor) -> String {
    let donated: f64 = donor.donations().iter().map(|d| d.donation_amount()).sum();
    let average = if donor.donations().is_empty() {
        0.0
    } else {
        donated / donor.donations().len() as f64
    };

    format!("{}: Total: ${donated} Average: ${average}", donor.name())
}

fn campaign_line(campaign: &Campaign) -> String {
    format!("{}: Total: ${}", campaign.name(), campaign.funds())
}
