use std::collections::HashMap;

use serde::Serialize;

use super::commands::{AddCampaign, AddDonation, AddDonor, Command};
use super::models::{Campaign, Donation, Donor};
use super::reporter::EntriesReporter;
use super::{CommandExecutor, ExecutableCommand};

/// Authoritative in-memory store of donors and campaigns, keyed by the
/// lowercased entity name. Every executed command leaves exactly one entry
/// in the reporter.
#[derive(Debug, Default)]
pub struct Ledger {
    donors: HashMap<String, Donor>,
    campaigns: HashMap<String, Campaign>,
    reporter: EntriesReporter,
}

/// Diagnostic view of a full processing session.
#[derive(Debug, Serialize)]
pub struct LedgerSnapshot<'a> {
    donors: &'a HashMap<String, Donor>,
    campaigns: &'a HashMap<String, Campaign>,
    report: &'a EntriesReporter,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub fn execute_command(&mut self, command: Command) {
        command.dispatch_to(self);
    }

    pub fn has_any_data(&self) -> bool {
        !self.donors.is_empty() || !self.campaigns.is_empty()
    }

    pub fn donor(&self, key: &str) -> Option<&Donor> {
        self.donors.get(key)
    }

    pub fn campaign(&self, key: &str) -> Option<&Campaign> {
        self.campaigns.get(key)
    }

    pub fn all_donors(&self) -> Vec<&Donor> {
        self.donors.values().collect()
    }

    pub fn all_campaigns(&self) -> Vec<&Campaign> {
        self.campaigns.values().collect()
    }

    pub fn reporter(&self) -> &EntriesReporter {
        &self.reporter
    }

    /// Line-level skip for input that no command variant recognized.
    pub fn report_unmatched_line(&mut self, line: &str, description: String) {
        self.reporter.skipped_input(line.to_string(), description);
    }

    /// Line-level failure, e.g. a malformed amount token.
    pub fn report_line_error(&mut self, line: &str, description: String) {
        self.reporter.error_input(line.to_string(), description);
    }

    pub fn snapshot(&self) -> LedgerSnapshot<'_> {
        LedgerSnapshot {
            donors: &self.donors,
            campaigns: &self.campaigns,
            report: &self.reporter,
        }
    }
}

impl CommandExecutor for Ledger {
    fn accept_donor(&mut self, add_donor: AddDonor) {
        if !add_donor.validate() {
            let description = format!(
                "Invalid donor: {} with amount: {}",
                add_donor.name(),
                add_donor.amount()
            );
            self.reporter.skipped_donor(add_donor, description);
            return;
        }

        let key = add_donor.name().to_lowercase();
        if self.donors.contains_key(&key) {
            let description =
                format!("Ignoring donor with key: {key} since a donor already exists for that key");
            self.reporter.skipped_donor(add_donor, description);
            return;
        }

        let donor = Donor::new(key.clone(), add_donor.name().clone(), add_donor.amount());
        self.donors.insert(key, donor);
        self.reporter.success_donor(add_donor);
    }

    fn accept_campaign(&mut self, add_campaign: AddCampaign) {
        if !add_campaign.validate() {
            let description = format!("Invalid campaign: {}", add_campaign.name());
            self.reporter.skipped_campaign(add_campaign, description);
            return;
        }

        let key = add_campaign.name().to_lowercase();
        if self.campaigns.contains_key(&key) {
            let description = format!(
                "Ignoring campaign with key: {key} since a campaign already exists for that key"
            );
            self.reporter.skipped_campaign(add_campaign, description);
            return;
        }

        let campaign = Campaign::new(key.clone(), add_campaign.name().clone());
        self.campaigns.insert(key, campaign);
        self.reporter.success_campaign(add_campaign);
    }

    fn accept_donation(&mut self, donation: AddDonation) {
        let donor_key = donation.donor_name().to_lowercase();
        let campaign_key = donation.campaign_name().to_lowercase();

        let Some(donor) = self.donors.get_mut(&donor_key) else {
            let description = format!(
                "Unable to find donor with key: {donor_key} while trying to process donation"
            );
            self.reporter.skipped_donation(donation, description);
            return;
        };

        let Some(campaign) = self.campaigns.get_mut(&campaign_key) else {
            let description = format!(
                "Unable to find campaign with key: {campaign_key} while trying to process donation"
            );
            self.reporter.skipped_donation(donation, description);
            return;
        };

        if !donation.validate() {
            let description = format!(
                "Invalid donation from: {donor_key} to: {campaign_key} with amount: {}",
                donation.amount()
            );
            self.reporter.skipped_donation(donation, description);
            return;
        }

        let requested = donation.donation_amount();
        if donor.funds() < requested {
            let description = format!(
                "Donation funds ({requested}) exceeds donor funds ({})",
                donor.funds()
            );
            self.reporter.skipped_donation(donation, description);
            return;
        }

        campaign.receive(requested);
        donor.record_donation(Donation::new(
            campaign_key,
            donation.frequency(),
            donation.amount(),
        ));
        self.reporter.success_donation(donation);
    }
}
