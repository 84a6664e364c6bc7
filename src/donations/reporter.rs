use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use log::{error, warn};
use serde::Serialize;

use super::commands::{AddCampaign, AddDonation, AddDonor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    Success,
    Skipped,
    Error,
}

/// Audit record for one processed command or raw line.
#[derive(Debug, Serialize, Getters, CopyGetters)]
pub struct ReporterEntry<T> {
    #[getset(get_copy = "pub")]
    status: EntryStatus,
    #[getset(get = "pub")]
    description: String,
    #[getset(get = "pub")]
    target: T,
    timestamp: DateTime<Utc>,
}

impl<T> ReporterEntry<T> {
    fn new(status: EntryStatus, description: String, target: T) -> ReporterEntry<T> {
        ReporterEntry {
            status,
            description,
            target,
            timestamp: Utc::now(),
        }
    }
}

/// Append-only sink for processing outcomes, one collection per command
/// category plus one for raw input lines. Skips and errors also go to the
/// installed logger; successes stay quiet. Never fails.
#[derive(Debug, Default, Serialize, Getters)]
pub struct EntriesReporter {
    #[getset(get = "pub")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    donor_entries: Vec<ReporterEntry<AddDonor>>,
    #[getset(get = "pub")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    campaign_entries: Vec<ReporterEntry<AddCampaign>>,
    #[getset(get = "pub")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    donation_entries: Vec<ReporterEntry<AddDonation>>,
    #[getset(get = "pub")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    input_entries: Vec<ReporterEntry<String>>,
}

impl EntriesReporter {
    pub fn new() -> EntriesReporter {
        EntriesReporter::default()
    }

    pub fn record_donor(&mut self, status: EntryStatus, description: String, target: AddDonor) {
        Self::push(&mut self.donor_entries, status, description, target);
    }

    pub fn success_donor(&mut self, target: AddDonor) {
        self.record_donor(EntryStatus::Success, String::new(), target);
    }

    pub fn skipped_donor(&mut self, target: AddDonor, description: String) {
        self.record_donor(EntryStatus::Skipped, description, target);
    }

    pub fn error_donor(&mut self, target: AddDonor, description: String) {
        self.record_donor(EntryStatus::Error, description, target);
    }

    pub fn record_campaign(
        &mut self,
        status: EntryStatus,
        description: String,
        target: AddCampaign,
    ) {
        Self::push(&mut self.campaign_entries, status, description, target);
    }

    pub fn success_campaign(&mut self, target: AddCampaign) {
        self.record_campaign(EntryStatus::Success, String::new(), target);
    }

    pub fn skipped_campaign(&mut self, target: AddCampaign, description: String) {
        self.record_campaign(EntryStatus::Skipped, description, target);
    }

    pub fn error_campaign(&mut self, target: AddCampaign, description: String) {
        self.record_campaign(EntryStatus::Error, description, target);
    }

    pub fn record_donation(
        &mut self,
        status: EntryStatus,
        description: String,
        target: AddDonation,
    ) {
        Self::push(&mut self.donation_entries, status, description, target);
    }

    pub fn success_donation(&mut self, target: AddDonation) {
        self.record_donation(EntryStatus::Success, String::new(), target);
    }

    pub fn skipped_donation(&mut self, target: AddDonation, description: String) {
        self.record_donation(EntryStatus::Skipped, description, target);
    }

    pub fn error_donation(&mut self, target: AddDonation, description: String) {
        self.record_donation(EntryStatus::Error, description, target);
    }

    pub fn record_input(&mut self, status: EntryStatus, description: String, target: String) {
        Self::push(&mut self.input_entries, status, description, target);
    }

    pub fn success_input(&mut self, target: String) {
        self.record_input(EntryStatus::Success, String::new(), target);
    }

    pub fn skipped_input(&mut self, target: String, description: String) {
        self.record_input(EntryStatus::Skipped, description, target);
    }

    pub fn error_input(&mut self, target: String, description: String) {
        self.record_input(EntryStatus::Error, description, target);
    }

    fn push<T>(
        entries: &mut Vec<ReporterEntry<T>>,
        status: EntryStatus,
        description: String,
        target: T,
    ) {
        match status {
            EntryStatus::Skipped => warn!("{description}"),
            EntryStatus::Error => error!("{description}"),
            EntryStatus::Success => {}
        }

        entries.push(ReporterEntry::new(status, description, target));
    }
}
