use std::str::FromStr;

use chrono::{DateTime, Utc};
use getset::{CopyGetters, Getters};
use serde::Serialize;

use super::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DonationFrequency {
    Monthly,
    Weekly,
}

impl DonationFrequency {
    /// Weekly donations count four weeks per reporting period.
    pub fn effective_amount(self, base: f64) -> f64 {
        match self {
            DonationFrequency::Monthly => base,
            DonationFrequency::Weekly => base * 4.0,
        }
    }
}

impl FromStr for DonationFrequency {
    type Err = CommandError;

    fn from_str(token: &str) -> Result<DonationFrequency, CommandError> {
        match token.to_ascii_uppercase().as_str() {
            "MONTHLY" => Ok(DonationFrequency::Monthly),
            "WEEKLY" => Ok(DonationFrequency::Weekly),
            _ => Err(CommandError::UnknownFrequency(token.to_string())),
        }
    }
}

/// One recurring pledge made by a donor. Stores the base amount, never the
/// frequency-multiplied one.
#[derive(Debug, Clone, Serialize, Getters, CopyGetters)]
pub struct Donation {
    #[getset(get = "pub")]
    campaign_key: String,
    #[getset(get_copy = "pub")]
    frequency: DonationFrequency,
    #[getset(get_copy = "pub")]
    amount: f64,
    created: DateTime<Utc>,
}

impl Donation {
    pub fn new(campaign_key: String, frequency: DonationFrequency, amount: f64) -> Donation {
        Donation {
            campaign_key,
            frequency,
            amount,
            created: Utc::now(),
        }
    }

    /// Amount actually transferred once the frequency multiplier applies.
    pub fn donation_amount(&self) -> f64 {
        self.frequency.effective_amount(self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Getters, CopyGetters)]
pub struct Donor {
    #[getset(get = "pub")]
    key: String,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    funds: f64,
    #[getset(get = "pub")]
    donations: Vec<Donation>,
    created: DateTime<Utc>,
}

impl Donor {
    pub fn new(key: String, name: String, funds: f64) -> Donor {
        Donor {
            key,
            name,
            funds,
            donations: Vec::new(),
            created: Utc::now(),
        }
    }

    /// Moves the donation's effective amount out of the available funds and
    /// appends the record. Funds must cover the amount before calling.
    pub fn record_donation(&mut self, donation: Donation) {
        self.funds -= donation.donation_amount();
        self.donations.push(donation);
    }
}

#[derive(Debug, Clone, Serialize, Getters, CopyGetters)]
pub struct Campaign {
    #[getset(get = "pub")]
    key: String,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    funds: f64,
    created: DateTime<Utc>,
}

impl Campaign {
    pub fn new(key: String, name: String) -> Campaign {
        Campaign {
            key,
            name,
            funds: 0.0,
            created: Utc::now(),
        }
    }

    pub fn receive(&mut self, amount: f64) {
        self.funds += amount;
    }
}
