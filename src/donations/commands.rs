use enum_dispatch::enum_dispatch;
use getset::{CopyGetters, Getters};
use serde::Serialize;

use super::models::DonationFrequency;
use super::{CommandError, CommandExecutor, ExecutableCommand};

/// Closed set of commands the grammar understands.
#[enum_dispatch(ExecutableCommand)]
#[derive(Debug, PartialEq)]
pub enum Command {
    AddDonor,
    AddCampaign,
    AddDonation,
}

/// Tries every command variant against the line, in declared order. The
/// first variant that parses and self-validates wins; a variant that parses
/// but fails validation counts as no match. Tokenizer errors propagate.
pub fn extract_command(line: &str) -> Result<Option<Command>, CommandError> {
    if let Some(add_donor) = AddDonor::parse(line)? {
        if add_donor.validate() {
            return Ok(Some(add_donor.into()));
        }
    }

    if let Some(add_campaign) = AddCampaign::parse(line)? {
        if add_campaign.validate() {
            return Ok(Some(add_campaign.into()));
        }
    }

    if let Some(donation) = AddDonation::parse(line)? {
        if donation.validate() {
            return Ok(Some(donation.into()));
        }
    }

    Ok(None)
}

fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &line[prefix.len()..])
}

/// Amounts may carry a single leading `$` literal.
fn parse_amount(token: &str) -> Result<f64, CommandError> {
    let digits = token.strip_prefix('$').unwrap_or(token);
    digits
        .parse()
        .map_err(|_| CommandError::InvalidAmount(token.to_string()))
}

/// `Add Donor <name> <amount>`, name keeps its original casing.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct AddDonor {
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    amount: f64,
}

impl AddDonor {
    pub fn new(name: &str, amount: f64) -> AddDonor {
        AddDonor {
            name: name.to_string(),
            amount,
        }
    }

    pub fn parse(line: &str) -> Result<Option<AddDonor>, CommandError> {
        let Some(rest) = strip_prefix_ignore_case(line, "add donor") else {
            return Ok(None);
        };

        let params: Vec<&str> = rest.split_whitespace().collect();
        if params.len() < 2 {
            return Ok(None);
        }

        Ok(Some(AddDonor::new(params[0], parse_amount(params[1])?)))
    }
}

impl ExecutableCommand for AddDonor {
    fn validate(&self) -> bool {
        !self.name.is_empty() && self.amount > 0.0
    }

    fn dispatch_to(self, executor: &mut dyn CommandExecutor) {
        executor.accept_donor(self);
    }
}

/// `Add Campaign <name>`, name keeps its original casing. Tokens past the
/// name are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Getters)]
pub struct AddCampaign {
    #[getset(get = "pub")]
    name: String,
}

impl AddCampaign {
    pub fn new(name: &str) -> AddCampaign {
        AddCampaign {
            name: name.to_string(),
        }
    }

    pub fn parse(line: &str) -> Result<Option<AddCampaign>, CommandError> {
        let Some(rest) = strip_prefix_ignore_case(line, "add campaign") else {
            return Ok(None);
        };

        Ok(rest.split_whitespace().next().map(AddCampaign::new))
    }
}

impl ExecutableCommand for AddCampaign {
    fn validate(&self) -> bool {
        !self.name.is_empty()
    }

    fn dispatch_to(self, executor: &mut dyn CommandExecutor) {
        executor.accept_campaign(self);
    }
}

/// `Donate <donor> <frequency> <campaign> <amount>`. The whole line is
/// lowercased before tokenizing, so donor and campaign names on this command
/// are always lowercase; the ledger compares keys case-insensitively either
/// way.
#[derive(Debug, Clone, PartialEq, Serialize, Getters, CopyGetters)]
pub struct AddDonation {
    #[getset(get = "pub")]
    donor_name: String,
    #[getset(get_copy = "pub")]
    frequency: DonationFrequency,
    #[getset(get = "pub")]
    campaign_name: String,
    #[getset(get_copy = "pub")]
    amount: f64,
}

impl AddDonation {
    pub fn new(
        donor_name: &str,
        frequency: DonationFrequency,
        campaign_name: &str,
        amount: f64,
    ) -> AddDonation {
        AddDonation {
            donor_name: donor_name.to_string(),
            frequency,
            campaign_name: campaign_name.to_string(),
            amount,
        }
    }

    pub fn parse(line: &str) -> Result<Option<AddDonation>, CommandError> {
        let lowered = line.to_lowercase();
        let Some(rest) = lowered.strip_prefix("donate") else {
            return Ok(None);
        };

        let params: Vec<&str> = rest.split_whitespace().collect();
        if params.len() < 4 {
            return Ok(None);
        }

        Ok(Some(AddDonation::new(
            params[0],
            params[1].parse()?,
            params[2],
            parse_amount(params[3])?,
        )))
    }

    /// Amount actually transferred once the frequency multiplier applies.
    pub fn donation_amount(&self) -> f64 {
        self.frequency.effective_amount(self.amount)
    }
}

impl ExecutableCommand for AddDonation {
    fn validate(&self) -> bool {
        !self.donor_name.is_empty() && !self.campaign_name.is_empty() && self.amount > 0.0
    }

    fn dispatch_to(self, executor: &mut dyn CommandExecutor) {
        executor.accept_donation(self);
    }
}
