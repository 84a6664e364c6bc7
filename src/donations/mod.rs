use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod commands;
pub mod ledger;
pub mod models;
pub mod report;
pub mod reporter;


use commands::{AddCampaign, AddDonation, AddDonor, Command};

/// Raised while tokenizing a line that already matched a command prefix.
/// Unlike a non-matching line, a malformed token is surfaced to the caller.
#[derive(Debug, PartialEq, Error)]
pub enum CommandError {
    #[error("could not parse amount: {0}")]
    InvalidAmount(String),
    #[error("{0} is not a valid donation frequency")]
    UnknownFrequency(String),
}

/// Capability set commands are dispatched to. The ledger is the only
/// production implementor.
pub trait CommandExecutor {
    fn accept_donor(&mut self, add_donor: AddDonor);
    fn accept_campaign(&mut self, add_campaign: AddCampaign);
    fn accept_donation(&mut self, donation: AddDonation);
}

#[enum_dispatch]
pub trait ExecutableCommand {
    /// Structural self-check over the command's own fields, no ledger access.
    fn validate(&self) -> bool;

    /// Hands the command to the matching `CommandExecutor` method.
    fn dispatch_to(self, executor: &mut dyn CommandExecutor);
}
