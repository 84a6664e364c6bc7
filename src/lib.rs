//! Recurring-donation command processing: a line-oriented command grammar,
//! an in-memory ledger that executes the commands, and the summary report
//! built from the final ledger state.

pub mod donations;
pub mod input;
