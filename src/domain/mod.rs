mod ledger;
mod report;
mod vote;

pub use ledger::*;
pub use report::*;
pub use vote::*;
