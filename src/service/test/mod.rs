mod event;
mod ledger;
