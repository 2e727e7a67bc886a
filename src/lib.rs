pub mod api;
pub mod cache;
pub mod cli;
pub mod export;
pub mod ledger;
pub mod models;
pub mod wallet;

#[cfg(test)]
mod test;
