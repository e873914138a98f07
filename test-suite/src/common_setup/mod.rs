pub mod app;
pub mod contract_boxes;
pub mod helpers;
pub mod lottery_contract;
pub mod price_feed;
pub mod setup_accounts;
pub mod setup_config;
pub mod vrf_coordinator;
