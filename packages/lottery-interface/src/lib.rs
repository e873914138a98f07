pub mod lottery;
pub mod mocks;
