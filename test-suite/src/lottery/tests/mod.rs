mod contracts;
mod mocks;
mod network;
mod registry;
