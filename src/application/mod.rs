//! Application layer orchestrating domain logic over the storage contract.

pub mod services;
