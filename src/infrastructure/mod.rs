//! Infrastructure layer: concrete storage behind the domain's trait.

pub mod storage;
