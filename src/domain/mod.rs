pub mod account;
pub mod address;
pub mod catalog;
pub mod errors;
pub mod order;
pub mod ports;
pub mod sequence;
