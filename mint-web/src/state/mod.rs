//! State management

pub mod dapp;
