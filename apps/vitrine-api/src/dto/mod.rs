//! Data Transfer Objects

pub mod home;
