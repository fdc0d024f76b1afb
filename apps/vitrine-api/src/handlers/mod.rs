//! HTTP request handlers

pub mod home;
