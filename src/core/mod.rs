//! Core domain types for the dashboard service

pub mod entities;
