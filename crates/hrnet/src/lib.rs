//! `hrnet` - Employee records
//!
//! This library provides the pieces behind the two hrnet screens: a creation
//! form that appends employee records to a persistent key-value slot, and a
//! listing pipeline that searches, sorts and paginates those records.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod employee;
pub mod error;
pub mod form;
pub mod listing;
pub mod logging;
pub mod states;
pub mod store;

pub use config::Config;
pub use employee::{Address, Department, EmployeeRecord};
pub use error::{Error, Result};
pub use form::CreationForm;
pub use listing::{render, DisplayOptions, RenderModel, ViewState};
pub use logging::init_logging;
pub use store::{MemorySlots, RecordStore, SlotBackend, SqliteSlots, Store};
