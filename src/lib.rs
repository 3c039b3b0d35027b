//! CiviAgora core library
//!
//! Localization resolver, entity-bound form controllers and the management
//! page glue of the CiviAgora participation platform's back-office.

pub mod core;
pub mod db;
pub mod dialogs;
pub mod form;
pub mod i18n;
pub mod page;
pub mod store;
