//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render session chrome and read/write shared state from Leptos
//! context providers.

pub mod notification_list;
pub mod wallet_menu;
