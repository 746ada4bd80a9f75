//! Application layer for inifig.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure rules, here in `inifig_core`) and the infrastructure (file access).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain objects to fulfil a caller's goal (e.g., "load
//!   these three files over my defaults and give me the effective theme").
//! - **Depends on abstractions** (the `SettingsStorage` trait) rather than on
//!   the file system directly, so it can be tested entirely in memory.
//!
//! # Sub-modules
//!
//! - **`file_list`**      – The ordered list of settings files; the last one
//!   is the save target.
//!
//! - **`settings_store`** – The [`Settings`](settings_store::Settings) object:
//!   load with precedence, get, set, save.

pub mod file_list;
pub mod settings_store;
