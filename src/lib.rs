//! i18nsync - keep an i18n.properties file in sync with source code
//!
//! i18nsync scans views, controllers and manifests for message tokens
//! (`{i18n>key}`, `{{key}}`, `getText("key")`) and merges them into a
//! `key=value` properties file: new tokens are appended with a generated
//! default text, entries no longer referenced are commented out, and
//! commented entries that are referenced again are restored.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, reporting, exit status)
//! - `config`: Configuration file loading, defaults and validation
//! - `core`: Extraction and reconciliation engine
//!
//! ## Example
//!
//! ```
//! use i18nsync::config::Config;
//! use i18nsync::core::{InputFile, Synchronizer};
//!
//! let sync = Synchronizer::new(Config::default()).unwrap();
//! let files = vec![InputFile::buffer("Main.view.xml", r#"<Title text="{i18n>pageTitle}"/>"#)];
//! let outcome = sync
//!     .run_with(&files, || Ok("oldTitle=Old\n".to_string()))
//!     .unwrap();
//!
//! assert_eq!(
//!     outcome.output.unwrap().contents,
//!     "#oldTitle=Old\npageTitle=page title\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod core;
