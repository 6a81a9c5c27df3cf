// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Library for reading and writing KeePass 2 (KDBX v2) databases.
//!
//! # Examples
//!
//! Create a new database:
//!
//! ```rust
//! use kdbx2::{CompositeKey, Database};
//!
//! let key = CompositeKey::from_password("password");
//! let db = Database::new(&key);
//! ```
//!
//! Open the database passwords.kdbx using the password "password" and
//! print it:
//!
//! ```rust,no_run
//! use kdbx2::{CompositeKey, Database};
//! use std::fs::File;
//!
//! fn main() {
//!     let mut file = File::open("passwords.kdbx").unwrap();
//!     let key = CompositeKey::from_password("password");
//!     let db = Database::open(&mut file, &key).unwrap();
//!     println!("{:?}", db);
//! }
//! ```
//!
//! Open the database passwords.kdbx using both the password "password"
//! and the key file passwords.key:
//!
//! ```rust,no_run
//! use kdbx2::{CompositeKey, Database, KeyFile};
//! use std::fs::File;
//!
//! fn main() {
//!     let mut file = File::open("passwords.key").unwrap();
//!     let key_file = KeyFile::open(&mut file).unwrap();
//!     let key = CompositeKey::from_both("password", key_file);
//!
//!     let mut file = File::open("passwords.kdbx").unwrap();
//!     let db = Database::open(&mut file, &key).unwrap();
//!     println!("{:?}", db);
//! }
//! ```
//!
//! Save a new database to new.kdbx:
//!
//! ```rust,no_run
//! use kdbx2::{CompositeKey, Database};
//! use std::fs::File;
//!
//! fn main() {
//!     let key = CompositeKey::from_password("password");
//!     let db = Database::new(&key);
//!     let mut file = File::create("new.kdbx").unwrap();
//!     db.save(&mut file).unwrap();
//! }
//! ```
//!
//! # Not Implemented
//!
//! The following features are currently not implemented:
//!
//! - KeePass 1 databases.
//! - KDBX 4 databases.
//! - Auto-type and browser integration data.

pub use crate::types::BinariesMap;
pub use crate::types::BinaryId;
pub use crate::types::BinaryKey;
pub use crate::types::BinaryValue;
pub use crate::types::Comment;
pub use crate::types::CompositeKey;
pub use crate::types::Compression;
pub use crate::types::CustomDataMap;
pub use crate::types::CustomIconUuid;
pub use crate::types::CustomIconsMap;
pub use crate::types::Database;
pub use crate::types::Entry;
pub use crate::types::EntryUuid;
pub use crate::types::Error;
pub use crate::types::Group;
pub use crate::types::GroupUuid;
pub use crate::types::Header;
pub use crate::types::IconId;
pub use crate::types::KeyFile;
pub use crate::types::KeyFileType;
pub use crate::types::MasterCipher;
pub use crate::types::Result;
pub use crate::types::StreamCipher;
pub use crate::types::StringKey;
pub use crate::types::StringValue;
pub use crate::types::StringsMap;
pub use crate::types::Times;
pub use crate::types::TransformRounds;
pub use crate::types::Version;
pub use crate::types::{Color, ColorError};

mod common;
mod compression;
mod crypto;
mod format;
mod io;
mod types;

#[cfg(test)]
#[macro_use]
extern crate quickcheck;
