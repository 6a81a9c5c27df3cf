// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// A key for the map with strings.
#[derive(Clone, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum StringKey {
    /// The value is a notes string.
    Notes,

    /// The value is an other string with specified name.
    Other(String),

    /// The value is a password string.
    Password,

    /// The value is a title string.
    Title,

    /// The value is a URL string.
    Url,

    /// The value is a username string.
    Username,
}

impl StringKey {
    /// Create a string key from a string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kdbx2::StringKey;
    ///
    /// let password_key = StringKey::from_string("Password");
    /// let other_key = StringKey::from_string("Foo");
    /// ```
    pub fn from_string(string: &str) -> StringKey {
        match string.to_lowercase().as_str() {
            "notes" => StringKey::Notes,
            "password" => StringKey::Password,
            "title" => StringKey::Title,
            "url" => StringKey::Url,
            "username" => StringKey::Username,
            _ => StringKey::Other(String::from(string)),
        }
    }

    /// Gets the string representation of the string key.
    pub fn to_string(&self) -> String {
        match *self {
            StringKey::Notes => String::from("Notes"),
            StringKey::Other(ref string) => string.clone(),
            StringKey::Password => String::from("Password"),
            StringKey::Title => String::from("Title"),
            StringKey::Url => String::from("URL"),
            StringKey::Username => String::from("UserName"),
        }
    }
}
