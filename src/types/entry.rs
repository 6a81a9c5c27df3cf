// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use crate::common;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::str;

use super::binary_key::BinaryKey;
use super::binary_value::BinaryValue;
use super::color::Color;
use super::custom_icon_uuid::CustomIconUuid;
use super::entry_uuid::EntryUuid;
use super::icon_id::IconId;
use super::string_key::StringKey;
use super::string_value::StringValue;
use super::strings_map::StringsMap;
use super::times::Times;

/// An entry in the database.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    /// The background color.
    pub background_color: Option<Color>,

    /// Map with binaries.
    pub binaries: HashMap<BinaryKey, BinaryValue>,

    /// The date and time this entry was created.
    pub creation_time: DateTime<Utc>,

    /// The identifier of this entry's custom icon if any.
    pub custom_icon_uuid: Option<CustomIconUuid>,

    /// Whether this entry expires.
    pub expires: bool,

    /// The date and time this entry will expire if expires is true.
    pub expiry_time: DateTime<Utc>,

    /// The foreground color.
    pub foreground_color: Option<Color>,

    /// This entry's history, oldest first.
    pub history: Vec<Entry>,

    /// This entry's icon.
    pub icon: IconId,

    /// The date and time this entry was last accessed.
    pub last_accessed: DateTime<Utc>,

    /// The date and time this entry was last modified.
    pub last_modified: DateTime<Utc>,

    /// The date and time the location of this entry was changed.
    pub location_changed: DateTime<Utc>,

    /// Override URL.
    pub override_url: String,

    /// Map with strings.
    pub strings: StringsMap,

    /// The tags associated with this entry.
    pub tags: String,

    /// The usage count of this entry.
    pub usage_count: i32,

    /// The identifier of this entry.
    pub uuid: EntryUuid,
}

impl Entry {
    /// Create a new entry.
    pub fn new() -> Entry {
        Entry {
            uuid: EntryUuid::new_random(),
            ..Entry::default()
        }
    }

    /// Gets the notes string if any.
    pub fn notes(&self) -> Option<&str> {
        self.other(StringKey::Notes)
    }

    /// Gets an other string if any.
    pub fn other(&self, key: StringKey) -> Option<&str> {
        match self.strings.get(&key) {
            Some(&StringValue::Plain(ref string)) => Some(string),
            Some(&StringValue::Protected(ref secstr)) => str::from_utf8(secstr.unsecure()).ok(),
            None => None,
        }
    }

    /// Gets the password string if any.
    pub fn password(&self) -> Option<&str> {
        self.other(StringKey::Password)
    }

    /// Sets the notes string value.
    pub fn set_notes<S: Into<String>>(&mut self, val: S) {
        self.strings.insert(
            StringKey::Notes,
            StringValue::new(val, common::PROTECT_NOTES_DEFAULT),
        );
    }

    /// Sets an other string value.
    pub fn set_other<S: Into<String>>(&mut self, key: StringKey, val: S) {
        self.strings.insert(key, StringValue::new(val, false));
    }

    /// Sets the password string value.
    pub fn set_password<S: Into<String>>(&mut self, val: S) {
        self.strings.insert(
            StringKey::Password,
            StringValue::new(val, common::PROTECT_PASSWORD_DEFAULT),
        );
    }

    /// Sets the title string value.
    pub fn set_title<S: Into<String>>(&mut self, val: S) {
        self.strings.insert(
            StringKey::Title,
            StringValue::new(val, common::PROTECT_TITLE_DEFAULT),
        );
    }

    /// Sets the url string value.
    pub fn set_url<S: Into<String>>(&mut self, val: S) {
        self.strings.insert(
            StringKey::Url,
            StringValue::new(val, common::PROTECT_URL_DEFAULT),
        );
    }

    /// Sets the username string value.
    pub fn set_username<S: Into<String>>(&mut self, val: S) {
        self.strings.insert(
            StringKey::Username,
            StringValue::new(val, common::PROTECT_USERNAME_DEFAULT),
        );
    }

    /// Gets the title string if any.
    pub fn title(&self) -> Option<&str> {
        self.other(StringKey::Title)
    }

    /// Gets the url string if any.
    pub fn url(&self) -> Option<&str> {
        self.other(StringKey::Url)
    }

    /// Gets the username string if any.
    pub fn username(&self) -> Option<&str> {
        self.other(StringKey::Username)
    }
}

impl Default for Entry {
    fn default() -> Entry {
        let now = Utc::now();
        Entry {
            background_color: None,
            binaries: HashMap::new(),
            creation_time: now,
            custom_icon_uuid: None,
            expires: false,
            expiry_time: now,
            foreground_color: None,
            history: Vec::new(),
            icon: IconId::KEY,
            last_accessed: now,
            last_modified: now,
            location_changed: now,
            override_url: String::new(),
            strings: StringsMap::new(),
            tags: String::new(),
            usage_count: 0,
            uuid: EntryUuid::nil(),
        }
    }
}

impl Times for Entry {
    fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    fn expires(&self) -> bool {
        self.expires
    }

    fn expiry_time(&self) -> DateTime<Utc> {
        self.expiry_time
    }

    fn last_accessed(&self) -> DateTime<Utc> {
        self.last_accessed
    }

    fn last_modified(&self) -> DateTime<Utc> {
        self.last_modified
    }

    fn location_changed(&self) -> DateTime<Utc> {
        self.location_changed
    }

    fn usage_count(&self) -> i32 {
        self.usage_count
    }

    fn set_creation_time(&mut self, val: DateTime<Utc>) {
        self.creation_time = val;
    }

    fn set_expires(&mut self, val: bool) {
        self.expires = val;
    }

    fn set_expiry_time(&mut self, val: DateTime<Utc>) {
        self.expiry_time = val;
    }

    fn set_last_accessed(&mut self, val: DateTime<Utc>) {
        self.last_accessed = val;
    }

    fn set_last_modified(&mut self, val: DateTime<Utc>) {
        self.last_modified = val;
    }

    fn set_location_changed(&mut self, val: DateTime<Utc>) {
        self.location_changed = val;
    }

    fn set_usage_count(&mut self, val: i32) {
        self.usage_count = val;
    }
}
