// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use secstr::SecStr;

/// A value for the map with strings.
#[derive(Clone, Debug, PartialEq)]
pub enum StringValue {
    /// Plain string value.
    Plain(String),

    /// Protected string value.
    Protected(SecStr),
}

impl StringValue {
    /// Create a new string value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kdbx2::StringValue;
    ///
    /// let plain_value = StringValue::new("plain", false);
    /// let protected_value = StringValue::new("secret", true);
    /// ```
    pub fn new<S: Into<String>>(value: S, protected: bool) -> StringValue {
        if protected {
            StringValue::Protected(SecStr::new(value.into().into_bytes()))
        } else {
            StringValue::Plain(value.into())
        }
    }
}
