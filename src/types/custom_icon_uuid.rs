// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use uuid::Uuid;

/// The identifier for a custom icon.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct CustomIconUuid(pub Uuid);

impl CustomIconUuid {
    /// Create a new random custom icon identifier.
    pub fn new_random() -> CustomIconUuid {
        CustomIconUuid(Uuid::new_v4())
    }
}

impl fmt::Display for CustomIconUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.to_string().as_str())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_new_random_returns_random_custom_icon_uuids() {
        let a = CustomIconUuid::new_random();
        let b = CustomIconUuid::new_random();
        assert!(a != b);
    }
}
