// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// Trait used for readers and writers that capture the transferred bytes.
///
/// The header hash stored inside the XML document covers the raw header
/// bytes, so the reader and writer record them while they stream past.
pub trait Log {
    /// Clears the captured data.
    fn clear(&mut self);

    /// Gets the captured data.
    fn logged(&self) -> &[u8];

    /// Starts the capture (the default).
    fn start(&mut self);

    /// Stops the capture.
    fn stop(&mut self);
}
