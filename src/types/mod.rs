// Copyright (c) 2016-2017 Martijn Rijkeboer <mrr@sru-systems.com>
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

pub use self::binaries_map::BinariesMap;
pub use self::binary_id::BinaryId;
pub use self::binary_key::BinaryKey;
pub use self::binary_value::BinaryValue;
pub use self::color::{Color, ColorError};
pub use self::comment::Comment;
pub use self::composite_key::CompositeKey;
pub use self::compression::Compression;
pub use self::custom_data_map::CustomDataMap;
pub use self::custom_icon_uuid::CustomIconUuid;
pub use self::custom_icons_map::CustomIconsMap;
pub use self::database::Database;
pub use self::entry::Entry;
pub use self::entry_state::EntryState;
pub use self::entry_uuid::EntryUuid;
pub use self::error::Error;
pub use self::group::Group;
pub use self::group_uuid::GroupUuid;
pub use self::header::Header;
pub use self::header_hash::HeaderHash;
pub use self::icon_id::IconId;
pub use self::key_file::KeyFile;
pub use self::key_file_type::KeyFileType;
pub use self::master_cipher::MasterCipher;
pub use self::master_iv::MasterIV;
pub use self::master_key::MasterKey;
pub use self::master_seed::MasterSeed;
pub use self::protected_stream_key::ProtectedStreamKey;
pub use self::result::Result;
pub use self::stream_cipher::StreamCipher;
pub use self::stream_key::StreamKey;
pub use self::stream_start_bytes::StreamStartBytes;
pub use self::string_key::StringKey;
pub use self::string_value::StringValue;
pub use self::strings_map::StringsMap;
pub use self::times::Times;
pub use self::transform_rounds::TransformRounds;
pub use self::transform_seed::TransformSeed;
pub use self::transformed_key::TransformedKey;
pub use self::version::Version;
pub use self::xml_data::XmlData;

mod binaries_map;
mod binary_id;
mod binary_key;
mod binary_value;
mod color;
mod comment;
mod composite_key;
mod compression;
mod custom_data_map;
mod custom_icon_uuid;
mod custom_icons_map;
mod database;
mod entry;
mod entry_state;
mod entry_uuid;
mod error;
mod group;
mod group_uuid;
mod header;
mod header_hash;
mod icon_id;
mod key_file;
mod key_file_type;
mod master_cipher;
mod master_iv;
mod master_key;
mod master_seed;
mod protected_stream_key;
mod result;
mod stream_cipher;
mod stream_key;
mod stream_start_bytes;
mod string_key;
mod string_value;
mod strings_map;
mod times;
mod transform_rounds;
mod transform_seed;
mod transformed_key;
mod version;
mod xml_data;
