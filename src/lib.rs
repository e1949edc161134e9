#[macro_use]
extern crate tracing;

use protobuf::{text_format, Message};

#[cfg(test)]
mod _tests;

pub mod compiler;
pub mod eeprom;
pub mod error;
pub mod log;
pub mod profiles;
pub mod protogen;

pub use crate::{
    compiler::{compile_all, compile_file, discover, CompileOptions, CompileReport},
    error::{CompileError, ParseError},
    protogen::profile::Profile,
};

pub const DEFAULT_EXTENSION: &str = "textpb";

pub fn parse_text(contents: &[u8]) -> Result<Profile, ParseError> {
    let mut profile = Profile::new();
    text_format::merge_from_str(&mut profile, std::str::from_utf8(contents)?)?;
    Ok(profile)
}

pub fn serialize_binary(profile: &Profile) -> protobuf::Result<Vec<u8>> {
    profile.write_to_bytes()
}
