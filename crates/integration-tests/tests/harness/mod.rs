//! Shared fixtures: mock upstreams, config builder and a running server
#![allow(dead_code)]

pub mod config;
pub mod mock_llm;
pub mod mock_tts;
pub mod server;

/// Smallest well-formed WAV header followed by a few sample bytes
pub const SAMPLE_WAV: &[u8] = b"RIFF\x2c\x00\x00\x00WAVEfmt \x10\x00\x00\x00\x01\x00\x01\x00\x44\xac\x00\x00\x88\x58\x01\x00\x02\x00\x10\x00data\x08\x00\x00\x00\x00\x00\x01\x00\x02\x00\x03\x00";
