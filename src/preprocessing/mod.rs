//! Audio preprocessing
//!
//! Utilities for turning decoder output into the normalized mono waveform
//! the pipeline expects:
//! - Channel mixing (interleaved multi-channel to mono)
//! - Peak normalization

pub mod channel_mixer;
pub mod normalization;
