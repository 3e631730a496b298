//! Feishu (Lark) platform adapter
//!
//! This module implements the Open Platform REST calls needed to share a
//! meeting recording: token issuance, video-conference recording lookup and
//! permissions, drive public-link permissions, contact lookup and IM messages.

mod auth;
mod client;
mod contacts;
mod convert;
mod messages;
mod permissions;
mod platform_impl;
mod recordings;
mod types;

pub use client::{FeishuClient, DEFAULT_BASE_URL, LOG_ID_HEADER};
pub use platform_impl::FeishuPlatform;
pub use types::*;
