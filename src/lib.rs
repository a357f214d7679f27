//! XP, levels, ranks and daily quests for a personal training tracker.
//!
//! The core is [`engine`] (experience and level-ups) and [`quests`] (the daily
//! completion gate). Both are pure; [`tracker::Tracker`] owns the state and
//! writes it through to a [`db::KeyValueStore`]. The CLI, the local [`api`],
//! [`cues`], [`avatar`] and the exercise [`catalog`] are front ends over it.

pub mod api;
pub mod avatar;
pub mod catalog;
pub mod cli;
pub mod cues;
pub mod db;
pub mod engine;
pub mod error;
pub mod models;
pub mod quests;
pub mod tracker;
