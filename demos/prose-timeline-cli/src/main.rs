// prose-core-client/prose-timeline-cli
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use chrono::{Duration, TimeZone};
use tracing::debug;

use prose_timeline::dtos::{Message, MessageItem, SenderId, TimelineItem};
use prose_timeline::{Timeline, TimelineConfig};

use crate::input::InputMessage;
use crate::logging::{enable_logging, Level};

mod input;
mod logging;

fn main() -> Result<()> {
    enable_logging(load_log_level()?);

    let (path, local_user) = load_arguments()?;
    let config = load_config()?;
    debug!("Using {:?}", config);

    let json = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read messages from {:?}", path))?;
    let messages = serde_json::from_str::<Vec<InputMessage>>(&json)
        .with_context(|| format!("Cannot parse messages in {:?}", path))?
        .into_iter()
        .map(Message::from)
        .collect::<Vec<_>>();

    let timeline = Timeline::builder()
        .set_local_user(local_user)
        .set_config(config)
        .build();

    for item in timeline.project(&messages) {
        match item {
            TimelineItem::DateDivider(divider) => {
                println!();
                println!("──── {} ────", timeline.day_label(divider.date));
            }
            TimelineItem::Message(item) => print_message(&timeline, &item),
        }
    }

    Ok(())
}

fn print_message<Tz: TimeZone>(timeline: &Timeline<Tz>, item: &MessageItem) {
    let indent = if item.is_from_self { "        " } else { "" };
    let tail = if item.needs_tail { "◣" } else { " " };

    println!(
        "{}{} {}: {}",
        indent, tail, item.message.sender_id, item.message.text
    );

    if let Some(metadata) = metadata_line(timeline, item) {
        println!("{}  {}", indent, metadata);
    }

    if item.is_followed_by_other_sender {
        println!();
    }
}

/// The line printed below the last message of a cluster. Messages without a readable timestamp
/// and without a caption have nothing to show.
fn metadata_line<Tz: TimeZone>(timeline: &Timeline<Tz>, item: &MessageItem) -> Option<String> {
    if !item.shows_metadata() {
        return None;
    }

    let mut parts = Vec::new();

    let label = timeline.time_label(&item.delivery.timestamp).to_string();
    if !label.is_empty() {
        parts.push(label);
    }
    if let Some(caption) = item.delivery.caption {
        parts.push(caption.to_string());
    }
    if item.delivery.retry.is_some() {
        parts.push("Retry".to_string());
    }

    (!parts.is_empty()).then(|| parts.join(" · "))
}

fn load_arguments() -> Result<(PathBuf, SenderId)> {
    let (Some(path), Some(local_user)) = (env::args().nth(1), env::args().nth(2)) else {
        bail!("Usage: prose-timeline-cli <messages.json> <local-user-id>");
    };
    Ok((PathBuf::from(path), SenderId::from(local_user)))
}

fn load_config() -> Result<TimelineConfig> {
    let mut config = TimelineConfig::default();

    if let Some(cluster_gap) = load_seconds("TIMELINE_CLUSTER_GAP_SECS")? {
        config.cluster_gap = cluster_gap;
    }
    if let Some(threshold) = load_seconds("TIMELINE_JUST_NOW_SECS")? {
        config.just_now_threshold = threshold;
    }

    Ok(config)
}

fn load_seconds(key: &str) -> Result<Option<Duration>> {
    let Ok(value) = env::var(key) else {
        return Ok(None);
    };
    parse_seconds(key, &value).map(Some)
}

fn parse_seconds(key: &str, value: &str) -> Result<Duration> {
    let seconds = value
        .parse::<i64>()
        .with_context(|| format!("Invalid number of seconds in {}", key))?;
    Duration::try_seconds(seconds)
        .with_context(|| format!("Number of seconds in {} is out of range", key))
}

fn load_log_level() -> Result<Level> {
    let Ok(value) = env::var("TIMELINE_LOG") else {
        return Ok(Level::WARN);
    };
    Level::from_str(&value).with_context(|| format!("Invalid log level '{}'", value))
}
