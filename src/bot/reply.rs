//! User-facing wording and embeds for the `/event` commands.
//!
//! Everything here is pure formatting. Member names are resolved by the
//! command handlers and passed in, so a member who left the guild or cannot be
//! fetched simply has no entry and renders as `Unknown User (<id>)`.

use chrono::{DateTime, Utc};
use serenity::all::{CreateEmbed, CreateEmbedFooter, User};
use std::collections::HashMap;

use crate::{
    error::{ledger::LedgerError, AppError},
    model::{
        catalog::EventCatalog,
        event::{HostedEvent, StartedEvent},
        member::MemberId,
        record::{KickedParticipant, LeaderboardEntry, ParticipationRecord, ResetOutcome, StoppedEvent},
    },
};

/// Embed colors used across replies.
pub struct Colors;

impl Colors {
    pub const PARTICIPANTS: u32 = 0x3498DB;
    pub const RECORDS: u32 = 0xE67E22;
    pub const LEADERBOARD: u32 = 0xF1C40F;
    pub const CATALOG: u32 = 0x2ECC71;
}

/// Discord rejects embeds with more fields than this.
const MAX_EMBED_FIELDS: usize = 25;

/// Discord limits on embed text, counted in characters.
const MAX_TITLE: usize = 256;
const MAX_FIELD_NAME: usize = 256;
const MAX_FIELD_VALUE: usize = 1024;
const MAX_EMBED_TOTAL: usize = 6000;

/// Characters kept free for a footer added after the fields.
const FOOTER_RESERVE: usize = 64;

/// Lines listed per member in the records embed before truncating.
const MAX_RECORD_LINES: usize = 10;

/// Rows shown on the leaderboard.
pub const LEADERBOARD_SIZE: usize = 10;

const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

pub const NO_PERMISSION: &str = "You do not have permission to use this command.";
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred.";

/// Short message for an expected ledger rejection.
pub fn ledger_error_message(error: &LedgerError) -> String {
    match error {
        LedgerError::AlreadyHosting { code, .. } => format!(
            "You are already hosting an event (code **{}**). Use `/event stop` to end it first.",
            code
        ),
        LedgerError::UnknownEventType(event_id) => format!(
            "Event ID `{}` is not configured. Use `/event id` to see the available events.",
            event_id
        ),
        LedgerError::InvalidCode(code) => format!("`{}` is not an active event code.", code),
        LedgerError::AlreadyJoined { .. } => "You have already joined this event.".to_string(),
        LedgerError::NotHosting(_) => "You are not hosting an event.".to_string(),
        LedgerError::TargetNotParticipant { target, .. } => {
            format!("<@{}> is not in your event.", target)
        }
        LedgerError::CannotKickSelf(_) => {
            "You cannot kick yourself. Use `/event stop` to end your event.".to_string()
        }
        LedgerError::CodeSpaceExhausted { .. } => {
            "No event code is free right now. Please try again later.".to_string()
        }
    }
}

/// Message shown to the member when a command fails.
pub fn error_message(error: &AppError) -> String {
    match error {
        AppError::LedgerErr(e) => ledger_error_message(e),
        AppError::PersistenceErr(_) => {
            "Event data could not be saved, nothing was changed. Please try again later."
                .to_string()
        }
        _ => UNEXPECTED_ERROR.to_string(),
    }
}

/// Name of a member, or the fallback used for members that cannot be resolved.
pub fn display_name(names: &HashMap<MemberId, String>, member: MemberId) -> String {
    names
        .get(&member)
        .cloned()
        .unwrap_or_else(|| format!("Unknown User ({})", member))
}

/// Elapsed time as `Xh Ym`, never negative.
pub fn format_elapsed(since: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - since).num_minutes().max(0);
    format!("{}h {}m", minutes / 60, minutes % 60)
}

pub fn started_message(started: &StartedEvent) -> String {
    format!(
        "Event **{}** started! Members can join with the code: **{}**",
        started.event_type, started.join_code
    )
}

/// Public announcement posted in the channel where an event starts.
///
/// The join code is left out so the host controls who joins.
pub fn started_announcement(host_name: &str, started: &StartedEvent) -> String {
    format!(
        "🎉 **{}** has started the event **{}**! Join with the code provided by the host.",
        host_name, started.event_type
    )
}

pub fn stopped_message(stopped: &StoppedEvent) -> String {
    format!(
        "Event **{}** has been stopped. Points were calculated and stored for {} participant{}.",
        stopped.event_type,
        stopped.finalized_count(),
        if stopped.finalized_count() == 1 { "" } else { "s" }
    )
}

pub fn kicked_message(target: &User, kicked: &KickedParticipant) -> String {
    format!(
        "You have kicked **{}**. They have been awarded {:.2} points for their participation.",
        target.display_name(),
        kicked.points_awarded()
    )
}

pub fn reset_message(outcome: &ResetOutcome) -> String {
    let mut message = format!(
        "All event data has been reset. Cleared {} active events and {} records.",
        outcome.cleared_events, outcome.cleared_records
    );
    if let Some(archive) = &outcome.archive {
        message.push_str(&format!("\nBackup saved to `{}`.", archive.display()));
    }
    message
}

/// Participants of the host's running event with how long each has been in.
pub fn participants_embed(
    hosted: &HostedEvent,
    names: &HashMap<MemberId, String>,
    now: DateTime<Utc>,
) -> CreateEmbed {
    let lines: Vec<String> = hosted
        .participants
        .iter()
        .map(|participant| {
            format!(
                "• {} (joined for {})",
                display_name(names, participant.member_id),
                format_elapsed(participant.join_time, now)
            )
        })
        .collect();

    CreateEmbed::new()
        .title(clip(
            &format!("Participants in '{}'", hosted.event_type),
            MAX_TITLE,
        ))
        .description(format!("Event Code: **{}**", hosted.join_code))
        .color(Colors::PARTICIPANTS)
        .field(
            "Current Participants",
            fit_lines(&lines, usize::MAX),
            false,
        )
}

/// One member's own history and total.
pub fn member_records_embed(
    name: &str,
    total_points: f64,
    records: &[ParticipationRecord],
) -> CreateEmbed {
    let title = format!("{}'s Activity Points", name);
    let description = "A summary of your event participation.";
    let total = format!("**{:.2}**", total_points);
    let mut used = char_len(&title) + char_len(description) + char_len(&total) + FOOTER_RESERVE;

    let mut embed = CreateEmbed::new()
        .title(title)
        .description(description)
        .color(Colors::RECORDS)
        .field("🏆 Total Points", total, false);

    let mut shown = 0;
    for record in records.iter().take(MAX_EMBED_FIELDS - 1) {
        let field_name = clip(&record.event_type, MAX_FIELD_NAME);
        let value = format!(
            "{:.2} pts, {:.2} min\n<t:{}:d>",
            record.points_earned,
            record.duration_minutes,
            record.start_time.timestamp()
        );
        if !fits(&mut used, &field_name, &value) {
            break;
        }
        embed = embed.field(field_name, value, true);
        shown += 1;
    }

    if shown < records.len() {
        embed = embed.footer(CreateEmbedFooter::new(format!(
            "Showing the latest {} of {} records",
            shown,
            records.len()
        )));
    }

    embed
}

/// Records grouped per member, members in order of their newest record.
pub fn records_embed(
    records: &[ParticipationRecord],
    names: &HashMap<MemberId, String>,
) -> CreateEmbed {
    let grouped = group_by_member(records);
    let title = "Member Activity Records";
    let mut used = char_len(title) + FOOTER_RESERVE;

    let mut embed = CreateEmbed::new().title(title).color(Colors::RECORDS);

    let mut shown = 0;
    for (member, member_records) in grouped.iter().take(MAX_EMBED_FIELDS) {
        let lines: Vec<String> = member_records
            .iter()
            .map(|record| format!("- {}: {:.2} pts", record.event_type, record.points_earned))
            .collect();
        let field_name = clip(&format!("👤 {}", display_name(names, *member)), MAX_FIELD_NAME);
        let value = fit_lines(&lines, MAX_RECORD_LINES);
        if !fits(&mut used, &field_name, &value) {
            break;
        }
        embed = embed.field(field_name, value, false);
        shown += 1;
    }

    if shown < grouped.len() {
        embed = embed.footer(CreateEmbedFooter::new(format!(
            "Showing {} of {} members",
            shown,
            grouped.len()
        )));
    }

    embed
}

/// Members whose records can appear in [`records_embed`], in display order.
///
/// Only these need their names resolved.
pub fn records_members(records: &[ParticipationRecord]) -> Vec<MemberId> {
    group_by_member(records)
        .into_iter()
        .take(MAX_EMBED_FIELDS)
        .map(|(member, _)| member)
        .collect()
}

/// Whether any member has earned points yet.
pub fn has_awarded_points(entries: &[LeaderboardEntry]) -> bool {
    entries.iter().any(|entry| entry.total_points > 0.0)
}

/// Top of the leaderboard with medals for the first three places.
pub fn leaderboard_embed(
    entries: &[LeaderboardEntry],
    names: &HashMap<MemberId, String>,
) -> CreateEmbed {
    let lines: Vec<String> = entries
        .iter()
        .take(LEADERBOARD_SIZE)
        .enumerate()
        .map(|(position, entry)| {
            let prefix = MEDALS
                .get(position)
                .map(|medal| medal.to_string())
                .unwrap_or_else(|| format!("**#{}**", position + 1));
            format!(
                "{} {}: **{:.2} points**",
                prefix,
                display_name(names, entry.user_id),
                entry.total_points
            )
        })
        .collect();

    CreateEmbed::new()
        .title("🏆 Event Points Leaderboard 🏆")
        .description(lines.join("\n"))
        .color(Colors::LEADERBOARD)
}

/// Configured event types in catalog order.
pub fn catalog_embed(catalog: &EventCatalog) -> CreateEmbed {
    let title = "Available Event IDs";
    let description = "Start one with `/event start <event_id>`.";
    let mut used = char_len(title) + char_len(description) + FOOTER_RESERVE;

    let mut embed = CreateEmbed::new()
        .title(title)
        .description(description)
        .color(Colors::CATALOG);

    let mut shown = 0;
    for entry in catalog.iter().take(MAX_EMBED_FIELDS) {
        let field_name = clip(&format!("ID: {}", entry.event_id), MAX_FIELD_NAME);
        let value = clip(
            &format!(
                "Type: {}\nRate: {} points per minute",
                entry.event_type, entry.points_per_minute
            ),
            MAX_FIELD_VALUE,
        );
        if !fits(&mut used, &field_name, &value) {
            break;
        }
        embed = embed.field(field_name, value, false);
        shown += 1;
    }

    if shown < catalog.len() {
        embed = embed.footer(CreateEmbedFooter::new(format!(
            "Showing {} of {} event types",
            shown,
            catalog.len()
        )));
    }

    embed
}

/// Groups records by member, keeping the order members first appear in.
fn group_by_member(records: &[ParticipationRecord]) -> Vec<(MemberId, Vec<&ParticipationRecord>)> {
    let mut position: HashMap<MemberId, usize> = HashMap::new();
    let mut grouped: Vec<(MemberId, Vec<&ParticipationRecord>)> = Vec::new();

    for record in records {
        match position.get(&record.user_id) {
            Some(&index) => grouped[index].1.push(record),
            None => {
                position.insert(record.user_id, grouped.len());
                grouped.push((record.user_id, vec![record]));
            }
        }
    }

    grouped
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` characters, marking the cut with `…`.
fn clip(text: &str, max: usize) -> String {
    if char_len(text) <= max {
        return text.to_string();
    }

    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Adds a field's size to the running embed total if it stays under the limit.
fn fits(used: &mut usize, name: &str, value: &str) -> bool {
    let size = char_len(name) + char_len(value);
    if *used + size > MAX_EMBED_TOTAL {
        return false;
    }
    *used += size;
    true
}

/// Joins lines for an embed field value.
///
/// Stops after `max_lines` lines or before the value would pass the field
/// limit, then counts the lines left out.
fn fit_lines(lines: &[String], max_lines: usize) -> String {
    let joined = lines.join("\n");
    if lines.len() <= max_lines && char_len(&joined) <= MAX_FIELD_VALUE {
        return joined;
    }

    let budget = MAX_FIELD_VALUE - char_len(&format!("\n…and {} more", lines.len()));
    let mut shown = String::new();
    let mut count = 0;

    for line in lines.iter().take(max_lines) {
        let line = clip(line, budget);
        let separator = usize::from(count > 0);
        if char_len(&shown) + separator + char_len(&line) > budget {
            break;
        }
        if count > 0 {
            shown.push('\n');
        }
        shown.push_str(&line);
        count += 1;
    }

    shown.push_str(&format!("\n…and {} more", lines.len() - count));
    shown
}
