//! The `/event` slash command group.
//!
//! Each subcommand is a thin adapter: it converts Discord identities into
//! `MemberId`s, calls the event service and formats the outcome through
//! [`crate::bot::reply`]. Ledger rejections are returned as errors and turned
//! into ephemeral replies by the framework error handler.
//!
//! Every subcommand defers before doing any work, since name lookups go over
//! HTTP and can outlast the interaction's initial response window.

use chrono::Utc;
use dioxus_logger::tracing;
use poise::CreateReply;
use serenity::all::User;

use crate::{
    bot::{commands::resolve_names, reply},
    error::AppError,
    model::member::MemberId,
    state::Context,
};

/// Commands for managing event activity points.
#[poise::command(
    slash_command,
    guild_only,
    subcommands(
        "start", "join", "stop", "kick", "list", "me", "records", "id", "summary", "reset"
    ),
    subcommand_required
)]
pub async fn event(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

async fn say_ephemeral(ctx: Context<'_>, content: impl Into<String>) -> Result<(), AppError> {
    ctx.send(CreateReply::default().content(content).ephemeral(true))
        .await?;
    Ok(())
}

/// Starts an event and generates an event code.
#[poise::command(slash_command, guild_only)]
pub async fn start(
    ctx: Context<'_>,
    #[description = "Event ID from /event id"] event_id: String,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let creator = MemberId::from(ctx.author().id);
    let started = ctx.data().events.start(creator, &event_id).await?;

    say_ephemeral(ctx, reply::started_message(&started)).await?;

    let host_name = match ctx.author_member().await {
        Some(member) => member.display_name().to_string(),
        None => ctx.author().display_name().to_string(),
    };
    if let Err(e) = ctx
        .channel_id()
        .say(
            ctx.serenity_context(),
            reply::started_announcement(&host_name, &started),
        )
        .await
    {
        tracing::warn!(
            "Failed to announce event {} in channel {}: {}",
            started.join_code,
            ctx.channel_id(),
            e
        );
    }

    Ok(())
}

/// Join an active event using the event code.
#[poise::command(slash_command, guild_only)]
pub async fn join(
    ctx: Context<'_>,
    #[description = "Code shared by the host"] code: String,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let participant = MemberId::from(ctx.author().id);
    let joined = ctx.data().events.join(participant, &code).await?;

    say_ephemeral(
        ctx,
        format!(
            "You have successfully joined the event **{}**.",
            joined.event_type
        ),
    )
    .await
}

/// Stops the event you are hosting and awards points.
#[poise::command(slash_command, guild_only)]
pub async fn stop(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let creator = MemberId::from(ctx.author().id);
    let stopped = ctx.data().events.stop(creator).await?;

    ctx.say(reply::stopped_message(&stopped)).await?;

    Ok(())
}

/// Kicks a participant from your event.
#[poise::command(slash_command, guild_only)]
pub async fn kick(
    ctx: Context<'_>,
    #[description = "Participant to remove"] member: User,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let creator = MemberId::from(ctx.author().id);
    let kicked = ctx
        .data()
        .events
        .kick(creator, MemberId::from(member.id))
        .await?;

    say_ephemeral(ctx, reply::kicked_message(&member, &kicked)).await
}

/// Lists participants in your current event.
#[poise::command(slash_command, guild_only)]
pub async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let creator = MemberId::from(ctx.author().id);
    let hosted = ctx.data().events.list_participants(creator).await?;

    let names = resolve_names(ctx, hosted.participants.iter().map(|p| p.member_id)).await;
    let embed = reply::participants_embed(&hosted, &names, Utc::now());

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Shows your own event records and total points.
#[poise::command(slash_command, guild_only)]
pub async fn me(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let member = MemberId::from(ctx.author().id);
    let records = ctx.data().events.records(Some(member)).await;

    if records.is_empty() {
        return say_ephemeral(ctx, "You have no event records yet.").await;
    }

    let total = ctx.data().events.member_total(member).await;
    let name = match ctx.author_member().await {
        Some(author) => author.display_name().to_string(),
        None => ctx.author().display_name().to_string(),
    };
    let embed = reply::member_records_embed(&name, total, &records);

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Displays activity point records for all members or one member (Admin only).
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn records(
    ctx: Context<'_>,
    #[description = "Only show this member"] member: Option<User>,
) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let filter = member.as_ref().map(|user| MemberId::from(user.id));
    let records = ctx.data().events.records(filter).await;

    if records.is_empty() {
        return say_ephemeral(ctx, "There are no event records yet.").await;
    }

    let names = resolve_names(ctx, reply::records_members(&records)).await;
    let embed = reply::records_embed(&records, &names);

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Lists all available event IDs and their types.
#[poise::command(slash_command, guild_only)]
pub async fn id(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    let embed = reply::catalog_embed(ctx.data().events.catalog());

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}

/// Shows a leaderboard of total points.
#[poise::command(slash_command, guild_only)]
pub async fn summary(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer().await?;

    let entries = ctx.data().events.summary().await;

    if entries.is_empty() {
        return say_ephemeral(ctx, "There are no event records to summarize.").await;
    }
    if !reply::has_awarded_points(&entries) {
        return say_ephemeral(ctx, "No points have been awarded yet.").await;
    }

    let names = resolve_names(
        ctx,
        entries
            .iter()
            .take(reply::LEADERBOARD_SIZE)
            .map(|entry| entry.user_id),
    )
    .await;
    let embed = reply::leaderboard_embed(&entries, &names);

    ctx.send(CreateReply::default().embed(embed)).await?;

    Ok(())
}

/// Clears all event data (Admin only).
#[poise::command(slash_command, guild_only, required_permissions = "ADMINISTRATOR")]
pub async fn reset(ctx: Context<'_>) -> Result<(), AppError> {
    ctx.defer_ephemeral().await?;

    tracing::info!("Member {} requested a reset", ctx.author().id);

    let outcome = ctx.data().events.reset().await?;

    say_ephemeral(ctx, reply::reset_message(&outcome)).await
}
