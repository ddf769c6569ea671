pub mod event;

use dioxus_logger::tracing;
use serenity::all::UserId;
use std::collections::{HashMap, HashSet};

use crate::{model::member::MemberId, state::Context};

/// Resolves display names for the given members.
///
/// Prefers the guild nickname, then the account's display name. Members that
/// cannot be fetched (left the guild, deleted account) are left out so the
/// reply renders them as unknown.
pub async fn resolve_names(
    ctx: Context<'_>,
    members: impl IntoIterator<Item = MemberId>,
) -> HashMap<MemberId, String> {
    let unique: HashSet<MemberId> = members.into_iter().collect();
    let mut names = HashMap::with_capacity(unique.len());

    for member in unique {
        let user_id = UserId::from(member);

        if let Some(guild_id) = ctx.guild_id() {
            if let Ok(guild_member) = guild_id.member(ctx.serenity_context(), user_id).await {
                names.insert(member, guild_member.display_name().to_string());
                continue;
            }
        }

        match user_id.to_user(ctx.serenity_context()).await {
            Ok(user) => {
                names.insert(member, user.display_name().to_string());
            }
            Err(e) => {
                tracing::debug!("Could not resolve member {}: {}", member, e);
            }
        }
    }

    names
}
