use dioxus_logger::tracing;
use poise::{CreateReply, FrameworkError};
use serenity::all::{Client, ClientBuilder, GatewayIntents};

use crate::{
    bot::{commands, handler, reply},
    config::Config,
    error::AppError,
    service::event::EventService,
    state::AppState,
};

/// Builds the Discord client with the `/event` commands installed.
///
/// # Arguments
/// - `config` - Application configuration holding the token and guild id
/// - `events` - Event service handed to every command
///
/// # Returns
/// - `Ok(Client)` - Client ready to start
/// - `Err(AppError)` - Client could not be built
pub async fn init_bot(config: &Config, events: EventService) -> Result<Client, AppError> {
    let intents = GatewayIntents::non_privileged();
    let guild_id = config.discord_guild_id;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![commands::event::event()],
            on_error: |error| Box::pin(on_error(error)),
            pre_command: |ctx| {
                Box::pin(async move {
                    tracing::debug!(
                        "Member {} invoked /{}",
                        ctx.author().id,
                        ctx.command().qualified_name
                    );
                })
            },
            post_command: |ctx| {
                Box::pin(async move {
                    tracing::debug!("Finished /{}", ctx.command().qualified_name);
                })
            },
            event_handler: |ctx, event, framework, data| {
                Box::pin(handler::event_handler(ctx, event, framework, data))
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            Box::pin(async move {
                match guild_id {
                    Some(guild_id) => {
                        poise::builtins::register_in_guild(
                            ctx,
                            &framework.options().commands,
                            guild_id,
                        )
                        .await?;
                        tracing::info!("Registered slash commands in guild {}", guild_id);
                    }
                    None => {
                        poise::builtins::register_globally(ctx, &framework.options().commands)
                            .await?;
                        tracing::info!("Registered slash commands globally");
                    }
                }

                Ok(AppState::new(events))
            })
        })
        .build();

    let client = ClientBuilder::new(&config.discord_token, intents)
        .framework(framework)
        .await?;

    Ok(client)
}

/// Runs the client until its shards shut down.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}

/// Answers failed commands.
///
/// Ledger rejections are expected and only logged at debug; anything else is
/// logged in full while the member sees a generic message.
async fn on_error(error: FrameworkError<'_, AppState, AppError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            match &error {
                AppError::LedgerErr(e) => {
                    tracing::debug!("/{} rejected: {}", ctx.command().qualified_name, e)
                }
                e => tracing::error!("Error in /{}: {}", ctx.command().qualified_name, e),
            }

            let reply = CreateReply::default()
                .content(reply::error_message(&error))
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to send error reply: {}", e);
            }
        }
        FrameworkError::MissingUserPermissions { ctx, .. } => {
            tracing::info!(
                "Member {} lacks permissions for /{}",
                ctx.author().id,
                ctx.command().qualified_name
            );

            let reply = CreateReply::default()
                .content(reply::NO_PERMISSION)
                .ephemeral(true);
            if let Err(e) = ctx.send(reply).await {
                tracing::error!("Failed to send permission reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling error: {}", e);
            }
        }
    }
}
