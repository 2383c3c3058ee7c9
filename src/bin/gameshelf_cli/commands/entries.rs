// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Game entry commands for gameshelf-cli
// ABOUTME: Lists, adds, updates, and deletes entries through the action handlers

use crate::helpers::display;
use anyhow::{anyhow, bail};
use gameshelf_client::{
    actions::Actions,
    cache::selectors::{self, EntrySort},
    models::{GameEntryQuery, GameEntryStatus, NewGameEntry, Rating},
};

pub struct ListOptions {
    pub page: Option<u32>,
    pub query: Option<String>,
    pub user_id: Option<i64>,
    pub game_id: Option<i64>,
    pub status: Option<GameEntryStatus>,
    pub sort: String,
}

pub struct EntryChanges {
    pub status: Option<GameEntryStatus>,
    pub rating: Option<Rating>,
    pub clear_rating: bool,
    pub platforms: Vec<String>,
    pub review: Option<String>,
}

impl EntryChanges {
    fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.rating.is_none()
            && !self.clear_rating
            && self.platforms.is_empty()
            && self.review.is_none()
    }
}

/// Load the logged-in user's entries into the store and return their id
async fn load_own_entries(actions: &Actions) -> anyhow::Result<i64> {
    let user = actions.fetch_self_user().await?;
    actions
        .fetch_game_entries(GameEntryQuery::for_user(user.id))
        .await?;
    Ok(user.id)
}

pub async fn list(actions: &Actions, options: ListOptions) -> anyhow::Result<()> {
    let sort = EntrySort::from_name(&options.sort)
        .ok_or_else(|| anyhow!("unknown sort '{}'", options.sort))?;

    let mut query = GameEntryQuery {
        page: options.page,
        query: options.query,
        user_id: options.user_id,
        game_id: options.game_id,
    };
    if query.user_id.is_none() && query.game_id.is_none() {
        query.user_id = Some(actions.fetch_self_user().await?.id);
    }
    actions.fetch_game_entries(query).await?;

    let snapshot = actions.store().snapshot();
    let entries: Vec<_> = selectors::select_sorted(&snapshot.entries, sort)
        .into_iter()
        .filter(|entry| options.status.map_or(true, |status| entry.status == status))
        .collect();
    display::print_entries(&entries);
    Ok(())
}

pub async fn add(
    actions: &Actions,
    game_id: i64,
    status: GameEntryStatus,
    rating: Option<Rating>,
    platforms: Vec<String>,
    review: Option<String>,
) -> anyhow::Result<()> {
    let user_id = load_own_entries(actions).await?;
    let snapshot = actions.store().snapshot();
    if let Some(existing) = selectors::select_user_entry_for_game(&snapshot.entries, user_id, game_id)
    {
        bail!(
            "game {game_id} is already in your library as entry {}",
            existing.id
        );
    }

    let mut entry = NewGameEntry::new(game_id, user_id, status);
    entry.rating = rating;
    entry.platforms = platforms.into_iter().collect();
    entry.review = review;

    let created = actions.create_game_entry(entry).await?;
    println!("Added entry {}", created.id);
    display::print_entry(&created);
    Ok(())
}

pub async fn update(actions: &Actions, id: i64, changes: EntryChanges) -> anyhow::Result<()> {
    if changes.is_empty() {
        bail!("nothing to change; pass at least one of --status, --rating, --platform, --review");
    }

    load_own_entries(actions).await?;
    let mut entry = actions
        .store()
        .select(|snapshot| selectors::select_entry(&snapshot.entries, id).cloned())
        .ok_or_else(|| anyhow!("entry {id} is not in your library"))?;

    if let Some(status) = changes.status {
        entry.status = status;
    }
    if changes.clear_rating {
        entry.rating = None;
    } else if changes.rating.is_some() {
        entry.rating = changes.rating;
    }
    if !changes.platforms.is_empty() {
        let game = actions.api().get_game(entry.game_id).await?;
        if let Some(unknown) = changes
            .platforms
            .iter()
            .find(|platform| !game.platforms.contains(*platform))
        {
            bail!(
                "{} was not released on {unknown}; available: {}",
                game.name,
                game.platforms.join(", ")
            );
        }
        entry.platforms = changes.platforms.into_iter().collect();
    }
    if changes.review.is_some() {
        entry.review = changes.review;
    }

    let updated = actions.update_game_entry(entry).await?;
    println!("Updated entry {}", updated.id);
    display::print_entry(&updated);
    Ok(())
}

pub async fn delete(actions: &Actions, id: i64) -> anyhow::Result<()> {
    actions.delete_game_entry(id).await?;
    println!("Deleted entry {id}");
    Ok(())
}
