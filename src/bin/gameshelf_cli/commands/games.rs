// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Catalog commands for gameshelf-cli
// ABOUTME: Shows catalog details for a single game

use crate::helpers::display;
use gameshelf_client::actions::Actions;

pub async fn show(actions: &Actions, id: i64) -> anyhow::Result<()> {
    let game = actions.api().get_game(id).await?;
    display::print_game(&game);
    Ok(())
}
