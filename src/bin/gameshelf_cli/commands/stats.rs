// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Statistics command for gameshelf-cli
// ABOUTME: Fetches the user's statistics into the store and prints every distribution

use crate::helpers::display;
use gameshelf_client::actions::Actions;

pub async fn show(actions: &Actions) -> anyhow::Result<()> {
    let statistics = actions.fetch_self_statistics().await?;
    display::print_statistics(&statistics);
    Ok(())
}
