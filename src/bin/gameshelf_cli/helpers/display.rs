// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Output formatting helpers for gameshelf-cli
// ABOUTME: Consistent display of users, entries, catalog games, statistics, and errors

use gameshelf_client::{
    errors::ApiError,
    models::{Game, GameEntry, User, UserStatistics},
};
use std::collections::BTreeMap;
use std::fmt::Display;

const BAR_WIDTH: u32 = 30;

pub fn print_user(user: &User) {
    println!("User {} ({})", user.username, user.id);
    if let Some(email) = &user.email {
        println!("   Email: {email}");
    }
}

fn entry_title(entry: &GameEntry) -> String {
    entry
        .game_name
        .clone()
        .unwrap_or_else(|| format!("game #{}", entry.game_id))
}

pub fn print_entries(entries: &[&GameEntry]) {
    if entries.is_empty() {
        println!("No entries");
        return;
    }
    println!("{:>6}  {:<10}  {:<6}  {}", "ID", "STATUS", "RATING", "GAME");
    for entry in entries {
        println!(
            "{:>6}  {:<10}  {:<6}  {}",
            entry.id,
            entry.status,
            entry
                .rating
                .map_or_else(|| "-".to_owned(), |rating| rating.to_string()),
            entry_title(entry)
        );
    }
    println!("{} entries", entries.len());
}

pub fn print_entry(entry: &GameEntry) {
    println!("   Game: {}", entry_title(entry));
    println!("   Status: {}", entry.status);
    if let Some(rating) = entry.rating {
        println!("   Rating: {rating}");
    }
    if !entry.platforms.is_empty() {
        let platforms: Vec<&str> = entry.platforms.iter().map(String::as_str).collect();
        println!("   Platforms: {}", platforms.join(", "));
    }
    if let Some(review) = &entry.review {
        println!("   Review: {review}");
    }
}

pub fn print_game(game: &Game) {
    println!("{} (#{})", game.name, game.id);
    if let Some(date) = game.release_date {
        println!("   Released: {}", date.format("%Y-%m-%d"));
    }
    if !game.genres.is_empty() {
        println!("   Genres: {}", game.genres.join(", "));
    }
    if !game.platforms.is_empty() {
        println!("   Platforms: {}", game.platforms.join(", "));
    }
}

fn print_distribution<K: Display>(title: &str, series: &[(K, u32)]) {
    println!("\n{title}");
    let max = series.iter().map(|(_, count)| *count).max().unwrap_or(0);
    if max == 0 {
        println!("   (no data)");
        return;
    }
    for (label, count) in series {
        let width = count * BAR_WIDTH / max;
        println!(
            "   {:<14} {:>5}  {}",
            label.to_string(),
            count,
            "#".repeat(width as usize)
        );
    }
}

fn map_series<K: Clone>(map: &BTreeMap<K, u32>) -> Vec<(K, u32)> {
    map.iter().map(|(key, count)| (key.clone(), *count)).collect()
}

pub fn print_statistics(statistics: &UserStatistics) {
    println!("Library: {} entries", statistics.total_entries());
    println!("Average rating: {:.1}", statistics.average_rating);

    print_distribution("By status", &statistics.status_series());
    print_distribution("By genre", &map_series(&statistics.game_genre_distribution));
    print_distribution("By platform", &map_series(&statistics.platform_distribution));
    print_distribution("By year played", &map_series(&statistics.play_year_distribution));
    print_distribution(
        "By release year",
        &map_series(&statistics.release_year_distribution),
    );
}

pub fn print_error(error: &anyhow::Error) {
    match error.downcast_ref::<ApiError>() {
        Some(ApiError::Validation { detail, .. }) if detail.is_object() => {
            eprintln!("Error: the server rejected the request");
            if let Some(fields) = detail.as_object() {
                for (field, problems) in fields {
                    eprintln!("   {field}: {problems}");
                }
            }
        }
        Some(api_error) => eprintln!("Error [{}]: {api_error}", api_error.kind()),
        None => eprintln!("Error: {error:#}"),
    }
}
