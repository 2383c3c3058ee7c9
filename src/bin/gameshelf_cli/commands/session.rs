// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Session commands for gameshelf-cli
// ABOUTME: Login, registration, logout, and showing the current user

use crate::helpers::display;
use gameshelf_client::{
    actions::Actions,
    models::{LoginRequest, RegisterRequest},
};

pub async fn login(actions: &Actions, email: String, password: String) -> anyhow::Result<()> {
    actions.login(LoginRequest { email, password }).await?;
    let user = actions.fetch_self_user().await?;
    println!("Logged in as {}", user.username);
    Ok(())
}

pub async fn register(
    actions: &Actions,
    email: String,
    username: String,
    password: String,
) -> anyhow::Result<()> {
    let user = actions
        .register(RegisterRequest {
            email,
            username,
            password,
        })
        .await?;
    println!("Welcome, {}! You are now logged in.", user.username);
    Ok(())
}

pub async fn logout(actions: &Actions) -> anyhow::Result<()> {
    actions.logout().await?;
    println!("Logged out");
    Ok(())
}

pub async fn whoami(actions: &Actions) -> anyhow::Result<()> {
    if !actions.api().is_logged_in().await? {
        println!("Not logged in");
        return Ok(());
    }
    let user = actions.fetch_self_user().await?;
    display::print_user(&user);
    Ok(())
}
