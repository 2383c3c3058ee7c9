// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GameShelf Contributors
// ABOUTME: Re-exports helper modules for gameshelf-cli
// ABOUTME: Provides display formatting utilities

pub mod display;
