// Copyright 2025 the Casement developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Casement Sandbox
// Demo binary: opens a GameWindow, logs the event stream, and wires a few
// interactions.
//
//   Escape  close the window (the first close request is vetoed once)
//   C       center the window on the primary monitor
//   F       toggle fullscreen
//   Tab     cycle cursor modes (normal -> hidden -> disabled)

use anyhow::Result;
use casement_sdk::prelude::*;
use std::time::Duration;

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut platform = GlfwPlatform::init()?;
    log::info!(
        "Found {} monitor(s); primary: {:?}",
        platform.monitors().len(),
        platform.primary_monitor().map(|m| m.name)
    );

    let window = GlfwWindowBuilder::new()
        .with_title("Casement Sandbox")
        .with_size(1024, 768)
        .with_vsync(VsyncMode::On)
        .build(&mut platform)?;
    let mut game = GameWindow::new(window);

    if let Some(primary) = game.primary_monitor() {
        game.center_on(&primary);
    }

    let mut close_vetoed = false;
    while !game.should_close() {
        for event in game.wait_events(Some(Duration::from_millis(100))) {
            handle_event(&mut game, &event, &mut close_vetoed)?;
        }

        let (dx, dy) = game.mouse().delta();
        if game.cursor_mode() == CursorMode::Disabled && (dx, dy) != (0.0, 0.0) {
            log::info!("Virtual cursor delta: ({dx:.1}, {dy:.1})");
        }

        game.swap_buffers();
    }

    log::info!("Window closed. Goodbye!");
    Ok(())
}

fn handle_event(
    game: &mut GlfwGameWindow,
    event: &WindowEvent,
    close_vetoed: &mut bool,
) -> Result<()> {
    match event {
        WindowEvent::CloseRequested if !*close_vetoed => {
            *close_vetoed = true;
            game.cancel_close();
            log::info!("Close request vetoed once; close again to exit.");
        }
        WindowEvent::Input(InputEvent::KeyPressed { key, .. }) => match key {
            Key::Escape => game.close(),
            Key::C => {
                if let Some(primary) = game.primary_monitor() {
                    game.center_on(&primary);
                    log::info!("Centered on '{}': {:?}", primary.name, game.bounds());
                }
            }
            Key::F => {
                game.toggle_fullscreen()?;
                log::info!("Window state: {:?}", game.window_state());
            }
            Key::Tab => {
                let next = match game.cursor_mode() {
                    CursorMode::Normal => CursorMode::Hidden,
                    CursorMode::Hidden => CursorMode::Disabled,
                    CursorMode::Disabled => CursorMode::Normal,
                };
                game.set_cursor_mode(next);
                log::info!("Cursor mode: {next:?}");
            }
            _ => {}
        },
        WindowEvent::Input(input) => log::debug!("{input:?}"),
        _ => log::info!("{event:?}"),
    }
    Ok(())
}
