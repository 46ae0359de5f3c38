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

// Build automation and scripting tasks for the Casement workspace.
// Run with: cargo xtask <command>

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;
use std::time::Instant;

// ANSI color codes
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BLUE: &str = "\x1b[34m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const MAGENTA: &str = "\x1b[35m";

// Visual symbols
const CHECK: &str = "✓";
const CROSS: &str = "✗";
const ROCKET: &str = "🚀";
const HAMMER: &str = "🔨";
const TEST_TUBE: &str = "🧪";
const MAGNIFIER: &str = "🔍";
const BRUSH: &str = "🎨";
const CLIPPY: &str = "📎";

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for the Casement workspace")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build all crates in the workspace
    Build,
    /// Run all tests in the workspace
    Test,
    /// Run `cargo check` on all crates
    Check,
    /// Format all code in the workspace
    Format,
    /// Run clippy on all crates with warnings as errors
    Clippy,
    /// Run the full CI pipeline (build, test, check, format, clippy)
    All,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Task::Build => build(),
        Task::Test => test(),
        Task::Check => check(),
        Task::Format => format(),
        Task::Clippy => clippy(),
        Task::All => all(),
    }
}

fn print_task_start(task_name: &str, emoji: &str, color: &str) {
    println!(
        "\n{}{}━━━ {} {} {}━━━{}",
        BOLD, color, emoji, task_name, emoji, RESET
    );
}

fn print_success(message: &str) {
    println!("{}{} {} {}{}", BOLD, GREEN, CHECK, message, RESET);
}

fn print_error(message: &str) {
    println!("{}{} {} {}{}", BOLD, RED, CROSS, message, RESET);
}

fn run_cargo(args: &[&str], task_name: &str) -> Result<()> {
    let start_time = Instant::now();
    println!(
        "{}{}📋 Command:{} cargo {}",
        BOLD,
        CYAN,
        RESET,
        args.join(" ")
    );

    let status = Command::new("cargo").args(args).status()?;
    let duration = start_time.elapsed();

    if status.success() {
        print_success(&format!(
            "{} completed in {:.2}s",
            task_name,
            duration.as_secs_f64()
        ));
        Ok(())
    } else {
        print_error(&format!(
            "{} failed after {:.2}s",
            task_name,
            duration.as_secs_f64()
        ));
        anyhow::bail!("{} failed with status: {}", task_name, status);
    }
}

fn build() -> Result<()> {
    print_task_start("Building All Crates", HAMMER, BLUE);
    run_cargo(&["build", "--workspace"], "Build")
}

fn test() -> Result<()> {
    print_task_start("Running All Tests", TEST_TUBE, GREEN);
    run_cargo(&["test", "--workspace"], "Tests")
}

fn check() -> Result<()> {
    print_task_start("Checking All Crates", MAGNIFIER, CYAN);
    run_cargo(&["check", "--workspace"], "Check")
}

fn format() -> Result<()> {
    print_task_start("Formatting Code", BRUSH, MAGENTA);
    run_cargo(&["fmt", "--all"], "Format")
}

fn clippy() -> Result<()> {
    print_task_start("Running Clippy", CLIPPY, YELLOW);
    run_cargo(
        &["clippy", "--workspace", "--", "-D", "warnings"],
        "Clippy",
    )
}

fn all() -> Result<()> {
    println!(
        "{}{}{} Starting full build pipeline...{}",
        BOLD, CYAN, ROCKET, RESET
    );
    let start_time = Instant::now();

    build()?;
    test()?;
    check()?;
    format()?;
    clippy()?;

    println!(
        "\n{}{}{} All tasks completed in {:.2}s{}",
        BOLD,
        GREEN,
        CHECK,
        start_time.elapsed().as_secs_f64(),
        RESET
    );
    Ok(())
}
