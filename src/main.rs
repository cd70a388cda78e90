//! Gridsheet - command-line tool that packs a folder of images into a grid spritesheet

use std::process::ExitCode;

use gridsheet::cli;

fn main() -> ExitCode {
    cli::run()
}
