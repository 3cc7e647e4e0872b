//! Implementation of `facet init`.

use std::{fs, path::PathBuf, process::ExitCode};

use facet_config::{
    CONFIG_FILENAME, ConfigError, global_config_path, global_template, local_template,
};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a commented-out `.facet.toml` template.
///
/// Running in the home directory writes the global template even without `--global`.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> ExitCode {
    let (path, global) = match target(ctx, cmd) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if path.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    let template = if global {
        global_template()
    } else {
        local_template()
    };
    if let Err(e) = fs::write(&path, template) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    ExitCode::SUCCESS
}

/// Where to write, and whether that is the global config.
fn target(ctx: &CommandContext, cmd: &InitCommand) -> Result<(PathBuf, bool), ConfigError> {
    let global = global_config_path();
    let in_home = global
        .as_deref()
        .and_then(|p| p.parent())
        .is_some_and(|home| home == ctx.cwd);

    if cmd.global || in_home {
        let path = global.ok_or(ConfigError::NoHomeDirectory)?;
        Ok((path, true))
    } else {
        Ok((ctx.cwd.join(CONFIG_FILENAME), false))
    }
}
