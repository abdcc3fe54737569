//! Shell completion and man page generation for the `jl` binary.
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Write shell completions for `cmd` to `writer`.
pub fn generate_completions<W: Write>(
    shell: clap_complete::Shell,
    cmd: &mut clap::Command,
    writer: &mut W,
) {
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, cmd, name, writer);
}

/// Generate man pages to the output directory if specified, else the current
/// directory. Returns the paths written, top-level page first.
///
/// # Errors
///
/// Returns an [`anyhow::Error`] if the output directory or a page file could
/// not be created.
pub fn generate_man_pages(
    cmd: &clap::Command,
    output_dir: Option<PathBuf>,
) -> Result<Vec<PathBuf>> {
    let output_dir = match output_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Opening current directory")?,
    };
    std::fs::create_dir_all(&output_dir)
        .context("create output Man directories")?;

    let mut written = Vec::new();
    render_page(cmd.clone(), &output_dir, cmd.get_name(), &mut written)?;
    render_subcommand_pages(cmd, &output_dir, cmd.get_name(), &mut written)?;
    Ok(written)
}

/// Render one page named `<name>.1` into `output_dir`.
fn render_page(
    cmd: clap::Command,
    output_dir: &Path,
    name: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    let path = output_dir.join(format!("{name}.1"));
    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    clap_mangen::Man::new(cmd).render(&mut file)?;
    log::info!("generated {}", path.display());
    written.push(path);
    Ok(())
}

/// Render pages for every subcommand, named `<prefix>-<subcommand>`.
fn render_subcommand_pages(
    cmd: &clap::Command,
    output_dir: &Path,
    prefix: &str,
    written: &mut Vec<PathBuf>,
) -> Result<()> {
    for subcmd in cmd.get_subcommands() {
        let prefixed_name = format!("{prefix}-{}", subcmd.get_name());
        // clap_mangen reads the name from the Command itself, so it has to
        // be renamed; the leak is bounded by the subcommand count.
        let leaked_name: &'static str =
            Box::leak(prefixed_name.clone().into_boxed_str());
        let renamed = subcmd
            .clone()
            .name(leaked_name)
            .disable_help_subcommand(true);
        render_page(renamed, output_dir, &prefixed_name, written)?;

        if subcmd.has_subcommands() {
            render_subcommand_pages(
                subcmd,
                output_dir,
                &prefixed_name,
                written,
            )?;
        }
    }
    Ok(())
}
