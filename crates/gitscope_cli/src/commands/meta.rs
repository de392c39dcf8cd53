use std::io::Write;
use std::path::PathBuf;

use clap::CommandFactory;

use crate::Cli;

const BIN_NAME: &str = "gitscope";

fn render_completions(shell: clap_complete::Shell) -> Vec<u8> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, BIN_NAME, &mut buf);
    buf
}

fn render_man_page() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let mut buf = Vec::new();
    clap_mangen::Man::new(Cli::command()).render(&mut buf)?;
    Ok(buf)
}

pub(crate) fn handle_completions(
    shell: clap_complete::Shell,
) -> Result<(), Box<dyn std::error::Error>> {
    std::io::stdout().write_all(&render_completions(shell))?;
    Ok(())
}

/// Render man pages: all pages into a directory when `--output` is given,
/// otherwise the main page to stdout.
pub(crate) fn handle_man(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(dir) = output {
        std::fs::create_dir_all(&dir)?;
        clap_mangen::generate_to(Cli::command(), &dir)?;
        println!("Wrote man pages to {}", dir.display());
    } else {
        std::io::stdout().write_all(&render_man_page()?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;

    #[test]
    fn bash_completions_mention_every_subcommand() {
        let script = String::from_utf8(render_completions(clap_complete::Shell::Bash))
            .expect("completion output should be UTF-8");
        for sub in ["repos", "commits", "show", "favorites", "auth"] {
            assert!(script.contains(sub), "missing completion entry for {sub}");
        }
    }

    #[test]
    fn man_page_has_title_header() {
        let page = render_man_page().expect("man rendering should succeed");
        let page = String::from_utf8(page).expect("man output should be UTF-8");
        assert!(page.to_lowercase().contains(".th gitscope"));
    }

    #[test]
    fn handle_man_generates_one_page_per_command() {
        let nonce = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock should be after epoch")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("gitscope-man-{nonce}"));

        handle_man(Some(dir.clone())).expect("man page generation should succeed");

        let pages = std::fs::read_dir(&dir)
            .expect("output directory should exist")
            .count();
        assert!(pages > 1, "expected pages for the main command and subcommands");

        std::fs::remove_dir_all(&dir).expect("test output directory should be removable");
    }
}
