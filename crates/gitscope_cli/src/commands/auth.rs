//! `gitscope auth` - persist a GitHub token to the config file.

use console::style;

use crate::config::Config;

pub(crate) fn handle_auth(token: &str) -> Result<(), Box<dyn std::error::Error>> {
    let token = token.trim();
    if token.is_empty() {
        return Err("token must not be empty".into());
    }

    let path = Config::save_github_token(token)?;
    println!(
        "{} token saved to {}",
        style("✓").green(),
        path.display()
    );
    println!("Authenticated requests get a much higher rate limit.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_rejected_before_touching_the_config() {
        let err = handle_auth("   ").expect_err("blank token should error");
        assert!(err.to_string().contains("empty"));
    }
}
