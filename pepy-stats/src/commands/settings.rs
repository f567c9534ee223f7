use crate::config::Config;
use crate::types::Result;
use crate::utils::*;
use colored::*;

pub async fn handle_show() -> Result<()> {
    let config = Config::load()?;

    println!("\n{}", "⚙️  Current Configuration".cyan().bold());
    println!("  Proxy URL: {}", config.proxy_url.yellow());
    println!("  Config File: {}", Config::config_dir()?.join("config.toml").display());

    Ok(())
}

pub async fn handle_set_proxy(url: String) -> Result<()> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(format!("Proxy URL must start with http:// or https://, got {}", url).into());
    }

    let mut config = Config::load()?;
    config.proxy_url = url.to_string();
    let path = config.save()?;

    print_success(&format!("Proxy URL set to {}", url.cyan()));
    print_info(&format!("Saved to {}", path.display()));
    Ok(())
}
