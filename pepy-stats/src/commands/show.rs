use crate::dashboard::{Dashboard, View};
use crate::proxy_client::ProxyClient;
use crate::render::print_view;
use crate::types::Result;
use crate::utils::*;
use colored::*;

/// Fetch and print download stats for a single package
pub async fn handle_show(proxy_url: &str, package: String) -> Result<()> {
    let package = package.trim();
    if package.is_empty() {
        return Err("Package name is required".into());
    }

    println!("\n{}", "📊 Fetching Download Statistics".cyan().bold());
    let client = ProxyClient::new(proxy_url);
    let mut dashboard = Dashboard::new(package);

    let request = dashboard.mount();
    let spinner = create_spinner(&format!("Loading stats for {}...", package));
    dashboard.fetch(&client, request).await;
    spinner.finish_and_clear();

    match dashboard.view() {
        View::Failed(message) => Err(message.into()),
        view => {
            print_view(&view);
            Ok(())
        }
    }
}
