use crate::dashboard::{Dashboard, FetchRequest, DEFAULT_PACKAGE};
use crate::proxy_client::ProxyClient;
use crate::render::print_view;
use crate::types::Result;
use crate::utils::*;
use colored::*;
use std::io::{BufRead, Write};

const QUIT_COMMAND: &str = ":q";

/// Interactive dashboard: each line read from stdin is submitted as a package name
pub async fn handle_browse(proxy_url: &str) -> Result<()> {
    let client = ProxyClient::new(proxy_url);
    let mut dashboard = Dashboard::new(DEFAULT_PACKAGE);

    println!("\n{}", "📊 PyPI Download Stats Viewer".cyan().bold());
    print_info(&format!("Proxy: {}", proxy_url));
    print_info(&format!("Type a package name and press Enter, {} to quit", QUIT_COMMAND));

    let request = dashboard.mount();
    run_fetch(&mut dashboard, &client, request).await;

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("\n{} ", "package>".cyan().bold());
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if line.trim() == QUIT_COMMAND {
            break;
        }

        dashboard.set_input(&line);
        match dashboard.submit() {
            Some(request) => run_fetch(&mut dashboard, &client, request).await,
            None if dashboard.input().trim().is_empty() => print_warning("Enter a package name"),
            None => print_info(&format!("Already showing {}", dashboard.query())),
        }
    }

    print_success("Bye!");
    Ok(())
}

async fn run_fetch(dashboard: &mut Dashboard, client: &ProxyClient, request: FetchRequest) {
    let spinner = create_spinner(&format!("Loading stats for {}...", request.package));
    dashboard.fetch(client, request).await;
    spinner.finish_and_clear();
    print_view(&dashboard.view());
}
