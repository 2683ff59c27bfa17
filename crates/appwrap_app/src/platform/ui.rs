use appwrap_core::{AppViewModel, Phase};
use appwrap_engine::EmbedView;

const BAR_WIDTH: usize = 40;

/// Renders transient state changes; errors and the success card are printed
/// explicitly by the main loop.
pub fn render(view: &AppViewModel) {
    if let Phase::Processing { .. } = view.phase {
        render_progress(view);
    }
}

fn render_progress(view: &AppViewModel) {
    let filled = usize::from(view.percent) * BAR_WIDTH / 100;
    println!(
        "[{}{}] {:>3}% {}",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        view.percent,
        view.label
    );
}

pub fn render_error(message: &str) {
    println!("Error: {message}");
}

pub fn render_success(view: &AppViewModel) {
    println!();
    println!("Configuration complete!");
    println!("  App name: {}", view.app_name);
    println!("  Website:  {}", view.url);
    if let Some(token) = &view.preview_token {
        println!("  Logo:     {token}");
    }
}

pub fn render_embed(embed: &EmbedView) {
    println!("Preview frame for {} ({}):", embed.title, embed.url);
    println!("  sandbox: {}", embed.sandbox.join(" "));
}
