use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::mpsc;
use std::time::Duration;

use appwrap_core::{update, AppState, LogoFile, Msg, Phase, Variant};
use appwrap_engine::RunOutput;
use wrap_logging::{wrap_info, wrap_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui;

pub fn run_app() -> io::Result<()> {
    logging::initialize(LogDestination::File);

    let variant = if std::env::args().any(|arg| arg == "--preview") {
        Variant::LivePreview
    } else {
        Variant::Download
    };
    wrap_info!("starting appwrap ({:?} variant)", variant);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let mut runner = EffectRunner::new(variant, msg_tx);
    let mut state = AppState::new(variant);

    println!("AppWrap: turn a website into a mobile app (demo)");
    loop {
        let Some(app_name) = prompt(&mut input, "App name: ")? else {
            break;
        };
        let Some(url) = prompt(&mut input, "Website URL: ")? else {
            break;
        };
        let Some(logo_path) = prompt(&mut input, "Logo file (optional, blank to skip): ")? else {
            break;
        };

        dispatch(&mut state, &mut runner, Msg::AppNameChanged(app_name));
        dispatch(&mut state, &mut runner, Msg::UrlChanged(url));
        if !logo_path.is_empty() {
            let logo = load_logo(Path::new(&logo_path));
            dispatch(&mut state, &mut runner, Msg::LogoSelected(logo));
        }
        dispatch(&mut state, &mut runner, Msg::GenerateClicked);

        // Pump engine events until the run leaves Processing.
        while matches!(state.phase(), Phase::Processing { .. }) {
            match msg_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(msg) => dispatch(&mut state, &mut runner, msg),
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => return Ok(()),
            }
        }
        // Preview sync messages may still be queued; drain them.
        while let Ok(msg) = msg_rx.try_recv() {
            dispatch(&mut state, &mut runner, msg);
        }

        let view = state.view();
        if let Some(message) = &view.error_message {
            ui::render_error(message);
            continue;
        }

        ui::render_success(&view);
        match variant {
            Variant::Download => {
                if confirm(&mut input, "Download the demo APK? [y/N] ")? {
                    dispatch(&mut state, &mut runner, Msg::DownloadClicked);
                }
            }
            Variant::LivePreview => {
                if let RunOutput::Embed(embed) = runner.success_output(&view.app_name, &view.url) {
                    ui::render_embed(&embed);
                }
                if confirm(&mut input, "Open the site in your browser? [y/N] ")? {
                    dispatch(&mut state, &mut runner, Msg::OpenInBrowserClicked);
                }
            }
        }

        if !confirm(&mut input, "Create another app? [y/N] ")? {
            break;
        }
        dispatch(&mut state, &mut runner, Msg::ResetClicked);
    }

    Ok(())
}

fn dispatch(state: &mut AppState, runner: &mut EffectRunner, msg: Msg) {
    let current = std::mem::take(state);
    let (mut next, effects) = update(current, msg);
    runner.run(effects);
    if next.consume_dirty() {
        ui::render(&next.view());
    }
    *state = next;
}

/// Prints the label and reads one trimmed line. `None` means end of input.
fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<Option<String>> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn confirm(input: &mut impl BufRead, label: &str) -> io::Result<bool> {
    let answer = prompt(input, label)?.unwrap_or_default();
    Ok(matches!(answer.as_str(), "y" | "Y" | "yes" | "Yes"))
}

fn load_logo(path: &Path) -> Option<LogoFile> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            wrap_warn!("could not read logo {}: {}", path.display(), err);
            return None;
        }
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "logo".to_string());
    Some(LogoFile {
        file_name,
        media_type: media_type_for(path).to_string(),
        bytes,
    })
}

fn media_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            "image/jpeg"
        }
        Some(ext) if ext.eq_ignore_ascii_case("svg") => "image/svg+xml",
        // Anything else is coerced away by the workflow's permissive policy.
        _ => "application/octet-stream",
    }
}
