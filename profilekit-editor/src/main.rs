use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;
use profilekit_config::ConfigLoader;
use profilekit_core::{
    InMemoryImageStore, InMemoryProfileStore, RecordingNavigator, SessionWatch,
};
use profilekit_editor::{EditorServices, ProfileEditor, ProfileMessage};
use profilekit_model::{ImageFile, ProfileRecord, Session, UserId};

#[derive(Parser)]
#[command(
    name = "profilekit-edit",
    about = "Run the profile edit form against in-memory stores"
)]
struct Cli {
    /// TOML config file, overrides PROFILEKIT_CONFIG
    #[arg(long)]
    config: Option<PathBuf>,
    /// Identity of the seeded profile, random when omitted
    #[arg(long)]
    user_id: Option<UserId>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    handle: Option<String>,
    #[arg(long)]
    about: Option<String>,
    /// Image file to upload as the new avatar
    #[arg(long)]
    avatar: Option<PathBuf>,
}

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("profilekit_editor", LevelFilter::Debug)
        .init();
}

fn content_type_for(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

async fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read avatar {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("avatar")
        .to_string();
    Ok(ImageFile::new(file_name, content_type_for(path), bytes))
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = cli.config.clone() {
        loader = loader.with_config_path(path);
    }
    let load = loader.load().context("failed to load editor configuration")?;
    log::info!(
        "Config resolved (file: {:?}, env overrides: {:?})",
        load.metadata.config_path,
        load.metadata.env_overrides
    );

    let user_id = cli.user_id.unwrap_or_default();
    let mut seeded = ProfileRecord::new(user_id);
    seeded.name = "Demo User".to_string();
    seeded.handle = "demo".to_string();
    seeded.avatar_url = load
        .config
        .storage
        .public_url(&format!("{user_id}/avatar.png"))?
        .to_string();

    let profiles = InMemoryProfileStore::with_records([seeded]);
    let images = InMemoryImageStore::new();
    let navigator = RecordingNavigator::new();
    let sessions = SessionWatch::new(Some(Session::new(user_id, "demo-token")));

    let services = EditorServices::new(
        Arc::new(profiles.clone()),
        Arc::new(images.clone()),
        Arc::new(navigator.clone()),
    )
    .with_config(load.config);
    let mut editor = ProfileEditor::new(services);

    editor.sync_session(&sessions).await;
    if !editor.is_loaded() {
        bail!("profile for {user_id} did not load");
    }

    if let Some(name) = cli.name {
        editor.dispatch(ProfileMessage::UpdateDisplayName(name)).await;
    }
    if let Some(handle) = cli.handle {
        editor.dispatch(ProfileMessage::UpdateHandle(handle)).await;
    }
    if let Some(about) = cli.about {
        editor.dispatch(ProfileMessage::UpdateAboutMe(about)).await;
    }
    if let Some(path) = cli.avatar {
        let image = read_image(&path).await?;
        editor
            .dispatch(ProfileMessage::AvatarSelected(Some(image)))
            .await;
    }

    editor.dispatch(ProfileMessage::Submit).await;

    if let Some(failure) = &editor.state().last_failure {
        bail!("submit failed: {failure}");
    }

    let record = profiles
        .record(user_id)
        .await
        .context("seeded profile disappeared")?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    for route in navigator.history() {
        println!("navigated to {route}");
    }

    Ok(())
}
