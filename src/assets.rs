//! Asset load phase
//!
//! Image files are read on a background thread and the result is delivered
//! over a channel. The host waits for that result once, turns the bytes into
//! its own textures, and only then builds the UI: every [`ImageHandle`] a UI
//! element sees is already resolved.
//!
//! A missing or unreadable file is not fatal. It is logged and the host falls
//! back to a placeholder of the asset's nominal size.

use crate::render::ImageHandle;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to start asset loader: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("asset loader stopped before reporting")]
    Disconnected,

    #[error("asset directory {0} does not exist")]
    MissingDirectory(PathBuf),

    #[error("no handle for image '{0}'")]
    MissingImage(&'static str),
}

/// Every image the game uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageAsset {
    PersonIcon,
    MoneyIcon,
    ResearchIcon,
    Lab,
    Factory,
    ExploreModule,
    Housing,
    Mine,
    PixelSelector,
}

impl ImageAsset {
    pub const ALL: [ImageAsset; 9] = [
        ImageAsset::PersonIcon,
        ImageAsset::MoneyIcon,
        ImageAsset::ResearchIcon,
        ImageAsset::Lab,
        ImageAsset::Factory,
        ImageAsset::ExploreModule,
        ImageAsset::Housing,
        ImageAsset::Mine,
        ImageAsset::PixelSelector,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImageAsset::PersonIcon => "person_icon",
            ImageAsset::MoneyIcon => "money_icon",
            ImageAsset::ResearchIcon => "research_icon",
            ImageAsset::Lab => "lab",
            ImageAsset::Factory => "factory",
            ImageAsset::ExploreModule => "explore_module",
            ImageAsset::Housing => "housing",
            ImageAsset::Mine => "mine",
            ImageAsset::PixelSelector => "pixel_selector",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            ImageAsset::PersonIcon => "person-icon.png",
            ImageAsset::MoneyIcon => "money-icon.png",
            ImageAsset::ResearchIcon => "research-icon.png",
            ImageAsset::Lab => "lab.png",
            ImageAsset::Factory => "factory.png",
            ImageAsset::ExploreModule => "explore-module.png",
            ImageAsset::Housing => "housing.png",
            ImageAsset::Mine => "mine.png",
            ImageAsset::PixelSelector => "pixel-selector.png",
        }
    }

    /// Size in logical pixels used when the file cannot be loaded
    pub fn fallback_size(&self) -> (u32, u32) {
        match self {
            ImageAsset::PersonIcon | ImageAsset::MoneyIcon | ImageAsset::ResearchIcon => (5, 5),
            ImageAsset::PixelSelector => (3, 3),
            _ => (8, 8),
        }
    }
}

/// Raw result for one image; `bytes` is `None` when the file was unreadable
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub asset: ImageAsset,
    pub path: PathBuf,
    pub bytes: Option<Vec<u8>>,
}

/// Reads every manifest image from `dir`
pub fn read_images(dir: &Path) -> Result<Vec<LoadedImage>, AssetError> {
    if !dir.is_dir() {
        return Err(AssetError::MissingDirectory(dir.to_path_buf()));
    }

    let images = ImageAsset::ALL
        .iter()
        .map(|asset| {
            let path = dir.join(asset.file_name());
            let bytes = match fs::read(&path) {
                Ok(bytes) => Some(bytes),
                Err(e) => {
                    log::warn!("Could not read {}: {} (using placeholder)", path.display(), e);
                    None
                }
            };
            LoadedImage {
                asset: *asset,
                path,
                bytes,
            }
        })
        .collect();

    Ok(images)
}

/// A load running on the background thread
pub struct PendingAssets {
    receiver: Receiver<Result<Vec<LoadedImage>, AssetError>>,
    worker: JoinHandle<()>,
}

impl PendingAssets {
    /// Starts reading `dir` on a background thread
    pub fn start(dir: PathBuf) -> Result<Self, AssetError> {
        let (sender, receiver) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("asset-loader".to_string())
            .spawn(move || {
                let result = read_images(&dir);
                // The receiver may have been dropped; nothing left to report to
                let _ = sender.send(result);
            })
            .map_err(AssetError::Spawn)?;

        Ok(PendingAssets { receiver, worker })
    }

    /// Blocks until the loader reports
    pub fn wait(self) -> Result<Vec<LoadedImage>, AssetError> {
        let result = self.receiver.recv().map_err(|_| AssetError::Disconnected)?;
        if self.worker.join().is_err() {
            log::error!("Asset loader thread panicked after reporting");
        }
        let images = result?;
        log::info!("Assets loaded ({} images)", images.len());
        Ok(images)
    }
}

/// Resolved image handles, one per manifest entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameAssets {
    pub person_icon: ImageHandle,
    pub money_icon: ImageHandle,
    pub research_icon: ImageHandle,
    pub lab: ImageHandle,
    pub factory: ImageHandle,
    pub explore_module: ImageHandle,
    pub housing: ImageHandle,
    pub mine: ImageHandle,
    pub pixel_selector: ImageHandle,
}

impl GameAssets {
    /// Builds the set from host-resolved handles
    pub fn from_handles(handles: &HashMap<ImageAsset, ImageHandle>) -> Result<Self, AssetError> {
        let get = |asset: ImageAsset| {
            handles
                .get(&asset)
                .copied()
                .ok_or(AssetError::MissingImage(asset.name()))
        };

        Ok(GameAssets {
            person_icon: get(ImageAsset::PersonIcon)?,
            money_icon: get(ImageAsset::MoneyIcon)?,
            research_icon: get(ImageAsset::ResearchIcon)?,
            lab: get(ImageAsset::Lab)?,
            factory: get(ImageAsset::Factory)?,
            explore_module: get(ImageAsset::ExploreModule)?,
            housing: get(ImageAsset::Housing)?,
            mine: get(ImageAsset::Mine)?,
            pixel_selector: get(ImageAsset::PixelSelector)?,
        })
    }

    /// Handles at fallback sizes, ids in manifest order
    pub fn placeholders() -> Self {
        let make = |asset: ImageAsset| {
            let (width, height) = asset.fallback_size();
            ImageHandle {
                id: asset as usize,
                width,
                height,
            }
        };

        GameAssets {
            person_icon: make(ImageAsset::PersonIcon),
            money_icon: make(ImageAsset::MoneyIcon),
            research_icon: make(ImageAsset::ResearchIcon),
            lab: make(ImageAsset::Lab),
            factory: make(ImageAsset::Factory),
            explore_module: make(ImageAsset::ExploreModule),
            housing: make(ImageAsset::Housing),
            mine: make(ImageAsset::Mine),
            pixel_selector: make(ImageAsset::PixelSelector),
        }
    }
}
