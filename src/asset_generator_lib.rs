use anyhow::Context;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder};
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ExtendedColorType, ImageEncoder, ImageReader, Rgba, RgbaImage};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::AssetError;
use crate::layout::{center_offset, navbar_width, thumbnail_size};

pub const FAVICON_SIZES: [(u32, u32); 2] = [(16, 16), (32, 32)];
pub const LARGE_ICON_SIZE: u32 = 512;
pub const NAVBAR_LOGO_HEIGHT: u32 = 40;

const RESAMPLE_FILTER: FilterType = FilterType::Lanczos3;

pub trait BrandAssetsConfig {
    fn source_path(&self) -> &Path;
    fn project_root(&self) -> &Path;
}

/// Where the three artifacts land under a project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAssets {
    pub favicon: PathBuf,
    pub icon: PathBuf,
    pub logo: PathBuf,
}

impl GeneratedAssets {
    pub fn under(project_root: &Path) -> Self {
        let app_dir = app_dir(project_root);
        let public_dir = public_dir(project_root);
        GeneratedAssets {
            favicon: app_dir.join("favicon.ico"),
            icon: public_dir.join("icon.png"),
            logo: public_dir.join("logo.png"),
        }
    }
}

// Next.js picks the favicon up from app/, static files are served from public/
fn app_dir(project_root: &Path) -> PathBuf {
    project_root.join("app")
}

fn public_dir(project_root: &Path) -> PathBuf {
    project_root.join("public")
}

/// Decode the source image, failing with [`AssetError`] before anything is written.
pub fn load_source(path: &Path) -> Result<DynamicImage, AssetError> {
    if !path.exists() {
        return Err(AssetError::InputNotFound { path: path.to_path_buf() });
    }

    let decode = || -> image::ImageResult<DynamicImage> {
        ImageReader::open(path)?.with_guessed_format()?.decode()
    };
    decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Short color mode label for progress output.
pub fn color_mode_label(color: ColorType) -> &'static str {
    match color {
        ColorType::L8 => "L",
        ColorType::La8 => "LA",
        ColorType::Rgb8 => "RGB",
        ColorType::Rgba8 => "RGBA",
        ColorType::L16 => "I;16",
        ColorType::La16 => "LA;16",
        ColorType::Rgb16 => "RGB;16",
        ColorType::Rgba16 => "RGBA;16",
        ColorType::Rgb32F => "RGB;32F",
        ColorType::Rgba32F => "RGBA;32F",
        _ => "unknown",
    }
}

/// Generate the favicon, large icon and navbar logo from `config.source_path()`.
pub fn run<T: BrandAssetsConfig>(config: &T) -> anyhow::Result<GeneratedAssets> {
    let source = load_source(config.source_path())?;
    println!(
        "Loaded source image: ({}, {}) ({})",
        source.width(),
        source.height(),
        color_mode_label(source.color())
    );

    let root = config.project_root();
    for dir in [public_dir(root), app_dir(root)] {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    }

    let assets = GeneratedAssets::under(root);

    println!("\nGenerating brand assets...");
    println!("{}", "-".repeat(50));

    write_favicon(&source, &assets.favicon)?;
    write_large_icon(&source, &assets.icon)?;
    write_navbar_logo(&source, &assets.logo)?;

    println!("{}", "-".repeat(50));

    Ok(assets)
}

/// One transparent canvas per size, each holding a centered thumbnail of `source`.
pub fn build_multi_res_icon(source: &DynamicImage, sizes: &[(u32, u32)]) -> Vec<RgbaImage> {
    let mut sizes = sizes.to_vec();
    sizes.sort_unstable();

    sizes
        .into_iter()
        .map(|(width, height)| {
            let (thumb_w, thumb_h) = thumbnail_size(source.width(), source.height(), width, height);
            let thumb = if (thumb_w, thumb_h) == (source.width(), source.height()) {
                source.to_rgba8()
            } else {
                source.resize_exact(thumb_w, thumb_h, RESAMPLE_FILTER).into_rgba8()
            };

            let mut canvas = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
            let (x, y) = center_offset((width, height), (thumb_w, thumb_h));
            // Plain replacement, not blending: thumbnail alpha is copied as-is.
            imageops::replace(&mut canvas, &thumb, i64::from(x), i64::from(y));
            canvas
        })
        .collect()
}

pub fn write_favicon(source: &DynamicImage, path: &Path) -> anyhow::Result<()> {
    let frames = build_multi_res_icon(source, &FAVICON_SIZES);
    let encoded = frames
        .iter()
        .map(|frame| {
            IcoFrame::as_png(frame.as_raw(), frame.width(), frame.height(), ExtendedColorType::Rgba8)
        })
        .collect::<image::ImageResult<Vec<_>>>()
        .context("Failed to encode favicon frames")?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    IcoEncoder::new(&mut writer)
        .encode_images(&encoded)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;

    println!("✓ Created {}", path.display());
    Ok(())
}

/// Square icon, stretched to fit regardless of the source aspect ratio.
pub fn build_large_icon(source: &DynamicImage) -> RgbaImage {
    source
        .resize_exact(LARGE_ICON_SIZE, LARGE_ICON_SIZE, RESAMPLE_FILTER)
        .into_rgba8()
}

pub fn write_large_icon(source: &DynamicImage, path: &Path) -> anyhow::Result<()> {
    let icon = build_large_icon(source);
    save_png(&icon, path)?;
    println!("✓ Created {}", path.display());
    Ok(())
}

/// Logo scaled to the navbar height. Existing alpha passes through; nothing
/// is keyed out of an opaque background.
pub fn build_navbar_logo(source: &DynamicImage) -> RgbaImage {
    let width = navbar_width(source.width(), source.height(), NAVBAR_LOGO_HEIGHT);
    source
        .resize_exact(width, NAVBAR_LOGO_HEIGHT, RESAMPLE_FILTER)
        .into_rgba8()
}

pub fn write_navbar_logo(source: &DynamicImage, path: &Path) -> anyhow::Result<()> {
    let logo = build_navbar_logo(source);
    save_png(&logo, path)?;
    println!(
        "✓ Created {} (size: {}x{})",
        path.display(),
        logo.width(),
        logo.height()
    );
    Ok(())
}

fn save_png(image: &RgbaImage, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    PngEncoder::new_with_quality(&mut writer, CompressionType::Best, PngFilterType::Adaptive)
        .write_image(image.as_raw(), image.width(), image.height(), ExtendedColorType::Rgba8)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
