mod asset_generator_lib;
mod error;
pub mod layout;

pub use asset_generator_lib::{
    build_large_icon, build_multi_res_icon, build_navbar_logo, color_mode_label, load_source, run,
    write_favicon, write_large_icon, write_navbar_logo, BrandAssetsConfig, GeneratedAssets,
    FAVICON_SIZES, LARGE_ICON_SIZE, NAVBAR_LOGO_HEIGHT,
};
pub use error::AssetError;
