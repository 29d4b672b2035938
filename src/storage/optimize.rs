// src/storage/optimize.rs
use base64::Engine;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Webp,
    Jpeg,
    Png,
    Avif,
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Avif => "avif",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    Cover,
    Contain,
    Fill,
}

impl fmt::Display for Fit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Fit::Cover => "cover",
            Fit::Contain => "contain",
            Fit::Fill => "fill",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    pub width: u32,
    pub height: u32,
    pub quality: u8,
    pub format: ImageFormat,
    pub fit: Fit,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            quality: 80,
            format: ImageFormat::Webp,
            fit: Fit::Cover,
        }
    }
}

impl ImageOptions {
    /// Square preview used for freshly uploaded images.
    pub fn thumbnail() -> Self {
        Self {
            width: 300,
            height: 300,
            quality: 80,
            ..Self::default()
        }
    }
}

/// Builds resize/format proxy URLs. Never talks to the network.
#[derive(Debug, Clone)]
pub struct ImageProxy {
    base_url: String,
    /// Only URLs under this origin get rewritten by `display_url`.
    storage_origin: String,
}

impl ImageProxy {
    pub fn new(base_url: &str, storage_origin: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            storage_origin: storage_origin.to_string(),
        }
    }

    pub fn optimized_url(&self, source: &str, opts: &ImageOptions) -> String {
        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(source.as_bytes());
        format!(
            "{}/insecure/rs:fit:{}:{}:{}:{}/plain/{}.{}",
            self.base_url, opts.fit, opts.width, opts.height, opts.quality, encoded, opts.format
        )
    }

    /// Proxy storage-hosted images, pass anything else through untouched.
    pub fn display_url(&self, source: &str, opts: &ImageOptions) -> String {
        if !self.storage_origin.is_empty() && source.contains(&self.storage_origin) {
            self.optimized_url(source, opts)
        } else {
            source.to_string()
        }
    }
}
