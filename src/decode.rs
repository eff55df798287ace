use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};
use enough::Stop;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

#[cfg(feature = "rgb")]
use rgb::FromSlice as _;

use crate::error::IcoError;
use crate::ico;
use crate::ico::payload::PayloadKind;
use crate::limits::Limits;

/// Decoded icon: top-down, row-major RGBA8 pixels. Always owned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedBitmap {
    image: RgbaImage,
    kind: PayloadKind,
}

impl DecodedBitmap {
    pub(crate) fn new(image: RgbaImage, kind: PayloadKind) -> Self {
        Self { image, kind }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// RGBA8 pixel data, `width * height * 4` bytes.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Whether the chosen entry was stored as PNG or DIB.
    pub fn source_kind(&self) -> PayloadKind {
        self.kind
    }

    pub fn as_rgba_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_rgba_image(self) -> RgbaImage {
        self.image
    }

    /// Take the pixel buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.image.into_raw()
    }

    /// Bicubic resample to `target` x `target`. See [`crate::resample()`].
    pub fn resample(&self, target: u32) -> DecodedBitmap {
        crate::resample::resample(self, target)
    }

    /// Re-encode as a PNG file.
    pub fn to_png(&self) -> Result<Vec<u8>, IcoError> {
        let mut out = Cursor::new(Vec::new());
        PngEncoder::new(&mut out)
            .write_image(
                self.pixels(),
                self.width(),
                self.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| IcoError::EncodeFailed(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Re-encode as PNG and wrap it in a `data:image/png;base64,` URI for
    /// inlining into HTML.
    pub fn to_png_data_uri(&self) -> Result<String, IcoError> {
        let png = self.to_png()?;
        Ok(format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(png)
        ))
    }

    /// Reinterpret pixel data as typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.pixels().as_rgba()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width() as usize,
            self.height() as usize,
        )
    }
}

/// Builder for decoding an icon from an ICO buffer.
///
/// ```no_run
/// use zenico::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your ICO bytes
/// let limits = Limits { max_pixels: Some(1024 * 1024), ..Default::default() };
/// let icon = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .scale_to_target(true)
///     .decode(48, Unstoppable)?;
/// assert_eq!((icon.width(), icon.height()), (48, 48));
/// # Ok::<(), zenico::IcoError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    scale_to_target: bool,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            scale_to_target: false,
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Resample the selected entry to exactly the requested size.
    ///
    /// Off by default: the entry is returned at its native size, which may
    /// be larger or smaller than requested.
    pub fn scale_to_target(mut self, scale: bool) -> Self {
        self.scale_to_target = scale;
        self
    }

    /// Decode the entry that best fits `target_size`.
    pub fn decode(self, target_size: u32, stop: impl Stop) -> Result<DecodedBitmap, IcoError> {
        ico::decode_best(
            self.data,
            target_size,
            self.scale_to_target,
            self.limits,
            &stop,
        )
    }

    /// Decode the entry at directory position `index`. Never resamples.
    pub fn decode_entry(self, index: usize, stop: impl Stop) -> Result<DecodedBitmap, IcoError> {
        ico::decode_index(self.data, index, self.limits, &stop)
    }
}
