// Extension classifier: maps a source URL plus the response Content-Type
// to one of the three extensions we save logos under.

use std::fmt;

/// The closed set of extensions a downloaded logo can be saved with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageExtension {
    Svg,
    Png,
    Jpg,
}

impl ImageExtension {
    /// The extension including its leading dot, e.g. `.svg`.
    pub fn as_str(self) -> &'static str {
        match self {
            ImageExtension::Svg => ".svg",
            ImageExtension::Png => ".png",
            ImageExtension::Jpg => ".jpg",
        }
    }
}

impl fmt::Display for ImageExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick the extension for a download. First match wins:
/// svg, then png, then jpg, otherwise png.
///
/// Content-Type is matched by substring, the URL by suffix of the whole
/// string (query and fragment included), both ignoring case. Any input
/// is accepted, including empty strings.
pub fn choose_extension(url: &str, content_type: Option<&str>) -> ImageExtension {
    let content_type = content_type.unwrap_or("").to_ascii_lowercase();
    let url = url.to_ascii_lowercase();

    if content_type.contains("svg") || url.ends_with(".svg") {
        return ImageExtension::Svg;
    }
    if content_type.contains("png") || url.ends_with(".png") {
        return ImageExtension::Png;
    }
    if content_type.contains("jpeg")
        || content_type.contains("jpg")
        || url.ends_with(".jpg")
        || url.ends_with(".jpeg")
    {
        return ImageExtension::Jpg;
    }
    ImageExtension::Png
}
