//! Decoded image buffers

/// An image decoded to RGBA, ready to upload as a texture
#[derive(Debug)]
pub struct DecodedImage {
    /// Raw RGBA pixel data
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// File name shown in the image editor
    pub name: String,
}

impl DecodedImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32, name: impl Into<String>) -> Self {
        Self {
            data,
            width,
            height,
            name: name.into(),
        }
    }

    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.data,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_color_image_keeps_size_and_pixels() {
        let pixels = vec![10, 20, 30, 255, 40, 50, 60, 255];
        let image = DecodedImage::new(pixels, 2, 1, "strip.png");

        let color = image.to_color_image();
        assert_eq!(color.size, [2, 1]);
        assert_eq!(color.pixels[1], egui::Color32::from_rgb(40, 50, 60));
    }
}
