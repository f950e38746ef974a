// Proxy pattern: a stand-in image defers the expensive disk load until
// someone actually asks it to display.

pub trait Image {
    fn display(&mut self) -> Vec<String>;
}

pub struct RealImage {
    file_name: String,
}

impl RealImage {
    /// Construction is the expensive part; the returned line stands in
    /// for the disk load.
    pub fn load(file_name: impl Into<String>) -> (Self, String) {
        let file_name = file_name.into();
        let line = format!("Loading image from disk: {file_name}");
        (Self { file_name }, line)
    }
}

impl Image for RealImage {
    fn display(&mut self) -> Vec<String> {
        vec![format!("Displaying image: {}", self.file_name)]
    }
}

/// Lazily creates the real image on first display and reuses it after.
/// The `Option` slot guarantees at most one load and exactly one release
/// when the proxy is dropped.
pub struct ProxyImage {
    file_name: String,
    real_image: Option<RealImage>,
    loads: u32,
}

impl ProxyImage {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            real_image: None,
            loads: 0,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real_image.is_some()
    }

    pub fn load_count(&self) -> u32 {
        self.loads
    }
}

impl Image for ProxyImage {
    fn display(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.real_image.is_none() {
            let (image, load_line) = RealImage::load(self.file_name.clone());
            self.real_image = Some(image);
            self.loads += 1;
            lines.push(load_line);
        }
        if let Some(real_image) = self.real_image.as_mut() {
            lines.extend(real_image.display());
        }
        lines
    }
}

fn main() {
    let mut proxy_image = ProxyImage::new("test_image.jpg");

    println!("Image is not yet loaded.");
    for line in proxy_image.display() {
        println!("{line}"); // loads, then displays
    }
    for line in proxy_image.display() {
        println!("{line}"); // already loaded, just displays
    }
}
