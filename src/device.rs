/// Fixed device profiles for App Store screenshot sizes
use std::path::{Path, PathBuf};

use crate::Viewport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Human-readable label printed after each file
    pub label: &'static str,
    pub viewport: Viewport,
    /// Sub-directory of the output root
    pub dir: &'static str,
    /// Number of screenshots to generate
    pub count: u32,
}

/// iPhone 6.5" display
pub const IPHONE: DeviceProfile = DeviceProfile {
    label: "iPhone",
    viewport: Viewport { width: 1290, height: 2796 },
    dir: "iphone",
    count: 5,
};

/// iPad 13" display
pub const IPAD: DeviceProfile = DeviceProfile {
    label: "iPad",
    viewport: Viewport { width: 2048, height: 2732 },
    dir: "ipad",
    count: 3,
};

impl DeviceProfile {
    /// Profiles in generation order
    pub fn presets() -> [DeviceProfile; 2] {
        [IPHONE, IPAD]
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(self.dir)
    }

    /// `root/<dir>/screenshot_<index>.png`, with `index` starting at 1
    pub fn screenshot_path(&self, root: &Path, index: u32) -> PathBuf {
        self.output_dir(root).join(format!("screenshot_{}.png", index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_store_sizes() {
        let [phone, pad] = DeviceProfile::presets();
        assert_eq!((phone.viewport.width, phone.viewport.height, phone.count), (1290, 2796, 5));
        assert_eq!((pad.viewport.width, pad.viewport.height, pad.count), (2048, 2732, 3));
    }

    #[test]
    fn screenshot_paths_are_one_based() {
        let p = IPHONE.screenshot_path(Path::new("screenshots"), 1);
        assert_eq!(p, PathBuf::from("screenshots/iphone/screenshot_1.png"));
        let p = IPAD.screenshot_path(Path::new("out"), 3);
        assert_eq!(p, PathBuf::from("out/ipad/screenshot_3.png"));
    }
}
