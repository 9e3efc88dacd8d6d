use std::fs;
use std::path::PathBuf;

use sha2::{Digest, Sha256};
use storeshots::{render, GeneratorConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

/// Hex SHA-256 of the decoded RGB pixels, independent of PNG encoder settings
fn pixel_digest(png: &[u8]) -> String {
    let rgb = image::load_from_memory(png).expect("decode png").to_rgb8();
    hex::encode(Sha256::digest(rgb.as_raw()))
}

#[test]
fn golden_digest_matches_fixture() {
    // Built-in font only, so the digest does not depend on installed fonts
    let cfg = GeneratorConfig {
        font_path: PathBuf::from("/definitely/not/here.ttc"),
        ..Default::default()
    };
    let screenshot = render(645, 1398, &cfg).expect("render");

    // Two renders with identical inputs must be byte-identical
    let again = render(645, 1398, &cfg).expect("render");
    assert_eq!(screenshot.png_data, again.png_data);

    let digest = pixel_digest(&screenshot.png_data);
    let expected_path = golden_path("half_iphone.rgb.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, exp.trim());
}
