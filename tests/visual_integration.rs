use std::path::PathBuf;

use image::RgbImage;
use storeshots::{render, GeneratorConfig, Rgb};

fn builtin_config() -> GeneratorConfig {
    GeneratorConfig {
        font_path: PathBuf::from("/definitely/not/here.ttc"),
        ..Default::default()
    }
}

fn decode(png: &[u8]) -> RgbImage {
    image::load_from_memory(png).expect("decode").to_rgb8()
}

fn within_one(a: u8, b: u8) -> bool {
    (a as i32 - b as i32).abs() <= 1
}

/// Horizontal extent of pure white pixels in rows `rows`
fn white_extent(img: &RgbImage, rows: std::ops::Range<u32>) -> Option<(u32, u32)> {
    let mut extent: Option<(u32, u32)> = None;
    for y in rows {
        for x in 0..img.width() {
            if img.get_pixel(x, y).0 == [255, 255, 255] {
                extent = Some(match extent {
                    None => (x, x),
                    Some((l, r)) => (l.min(x), r.max(x)),
                });
            }
        }
    }
    extent
}

#[test]
fn gradient_runs_from_start_to_end_color() {
    let cfg = builtin_config();
    for &(w, h) in &[(1290u32, 2796u32), (2048, 2732)] {
        let img = decode(&render(w, h, &cfg).unwrap().png_data);
        assert_eq!(img.dimensions(), (w, h));

        let top = img.get_pixel(0, 0).0;
        assert_eq!(top, [108, 102, 241]);

        let bottom = img.get_pixel(w - 1, h - 1).0;
        let end = cfg.gradient_end;
        assert!(within_one(bottom[0], end.r), "bottom {:?}", bottom);
        assert!(within_one(bottom[1], end.g), "bottom {:?}", bottom);
        assert!(within_one(bottom[2], end.b), "bottom {:?}", bottom);
    }
}

#[test]
fn rows_have_no_horizontal_variation_outside_text() {
    let img = decode(&render(800, 600, &builtin_config()).unwrap().png_data);
    // The first and last rows are clear of both text runs
    for y in [0, 599] {
        let first = *img.get_pixel(0, y);
        assert!((0..800).all(|x| *img.get_pixel(x, y) == first), "row {}", y);
    }
}

#[test]
fn title_and_tagline_are_centered_white_text() {
    let (w, h) = (1290u32, 2796u32);
    let img = decode(&render(w, h, &builtin_config()).unwrap().png_data);

    let (l, r) = white_extent(&img, 0..h / 2).expect("title pixels");
    let mid = (l + r + 1) as f32 / 2.0;
    assert!((w as f32 / 2.0 - mid).abs() <= 1.0, "title mid {}", mid);

    let (l, r) = white_extent(&img, h / 2..h).expect("tagline pixels");
    let mid = (l + r + 1) as f32 / 2.0;
    assert!((w as f32 / 2.0 - mid).abs() <= 1.0, "tagline mid {}", mid);
}

#[test]
fn custom_colors_flow_through() {
    let cfg = GeneratorConfig {
        gradient_start: Rgb::new(0, 0, 0),
        gradient_end: Rgb::new(200, 100, 50),
        text_color: Rgb::new(1, 2, 3),
        ..builtin_config()
    };
    let img = decode(&render(800, 600, &cfg).unwrap().png_data);
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(img.get_pixel(0, 300).0, [100, 50, 25]);
    assert!(white_extent(&img, 0..600).is_none());
    assert!(img.pixels().any(|p| p.0 == [1, 2, 3]));
}
