use gauss_blur_lib::{reference_input, Texture};
use std::env;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "tests/test_texture.png".to_string());

    // The 5x5 spike as an 8-bit grayscale PNG
    Texture::from_grid(&reference_input())
        .save(&path)
        .unwrap();
    println!("Created test texture at {}", path);
}
