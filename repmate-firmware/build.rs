//! Build script for repmate-firmware
//!
//! - Sets up linker arguments for the ESP32-S3 image layout

fn main() {
    // linkall.x comes from esp-hal and chains the memory layout scripts
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rerun-if-changed=build.rs");
}
