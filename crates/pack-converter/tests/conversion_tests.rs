//! End-to-end tests for the pack converter.
//!
//! Each test lays out a small Java pack on disk, runs the full conversion
//! and inspects the Bedrock pack that comes out.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, Rgba, RgbaImage};
use pack_converter::{BedrockManifest, JavaResourcePack, Key, PackConverter, Texture};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

const META: &str = r#"{"pack": {"pack_format": 34, "description": {"text": "Sharp", "color": "gold", "extra": [{"text": " 32x", "bold": true}]}}}"#;

fn png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 128, 255]));
    let mut bytes = Vec::new();
    image
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}

fn write(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

/// Create a Java pack directory with a handful of representative textures.
fn create_java_pack(root: &Path) {
    write(root, "pack.mcmeta", META.as_bytes());
    write(root, "pack.png", &png(16, 16));
    write(root, "assets/minecraft/textures/block/oak_planks.png", &png(16, 16));
    write(root, "assets/minecraft/textures/item/apple.png", &png(16, 16));
    write(root, "assets/minecraft/textures/entity/dolphin.png", &png(64, 64));
    write(
        root,
        "assets/minecraft/textures/gui/sprites/hud/locator_bar_background.png",
        &png(12, 5),
    );
    write(
        root,
        "assets/minecraft/textures/gui/sprites/hud/locator_bar_dot/default_0.png",
        &png(9, 9),
    );
    write(root, "assets/minecraft/models/block/oak_planks.json", b"{}");
}

#[test]
fn test_convert_directory_to_directory() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Sharp");
    let output = temp_dir.path().join("Sharp-bedrock");
    create_java_pack(&input);

    let report = PackConverter::builder()
        .input(&input)
        .output(&output)
        .build()
        .unwrap()
        .convert()
        .unwrap();

    assert_eq!(report.pack_name, "Sharp");
    assert_eq!(report.errors, 0);
    assert_eq!(report.extra_files, 1);

    let manifest: BedrockManifest =
        serde_json::from_slice(&fs::read(output.join("manifest.json")).unwrap()).unwrap();
    assert_eq!(manifest.header.name, "Sharp");
    assert_eq!(manifest.header.description, "§6Sharp§l 32x");

    assert!(output.join("pack_icon.png").exists());
    assert!(output.join("textures/blocks/planks_oak.png").exists());
    assert!(output.join("textures/items/apple.png").exists());
    assert!(output.join("textures/entity/dolphin.png").exists());
    assert!(output.join("models/entity/dolphin.geo.json").exists());

    // Locator sprites are replaced, not copied.
    assert!(!output.join("textures/gui/sprites/hud/locator_bar_background.png").exists());
    let bg = image::open(output.join("textures/ui/locator_bg.png")).unwrap();
    assert_eq!((bg.width(), bg.height()), (182, 5));
    let dot = image::open(output.join("textures/ui/locator_bar_dot_0.png")).unwrap();
    assert_eq!((dot.width(), dot.height()), (7, 7));

    // Models are not textures and never reach the Bedrock pack.
    assert!(!output.join("models/block").exists());
}

#[test]
fn test_convert_zip_to_mcpack() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Zipped.zip");
    let output = temp_dir.path().join("Zipped.mcpack");
    {
        let mut writer = ZipWriter::new(File::create(&input).unwrap());
        let options = SimpleFileOptions::default();
        writer.start_file("Zipped/pack.mcmeta", options).unwrap();
        writer.write_all(META.as_bytes()).unwrap();
        writer
            .start_file("Zipped/assets/minecraft/textures/block/dirt.png", options)
            .unwrap();
        writer.write_all(&png(16, 16)).unwrap();
        writer.finish().unwrap();
    }

    let report = PackConverter::builder()
        .input(&input)
        .output(&output)
        .texture_subdirectory("zipped")
        .build()
        .unwrap()
        .convert()
        .unwrap();
    assert_eq!(report.textures_converted, 1);

    let mut archive = ZipArchive::new(File::open(&output).unwrap()).unwrap();
    let mut manifest = String::new();
    archive
        .by_name("manifest.json")
        .unwrap()
        .read_to_string(&mut manifest)
        .unwrap();
    assert!(manifest.contains("\"Zipped\""));
    assert!(archive.by_name("textures/zipped/blocks/dirt.png").is_ok());
}

#[test]
fn test_vanilla_fallback_is_visible_to_transformers() {
    use pack_converter::{TextureTransformer, TransformContext};

    /// Copies the vanilla stone texture into the pack under a new name when
    /// the pack does not ship its own.
    struct StoneCopy;

    impl TextureTransformer for StoneCopy {
        fn name(&self) -> &'static str {
            "stone_copy"
        }

        fn transform(&self, context: &mut TransformContext<'_>) -> pack_converter::Result<()> {
            let stone = Key::minecraft("block/stone.png")?;
            if let Some(texture) = context.poll_or_peek_vanilla(&stone) {
                context.offer(Texture::new(
                    Key::minecraft("block/stone_copy.png")?,
                    texture.into_data(),
                ));
            }
            Ok(())
        }
    }

    let mut vanilla = JavaResourcePack::new();
    vanilla.add_texture(Texture::new(
        Key::minecraft("block/stone.png").unwrap(),
        b"vanilla stone".to_vec(),
    ));

    let converter = PackConverter::builder()
        .input("Tiny")
        .output("unused")
        .vanilla_pack(Arc::new(vanilla))
        .transformers(vec![Box::new(StoneCopy)])
        .build()
        .unwrap();
    let (bedrock, report) = converter.convert_pack(&JavaResourcePack::new()).unwrap();

    assert_eq!(
        bedrock.texture("textures/blocks/stone_copy.png"),
        Some(&b"vanilla stone"[..])
    );
    // Vanilla textures themselves are never exported.
    assert!(bedrock.texture("textures/blocks/stone.png").is_none());
    assert_eq!(report.textures_converted, 1);
}

#[test]
fn test_corrupt_locator_sprite_does_not_abort() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("Broken");
    let output = temp_dir.path().join("out");
    write(&input, "pack.mcmeta", META.as_bytes());
    write(
        &input,
        "assets/minecraft/textures/gui/sprites/hud/locator_bar_arrow_up.png",
        b"not a png",
    );
    write(&input, "assets/minecraft/textures/item/apple.png", &png(16, 16));

    let report = PackConverter::builder()
        .input(&input)
        .output(&output)
        .build()
        .unwrap()
        .convert()
        .unwrap();

    assert_eq!(report.errors, 1);
    assert!(output.join("textures/items/apple.png").exists());
    assert!(!output.join("textures/ui/locator_arrow_up.png").exists());
}

#[test]
fn test_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let result = PackConverter::builder()
        .input(temp_dir.path().join("does-not-exist"))
        .output(temp_dir.path().join("out"))
        .build()
        .unwrap()
        .convert();
    assert!(matches!(
        result,
        Err(pack_converter::ConverterError::FileNotFound(_))
    ));
}
