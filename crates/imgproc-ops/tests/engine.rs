//! Registry-level behaviour of the operation catalog.

use approx::assert_relative_eq;
use imgproc_core::{Channel, Image};
use imgproc_ops::{Operation, OpsError, Registry};

fn sample() -> Image {
    Image::filled(1, 1, [5.0 / 255.0, 10.0 / 255.0, 20.0 / 255.0], 255).unwrap()
}

fn pair() -> Image {
    Image::from_rows(
        vec![vec![[0.0, 0.0, 0.0], [5.0 / 255.0, 10.0 / 255.0, 20.0 / 255.0]]],
        255,
    )
    .unwrap()
}

fn checker(width: u32, height: u32) -> Image {
    let mut rows = Vec::new();
    for r in 0..height {
        let row = (0..width)
            .map(|c| {
                let k = (r * width + c) as f32;
                [(k * 0.13) % 1.0, (k * 0.29) % 1.0, (k * 0.07) % 1.0]
            })
            .collect();
        rows.push(row);
    }
    Image::from_rows(rows, 255).unwrap()
}

#[test]
fn red_component_of_single_pixel() {
    let mut registry = Registry::new();
    registry.put("px", sample());
    registry.red_component("px", "red").unwrap();

    let out = registry.get("red").unwrap().pixel_at(0, 0).unwrap();
    for c in out {
        assert_relative_eq!(c, 5.0 / 255.0);
    }
}

#[test]
fn luma_component_of_single_pixel() {
    let mut registry = Registry::new();
    registry.put("px", sample());
    registry.luma_component("px", "luma").unwrap();

    let expected = (0.2126 * 5.0 + 0.7152 * 10.0 + 0.0722 * 20.0) / 255.0;
    let out = registry.get("luma").unwrap().pixel_at(0, 0).unwrap();
    for c in out {
        assert_relative_eq!(c, expected, epsilon = 1e-6);
    }
}

#[test]
fn brighten_full_scale_saturates() {
    let mut registry = Registry::new();
    registry.put("px", sample());
    registry.brighten(255, "px", "bright").unwrap();

    assert_eq!(
        registry.get("bright").unwrap().pixel_at(0, 0).unwrap(),
        [1.0, 1.0, 1.0]
    );
}

#[test]
fn horizontal_flip_swaps_pair() {
    let mut registry = Registry::new();
    registry.put("pair", pair());
    registry.horizontal_flip("pair", "flipped").unwrap();

    let out = registry.get("flipped").unwrap();
    let src = registry.get("pair").unwrap();
    assert_eq!(out.pixel_at(0, 0).unwrap(), src.pixel_at(0, 1).unwrap());
    assert_eq!(out.pixel_at(0, 1).unwrap(), src.pixel_at(0, 0).unwrap());
}

#[test]
fn unknown_source_leaves_registry_unchanged() {
    let mut registry = Registry::new();
    registry.put("a", sample());
    let before = registry.clone();

    for op in [
        Operation::Value,
        Operation::Brighten { delta: 10 },
        Operation::FlipVertical,
    ] {
        let err = registry.apply(&op, "missing", "a").unwrap_err();
        assert!(matches!(err, OpsError::NotFound(ref n) if n == "missing"));
    }

    assert_eq!(registry.names(), before.names());
    assert_eq!(registry.get("a").unwrap(), before.get("a").unwrap());
}

#[test]
fn greyscale_operations_have_equal_channels() {
    let mut registry = Registry::new();
    registry.put("img", checker(5, 4));

    let ops = [
        Operation::Component(Channel::Red),
        Operation::Component(Channel::Green),
        Operation::Component(Channel::Blue),
        Operation::Value,
        Operation::Luma,
        Operation::Intensity,
    ];
    for op in ops {
        registry.apply(&op, "img", op.name()).unwrap();
        for (_, _, [r, g, b]) in registry.get(op.name()).unwrap().pixels() {
            assert_eq!(r, g, "{op}");
            assert_eq!(g, b, "{op}");
        }
    }
}

#[test]
fn flips_are_involutions() {
    let mut registry = Registry::new();
    registry.put("img", checker(7, 3));

    registry.horizontal_flip("img", "h").unwrap();
    registry.horizontal_flip("h", "hh").unwrap();
    registry.vertical_flip("img", "v").unwrap();
    registry.vertical_flip("v", "vv").unwrap();

    let original = registry.get("img").unwrap();
    assert_eq!(registry.get("hh").unwrap(), original);
    assert_eq!(registry.get("vv").unwrap(), original);
    assert_ne!(registry.get("h").unwrap(), original);
}

#[test]
fn brighten_then_darken_restores_unclamped_channels() {
    // All channels sit in [0.25, 0.75], so a shift of 40/255 never clamps.
    let pixels = (0..12)
        .map(|i| {
            let v = 0.25 + i as f32 * 0.04;
            [v, 0.75 - i as f32 * 0.02, 0.5]
        })
        .collect();
    let mut registry = Registry::new();
    registry.put("img", Image::from_pixels(4, 3, pixels, 255).unwrap());

    registry.brighten(40, "img", "up").unwrap();
    registry.brighten(-40, "up", "back").unwrap();

    assert!(
        registry
            .get("back")
            .unwrap()
            .approx_eq(registry.get("img").unwrap(), 1e-5)
    );
}

#[test]
fn brighten_saturated_channels_stay_saturated() {
    let mut registry = Registry::new();
    registry.put("img", Image::filled(2, 2, [0.95, 0.02, 0.5], 255).unwrap());

    registry.brighten(100, "img", "up").unwrap();
    registry.brighten(-100, "up", "back").unwrap();
    let up = registry.get("up").unwrap().pixel_at(0, 0).unwrap();
    assert_eq!(up[0], 1.0);

    registry.brighten(100, "up", "up2").unwrap();
    let up2 = registry.get("up2").unwrap().pixel_at(0, 0).unwrap();
    assert_eq!(up2[0], 1.0);

    registry.brighten(-100, "img", "down").unwrap();
    let down = registry.get("down").unwrap().pixel_at(1, 1).unwrap();
    assert_eq!(down[1], 0.0);
    assert_relative_eq!(down[2], 0.5 - 100.0 / 255.0, epsilon = 1e-6);

    registry.brighten(-100, "down", "down2").unwrap();
    let down2 = registry.get("down2").unwrap().pixel_at(1, 1).unwrap();
    assert_eq!(down2[1], 0.0);
    assert_eq!(down2[2], 0.0);

    // Clamping loses information: the round trip does not restore red.
    let back = registry.get("back").unwrap().pixel_at(0, 0).unwrap();
    assert!(back[0] < 0.95);
}

#[test]
fn outputs_keep_source_max_value() {
    let mut registry = Registry::new();
    registry.put("img", Image::filled(3, 2, [0.1, 0.2, 0.3], 1023).unwrap());
    registry.value_component("img", "v").unwrap();
    registry.vertical_flip("img", "f").unwrap();

    assert_eq!(registry.get("v").unwrap().max_value(), 1023);
    assert_eq!(registry.get("f").unwrap().dimensions(), (3, 2));
}
