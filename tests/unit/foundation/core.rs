use super::*;

#[test]
fn canvas_rejects_zero_and_oversized_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());

    let c = Canvas::new(400, 300).unwrap();
    assert_eq!(c.size_u16().unwrap(), (400, 300));
}

#[test]
fn hex_colors_split_into_channels() {
    let c = Rgba8::from_hex(0x1a202c);
    assert_eq!(c, Rgba8::opaque(0x1a, 0x20, 0x2c));
    assert_eq!(c.a, 255);
}

#[test]
fn premultiply_is_identity_for_opaque_and_scales_translucent() {
    assert_eq!(Rgba8::from_hex(0x3182ce).premultiplied(), [0x31, 0x82, 0xce, 255]);

    let half = Rgba8 {
        r: 200,
        g: 100,
        b: 0,
        a: 128,
    };
    assert_eq!(half.premultiplied(), [100, 50, 0, 128]);
}
