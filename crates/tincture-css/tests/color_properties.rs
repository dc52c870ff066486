//! Property tests for packed colors.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use quickcheck_macros::quickcheck;
use tincture_css::PackedColor;

fn hash_of(color: PackedColor) -> u64 {
    let mut hasher = DefaultHasher::new();
    color.hash(&mut hasher);
    hasher.finish()
}

#[quickcheck]
fn rgb_is_always_opaque(r: u8, g: u8, b: u8) -> bool {
    PackedColor::from_rgb(r, g, b).a() == 255
}

#[quickcheck]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fractional_alpha_is_clamped_ceiling(r: u8, g: u8, b: u8, step: u16) -> bool {
    let a = f64::from(step) / f64::from(u16::MAX);
    let expected = (255.0 * a).ceil().clamp(0.0, 255.0) as u8;
    let color = PackedColor::from_rgba(r, g, b, a);
    color.a() == expected && (color.r(), color.g(), color.b()) == (r, g, b)
}

#[quickcheck]
fn html_round_trips_opaque_colors(r: u8, g: u8, b: u8) -> bool {
    let color = PackedColor::new(r, g, b);
    let html = color.to_html();
    html.strip_prefix('#').map(PackedColor::from_hex) == Some(color)
        && html.strip_prefix('#').map(PackedColor::try_from_hex) == Some(Ok(color))
}

#[quickcheck]
fn short_hex_matches_doubled_long_hex(r: u8, g: u8, b: u8) -> bool {
    let (r, g, b) = (r % 16, g % 16, b % 16);
    let short = format!("{r:x}{g:X}{b:x}");
    let long = format!("{r:x}{r:x}{g:x}{g:x}{b:x}{b:x}");
    PackedColor::from_hex(&short) == PackedColor::from_hex(&long)
}

#[quickcheck]
fn equality_matches_channels(x: (u8, u8, u8, u8), y: (u8, u8, u8, u8)) -> bool {
    let a = PackedColor::with_alpha_byte(x.0, x.1, x.2, x.3);
    let b = PackedColor::with_alpha_byte(y.0, y.1, y.2, y.3);
    (a == b) == (x == y) && (a == b) == (a.value() == b.value())
}

#[quickcheck]
fn equal_colors_hash_equally(a: u8, r: u8, g: u8, b: u8) -> bool {
    let x = PackedColor::with_alpha_byte(a, r, g, b);
    let y = PackedColor::with_alpha_byte(a, r, g, b);
    x == y && y == x && hash_of(x) == hash_of(y)
}

#[quickcheck]
fn css_form_depends_on_opacity(a: u8, r: u8, g: u8, b: u8) -> bool {
    let css = PackedColor::with_alpha_byte(a, r, g, b).to_css();
    if a == 255 {
        css == format!("rgb({r}, {g}, {b})")
    } else {
        css.starts_with("rgba(")
    }
}
