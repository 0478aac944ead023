//! The color type used with canvases to produce images.
//!
//! Components are `f64` and deliberately unclamped during arithmetic -
//! lighting maths is free to overshoot and values are only capped when a
//! color is converted for output. Alpha is stored premultiplied: `rgba`
//! scales the color components by alpha and keeps alpha alongside so the
//! original values remain recoverable.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use cinder_maths::scalar;

/// An RGBA color with `f64` components.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Color {
    /// Red component, nominally 0.0 - 1.0.
    pub r: f64,
    /// Green component, nominally 0.0 - 1.0.
    pub g: f64,
    /// Blue component, nominally 0.0 - 1.0.
    pub b: f64,
    /// Alpha, 0.0 - 1.0; the color components are premultiplied by it.
    pub a: f64,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);

    /// Opaque red.
    pub const RED: Self = Self::rgb(1.0, 0.0, 0.0);

    /// Creates an opaque color from the given components.
    #[must_use]
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with alpha. The stored components are the given
    /// values multiplied by alpha; alpha itself is kept so the originals
    /// can be recovered.
    #[must_use]
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: r * a,
            g: g * a,
            b: b * a,
            a,
        }
    }

    /// Creates an opaque color from 0-255 integer components.
    #[must_use]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
        )
    }

    /// Creates a premultiplied color from 0-255 integer components with
    /// alpha.
    #[must_use]
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Epsilon equality on the color components. Alpha does not take part,
    /// matching how colors are compared for palette membership.
    #[must_use]
    pub fn approx_eq(self, other: Self) -> bool {
        scalar::approx_eq(self.r, other.r)
            && scalar::approx_eq(self.g, other.g)
            && scalar::approx_eq(self.b, other.b)
    }

    /// Returns the color with every component clamped to 0.0 - 1.0.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Packs the color as `0xAARRGGBB` with alpha forced opaque - the
    /// layout bitmap surfaces expect.
    #[must_use]
    pub fn to_argb8(self) -> u32 {
        0xFF00_0000
            | u32::from(component_to_byte(self.r)) << 16
            | u32::from(component_to_byte(self.g)) << 8
            | u32::from(component_to_byte(self.b))
    }

    /// Packs the color as a little-endian RGBA word (R in the low byte),
    /// alpha forced opaque.
    #[must_use]
    pub fn to_rgba8(self) -> u32 {
        u32::from(component_to_byte(self.r))
            | u32::from(component_to_byte(self.g)) << 8
            | u32::from(component_to_byte(self.b)) << 16
            | 0xFF00_0000
    }

    /// The color as a PPM pixel triple, e.g. `"255 0 128"`.
    #[must_use]
    pub fn ppm_triple(self) -> String {
        format!(
            "{} {} {}",
            component_to_byte(self.r),
            component_to_byte(self.g),
            component_to_byte(self.b)
        )
    }
}

/// Clamps a component and scales it to 0-255 with rounding.
fn component_to_byte(component: f64) -> u8 {
    if component < 0.0 {
        return 0;
    }
    if component > 1.0 {
        return 255;
    }

    (component * 255.0 + 0.5) as u8
}

impl std::ops::Add for Color {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::rgb(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl std::ops::Sub for Color {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::rgb(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl std::ops::Mul<f64> for Color {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::rgb(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

/// Component-wise product, also known as the Hadamard or Schur product.
impl std::ops::Mul for Color {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::rgb(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_and_premultiplied_rgba() {
        let c = Color::rgb(0.4, 0.5, 0.6);
        assert!(scalar::approx_eq(c.r, 0.4));
        assert!(scalar::approx_eq(c.g, 0.5));
        assert!(scalar::approx_eq(c.b, 0.6));
        assert!(scalar::approx_eq(c.a, 1.0));

        let c = Color::rgba(0.8, 1.0, 1.2, 0.5);
        assert!(scalar::approx_eq(c.r, 0.4));
        assert!(scalar::approx_eq(c.g, 0.5));
        assert!(scalar::approx_eq(c.b, 0.6));
        assert!(scalar::approx_eq(c.a, 0.5));
    }

    #[test]
    fn test_from_8_bit_components() {
        let c = Color::from_rgb8(64, 128, 255);
        assert!(scalar::approx_eq(c.r, 0.250_980));
        assert!(scalar::approx_eq(c.g, 0.501_960));
        assert!(scalar::approx_eq(c.b, 1.0));

        let c = Color::from_rgba8(64, 128, 255, 128);
        assert!(scalar::approx_eq(c.r, 0.125_982));
        assert!(scalar::approx_eq(c.g, 0.251_964));
        assert!(scalar::approx_eq(c.b, 0.501_960));
        assert!(scalar::approx_eq(c.a, 0.501_960));
    }

    #[test]
    fn test_approx_eq_ignores_alpha() {
        let c1 = Color::rgb(1.0, 3.4, 0.8);
        let c2 = Color::rgba(1.0, 3.4, 0.8, 1.0);
        let c3 = Color::rgb(0.7, 0.7, 0.7);

        assert!(c1.approx_eq(c2));
        assert!(!c1.approx_eq(c3));
    }

    #[test]
    fn test_clamped_and_packed() {
        let wild = Color::rgb(2.5, 1.3, -9.0);
        assert!(wild.clamped().approx_eq(Color::rgb(1.0, 1.0, 0.0)));

        assert_eq!(wild.to_argb8(), 0xFFFF_FF00);
        assert_eq!(wild.to_rgba8(), 0xFF00_FFFF);
        assert_eq!(Color::RED.to_argb8(), 0xFFFF_0000);
    }

    #[test]
    fn test_ppm_triple() {
        assert_eq!(Color::rgb(1.0, 0.0, 0.5).ppm_triple(), "255 0 128");
        assert_eq!(Color::BLACK.ppm_triple(), "0 0 0");
    }

    #[test]
    fn test_add_subtract() {
        let c1 = Color::rgb(0.8, 0.1, 0.005);
        let c2 = Color::rgb(0.25, 0.333, 0.5);
        assert!((c1 + c2).approx_eq(Color::rgb(1.05, 0.433, 0.505)));

        let c1 = Color::rgb(0.8, 0.1, 0.5);
        let c2 = Color::rgb(0.25, 0.333, 0.005);
        assert!((c1 - c2).approx_eq(Color::rgb(0.55, -0.233, 0.495)));
    }

    #[test]
    fn test_scale_and_hadamard() {
        let c = Color::rgb(0.2, 0.4, 0.8);
        assert!((c * 2.0).approx_eq(Color::rgb(0.4, 0.8, 1.6)));
        assert!((c * 2.5).approx_eq(Color::rgb(0.5, 1.0, 2.0)));

        let c1 = Color::rgb(1.0, 0.2, 0.4);
        let c2 = Color::rgb(0.9, 1.0, 0.1);
        assert!((c1 * c2).approx_eq(Color::rgb(0.9, 0.2, 0.04)));
    }
}
