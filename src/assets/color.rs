use serde::{Deserialize, Serialize};

/// Straight-alpha color with channels in `[0, 1]`.
///
/// Deserializes from `"#rgb"`, `"#rrggbb"`, `"#rrggbbaa"`, CSS `rgb()/rgba()/hsl()/hsla()`
/// strings, `{r,g,b,a}` / `{h,s,l,a}` objects or `[r,g,b(,a)]` arrays. Serializes as a hex string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0, 1.0)
    }

    /// `0xRRGGBB`.
    pub const fn from_u32(rgb: u32) -> Self {
        Self::rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        hsla_to_rgba(h, s, l, 1.0)
    }

    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s);
        }
        let lower = s.to_ascii_lowercase();
        if let Some((func, args)) = lower
            .strip_suffix(')')
            .and_then(|body| body.split_once('('))
        {
            return parse_css_fn(func.trim(), args);
        }
        match lower.as_str() {
            "white" => Ok(Self::WHITE),
            "black" => Ok(Self::BLACK),
            "transparent" => Ok(Self::TRANSPARENT),
            _ => parse_hex(s),
        }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Linear blend in straight-alpha space.
    pub fn mix(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let l = |a: f64, b: f64| a + (b - a) * t;
        Self::rgba(
            l(self.r, other.r),
            l(self.g, other.g),
            l(self.b, other.b),
            l(self.a, other.a),
        )
    }

    /// `#rrggbb`, alpha dropped. Paired with [`Color::alpha`] for SVG `*-opacity` attributes.
    pub fn to_hex(self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    pub fn alpha(self) -> f64 {
        self.a.clamp(0.0, 1.0)
    }

    pub fn to_rgba8(self) -> [u8; 4] {
        fn to_u8(x: f64) -> u8 {
            (x.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        [to_u8(self.r), to_u8(self.g), to_u8(self.b), to_u8(self.a)]
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let [r, g, b, a] = self.to_rgba8();
        if a == 255 {
            serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}"))
        } else {
            serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}{a:02x}"))
        }
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Css(String),
            RgbaObj {
                r: f64,
                g: f64,
                b: f64,
                #[serde(default = "one")]
                a: f64,
            },
            HslaObj {
                h: f64,
                s: f64,
                l: f64,
                #[serde(default = "one")]
                a: f64,
            },
            Arr(Vec<f64>),
        }

        fn one() -> f64 {
            1.0
        }

        match Repr::deserialize(deserializer)? {
            Repr::Css(s) => Self::parse(&s).map_err(serde::de::Error::custom),
            Repr::RgbaObj { r, g, b, a } => Ok(Self::rgba(r, g, b, a)),
            Repr::HslaObj { h, s, l, a } => Ok(hsla_to_rgba(h, s, l, a)),
            Repr::Arr(v) => match v.as_slice() {
                [r, g, b] => Ok(Self::rgba(*r, *g, *b, 1.0)),
                [r, g, b, a] => Ok(Self::rgba(*r, *g, *b, *a)),
                _ => Err(serde::de::Error::custom(
                    "rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])",
                )),
            },
        }
    }
}

fn parse_hex(s: &str) -> Result<Color, String> {
    let s = s.strip_prefix('#').unwrap_or(s);
    if !s.is_ascii() {
        return Err(format!("invalid color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    let (r, g, b, a) = match s.len() {
        3 | 4 => {
            let nib = |i: usize| hex_byte(&s[i..=i].repeat(2));
            let a = if s.len() == 4 { nib(3)? } else { 255 };
            (nib(0)?, nib(1)?, nib(2)?, a)
        }
        6 | 8 => {
            let a = if s.len() == 8 { hex_byte(&s[6..8])? } else { 255 };
            (
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                a,
            )
        }
        _ => {
            return Err("hex color must be #RGB, #RRGGBB or #RRGGBBAA".to_owned());
        }
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        f64::from(a) / 255.0,
    ))
}

fn parse_css_fn(func: &str, args: &str) -> Result<Color, String> {
    let parts: Vec<&str> = args
        .split([',', ' ', '/'])
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    fn num(p: &str) -> Result<f64, String> {
        p.trim_end_matches('%')
            .trim_end_matches("deg")
            .parse::<f64>()
            .map_err(|_| format!("invalid color component \"{p}\""))
    }
    fn unit(p: &str, scale: f64) -> Result<f64, String> {
        let v = num(p)?;
        Ok(if p.ends_with('%') { v / 100.0 } else { v / scale })
    }

    let alpha = |idx: usize| -> Result<f64, String> {
        parts.get(idx).map_or(Ok(1.0), |p| unit(p, 1.0))
    };

    match (func, parts.len()) {
        ("rgb" | "rgba", 3 | 4) => Ok(Color::rgba(
            unit(parts[0], 255.0)?,
            unit(parts[1], 255.0)?,
            unit(parts[2], 255.0)?,
            alpha(3)?,
        )),
        ("hsl" | "hsla", 3 | 4) => Ok(hsla_to_rgba(
            num(parts[0])?,
            unit(parts[1], 100.0)?,
            unit(parts[2], 100.0)?,
            alpha(3)?,
        )),
        _ => Err(format!("unsupported color function \"{func}({args})\"")),
    }
}

fn hsla_to_rgba(h: f64, s: f64, l: f64, a: f64) -> Color {
    // sRGB HSL with normalized s/l; h in degrees.
    let h = (h % 360.0 + 360.0) % 360.0 / 360.0;
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);

    if s == 0.0 {
        return Color::rgba(l, l, l, a);
    }

    fn hue_to_rgb(p: f64, q: f64, mut t: f64) -> f64 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            return p + (q - p) * 6.0 * t;
        }
        if t < 1.0 / 2.0 {
            return q;
        }
        if t < 2.0 / 3.0 {
            return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
        }
        p
    }

    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    Color::rgba(
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
        a,
    )
}

/// Named UI color set used by templates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub muted: Color,
    pub border: Color,
}

const fn palette_entry(name: &'static str, c: [u32; 7]) -> Palette {
    Palette {
        name,
        background: Color::from_u32(c[0]),
        foreground: Color::from_u32(c[1]),
        primary: Color::from_u32(c[2]),
        secondary: Color::from_u32(c[3]),
        accent: Color::from_u32(c[4]),
        muted: Color::from_u32(c[5]),
        border: Color::from_u32(c[6]),
    }
}

pub const PALETTES: [Palette; 6] = [
    palette_entry(
        "dark",
        [0x0a0a0a, 0xffffff, 0x3b82f6, 0x1e1e1e, 0x8b5cf6, 0x262626, 0x333333],
    ),
    palette_entry(
        "light",
        [0xffffff, 0x0a0a0a, 0x3b82f6, 0xf5f5f5, 0x8b5cf6, 0xf5f5f5, 0xe5e5e5],
    ),
    palette_entry(
        "neon",
        [0x000000, 0xffffff, 0x00ff88, 0x1a1a2e, 0xff00ff, 0x0f0f1a, 0x00ff88],
    ),
    palette_entry(
        "sunset",
        [0x1a0b2e, 0xffffff, 0xff6b6b, 0x2d1b4e, 0xffa500, 0x1a0b2e, 0xff6b6b],
    ),
    palette_entry(
        "ocean",
        [0x0a192f, 0xe6f1ff, 0x64ffda, 0x112240, 0x00bcd4, 0x0a192f, 0x64ffda],
    ),
    palette_entry(
        "forest",
        [0x0d1117, 0xc9d1d9, 0x3fb950, 0x161b22, 0x7ee787, 0x0d1117, 0x3fb950],
    ),
];

/// Palette by name; unknown names fall back to `dark`.
pub fn palette(name: &str) -> Palette {
    PALETTES
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .unwrap_or(PALETTES[0])
}

/// Two-stop linear gradient at a CSS angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientDef {
    pub name: &'static str,
    pub angle_deg: f64,
    pub from: Color,
    pub to: Color,
}

const fn gradient_entry(name: &'static str, from: u32, to: u32) -> GradientDef {
    GradientDef {
        name,
        angle_deg: 135.0,
        from: Color::from_u32(from),
        to: Color::from_u32(to),
    }
}

pub const GRADIENTS: [GradientDef; 10] = [
    gradient_entry("primary", 0x667eea, 0x764ba2),
    gradient_entry("sunset", 0xf093fb, 0xf5576c),
    gradient_entry("ocean", 0x4facfe, 0x00f2fe),
    gradient_entry("forest", 0x43e97b, 0x38f9d7),
    gradient_entry("midnight", 0x0c3483, 0xa2b6df),
    gradient_entry("warm", 0xf6d365, 0xfda085),
    gradient_entry("cool", 0xa8edea, 0xfed6e3),
    gradient_entry("dark", 0x2c3e50, 0x4ca1af),
    gradient_entry("neon", 0xff00cc, 0x333399),
    gradient_entry("fire", 0xf12711, 0xf5af19),
];

/// Gradient by name; unknown names fall back to `primary`.
pub fn gradient(name: &str) -> GradientDef {
    GRADIENTS
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(name.trim()))
        .copied()
        .unwrap_or(GRADIENTS[0])
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color.rs"]
mod tests;
