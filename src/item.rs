use serde::Deserialize;

/// How an image fills its slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
    None,
    ScaleDown,
}

/// An RGBA background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parses `#rrggbb`, `#rrggbbaa` or `rgb(r, g, b)`.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Some(hex) = text.strip_prefix('#') {
            if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
            return match hex.len() {
                6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
                8 => Some(Self {
                    r: byte(0)?,
                    g: byte(2)?,
                    b: byte(4)?,
                    a: byte(6)?,
                }),
                _ => None,
            };
        }

        let inner = text.strip_prefix("rgb(")?.strip_suffix(')')?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<u8>());
        let color = Self::rgb(parts.next()?.ok()?, parts.next()?.ok()?, parts.next()?.ok()?);
        if parts.next().is_some() {
            return None;
        }
        Some(color)
    }
}

/// Link target of an item. `new_tab` only exists alongside an href.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub new_tab: bool,
}

/// One slide of the carousel.
///
/// `order` places the item in the circular sequence and must be unique
/// within a carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselItem {
    pub order: i64,
    pub image: String,
    pub link: Option<Link>,
    pub background_color: Option<Rgba>,
    pub object_fit: Option<ObjectFit>,
    pub alt: Option<String>,
}

impl CarouselItem {
    pub fn new(order: i64, image: impl Into<String>) -> Self {
        Self {
            order,
            image: image.into(),
            link: None,
            background_color: None,
            object_fit: None,
            alt: None,
        }
    }

    pub fn with_link(mut self, href: impl Into<String>, new_tab: bool) -> Self {
        self.link = Some(Link {
            href: href.into(),
            new_tab,
        });
        self
    }

    pub fn with_background(mut self, color: Rgba) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn with_object_fit(mut self, fit: ObjectFit) -> Self {
        self.object_fit = Some(fit);
        self
    }

    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_rgb_colors() {
        assert_eq!(Rgba::parse("#a48aca"), Some(Rgba::rgb(164, 138, 202)));
        assert_eq!(
            Rgba::parse("#00000080"),
            Some(Rgba {
                r: 0,
                g: 0,
                b: 0,
                a: 128
            })
        );
        assert_eq!(Rgba::parse("rgb(164, 138, 202)"), Some(Rgba::rgb(164, 138, 202)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(Rgba::parse("#abc"), None);
        assert_eq!(Rgba::parse("rgb(1, 2)"), None);
        assert_eq!(Rgba::parse("rgb(1, 2, 3, 4)"), None);
        assert_eq!(Rgba::parse("rgb(300, 2, 3)"), None);
        assert_eq!(Rgba::parse("teal"), None);
        assert_eq!(Rgba::parse("#+1+2+3"), None);
        assert_eq!(Rgba::parse("#+1+2+3+4"), None);
    }

    #[test]
    fn builder_sets_optional_fields() {
        let item = CarouselItem::new(5, "banner5.jpg")
            .with_background(Rgba::rgb(164, 138, 202))
            .with_object_fit(ObjectFit::Contain)
            .with_link("https://example.com", true)
            .with_alt("fifth");
        assert_eq!(item.object_fit, Some(ObjectFit::Contain));
        assert_eq!(item.link.as_ref().map(|l| l.new_tab), Some(true));
        assert_eq!(item.alt.as_deref(), Some("fifth"));
    }
}
