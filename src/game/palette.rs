use rand::Rng;
use rand::distributions::{Distribution, Standard};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb
{
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb
{
    /// Half intensity, used for cells that were already picked.
    pub fn faded(self) -> Self
    {
        Self {
            r: self.r / 2,
            g: self.g / 2,
            b: self.b / 2,
        }
    }

    pub fn is_light(self) -> bool
    {
        let luma = 299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32;
        luma > 140_000
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color
{
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
    Pink,
    Black,
}

impl Color
{
    pub const ALL: [Color; 8] = [
        Color::Red,
        Color::Blue,
        Color::Green,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Pink,
        Color::Black,
    ];

    pub fn random(rng: &mut impl Rng) -> Self
    {
        rng.sample(Standard)
    }

    pub fn name(self) -> &'static str
    {
        match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Black => "black",
        }
    }

    pub fn rgb(self) -> Rgb
    {
        let (r, g, b) = match self {
            Color::Red => (255, 0, 0),
            Color::Blue => (0, 0, 255),
            Color::Green => (0, 128, 0),
            Color::Yellow => (255, 255, 0),
            Color::Purple => (128, 0, 128),
            Color::Orange => (255, 165, 0),
            Color::Pink => (255, 192, 203),
            Color::Black => (20, 20, 20),
        };
        Rgb { r, g, b }
    }
}

impl Distribution<Color> for Standard
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color
    {
        Color::ALL[rng.gen_range(0..Color::ALL.len())]
    }
}
