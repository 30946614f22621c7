/// What a set of cards on the board currently amounts to.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Shape {
    #[default]
    Empty,
    Triplet,
    Flush,
    /// A flush with this many ranks missing. Displayable, not legal.
    Gapped(usize),
    Scrap,
}

impl Shape {
    pub fn is_valid(&self) -> bool {
        match self {
            Shape::Empty | Shape::Triplet | Shape::Flush => true,
            Shape::Gapped(_) | Shape::Scrap => false,
        }
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Shape::Empty => write!(f, "empty"),
            Shape::Triplet => write!(f, "triplet"),
            Shape::Flush => write!(f, "flush"),
            Shape::Gapped(n) => write!(f, "flush missing {}", n),
            Shape::Scrap => write!(f, "scrap"),
        }
    }
}
