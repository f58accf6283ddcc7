/// Movement directions and their grid offsets.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset as (dx, dy); y grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up    => (0, -1),
            Direction::Down  => (0, 1),
            Direction::Left  => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The w/a/s/d mapping, case-insensitive.
    pub fn from_key(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _   => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_mapping_is_case_insensitive() {
        assert_eq!(Direction::from_key('w'), Some(Direction::Up));
        assert_eq!(Direction::from_key('A'), Some(Direction::Left));
        assert_eq!(Direction::from_key('S'), Some(Direction::Down));
        assert_eq!(Direction::from_key('D'), Some(Direction::Right));
        assert_eq!(Direction::from_key('x'), None);
    }

    #[test]
    fn offsets_are_unit_steps() {
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Down.offset(), (0, 1));
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Right.offset(), (1, 0));
    }
}
