use crate::consts;
use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Navigation helpers for menu-selection enums
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    mod enum_ext {
        use super::super::*;
        use crate::difficulty::Difficulty;

        #[test]
        fn endpoints() {
            assert_eq!(Difficulty::min(), Difficulty::Easy);
            assert_eq!(Difficulty::max(), Difficulty::Hard);
        }

        #[test]
        fn iter_all() {
            assert_eq!(
                Difficulty::iter().collect::<Vec<_>>(),
                [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
            );
        }

        #[test]
        fn next_chain() {
            assert_eq!(Difficulty::Easy.next(), Some(Difficulty::Medium));
            assert_eq!(Difficulty::Medium.next(), Some(Difficulty::Hard));
            assert_eq!(Difficulty::Hard.next(), None);
        }

        #[test]
        fn prev_chain() {
            assert_eq!(Difficulty::Hard.prev(), Some(Difficulty::Medium));
            assert_eq!(Difficulty::Medium.prev(), Some(Difficulty::Easy));
            assert_eq!(Difficulty::Easy.prev(), None);
        }
    }

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 4), Rect::new(30, 10, 20, 4))]
    #[case(Rect::new(10, 6, 40, 20), Size::new(10, 10), Rect::new(25, 11, 10, 10))]
    #[case(Rect::new(0, 0, 20, 4), Size::new(20, 4), Rect::new(0, 0, 20, 4))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[test]
    fn test_get_display_area() {
        assert_eq!(
            get_display_area(Rect::new(0, 0, 84, 33)),
            Rect::new(2, 2, 80, 29)
        );
    }
}
